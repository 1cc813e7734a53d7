use super::scheme::{PositionRequirement, RequirementPriority, Scheme, SkillRequirement};
use crate::club::{Position, Skill};

use RequirementPriority::{Beneficial, Critical, Important};

const fn req(skill: Skill, minimum: f32, priority: RequirementPriority) -> SkillRequirement {
    SkillRequirement {
        skill,
        minimum,
        priority,
    }
}

const fn pos(position: Position, importance: f32, skills: &'static [SkillRequirement]) -> PositionRequirement {
    PositionRequirement {
        position,
        importance,
        skills,
    }
}

pub(crate) fn requirements(scheme: Scheme) -> &'static [PositionRequirement] {
    match scheme {
        Scheme::WestCoast => WEST_COAST,
        Scheme::AirRaid => AIR_RAID,
        Scheme::SpreadOption => SPREAD_OPTION,
        Scheme::PowerRun => POWER_RUN,
        Scheme::ProStyle => PRO_STYLE,
        Scheme::FourThree => FOUR_THREE,
        Scheme::ThreeFour => THREE_FOUR,
        Scheme::Tampa2 => TAMPA_2,
        Scheme::CoverThree => COVER_THREE,
        Scheme::NickelBlitz => NICKEL_BLITZ,
    }
}

// ─── Offense ─────────────────────────────────────────────────────────

const WEST_COAST: &[PositionRequirement] = &[
    pos(Position::Quarterback, 1.0, &[
        req(Skill::ThrowAccuracy, 75.0, Critical),
        req(Skill::Decisions, 70.0, Critical),
        req(Skill::PocketPresence, 60.0, Important),
        req(Skill::ThrowPower, 55.0, Beneficial),
    ]),
    pos(Position::RunningBack, 0.6, &[
        req(Skill::Catching, 60.0, Important),
        req(Skill::Elusiveness, 65.0, Important),
        req(Skill::BallSecurity, 60.0, Beneficial),
    ]),
    pos(Position::WideReceiver, 0.8, &[
        req(Skill::RouteRunning, 75.0, Critical),
        req(Skill::Catching, 70.0, Critical),
        req(Skill::Agility, 65.0, Beneficial),
    ]),
    pos(Position::TightEnd, 0.6, &[
        req(Skill::Catching, 65.0, Important),
        req(Skill::RouteRunning, 60.0, Important),
    ]),
    pos(Position::OffensiveTackle, 0.5, &[
        req(Skill::PassBlocking, 70.0, Critical),
        req(Skill::Awareness, 55.0, Beneficial),
    ]),
];

const AIR_RAID: &[PositionRequirement] = &[
    pos(Position::Quarterback, 1.0, &[
        req(Skill::ThrowPower, 75.0, Critical),
        req(Skill::ThrowAccuracy, 75.0, Critical),
        req(Skill::Decisions, 65.0, Important),
    ]),
    pos(Position::WideReceiver, 0.9, &[
        req(Skill::Speed, 80.0, Critical),
        req(Skill::Release, 70.0, Important),
        req(Skill::RouteRunning, 70.0, Important),
        req(Skill::Catching, 65.0, Important),
    ]),
    pos(Position::RunningBack, 0.3, &[
        req(Skill::Catching, 60.0, Important),
        req(Skill::Speed, 70.0, Beneficial),
    ]),
    pos(Position::OffensiveTackle, 0.6, &[
        req(Skill::PassBlocking, 75.0, Critical),
    ]),
    pos(Position::OffensiveGuard, 0.4, &[
        req(Skill::PassBlocking, 65.0, Important),
        req(Skill::Strength, 60.0, Beneficial),
    ]),
];

const SPREAD_OPTION: &[PositionRequirement] = &[
    pos(Position::Quarterback, 1.0, &[
        req(Skill::Speed, 70.0, Critical),
        req(Skill::Decisions, 70.0, Critical),
        req(Skill::ThrowAccuracy, 60.0, Important),
        req(Skill::Elusiveness, 60.0, Beneficial),
    ]),
    pos(Position::RunningBack, 0.8, &[
        req(Skill::Speed, 75.0, Critical),
        req(Skill::BallCarrierVision, 65.0, Important),
        req(Skill::Acceleration, 70.0, Important),
    ]),
    pos(Position::WideReceiver, 0.5, &[
        req(Skill::RunBlocking, 45.0, Beneficial),
        req(Skill::Speed, 75.0, Important),
    ]),
    pos(Position::OffensiveGuard, 0.5, &[
        req(Skill::RunBlocking, 65.0, Critical),
        req(Skill::Agility, 55.0, Important),
    ]),
];

const POWER_RUN: &[PositionRequirement] = &[
    pos(Position::RunningBack, 1.0, &[
        req(Skill::Strength, 70.0, Critical),
        req(Skill::BallCarrierVision, 70.0, Critical),
        req(Skill::BallSecurity, 70.0, Important),
    ]),
    pos(Position::Fullback, 0.7, &[
        req(Skill::RunBlocking, 70.0, Critical),
        req(Skill::Strength, 70.0, Important),
    ]),
    pos(Position::OffensiveGuard, 0.9, &[
        req(Skill::RunBlocking, 75.0, Critical),
        req(Skill::Strength, 75.0, Critical),
    ]),
    pos(Position::Center, 0.7, &[
        req(Skill::RunBlocking, 70.0, Critical),
        req(Skill::Awareness, 65.0, Important),
    ]),
    pos(Position::TightEnd, 0.7, &[
        req(Skill::RunBlocking, 70.0, Critical),
        req(Skill::Strength, 65.0, Important),
        req(Skill::Catching, 55.0, Beneficial),
    ]),
    pos(Position::Quarterback, 0.5, &[
        req(Skill::Decisions, 60.0, Important),
        req(Skill::ThrowAccuracy, 60.0, Beneficial),
    ]),
];

const PRO_STYLE: &[PositionRequirement] = &[
    pos(Position::Quarterback, 1.0, &[
        req(Skill::PocketPresence, 70.0, Critical),
        req(Skill::ThrowAccuracy, 70.0, Critical),
        req(Skill::ThrowPower, 65.0, Important),
        req(Skill::Decisions, 65.0, Important),
    ]),
    pos(Position::RunningBack, 0.7, &[
        req(Skill::BallCarrierVision, 65.0, Important),
        req(Skill::BallSecurity, 65.0, Important),
        req(Skill::Strength, 60.0, Beneficial),
    ]),
    pos(Position::WideReceiver, 0.7, &[
        req(Skill::RouteRunning, 70.0, Important),
        req(Skill::Catching, 70.0, Important),
    ]),
    pos(Position::TightEnd, 0.8, &[
        req(Skill::RunBlocking, 65.0, Important),
        req(Skill::Catching, 65.0, Important),
    ]),
    pos(Position::OffensiveTackle, 0.7, &[
        req(Skill::PassBlocking, 70.0, Critical),
        req(Skill::RunBlocking, 65.0, Important),
    ]),
];

// ─── Defense ─────────────────────────────────────────────────────────

const FOUR_THREE: &[PositionRequirement] = &[
    pos(Position::DefensiveEnd, 0.9, &[
        req(Skill::PassRush, 75.0, Critical),
        req(Skill::Speed, 65.0, Important),
    ]),
    pos(Position::DefensiveTackle, 0.8, &[
        req(Skill::BlockShedding, 70.0, Critical),
        req(Skill::Strength, 75.0, Important),
    ]),
    pos(Position::OutsideLinebacker, 0.6, &[
        req(Skill::Pursuit, 70.0, Important),
        req(Skill::Tackling, 65.0, Important),
        req(Skill::ZoneCoverage, 55.0, Beneficial),
    ]),
    pos(Position::InsideLinebacker, 0.8, &[
        req(Skill::Tackling, 75.0, Critical),
        req(Skill::Awareness, 70.0, Important),
    ]),
    pos(Position::Cornerback, 0.6, &[
        req(Skill::ZoneCoverage, 65.0, Important),
        req(Skill::ManCoverage, 65.0, Important),
    ]),
];

const THREE_FOUR: &[PositionRequirement] = &[
    pos(Position::DefensiveTackle, 0.9, &[
        req(Skill::Strength, 80.0, Critical),
        req(Skill::BlockShedding, 75.0, Critical),
    ]),
    pos(Position::DefensiveEnd, 0.7, &[
        req(Skill::Strength, 70.0, Important),
        req(Skill::BlockShedding, 70.0, Important),
    ]),
    pos(Position::OutsideLinebacker, 1.0, &[
        req(Skill::PassRush, 75.0, Critical),
        req(Skill::Speed, 70.0, Important),
        req(Skill::Tackling, 60.0, Beneficial),
    ]),
    pos(Position::InsideLinebacker, 0.7, &[
        req(Skill::Tackling, 70.0, Critical),
        req(Skill::Pursuit, 65.0, Important),
    ]),
    pos(Position::StrongSafety, 0.5, &[
        req(Skill::Tackling, 65.0, Important),
        req(Skill::ZoneCoverage, 60.0, Important),
    ]),
];

const TAMPA_2: &[PositionRequirement] = &[
    pos(Position::InsideLinebacker, 1.0, &[
        req(Skill::Speed, 70.0, Critical),
        req(Skill::ZoneCoverage, 70.0, Critical),
        req(Skill::Awareness, 65.0, Important),
    ]),
    pos(Position::DefensiveEnd, 0.8, &[
        req(Skill::PassRush, 75.0, Critical),
        req(Skill::Speed, 70.0, Important),
    ]),
    pos(Position::Cornerback, 0.7, &[
        req(Skill::ZoneCoverage, 70.0, Critical),
        req(Skill::Tackling, 55.0, Important),
    ]),
    pos(Position::FreeSafety, 0.8, &[
        req(Skill::ZoneCoverage, 75.0, Critical),
        req(Skill::BallSkills, 65.0, Important),
    ]),
    pos(Position::StrongSafety, 0.6, &[
        req(Skill::ZoneCoverage, 65.0, Important),
        req(Skill::Awareness, 60.0, Beneficial),
    ]),
];

const COVER_THREE: &[PositionRequirement] = &[
    pos(Position::FreeSafety, 1.0, &[
        req(Skill::Speed, 80.0, Critical),
        req(Skill::ZoneCoverage, 75.0, Critical),
        req(Skill::BallSkills, 65.0, Important),
    ]),
    pos(Position::Cornerback, 0.9, &[
        req(Skill::Press, 70.0, Critical),
        req(Skill::ZoneCoverage, 65.0, Important),
        req(Skill::Speed, 70.0, Important),
    ]),
    pos(Position::StrongSafety, 0.7, &[
        req(Skill::Tackling, 70.0, Critical),
        req(Skill::ZoneCoverage, 60.0, Important),
    ]),
    pos(Position::OutsideLinebacker, 0.5, &[
        req(Skill::Pursuit, 65.0, Important),
        req(Skill::ZoneCoverage, 55.0, Beneficial),
    ]),
    pos(Position::DefensiveEnd, 0.6, &[
        req(Skill::PassRush, 70.0, Critical),
    ]),
];

const NICKEL_BLITZ: &[PositionRequirement] = &[
    pos(Position::Cornerback, 1.0, &[
        req(Skill::ManCoverage, 75.0, Critical),
        req(Skill::Press, 70.0, Important),
        req(Skill::Speed, 75.0, Important),
    ]),
    pos(Position::OutsideLinebacker, 0.8, &[
        req(Skill::PassRush, 70.0, Critical),
        req(Skill::Pursuit, 65.0, Important),
    ]),
    pos(Position::InsideLinebacker, 0.6, &[
        req(Skill::PassRush, 60.0, Important),
        req(Skill::Tackling, 65.0, Important),
    ]),
    pos(Position::StrongSafety, 0.7, &[
        req(Skill::ManCoverage, 65.0, Important),
        req(Skill::Tackling, 60.0, Important),
    ]),
    pos(Position::FreeSafety, 0.6, &[
        req(Skill::ManCoverage, 65.0, Important),
        req(Skill::BallSkills, 60.0, Beneficial),
    ]),
];
