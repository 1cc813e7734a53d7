use crate::club::Skill;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    Quarterback,
    RunningBack,
    Fullback,
    WideReceiver,
    TightEnd,
    OffensiveTackle,
    OffensiveGuard,
    Center,
    DefensiveEnd,
    DefensiveTackle,
    OutsideLinebacker,
    InsideLinebacker,
    Cornerback,
    FreeSafety,
    StrongSafety,
    Kicker,
    Punter,
    LongSnapper,
}

impl Position {
    pub const ALL: [Position; 18] = [
        Position::Quarterback,
        Position::RunningBack,
        Position::Fullback,
        Position::WideReceiver,
        Position::TightEnd,
        Position::OffensiveTackle,
        Position::OffensiveGuard,
        Position::Center,
        Position::DefensiveEnd,
        Position::DefensiveTackle,
        Position::OutsideLinebacker,
        Position::InsideLinebacker,
        Position::Cornerback,
        Position::FreeSafety,
        Position::StrongSafety,
        Position::Kicker,
        Position::Punter,
        Position::LongSnapper,
    ];

    pub fn group(&self) -> PositionGroup {
        match self {
            Position::Quarterback => PositionGroup::Quarterbacks,
            Position::RunningBack | Position::Fullback => PositionGroup::RunningBacks,
            Position::WideReceiver => PositionGroup::Receivers,
            Position::TightEnd => PositionGroup::TightEnds,
            Position::OffensiveTackle | Position::OffensiveGuard | Position::Center => {
                PositionGroup::OffensiveLine
            }
            Position::DefensiveEnd | Position::DefensiveTackle => PositionGroup::DefensiveLine,
            Position::OutsideLinebacker | Position::InsideLinebacker => PositionGroup::Linebackers,
            Position::Cornerback | Position::FreeSafety | Position::StrongSafety => {
                PositionGroup::Secondary
            }
            Position::Kicker | Position::Punter | Position::LongSnapper => {
                PositionGroup::SpecialTeams
            }
        }
    }

    pub fn side(&self) -> Side {
        self.group().side()
    }

    pub fn get_short_name(&self) -> &'static str {
        match self {
            Position::Quarterback => "QB",
            Position::RunningBack => "RB",
            Position::Fullback => "FB",
            Position::WideReceiver => "WR",
            Position::TightEnd => "TE",
            Position::OffensiveTackle => "OT",
            Position::OffensiveGuard => "OG",
            Position::Center => "C",
            Position::DefensiveEnd => "DE",
            Position::DefensiveTackle => "DT",
            Position::OutsideLinebacker => "OLB",
            Position::InsideLinebacker => "ILB",
            Position::Cornerback => "CB",
            Position::FreeSafety => "FS",
            Position::StrongSafety => "SS",
            Position::Kicker => "K",
            Position::Punter => "P",
            Position::LongSnapper => "LS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PositionGroup {
    Quarterbacks,
    RunningBacks,
    Receivers,
    TightEnds,
    OffensiveLine,
    DefensiveLine,
    Linebackers,
    Secondary,
    SpecialTeams,
}

impl PositionGroup {
    pub const ALL: [PositionGroup; 9] = [
        PositionGroup::Quarterbacks,
        PositionGroup::RunningBacks,
        PositionGroup::Receivers,
        PositionGroup::TightEnds,
        PositionGroup::OffensiveLine,
        PositionGroup::DefensiveLine,
        PositionGroup::Linebackers,
        PositionGroup::Secondary,
        PositionGroup::SpecialTeams,
    ];

    pub fn side(&self) -> Side {
        match self {
            PositionGroup::Quarterbacks
            | PositionGroup::RunningBacks
            | PositionGroup::Receivers
            | PositionGroup::TightEnds
            | PositionGroup::OffensiveLine => Side::Offense,
            PositionGroup::DefensiveLine | PositionGroup::Linebackers | PositionGroup::Secondary => {
                Side::Defense
            }
            PositionGroup::SpecialTeams => Side::SpecialTeams,
        }
    }

    /// Skills a coach of this group works on and that per-game progression touches
    pub fn relevant_skills(&self) -> &'static [Skill] {
        match self {
            PositionGroup::Quarterbacks => &[
                Skill::ThrowPower,
                Skill::ThrowAccuracy,
                Skill::Decisions,
                Skill::PocketPresence,
                Skill::Awareness,
            ],
            PositionGroup::RunningBacks => &[
                Skill::Speed,
                Skill::Acceleration,
                Skill::BallCarrierVision,
                Skill::Elusiveness,
                Skill::BallSecurity,
                Skill::Catching,
            ],
            PositionGroup::Receivers => &[
                Skill::Speed,
                Skill::Agility,
                Skill::Catching,
                Skill::RouteRunning,
                Skill::Release,
            ],
            PositionGroup::TightEnds => &[
                Skill::Catching,
                Skill::RouteRunning,
                Skill::RunBlocking,
                Skill::Strength,
            ],
            PositionGroup::OffensiveLine => &[
                Skill::RunBlocking,
                Skill::PassBlocking,
                Skill::Strength,
                Skill::Awareness,
            ],
            PositionGroup::DefensiveLine => &[
                Skill::PassRush,
                Skill::BlockShedding,
                Skill::Strength,
                Skill::Tackling,
            ],
            PositionGroup::Linebackers => &[
                Skill::Tackling,
                Skill::Pursuit,
                Skill::BlockShedding,
                Skill::ZoneCoverage,
                Skill::Awareness,
            ],
            PositionGroup::Secondary => &[
                Skill::ManCoverage,
                Skill::ZoneCoverage,
                Skill::Press,
                Skill::BallSkills,
                Skill::Speed,
            ],
            PositionGroup::SpecialTeams => &[Skill::KickPower, Skill::KickAccuracy],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Offense,
    Defense,
    SpecialTeams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_group_has_relevant_skills() {
        for group in PositionGroup::ALL {
            assert!(!group.relevant_skills().is_empty(), "{:?}", group);
        }
    }

    #[test]
    fn test_position_sides() {
        assert_eq!(Position::Quarterback.side(), Side::Offense);
        assert_eq!(Position::Center.side(), Side::Offense);
        assert_eq!(Position::StrongSafety.side(), Side::Defense);
        assert_eq!(Position::LongSnapper.side(), Side::SpecialTeams);
    }

    #[test]
    fn test_every_position_maps_to_a_group() {
        let groups: std::collections::HashSet<PositionGroup> =
            Position::ALL.iter().map(|p| p.group()).collect();
        assert_eq!(groups.len(), PositionGroup::ALL.len());
    }
}
