use crate::club::{Position, PositionGroup, Side};
use crate::shared::OffseasonSettings;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CoachRole {
    HeadCoach,
    OffensiveCoordinator,
    DefensiveCoordinator,
    SpecialTeamsCoordinator,
    QuarterbacksCoach,
    RunningBacksCoach,
    WideReceiversCoach,
    TightEndsCoach,
    OffensiveLineCoach,
    DefensiveLineCoach,
    LinebackersCoach,
    SecondaryCoach,
}

/// Who a role works with during development
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleReach {
    Everyone,
    Side(Side),
    Group(PositionGroup),
}

impl CoachRole {
    pub const ALL: [CoachRole; 12] = [
        CoachRole::HeadCoach,
        CoachRole::OffensiveCoordinator,
        CoachRole::DefensiveCoordinator,
        CoachRole::SpecialTeamsCoordinator,
        CoachRole::QuarterbacksCoach,
        CoachRole::RunningBacksCoach,
        CoachRole::WideReceiversCoach,
        CoachRole::TightEndsCoach,
        CoachRole::OffensiveLineCoach,
        CoachRole::DefensiveLineCoach,
        CoachRole::LinebackersCoach,
        CoachRole::SecondaryCoach,
    ];

    pub fn reach(&self) -> RoleReach {
        match self {
            CoachRole::HeadCoach => RoleReach::Everyone,
            CoachRole::OffensiveCoordinator => RoleReach::Side(Side::Offense),
            CoachRole::DefensiveCoordinator => RoleReach::Side(Side::Defense),
            CoachRole::SpecialTeamsCoordinator => RoleReach::Side(Side::SpecialTeams),
            CoachRole::QuarterbacksCoach => RoleReach::Group(PositionGroup::Quarterbacks),
            CoachRole::RunningBacksCoach => RoleReach::Group(PositionGroup::RunningBacks),
            CoachRole::WideReceiversCoach => RoleReach::Group(PositionGroup::Receivers),
            CoachRole::TightEndsCoach => RoleReach::Group(PositionGroup::TightEnds),
            CoachRole::OffensiveLineCoach => RoleReach::Group(PositionGroup::OffensiveLine),
            CoachRole::DefensiveLineCoach => RoleReach::Group(PositionGroup::DefensiveLine),
            CoachRole::LinebackersCoach => RoleReach::Group(PositionGroup::Linebackers),
            CoachRole::SecondaryCoach => RoleReach::Group(PositionGroup::Secondary),
        }
    }

    pub fn affects(&self, position: Position) -> bool {
        match self.reach() {
            RoleReach::Everyone => true,
            RoleReach::Side(side) => position.side() == side,
            RoleReach::Group(group) => position.group() == group,
        }
    }

    pub fn is_position_coach(&self) -> bool {
        matches!(self.reach(), RoleReach::Group(_))
    }

    /// Share of a position coach's development base this role delivers
    pub fn development_share(&self, settings: &OffseasonSettings) -> f32 {
        match self.reach() {
            RoleReach::Everyone => settings.head_coach_factor,
            RoleReach::Side(_) => settings.coordinator_factor,
            RoleReach::Group(_) => 1.0,
        }
    }

    pub fn may_call_offense(&self) -> bool {
        matches!(self, CoachRole::HeadCoach | CoachRole::OffensiveCoordinator)
    }

    pub fn may_call_defense(&self) -> bool {
        matches!(self, CoachRole::HeadCoach | CoachRole::DefensiveCoordinator)
    }

    pub fn title(&self) -> &'static str {
        match self {
            CoachRole::HeadCoach => "Head Coach",
            CoachRole::OffensiveCoordinator => "Offensive Coordinator",
            CoachRole::DefensiveCoordinator => "Defensive Coordinator",
            CoachRole::SpecialTeamsCoordinator => "Special Teams Coordinator",
            CoachRole::QuarterbacksCoach => "Quarterbacks Coach",
            CoachRole::RunningBacksCoach => "Running Backs Coach",
            CoachRole::WideReceiversCoach => "Wide Receivers Coach",
            CoachRole::TightEndsCoach => "Tight Ends Coach",
            CoachRole::OffensiveLineCoach => "Offensive Line Coach",
            CoachRole::DefensiveLineCoach => "Defensive Line Coach",
            CoachRole::LinebackersCoach => "Linebackers Coach",
            CoachRole::SecondaryCoach => "Secondary Coach",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_coach_affects_everyone() {
        for position in Position::ALL {
            assert!(CoachRole::HeadCoach.affects(position));
        }
    }

    #[test]
    fn test_position_coach_only_affects_own_group() {
        assert!(CoachRole::QuarterbacksCoach.affects(Position::Quarterback));
        assert!(!CoachRole::QuarterbacksCoach.affects(Position::WideReceiver));
        assert!(CoachRole::OffensiveLineCoach.affects(Position::Center));
        assert!(!CoachRole::SecondaryCoach.affects(Position::InsideLinebacker));
    }

    #[test]
    fn test_coordinators_cover_their_side() {
        assert!(CoachRole::OffensiveCoordinator.affects(Position::TightEnd));
        assert!(!CoachRole::OffensiveCoordinator.affects(Position::Cornerback));
        assert!(CoachRole::SpecialTeamsCoordinator.affects(Position::Punter));
    }

    #[test]
    fn test_every_position_group_has_a_position_coach_or_coordinator() {
        for position in Position::ALL {
            let covered = CoachRole::ALL
                .iter()
                .filter(|r| **r != CoachRole::HeadCoach)
                .any(|r| r.affects(position));
            assert!(covered, "{:?}", position);
        }
    }

    #[test]
    fn test_development_share_ordering() {
        let settings = OffseasonSettings::default();
        let head = CoachRole::HeadCoach.development_share(&settings);
        let coordinator = CoachRole::DefensiveCoordinator.development_share(&settings);
        let position = CoachRole::LinebackersCoach.development_share(&settings);

        assert!(head < coordinator);
        assert!(coordinator < position);
    }
}
