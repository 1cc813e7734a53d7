use crate::club::{Position, Side, Skill};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Scheme {
    // Offense
    WestCoast,
    AirRaid,
    SpreadOption,
    PowerRun,
    ProStyle,

    // Defense
    FourThree,
    ThreeFour,
    Tampa2,
    CoverThree,
    NickelBlitz,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemeKind {
    Offensive,
    Defensive,
}

impl SchemeKind {
    pub fn side(&self) -> Side {
        match self {
            SchemeKind::Offensive => Side::Offense,
            SchemeKind::Defensive => Side::Defense,
        }
    }
}

impl Scheme {
    pub const ALL: [Scheme; 10] = [
        Scheme::WestCoast,
        Scheme::AirRaid,
        Scheme::SpreadOption,
        Scheme::PowerRun,
        Scheme::ProStyle,
        Scheme::FourThree,
        Scheme::ThreeFour,
        Scheme::Tampa2,
        Scheme::CoverThree,
        Scheme::NickelBlitz,
    ];

    pub fn kind(&self) -> SchemeKind {
        match self {
            Scheme::WestCoast
            | Scheme::AirRaid
            | Scheme::SpreadOption
            | Scheme::PowerRun
            | Scheme::ProStyle => SchemeKind::Offensive,
            Scheme::FourThree
            | Scheme::ThreeFour
            | Scheme::Tampa2
            | Scheme::CoverThree
            | Scheme::NickelBlitz => SchemeKind::Defensive,
        }
    }

    pub fn side(&self) -> Side {
        self.kind().side()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scheme::WestCoast => "West Coast",
            Scheme::AirRaid => "Air Raid",
            Scheme::SpreadOption => "Spread Option",
            Scheme::PowerRun => "Power Run",
            Scheme::ProStyle => "Pro Style",
            Scheme::FourThree => "4-3",
            Scheme::ThreeFour => "3-4",
            Scheme::Tampa2 => "Tampa 2",
            Scheme::CoverThree => "Cover 3",
            Scheme::NickelBlitz => "Nickel Blitz",
        }
    }

    /// Schemes a player on `side` can be measured against
    pub fn for_side(side: Side) -> impl Iterator<Item = Scheme> {
        Scheme::ALL.into_iter().filter(move |s| s.side() == side)
    }

    pub fn requirements(&self) -> &'static [PositionRequirement] {
        super::catalog::requirements(*self)
    }

    pub fn requirement_for(&self, position: Position) -> Option<&'static PositionRequirement> {
        self.requirements().iter().find(|r| r.position == position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequirementPriority {
    Critical,
    Important,
    Beneficial,
}

impl RequirementPriority {
    pub fn weight(&self) -> f32 {
        match self {
            RequirementPriority::Critical => 3.0,
            RequirementPriority::Important => 2.0,
            RequirementPriority::Beneficial => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SkillRequirement {
    pub skill: Skill,
    pub minimum: f32,
    pub priority: RequirementPriority,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionRequirement {
    pub position: Position,
    /// 0-1, how much this position's fit matters to the scheme
    pub importance: f32,
    pub skills: &'static [SkillRequirement],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_scheme_has_requirements_on_its_side() {
        for scheme in Scheme::ALL {
            let requirements = scheme.requirements();
            assert!(!requirements.is_empty(), "{:?}", scheme);

            for requirement in requirements {
                assert_eq!(requirement.position.side(), scheme.side(), "{:?}", scheme);
                assert!((0.0..=1.0).contains(&requirement.importance));
                assert!(!requirement.skills.is_empty());
            }
        }
    }

    #[test]
    fn test_no_duplicate_positions_in_a_scheme() {
        for scheme in Scheme::ALL {
            let mut positions: Vec<Position> = scheme.requirements().iter().map(|r| r.position).collect();
            let total = positions.len();
            positions.sort();
            positions.dedup();
            assert_eq!(positions.len(), total, "{:?}", scheme);
        }
    }

    #[test]
    fn test_for_side_splits_catalog() {
        assert_eq!(Scheme::for_side(Side::Offense).count(), 5);
        assert_eq!(Scheme::for_side(Side::Defense).count(), 5);
        assert_eq!(Scheme::for_side(Side::SpecialTeams).count(), 0);
    }
}
