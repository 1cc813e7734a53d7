use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TreeName {
    WestCoast,
    AirCoryell,
    ZoneBlocking,
    SmashMouth,
    Tampa2,
    ThreeFourPressure,
    Spread,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskPhilosophy {
    Aggressive,
    Balanced,
    Conservative,
}

/// Coaching lineage. Generation 1 is the tree's founder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachingTree {
    pub tree: TreeName,
    pub generation: u8,
    pub philosophy: RiskPhilosophy,
}

/// How two lineages relate, strongest bond first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeRelationship {
    SameGeneration,
    AdjacentGeneration,
    Compatible,
    Conflicting,
    OpposingPhilosophy,
    Neutral,
}

impl TreeName {
    pub const ALL: [TreeName; 7] = [
        TreeName::WestCoast,
        TreeName::AirCoryell,
        TreeName::ZoneBlocking,
        TreeName::SmashMouth,
        TreeName::Tampa2,
        TreeName::ThreeFourPressure,
        TreeName::Spread,
    ];

    pub fn is_compatible_with(&self, other: TreeName) -> bool {
        use TreeName::*;

        matches!(
            (*self, other),
            (WestCoast, Spread)
                | (Spread, WestCoast)
                | (WestCoast, ZoneBlocking)
                | (ZoneBlocking, WestCoast)
                | (WestCoast, Tampa2)
                | (Tampa2, WestCoast)
                | (AirCoryell, Spread)
                | (Spread, AirCoryell)
                | (ZoneBlocking, SmashMouth)
                | (SmashMouth, ZoneBlocking)
                | (SmashMouth, ThreeFourPressure)
                | (ThreeFourPressure, SmashMouth)
        )
    }

    pub fn conflicts_with(&self, other: TreeName) -> bool {
        use TreeName::*;

        matches!(
            (*self, other),
            (WestCoast, SmashMouth)
                | (SmashMouth, WestCoast)
                | (AirCoryell, SmashMouth)
                | (SmashMouth, AirCoryell)
                | (Spread, SmashMouth)
                | (SmashMouth, Spread)
                | (Tampa2, ThreeFourPressure)
                | (ThreeFourPressure, Tampa2)
        )
    }
}

impl RiskPhilosophy {
    pub fn opposes(&self, other: RiskPhilosophy) -> bool {
        matches!(
            (*self, other),
            (RiskPhilosophy::Aggressive, RiskPhilosophy::Conservative)
                | (RiskPhilosophy::Conservative, RiskPhilosophy::Aggressive)
        )
    }
}

impl CoachingTree {
    pub fn new(tree: TreeName, generation: u8, philosophy: RiskPhilosophy) -> Self {
        CoachingTree {
            tree,
            generation,
            philosophy,
        }
    }

    pub fn is_valid(&self) -> bool {
        (1..=4).contains(&self.generation)
    }

    pub fn relationship(&self, other: &CoachingTree) -> TreeRelationship {
        if self.tree == other.tree {
            return match self.generation.abs_diff(other.generation) {
                0 => TreeRelationship::SameGeneration,
                1 => TreeRelationship::AdjacentGeneration,
                // distant cousins still share a playbook
                _ => TreeRelationship::Compatible,
            };
        }

        if self.tree.is_compatible_with(other.tree) {
            TreeRelationship::Compatible
        } else if self.tree.conflicts_with(other.tree) {
            TreeRelationship::Conflicting
        } else if self.philosophy.opposes(other.philosophy) {
            TreeRelationship::OpposingPhilosophy
        } else {
            TreeRelationship::Neutral
        }
    }
}

impl TreeRelationship {
    /// Inclusive chemistry range for the relationship
    pub fn range(&self) -> (f32, f32) {
        match self {
            TreeRelationship::SameGeneration => (3.0, 5.0),
            TreeRelationship::AdjacentGeneration => (2.0, 4.0),
            TreeRelationship::Compatible => (1.0, 2.0),
            TreeRelationship::Conflicting => (-4.0, -2.0),
            TreeRelationship::OpposingPhilosophy => (-2.0, -1.0),
            TreeRelationship::Neutral => (0.0, 0.0),
        }
    }

    /// Picks a point in the range, `position` in 0..=1
    pub fn value_at(&self, position: f32) -> f32 {
        let (min, max) = self.range();
        min + (max - min) * position.clamp(0.0, 1.0)
    }
}
