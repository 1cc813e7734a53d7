use crate::club::relations::personality::compatibility;
use crate::club::{Coach, TreeRelationship};
use crate::error::{CoachingError, Result};
use log::trace;

const EGO_CLASH_THRESHOLD: u8 = 80;
const EGO_CLASH_PENALTY: f32 = -2.0;
const SECONDARY_WEIGHT: f32 = 0.5;

/// Factors behind the chemistry of two coaches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoachPairChemistry {
    pub tree_relationship: TreeRelationship,
    pub tree: f32,
    pub personality: f32,
    pub ego_clash: f32,
}

impl CoachPairChemistry {
    pub fn calculate(a: &Coach, b: &Coach) -> Result<Self> {
        if a.id == b.id {
            return Err(CoachingError::SelfPairing { coach_id: a.id });
        }

        let tree_relationship = a.tree.relationship(&b.tree);

        // adaptable pairs land at the friendly end of their range
        let adaptability = (a.personality.adaptability as f32 + b.personality.adaptability as f32) / 200.0;

        let chemistry = CoachPairChemistry {
            tree_relationship,
            tree: tree_relationship.value_at(adaptability),
            personality: Self::personality_score(a, b),
            ego_clash: Self::ego_clash(a, b),
        };

        trace!("coach pair {} / {}: {:?}", a.id, b.id, chemistry);

        Ok(chemistry)
    }

    pub fn total(&self) -> f32 {
        self.tree + self.personality + self.ego_clash
    }

    fn personality_score(a: &Coach, b: &Coach) -> f32 {
        let primary = compatibility(a.personality.primary, b.personality.primary) as f32;

        let secondary: f32 = [
            a.personality.secondary.map(|s| compatibility(s, b.personality.primary)),
            b.personality.secondary.map(|s| compatibility(a.personality.primary, s)),
            a.personality
                .secondary
                .zip(b.personality.secondary)
                .map(|(x, y)| compatibility(x, y)),
        ]
        .iter()
        .flatten()
        .map(|score| *score as f32)
        .sum();

        primary + secondary * SECONDARY_WEIGHT
    }

    fn ego_clash(a: &Coach, b: &Coach) -> f32 {
        if a.personality.ego > EGO_CLASH_THRESHOLD && b.personality.ego > EGO_CLASH_THRESHOLD {
            EGO_CLASH_PENALTY
        } else {
            0.0
        }
    }
}
