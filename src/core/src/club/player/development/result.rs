use crate::club::{Player, Skill};
use serde::Serialize;

/// One skill's true-value movement
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SkillChange {
    pub skill: Skill,
    pub change: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum InfluenceTier {
    Negative,
    Minimal,
    Moderate,
    Significant,
}

impl InfluenceTier {
    pub fn from_change(change: i32) -> Self {
        match change {
            c if c >= 5 => InfluenceTier::Significant,
            c if c >= 2 => InfluenceTier::Moderate,
            c if c >= 0 => InfluenceTier::Minimal,
            _ => InfluenceTier::Negative,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            InfluenceTier::Significant => "had a significant influence on",
            InfluenceTier::Moderate => "had a moderate influence on",
            InfluenceTier::Minimal => "had little influence on",
            InfluenceTier::Negative => "held back",
        }
    }
}

/// What one coach did for one player over an offseason
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DevelopmentReport {
    pub coach_id: u32,
    pub player_id: u32,
    pub total_change: i32,
    pub tier: InfluenceTier,
    pub changes: Vec<SkillChange>,
}

impl DevelopmentReport {
    pub fn skill_names(&self) -> Vec<&'static str> {
        self.changes.iter().map(|c| c.skill.name()).collect()
    }

    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakoutReport {
    pub player_id: u32,
    pub changes: Vec<SkillChange>,
}

/// Outcome of one game for one player
#[derive(Debug, Clone, PartialEq)]
pub struct MidSeasonResult {
    pub player: Player,
    pub changes: Vec<SkillChange>,
    pub breakout: Option<BreakoutReport>,
}
