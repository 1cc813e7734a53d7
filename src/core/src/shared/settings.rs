use serde::{Deserialize, Serialize};

/// Tunables for season-end progression
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OffseasonSettings {
    /// Base impact of a position coach with development 100
    pub position_coach_scale: f32,
    /// Head coach share of the position-coach base (diffused responsibility)
    pub head_coach_factor: f32,
    /// Coordinator share of the position-coach base
    pub coordinator_factor: f32,
    /// Impact points per chemistry point
    pub chemistry_scale: f32,
    /// Absolute per-skill change from which scouts narrow by two points per side
    pub wide_narrowing_threshold: i32,
}

impl Default for OffseasonSettings {
    fn default() -> Self {
        OffseasonSettings {
            position_coach_scale: 4.0,
            head_coach_factor: 0.5,
            coordinator_factor: 0.75,
            chemistry_scale: 0.2,
            wide_narrowing_threshold: 3,
        }
    }
}

/// Tunables for per-game progression and the breakout mechanic
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MidSeasonSettings {
    pub standout_score: f32,
    pub poor_score: f32,
    /// Cap on the cumulative magnitude of mid-season changes in one season
    pub season_cap: f32,
    pub standout_gain: (f32, f32),
    pub poor_loss: (f32, f32),
    /// Coach bonus at development 100, linear from 0
    pub max_coach_bonus: f32,

    pub breakout_max_age: u8,
    pub breakout_threshold: f32,
    pub meter_gain: (f32, f32),
    pub meter_loss: (f32, f32),
    pub breakout_boost: (f32, f32),
}

impl Default for MidSeasonSettings {
    fn default() -> Self {
        MidSeasonSettings {
            standout_score: 85.0,
            poor_score: 25.0,
            season_cap: 3.0,
            standout_gain: (0.5, 1.5),
            poor_loss: (0.3, 0.8),
            max_coach_bonus: 0.3,
            breakout_max_age: 25,
            breakout_threshold: 100.0,
            meter_gain: (15.0, 25.0),
            meter_loss: (5.0, 10.0),
            breakout_boost: (3.0, 5.0),
        }
    }
}
