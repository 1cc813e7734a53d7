use serde::{Deserialize, Serialize};

/// Hidden ability ratings, 1-100. Never shown to the user directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachAttributes {
    pub development: u8,
    pub game_day_coaching: u8,
    pub scheme_teaching: u8,
    pub motivation: u8,
    pub player_evaluation: u8,
    pub talent_identification: u8,
}

impl CoachAttributes {
    pub fn is_valid(&self) -> bool {
        [
            self.development,
            self.game_day_coaching,
            self.scheme_teaching,
            self.motivation,
            self.player_evaluation,
            self.talent_identification,
        ]
        .iter()
        .all(|v| (1..=100).contains(v))
    }

    /// 0 -> 0.8x, 50 -> 1.0x, 100 -> 1.2x
    pub fn motivation_multiplier(&self) -> f32 {
        0.8 + (self.motivation.min(100) as f32 / 100.0) * 0.4
    }
}

impl Default for CoachAttributes {
    fn default() -> Self {
        CoachAttributes {
            development: 50,
            game_day_coaching: 50,
            scheme_teaching: 50,
            motivation: 50,
            player_evaluation: 50,
            talent_identification: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motivation_multiplier_is_linear() {
        let mut attributes = CoachAttributes::default();

        attributes.motivation = 0;
        assert!((attributes.motivation_multiplier() - 0.8).abs() < 1e-6);

        attributes.motivation = 50;
        assert!((attributes.motivation_multiplier() - 1.0).abs() < 1e-6);

        attributes.motivation = 100;
        assert!((attributes.motivation_multiplier() - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_validation_rejects_zero_and_overflow() {
        let mut attributes = CoachAttributes::default();
        assert!(attributes.is_valid());

        attributes.development = 0;
        assert!(!attributes.is_valid());

        attributes.development = 101;
        assert!(!attributes.is_valid());
    }
}
