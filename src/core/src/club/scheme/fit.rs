use crate::club::{Player, PositionRequirement, Scheme, Side, SKILL_FLOOR};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const NEUTRAL_SCORE: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FitLevel {
    Terrible,
    Poor,
    Neutral,
    Good,
    Perfect,
}

impl FitLevel {
    pub fn from_score(score: f32) -> Self {
        match score {
            s if s >= 90.0 => FitLevel::Perfect,
            s if s >= 75.0 => FitLevel::Good,
            s if s >= 50.0 => FitLevel::Neutral,
            s if s >= 25.0 => FitLevel::Poor,
            _ => FitLevel::Terrible,
        }
    }

    /// Game-engine multiplier offset. Never rendered; presentation gets `FitQuality`
    pub fn effectiveness_modifier(&self) -> f32 {
        match self {
            FitLevel::Perfect => 0.15,
            FitLevel::Good => 0.07,
            FitLevel::Neutral => 0.0,
            FitLevel::Poor => -0.07,
            FitLevel::Terrible => -0.15,
        }
    }

    pub fn quality(&self) -> FitQuality {
        match self {
            FitLevel::Perfect | FitLevel::Good => FitQuality::Good,
            FitLevel::Neutral => FitQuality::Average,
            FitLevel::Poor | FitLevel::Terrible => FitQuality::Poor,
        }
    }
}

/// Qualitative fit, safe for presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FitQuality {
    Good,
    Average,
    Poor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TransitionStatus {
    Learning,
    Adjusting,
    FullyAdapted,
}

impl TransitionStatus {
    pub fn from_years(years_in_scheme: u8) -> Self {
        match years_in_scheme {
            0 | 1 => TransitionStatus::Learning,
            2 => TransitionStatus::Adjusting,
            _ => TransitionStatus::FullyAdapted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitDescription {
    pub quality: FitQuality,
    pub transition: TransitionStatus,
}

impl FitDescription {
    pub fn text(&self) -> String {
        let quality = match self.quality {
            FitQuality::Good => "a good fit for the scheme",
            FitQuality::Average => "an average fit for the scheme",
            FitQuality::Poor => "a poor fit for the scheme",
        };

        let transition = match self.transition {
            TransitionStatus::Learning => "still learning the system",
            TransitionStatus::Adjusting => "adjusting to the system",
            TransitionStatus::FullyAdapted => "fully adapted to the system",
        };

        format!("{}, {}", quality, transition)
    }
}

/// Engine-side fit of one player in one scheme
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SchemeFitScore {
    pub scheme: Scheme,
    pub raw_score: f32,
    pub raw_level: FitLevel,
    pub years_in_scheme: u8,
    pub transition_penalty: f32,
    pub adjusted_score: f32,
    pub level: FitLevel,
}

impl SchemeFitScore {
    pub fn describe(&self) -> FitDescription {
        FitDescription {
            quality: self.level.quality(),
            transition: TransitionStatus::from_years(self.years_in_scheme),
        }
    }

    pub fn effectiveness_modifier(&self) -> f32 {
        self.level.effectiveness_modifier()
    }
}

/// Players per fit level for one scheme
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RosterFitSummary {
    pub counts: BTreeMap<FitLevel, usize>,
}

impl RosterFitSummary {
    pub fn count(&self, level: FitLevel) -> usize {
        self.counts.get(&level).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

pub struct SchemeFitCalculator;

impl SchemeFitCalculator {
    /// Fit using the player's own years in scheme
    pub fn calculate(player: &Player, scheme: Scheme) -> SchemeFitScore {
        Self::calculate_with_years(player, scheme, player.years_in_scheme)
    }

    pub fn calculate_with_years(player: &Player, scheme: Scheme, years_in_scheme: u8) -> SchemeFitScore {
        let measured = Self::measured_score(player, scheme);
        let raw_score = measured.unwrap_or(NEUTRAL_SCORE);

        // A player the scheme does not measure has nothing to learn
        let transition_penalty = match measured {
            Some(_) => Self::transition_penalty(years_in_scheme),
            None => 0.0,
        };
        let adjusted_score = (raw_score + transition_penalty).clamp(0.0, 100.0);

        let score = SchemeFitScore {
            scheme,
            raw_score,
            raw_level: FitLevel::from_score(raw_score),
            years_in_scheme,
            transition_penalty,
            adjusted_score,
            level: FitLevel::from_score(adjusted_score),
        };

        trace!(
            "scheme fit: player {} in {}: raw {:.1}, adjusted {:.1}",
            player.id,
            scheme.name(),
            raw_score,
            adjusted_score
        );

        score
    }

    /// 0-100 skill fit before the transition penalty
    pub fn raw_score(player: &Player, scheme: Scheme) -> f32 {
        Self::measured_score(player, scheme).unwrap_or(NEUTRAL_SCORE)
    }

    /// None when the scheme places no demands on the player
    fn measured_score(player: &Player, scheme: Scheme) -> Option<f32> {
        if player.side() == Side::SpecialTeams || player.side() != scheme.side() {
            return None;
        }

        scheme
            .requirement_for(player.position)
            .and_then(|requirement| Self::requirement_score(player, requirement))
    }

    fn requirement_score(player: &Player, requirement: &PositionRequirement) -> Option<f32> {
        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;

        for skill_req in requirement.skills {
            let weight = skill_req.priority.weight();
            // Missing skill counts as the lowest possible rating
            let value = player.skills.true_value(skill_req.skill).unwrap_or(SKILL_FLOOR);

            let skill_score = if value >= skill_req.minimum + 10.0 {
                100.0
            } else if value >= skill_req.minimum {
                75.0
            } else {
                let deficit = skill_req.minimum - value;
                (50.0 - 2.0 * deficit).max(0.0)
            };

            weighted_sum += skill_score * weight;
            total_weight += weight;
        }

        if total_weight == 0.0 {
            return None;
        }

        let skill_score = weighted_sum / total_weight;

        Some((NEUTRAL_SCORE + (skill_score - NEUTRAL_SCORE) * requirement.importance * 2.0).clamp(0.0, 100.0))
    }

    pub fn transition_penalty(years_in_scheme: u8) -> f32 {
        match years_in_scheme {
            0 | 1 => -7.5,
            2 => -3.5,
            _ => 0.0,
        }
    }

    /// All schemes on the player's side, best adjusted fit first
    pub fn rank(player: &Player) -> Vec<SchemeFitScore> {
        let mut scores: Vec<SchemeFitScore> = Scheme::for_side(player.side())
            .map(|scheme| Self::calculate(player, scheme))
            .collect();

        scores.sort_by(|a, b| b.adjusted_score.total_cmp(&a.adjusted_score));
        scores
    }

    pub fn best_fit(player: &Player) -> Option<SchemeFitScore> {
        Self::rank(player).into_iter().next()
    }

    pub fn worst_fit(player: &Player) -> Option<SchemeFitScore> {
        Self::rank(player).into_iter().last()
    }

    pub fn roster_summary(players: &[Player], scheme: Scheme) -> RosterFitSummary {
        let mut summary = RosterFitSummary::default();

        for player in players.iter().filter(|p| p.side() == scheme.side()) {
            let level = Self::calculate(player, scheme).level;
            *summary.counts.entry(level).or_insert(0) += 1;
        }

        debug!(
            "roster fit for {}: {} players measured",
            scheme.name(),
            summary.total()
        );

        summary
    }
}
