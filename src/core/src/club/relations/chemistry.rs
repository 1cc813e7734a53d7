use crate::club::relations::personality::disposition_match;
use crate::club::{Coach, FitLevel, Player, SchemeFitCalculator};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

pub const CHEMISTRY_MIN: i32 = -10;
pub const CHEMISTRY_MAX: i32 = 10;

const EXCELLENT_SEASON: u8 = 80;
const POOR_SEASON: u8 = 40;

pub fn is_valid_chemistry(value: i32) -> bool {
    (CHEMISTRY_MIN..=CHEMISTRY_MAX).contains(&value)
}

pub fn clamp_chemistry(value: i32) -> i8 {
    value.clamp(CHEMISTRY_MIN, CHEMISTRY_MAX) as i8
}

/// The only form of chemistry allowed past the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChemistryLevel {
    Toxic,
    Strained,
    Neutral,
    Good,
    Excellent,
}

impl ChemistryLevel {
    pub fn from_value(value: f32) -> Self {
        match value {
            v if v >= 5.0 => ChemistryLevel::Excellent,
            v if v >= 2.0 => ChemistryLevel::Good,
            v if v >= -2.0 => ChemistryLevel::Neutral,
            v if v >= -5.0 => ChemistryLevel::Strained,
            _ => ChemistryLevel::Toxic,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ChemistryLevel::Excellent => "an excellent working relationship",
            ChemistryLevel::Good => "a good working relationship",
            ChemistryLevel::Neutral => "a professional relationship",
            ChemistryLevel::Strained => "a strained relationship",
            ChemistryLevel::Toxic => "a toxic relationship",
        }
    }
}

/// Things that move a coach-player relationship after it is formed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChemistryEvent {
    // Positive
    ClutchPlay,
    Mentorship,
    PublicPraise,
    SeasonTogether,
    ExcellentSeason,

    // Negative
    CostlyMistake,
    PublicCriticism,
    ContractDispute,
    DisciplinaryAction,
    PoorSeason,
}

impl ChemistryEvent {
    pub fn magnitude(&self) -> i32 {
        match self {
            ChemistryEvent::ClutchPlay => 2,
            ChemistryEvent::Mentorship => 3,
            ChemistryEvent::PublicPraise => 1,
            ChemistryEvent::SeasonTogether => 1,
            ChemistryEvent::ExcellentSeason => 2,
            ChemistryEvent::CostlyMistake => -1,
            ChemistryEvent::PublicCriticism => -2,
            ChemistryEvent::ContractDispute => -3,
            ChemistryEvent::DisciplinaryAction => -2,
            ChemistryEvent::PoorSeason => -2,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.magnitude() > 0
    }

    pub fn apply(&self, value: i8) -> i8 {
        clamp_chemistry(value as i32 + self.magnitude())
    }
}

/// Factors behind an initial coach-player chemistry value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChemistryBreakdown {
    pub personality: f32,
    pub scheme_fit: Option<f32>,
    pub time_together: f32,
    pub performance: Option<f32>,
}

impl ChemistryBreakdown {
    pub fn total(&self) -> i8 {
        let sum = self.personality
            + self.scheme_fit.unwrap_or(0.0)
            + self.time_together
            + self.performance.unwrap_or(0.0);

        clamp_chemistry(sum.round() as i32)
    }
}

pub struct PlayerCoachChemistry;

impl PlayerCoachChemistry {
    pub fn breakdown(coach: &Coach, player: &Player, seasons_together: u8, performance: Option<u8>) -> ChemistryBreakdown {
        // a coach without a scheme has no opinion on fit
        let scheme_fit = coach
            .scheme
            .map(|scheme| Self::fit_factor(SchemeFitCalculator::calculate(player, scheme).level));

        ChemistryBreakdown {
            personality: disposition_match(coach.personality.primary, player.disposition) as f32,
            scheme_fit,
            time_together: Self::time_bonus(seasons_together),
            performance: performance.map(Self::performance_factor),
        }
    }

    pub fn calculate(coach: &Coach, player: &Player, seasons_together: u8, performance: Option<u8>) -> i8 {
        let breakdown = Self::breakdown(coach, player, seasons_together, performance);

        trace!(
            "chemistry factors coach {} / player {}: {:?}",
            coach.id,
            player.id,
            breakdown
        );

        let value = breakdown.total();

        debug!(
            "chemistry coach {} / player {}: {:?}",
            coach.id,
            player.id,
            ChemistryLevel::from_value(value as f32)
        );

        value
    }

    pub fn fit_factor(level: FitLevel) -> f32 {
        match level {
            FitLevel::Perfect => 3.0,
            FitLevel::Good => 2.0,
            FitLevel::Neutral => 0.0,
            FitLevel::Poor => -2.0,
            FitLevel::Terrible => -3.0,
        }
    }

    /// Grows half a point a season, up to 3
    pub fn time_bonus(seasons_together: u8) -> f32 {
        (seasons_together as f32 * 0.5).min(3.0)
    }

    /// Season grade 0-100 mapped to -2..=2
    pub fn performance_factor(performance: u8) -> f32 {
        (performance.min(100) as f32 - 50.0) / 25.0
    }
}

/// Append-only log of what happened between one coach and one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChemistryHistory {
    pub coach_id: u32,
    pub player_id: u32,
    pub initial: i8,
    pub value: i8,
    pub seasons_together: u8,
    pub events: Vec<ChemistryEvent>,
}

impl ChemistryHistory {
    pub fn new(coach_id: u32, player_id: u32, initial: i8) -> Self {
        let initial = clamp_chemistry(initial as i32);

        ChemistryHistory {
            coach_id,
            player_id,
            initial,
            value: initial,
            seasons_together: 0,
            events: Vec::new(),
        }
    }

    pub fn with_event(&self, event: ChemistryEvent) -> ChemistryHistory {
        let mut history = self.clone();

        history.value = event.apply(history.value);
        history.events.push(event);

        history
    }

    /// Adds the tenure event, plus a grade event for excellent or poor seasons
    pub fn advance_season(&self, performance: u8) -> ChemistryHistory {
        let mut history = self.with_event(ChemistryEvent::SeasonTogether);
        history.seasons_together = history.seasons_together.saturating_add(1);

        if performance >= EXCELLENT_SEASON {
            history = history.with_event(ChemistryEvent::ExcellentSeason);
        } else if performance <= POOR_SEASON {
            history = history.with_event(ChemistryEvent::PoorSeason);
        }

        history
    }

    /// Events clamp one at a time, so order matters
    pub fn replay(initial: i8, events: &[ChemistryEvent]) -> i8 {
        events
            .iter()
            .fold(clamp_chemistry(initial as i32), |value, event| event.apply(value))
    }

    pub fn level(&self) -> ChemistryLevel {
        ChemistryLevel::from_value(self.value as f32)
    }
}
