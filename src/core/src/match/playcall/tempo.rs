use crate::club::Tempo;
use crate::r#match::playcall::{BIG_MARGIN, GameStateContext, TWO_MINUTE_SECONDS};
use serde::Serialize;

const CLOCK_KILL_LEAD: i32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TwoMinuteMode {
    ClockKill,
    Balanced,
    Aggressive,
}

pub struct TempoSelector;

impl TempoSelector {
    /// Ahead by more than a score kills clock, tied or behind attacks
    pub fn two_minute_mode(score_differential: i32) -> TwoMinuteMode {
        match score_differential {
            d if d > CLOCK_KILL_LEAD => TwoMinuteMode::ClockKill,
            d if d > 0 => TwoMinuteMode::Balanced,
            _ => TwoMinuteMode::Aggressive,
        }
    }

    pub fn is_end_of_half(state: &GameStateContext) -> bool {
        matches!(state.quarter, 2 | 4) && state.seconds_remaining <= TWO_MINUTE_SECONDS
    }

    /// End-of-half situation first, then the coordinator's preference
    pub fn select(preference: Tempo, state: &GameStateContext) -> Tempo {
        if Self::is_end_of_half(state) {
            if state.is_trailing() {
                return Tempo::HurryUp;
            }

            if state.score_differential >= BIG_MARGIN {
                return Tempo::Slow;
            }
        }

        preference
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::playcall::context::sample_context;

    #[test]
    fn test_two_minute_modes() {
        assert_eq!(TempoSelector::two_minute_mode(14), TwoMinuteMode::ClockKill);
        assert_eq!(TempoSelector::two_minute_mode(8), TwoMinuteMode::ClockKill);
        assert_eq!(TempoSelector::two_minute_mode(7), TwoMinuteMode::Balanced);
        assert_eq!(TempoSelector::two_minute_mode(3), TwoMinuteMode::Balanced);
        assert_eq!(TempoSelector::two_minute_mode(0), TwoMinuteMode::Aggressive);
        assert_eq!(TempoSelector::two_minute_mode(-7), TwoMinuteMode::Aggressive);
    }

    #[test]
    fn test_end_of_half_overrides_preference() {
        let trailing = sample_context(1, 10, 30, -4, 2, 90).to_game_state();
        let cruising = sample_context(1, 10, 30, 17, 4, 90).to_game_state();
        let close = sample_context(1, 10, 30, 3, 4, 90).to_game_state();

        assert_eq!(TempoSelector::select(Tempo::Slow, &trailing), Tempo::HurryUp);
        assert_eq!(TempoSelector::select(Tempo::HurryUp, &cruising), Tempo::Slow);
        assert_eq!(TempoSelector::select(Tempo::Normal, &close), Tempo::Normal);
    }

    #[test]
    fn test_preference_holds_outside_end_of_half() {
        let early = sample_context(1, 10, 30, -10, 3, 90).to_game_state();

        assert_eq!(TempoSelector::select(Tempo::Slow, &early), Tempo::Slow);
    }
}
