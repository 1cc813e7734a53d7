use crate::club::{Coach, FourthDownAggressiveness};
use crate::error::Result;
use crate::r#match::playcall::{GameStateContext, OffensivePlayCaller, PlayCallContext};
use log::debug;
use serde::Serialize;

const SHORT_YARDAGE: u8 = 2;
const MIDFIELD: u8 = 50;
const PLUS_TERRITORY: u8 = 50;
// A field goal no longer keeps pace when trailing by more than this
const FIELD_GOAL_MARGIN: i32 = 3;
const COMFORTABLE_KICK_MARGIN: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FourthDownCall {
    GoForIt,
    FieldGoal,
    Punt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FourthDownDecision {
    pub call: FourthDownCall,
    pub confidence: Confidence,
    pub rationale: String,
}

impl FourthDownDecision {
    fn new(call: FourthDownCall, confidence: Confidence, rationale: &str) -> Self {
        FourthDownDecision {
            call,
            confidence,
            rationale: rationale.to_string(),
        }
    }
}

pub struct FourthDownDecider;

impl FourthDownDecider {
    /// `kicker_range` is the longest field goal the kicker is trusted with
    pub fn decide(state: &GameStateContext, kicker_range: u8, aggressiveness: FourthDownAggressiveness) -> FourthDownDecision {
        let decision = Self::branch(state, kicker_range, aggressiveness);

        debug!(
            "fourth and {} at {}: {:?} ({:?})",
            state.distance, state.field_position, decision.call, decision.confidence
        );

        decision
    }

    /// Uses the staff's resolved aggressiveness
    pub fn decide_for_staff(
        coordinator: Option<&Coach>,
        head_coach: Option<&Coach>,
        context: &PlayCallContext,
        kicker_range: u8,
    ) -> Result<FourthDownDecision> {
        let (tendencies, _) = OffensivePlayCaller::resolve_tendencies(coordinator, head_coach)?;
        Ok(Self::decide(&context.to_game_state(), kicker_range, tendencies.fourth_down))
    }

    fn branch(state: &GameStateContext, kicker_range: u8, aggressiveness: FourthDownAggressiveness) -> FourthDownDecision {
        let aggressive = aggressiveness == FourthDownAggressiveness::Aggressive;
        let conservative = aggressiveness == FourthDownAggressiveness::Conservative;
        let trailing_late = state.is_late() && state.is_trailing();
        let needs_touchdown = state.is_late() && state.score_differential < -FIELD_GOAL_MARGIN;
        let kick_distance = state.field_goal_distance();
        let in_range = kick_distance <= kicker_range;

        if state.distance <= SHORT_YARDAGE {
            if aggressive {
                let confidence = if state.distance == 1 { Confidence::High } else { Confidence::Medium };
                return FourthDownDecision::new(FourthDownCall::GoForIt, confidence, "Short yardage and an aggressive play caller");
            }

            if state.field_position > PLUS_TERRITORY && !conservative {
                return FourthDownDecision::new(
                    FourthDownCall::GoForIt,
                    Confidence::Medium,
                    "Short yardage in plus territory is worth keeping the drive alive",
                );
            }

            if trailing_late {
                return FourthDownDecision::new(FourthDownCall::GoForIt, Confidence::Medium, "Short yardage with time running out");
            }
        }

        if in_range {
            if needs_touchdown {
                return FourthDownDecision::new(
                    FourthDownCall::GoForIt,
                    Confidence::Medium,
                    "A field goal does not help when a touchdown is needed late",
                );
            }

            let confidence = if kick_distance + COMFORTABLE_KICK_MARGIN <= kicker_range {
                Confidence::High
            } else {
                Confidence::Medium
            };

            return FourthDownDecision::new(FourthDownCall::FieldGoal, confidence, "Taking the points within the kicker's range");
        }

        if state.field_position >= MIDFIELD {
            if aggressive && state.distance <= 4 {
                return FourthDownDecision::new(
                    FourthDownCall::GoForIt,
                    Confidence::Medium,
                    "Aggressive play caller past midfield and out of field goal range",
                );
            }

            if trailing_late {
                return FourthDownDecision::new(FourthDownCall::GoForIt, Confidence::Low, "Trailing late, the drive has to continue");
            }

            return FourthDownDecision::new(FourthDownCall::Punt, Confidence::Medium, "Pinning the opponent deep from midfield");
        }

        if trailing_late {
            return FourthDownDecision::new(
                FourthDownCall::GoForIt,
                Confidence::Low,
                "Trailing late, there may not be another possession",
            );
        }

        FourthDownDecision::new(FourthDownCall::Punt, Confidence::High, "Punting from our own territory")
    }
}
