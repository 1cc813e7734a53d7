use crate::club::CoachRole;
use thiserror::Error;

/// Caller contract violations. Bad data coming from generators is rejected
/// with the boolean validators instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoachingError {
    #[error("true value {true_value} outside perceived range [{perceived_min}, {perceived_max}]")]
    TrueValueOutsideRange {
        true_value: f32,
        perceived_min: f32,
        perceived_max: f32,
    },

    #[error("skill value {value} outside [1, 100]")]
    SkillOutOfBounds { value: f32 },

    #[error("coach {coach_id} with role {role:?} cannot call {side} plays")]
    RoleCannotCallPlays {
        coach_id: u32,
        role: CoachRole,
        side: &'static str,
    },

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("coach {coach_id} cannot be paired with itself")]
    SelfPairing { coach_id: u32 },
}

pub type Result<T> = std::result::Result<T, CoachingError>;
