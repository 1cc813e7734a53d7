pub mod chemistry;
pub mod coaches;
pub mod harmony;
pub mod personality;

pub use chemistry::*;
pub use coaches::*;
pub use harmony::*;
pub use personality::{PersonalityInteraction, compatibility, disposition_match, interaction};
