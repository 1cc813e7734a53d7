pub mod person;
pub mod player;
pub mod relations;
pub mod scheme;
pub mod staff;

pub use person::*;
pub use player::*;
pub use scheme::*;
pub use staff::*;

pub use relations::{
    ChemistryBreakdown, ChemistryEvent, ChemistryHistory, ChemistryLevel, CoachPairChemistry, HirePreview,
    NotableRelationship, PersonalityInteraction, PlayerCoachChemistry, StaffChemistryAggregator,
    StaffChemistryReport, StaffHarmonyView, StaffImpact, StaffMember,
};
