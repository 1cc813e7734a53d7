pub mod builder;
pub mod development;
pub mod player;
pub mod position;
pub mod skills;

pub use builder::*;
pub use development::*;
pub use player::*;
pub use position::*;
pub use skills::*;
