pub mod context;
pub mod defense;
pub mod fourth_down;
pub mod offense;
pub mod tempo;
pub mod weather;

pub use context::*;
pub use defense::*;
pub use fourth_down::*;
pub use offense::*;
pub use tempo::*;
pub use weather::*;
