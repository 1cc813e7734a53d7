pub mod random;
pub mod settings;

pub use random::*;
pub use settings::*;
