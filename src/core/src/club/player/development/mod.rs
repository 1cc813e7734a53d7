pub mod breakout;
pub mod midseason;
pub mod offseason;
pub mod result;

pub use breakout::*;
pub use midseason::*;
pub use offseason::*;
pub use result::*;
