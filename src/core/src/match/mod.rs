pub mod playcall;

pub use playcall::*;
