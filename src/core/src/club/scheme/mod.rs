mod catalog;
pub mod fit;
pub mod scheme;

pub use fit::*;
pub use scheme::*;
