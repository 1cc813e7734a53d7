pub mod attributes;
pub mod builder;
pub mod contract;
pub mod role;
pub mod staff;
pub mod tendencies;
pub mod tree;

pub use attributes::*;
pub use builder::*;
pub use contract::*;
pub use role::*;
pub use staff::*;
pub use tendencies::*;
pub use tree::*;
