// Shared data shapes
pub mod order;

pub use order::*;
