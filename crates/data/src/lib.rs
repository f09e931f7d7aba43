//! Loading and validation for match configuration and rosters.

pub mod load;

pub use load::*;
