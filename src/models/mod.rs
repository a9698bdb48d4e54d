//! Data models

pub mod explanation;
pub mod patient;
pub mod prediction;

pub use explanation::*;
pub use patient::*;
pub use prediction::*;
