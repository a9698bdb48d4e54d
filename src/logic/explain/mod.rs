//! Explanation transformation
//!
//! Normalizes the three attribution mappings of an [`crate::models::ExplanationRecord`]
//! into chart-ready rows with a consistent sign-based color contract.

pub mod transform;
pub mod types;

pub use transform::{importance_rows, signed_rows};
pub use types::{Direction, ImportanceRow, SignedRow};
