//! Chart row types

use serde::Serialize;

/// Fill color of risk-increasing bars, shared by every signed chart
pub const RISK_COLOR: &str = "#ff4d4f";

/// Fill color of risk-decreasing bars, shared by every signed chart
pub const PROTECTIVE_COLOR: &str = "#52c41a";

/// Fill color of the unsigned global-importance chart
pub const IMPORTANCE_COLOR: &str = "#1890ff";

/// Which way a signed contribution pushes the prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    #[serde(rename = "Increases Risk")]
    IncreasesRisk,
    #[serde(rename = "Decreases Risk")]
    DecreasesRisk,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::IncreasesRisk => "Increases Risk",
            Direction::DecreasesRisk => "Decreases Risk",
        }
    }

    /// Color is a pure function of sign. The same color means the same
    /// thing in every chart the user sees.
    pub fn fill_color(self) -> &'static str {
        match self {
            Direction::IncreasesRisk => RISK_COLOR,
            Direction::DecreasesRisk => PROTECTIVE_COLOR,
        }
    }
}

/// One row of a signed chart (attribution-by-feature, local surrogate)
#[derive(Debug, Clone, Serialize)]
pub struct SignedRow {
    pub feature: String,
    /// Raw signed contribution, exactly as supplied
    pub value: f64,
    /// `|value|`; drives bar length and sort order
    pub magnitude: f64,
    pub direction: Direction,
}

/// One row of the unsigned global-importance chart
#[derive(Debug, Clone, Serialize)]
pub struct ImportanceRow {
    pub feature: String,
    pub importance: f64,
}
