//! Prediction result model

use serde::{Deserialize, Serialize};

/// Response body of `POST /predict`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted class: 1 = disease present, 0 = absent
    pub prediction: u8,

    /// Probability of disease, in [0, 1]
    pub probability: f64,

    /// Coarse label the service attaches ("High" / "Medium" / "Low");
    /// informational only, the display derives everything from
    /// `prediction` and `probability`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
}

impl PredictionResult {
    pub fn is_positive(&self) -> bool {
        self.prediction == 1
    }

    /// Probability as a percentage, rounded to one decimal. The banner band
    /// is chosen from this rounded value, matching what the user is shown.
    pub fn risk_percent(&self) -> f64 {
        (self.probability * 100.0 * 10.0).round() / 10.0
    }

    pub fn risk_percent_display(&self) -> String {
        format!("{:.1}", self.risk_percent())
    }

    /// Severity band for the progress indicator. Four fixed thresholds.
    pub fn band_color(&self) -> &'static str {
        let risk = self.risk_percent();
        if risk > 75.0 {
            "#f5222d" // High risk (red)
        } else if risk > 50.0 {
            "#fa8c16" // Moderate risk (orange)
        } else if risk > 25.0 {
            "#faad14" // Low risk (yellow)
        } else {
            "#52c41a" // Minimal risk (green)
        }
    }

    pub fn banner_title(&self) -> &'static str {
        if self.is_positive() {
            "Heart Disease Risk Detected"
        } else {
            "Low Heart Disease Risk"
        }
    }

    pub fn banner_description(&self) -> &'static str {
        if self.is_positive() {
            "Our model has detected potential heart disease risk factors that require attention."
        } else {
            "Based on the provided information, you appear to have a lower risk of heart disease."
        }
    }

    /// CSS class of the banner: warning for a positive prediction
    pub fn banner_kind(&self) -> &'static str {
        if self.is_positive() {
            "warning"
        } else {
            "success"
        }
    }
}
