//! Patient record model
//!
//! The 13 clinical fields of the UCI heart disease feature set. The same
//! declarations drive the rendered form, the native HTML constraints, and
//! the server-side validation backstop.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// One complete patient submission. Immutable once built; a new record is
/// created for every submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PatientRecord {
    /// Age in years
    #[validate(range(min = 1, max = 120))]
    pub age: i64,

    /// Sex (1 = male, 0 = female)
    #[validate(range(min = 0, max = 1))]
    pub sex: i64,

    /// Chest pain type (0-3)
    #[validate(range(min = 0, max = 3))]
    pub cp: i64,

    /// Resting blood pressure (mm Hg)
    #[validate(range(min = 80, max = 220))]
    pub trestbps: i64,

    /// Serum cholesterol (mg/dl)
    #[validate(range(min = 100, max = 600))]
    pub chol: i64,

    /// Fasting blood sugar > 120 mg/dl (1 = true, 0 = false)
    #[validate(range(min = 0, max = 1))]
    pub fbs: i64,

    /// Resting ECG results (0-2)
    #[validate(range(min = 0, max = 2))]
    pub restecg: i64,

    /// Maximum heart rate achieved
    #[validate(range(min = 60, max = 220))]
    pub thalach: i64,

    /// Exercise induced angina (1 = yes, 0 = no)
    #[validate(range(min = 0, max = 1))]
    pub exang: i64,

    /// ST depression induced by exercise
    #[validate(range(min = 0.0, max = 10.0))]
    pub oldpeak: f64,

    /// Slope of the peak exercise ST segment (0-2)
    #[validate(range(min = 0, max = 2))]
    pub slope: i64,

    /// Number of major vessels colored by fluoroscopy (0-3)
    #[validate(range(min = 0, max = 3))]
    pub ca: i64,

    /// Thalassemia (0 = normal, 1 = fixed defect, 2 = reversible defect)
    #[validate(range(min = 0, max = 2))]
    pub thal: i64,
}

/// A single option of a categorical field
#[derive(Debug, Clone, Serialize)]
pub struct FieldOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Declarative form field: one entry per patient record field, in form order
#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    /// "number" or "select"
    pub input: &'static str,
    pub min: Option<&'static str>,
    pub max: Option<&'static str>,
    pub step: Option<&'static str>,
    pub options: Vec<FieldOption>,
}

fn number(
    name: &'static str,
    label: &'static str,
    min: &'static str,
    max: &'static str,
    step: Option<&'static str>,
) -> FieldSpec {
    FieldSpec {
        name,
        label,
        input: "number",
        min: Some(min),
        max: Some(max),
        step,
        options: Vec::new(),
    }
}

fn select(name: &'static str, label: &'static str, options: &[(&'static str, &'static str)]) -> FieldSpec {
    FieldSpec {
        name,
        label,
        input: "select",
        min: None,
        max: None,
        step: None,
        options: options
            .iter()
            .map(|&(value, label)| FieldOption { value, label })
            .collect(),
    }
}

/// The 13 declared form fields. The first option of a select is its default
/// selection value.
pub fn form_fields() -> Vec<FieldSpec> {
    vec![
        number("age", "Age", "1", "120", None),
        select("sex", "Sex", &[("1", "Male"), ("0", "Female")]),
        select(
            "cp",
            "Chest Pain Type",
            &[
                ("0", "Typical Angina"),
                ("1", "Atypical Angina"),
                ("2", "Non-anginal Pain"),
                ("3", "Asymptomatic"),
            ],
        ),
        number("trestbps", "Resting Blood Pressure (mm Hg)", "80", "220", None),
        number("chol", "Serum Cholesterol (mg/dl)", "100", "600", None),
        select("fbs", "Fasting Blood Sugar > 120 mg/dl", &[("0", "No"), ("1", "Yes")]),
        select(
            "restecg",
            "Resting ECG Results",
            &[
                ("0", "Normal"),
                ("1", "ST-T Wave Abnormality"),
                ("2", "Left Ventricular Hypertrophy"),
            ],
        ),
        number("thalach", "Maximum Heart Rate", "60", "220", None),
        select("exang", "Exercise Induced Angina", &[("0", "No"), ("1", "Yes")]),
        number("oldpeak", "ST Depression Induced by Exercise", "0", "10", Some("0.1")),
        select(
            "slope",
            "Slope of Peak Exercise ST Segment",
            &[("0", "Upsloping"), ("1", "Flat"), ("2", "Downsloping")],
        ),
        select(
            "ca",
            "Number of Major Vessels Colored by Fluoroscopy",
            &[("0", "0"), ("1", "1"), ("2", "2"), ("3", "3")],
        ),
        select(
            "thal",
            "Thalassemia",
            &[("0", "Normal"), ("1", "Fixed Defect"), ("2", "Reversible Defect")],
        ),
    ]
}

/// A complete valid record for tests across the crate
#[cfg(test)]
pub fn sample_record() -> PatientRecord {
    PatientRecord {
        age: 45,
        sex: 1,
        cp: 0,
        trestbps: 130,
        chol: 230,
        fbs: 0,
        restecg: 0,
        thalach: 150,
        exang: 0,
        oldpeak: 1.2,
        slope: 0,
        ca: 0,
        thal: 0,
    }
}
