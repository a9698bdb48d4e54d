//! Explanation record model
//!
//! Union of the three attribution mappings returned by `POST /explain`.
//! Each mapping goes from feature name to a numeric weight. Key order is
//! the wire order (serde_json is built with `preserve_order`), which keeps
//! equal-magnitude rows deterministic within a render pass.

use serde::{Deserialize, Serialize};

/// Feature name -> weight, in source insertion order. Values are kept as
/// raw JSON numbers and converted at the transform boundary, where a
/// non-numeric weight is rejected as a contract violation.
pub type FeatureMap = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExplanationRecord {
    /// Signed per-feature contribution to this specific prediction
    #[serde(default)]
    pub shap_values: FeatureMap,

    /// Unsigned dataset-level importance per feature
    #[serde(default)]
    pub feature_importance: FeatureMap,

    /// Signed weights of the locally fit surrogate model
    #[serde(default)]
    pub lime_explanation: FeatureMap,
}

impl ExplanationRecord {
    pub fn is_empty(&self) -> bool {
        self.shap_values.is_empty()
            && self.feature_importance.is_empty()
            && self.lime_explanation.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_wire_key_order() {
        let record: ExplanationRecord = serde_json::from_str(
            r#"{"shap_values": {"thalach": -0.2, "age": 0.5, "chol": 0.1}}"#,
        )
        .unwrap();

        let keys: Vec<&str> = record.shap_values.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["thalach", "age", "chol"]);
    }

    #[test]
    fn missing_mappings_default_to_empty() {
        let record: ExplanationRecord =
            serde_json::from_str(r#"{"shap_values": {"age": 0.5}}"#).unwrap();
        assert!(record.feature_importance.is_empty());
        assert!(record.lime_explanation.is_empty());
        assert!(!record.is_empty());
    }

    #[test]
    fn unknown_top_level_keys_are_ignored() {
        // the service echoes prediction metadata on /explain responses
        let record: ExplanationRecord = serde_json::from_str(
            r#"{"prediction": 1, "probability": 0.82, "shap_values": {"age": 0.5}}"#,
        )
        .unwrap();
        assert_eq!(record.shap_values.len(), 1);
    }

    #[test]
    fn empty_record_reports_empty() {
        assert!(ExplanationRecord::default().is_empty());
    }
}
