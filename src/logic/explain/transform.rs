//! Mapping -> chart row transformation
//!
//! Input order is the mapping's insertion order; the sorts below are stable,
//! so equal magnitudes keep that order and re-renders of the same record are
//! deterministic.

use std::cmp::Ordering;

use crate::models::explanation::FeatureMap;

use super::types::{Direction, ImportanceRow, SignedRow};

/// A weight that is not a number. Upstream owes us numeric payloads; this is
/// a contract violation, not something to repair here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("non-numeric weight for feature `{feature}`")]
pub struct MalformedEntry {
    pub feature: String,
}

/// Rows for a signed mapping, sorted by descending magnitude
pub fn signed_rows(map: &FeatureMap) -> Result<Vec<SignedRow>, MalformedEntry> {
    let mut rows = Vec::with_capacity(map.len());
    for (feature, raw) in map {
        let value = numeric(feature, raw)?;
        let direction = if value >= 0.0 {
            Direction::IncreasesRisk
        } else {
            Direction::DecreasesRisk
        };
        rows.push(SignedRow {
            feature: feature.clone(),
            value,
            magnitude: value.abs(),
            direction,
        });
    }
    rows.sort_by(|a, b| descending(a.magnitude, b.magnitude));
    Ok(rows)
}

/// Rows for the unsigned mapping, sorted by descending importance
pub fn importance_rows(map: &FeatureMap) -> Result<Vec<ImportanceRow>, MalformedEntry> {
    let mut rows = Vec::with_capacity(map.len());
    for (feature, raw) in map {
        rows.push(ImportanceRow {
            feature: feature.clone(),
            importance: numeric(feature, raw)?,
        });
    }
    rows.sort_by(|a, b| descending(a.importance, b.importance));
    Ok(rows)
}

fn numeric(feature: &str, raw: &serde_json::Value) -> Result<f64, MalformedEntry> {
    raw.as_f64().ok_or_else(|| MalformedEntry {
        feature: feature.to_string(),
    })
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(entries: &[(&str, serde_json::Value)]) -> FeatureMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn signed_rows_sort_by_descending_magnitude() {
        let map = map(&[
            ("age", json!(0.1)),
            ("chol", json!(-0.5)),
            ("thalach", json!(0.3)),
        ]);

        let rows = signed_rows(&map).unwrap();
        let features: Vec<&str> = rows.iter().map(|r| r.feature.as_str()).collect();
        assert_eq!(features, vec!["chol", "thalach", "age"]);
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn equal_magnitudes_keep_insertion_order() {
        let map = map(&[
            ("trestbps", json!(0.2)),
            ("oldpeak", json!(-0.2)),
            ("ca", json!(0.2)),
            ("fbs", json!(0.9)),
        ]);

        let rows = signed_rows(&map).unwrap();
        let features: Vec<&str> = rows.iter().map(|r| r.feature.as_str()).collect();
        // fbs wins outright; the 0.2-magnitude tie stays in source order
        assert_eq!(features, vec!["fbs", "trestbps", "oldpeak", "ca"]);
    }

    #[test]
    fn direction_splits_on_sign_with_zero_increasing() {
        let map = map(&[("a", json!(0.0)), ("b", json!(-0.0001)), ("c", json!(1.5))]);

        let rows = signed_rows(&map).unwrap();
        let by_name = |name: &str| rows.iter().find(|r| r.feature == name).unwrap();
        assert_eq!(by_name("a").direction, Direction::IncreasesRisk);
        assert_eq!(by_name("b").direction, Direction::DecreasesRisk);
        assert_eq!(by_name("c").direction, Direction::IncreasesRisk);
    }

    #[test]
    fn magnitude_is_absolute_value() {
        let map = map(&[("chol", json!(-0.75))]);
        let rows = signed_rows(&map).unwrap();
        assert_eq!(rows[0].value, -0.75);
        assert_eq!(rows[0].magnitude, 0.75);
    }

    #[test]
    fn color_contract_is_pure_in_sign() {
        assert_eq!(Direction::IncreasesRisk.fill_color(), super::super::types::RISK_COLOR);
        assert_eq!(
            Direction::DecreasesRisk.fill_color(),
            super::super::types::PROTECTIVE_COLOR
        );
    }

    #[test]
    fn importance_rows_sort_by_value() {
        let map = map(&[
            ("age", json!(0.05)),
            ("cp", json!(0.30)),
            ("thal", json!(0.12)),
        ]);

        let rows = importance_rows(&map).unwrap();
        let features: Vec<&str> = rows.iter().map(|r| r.feature.as_str()).collect();
        assert_eq!(features, vec!["cp", "thal", "age"]);
    }

    #[test]
    fn empty_mapping_yields_no_rows() {
        assert!(signed_rows(&FeatureMap::new()).unwrap().is_empty());
        assert!(importance_rows(&FeatureMap::new()).unwrap().is_empty());
    }

    #[test]
    fn non_numeric_weight_is_rejected() {
        let map = map(&[("age", json!(0.3)), ("sex", json!("high"))]);

        let err = signed_rows(&map).unwrap_err();
        assert_eq!(err.feature, "sex");

        let err = importance_rows(&map).unwrap_err();
        assert_eq!(err.feature, "sex");
    }

    #[test]
    fn unknown_feature_keys_are_tolerated() {
        // keys outside the patient field set still chart; the renderer
        // must not crash on them
        let map = map(&[("not_a_field", json!(0.4))]);
        let rows = signed_rows(&map).unwrap();
        assert_eq!(rows[0].feature, "not_a_field");
    }
}
