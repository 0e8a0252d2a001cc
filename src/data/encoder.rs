// ============================================================
// Layer 4 — Ordinal Encoder
// ============================================================
// Maps the categorical columns (State, District, Season, Crop)
// to numeric codes using the vocabulary fixed at training time.
//
// Artifact format (encoder.json):
//
//   {
//     "columns":    ["State", "District", "Season", "Crop"],
//     "categories": [["Haryana", "Punjab"], [...], [...], [...]],
//     "handle_unknown": "error"
//   }
//
// The code of a value is its index in the category list of its
// column. `handle_unknown` is either "error" (the default) or
// { "use_encoded_value": <code> } to map unseen values to a
// fixed sentinel code instead.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::error::PipelineError;

const STAGE: &str = "Encoder";

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownCategory {
    #[default]
    Error,
    UseEncodedValue(f64),
}

/// On-disk shape of the encoder artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderSpec {
    pub columns:    Vec<String>,
    pub categories: Vec<Vec<String>>,
    #[serde(default)]
    pub handle_unknown: UnknownCategory,
}

/// A fitted encoder with per-column lookup tables.
#[derive(Debug, Clone)]
pub struct OrdinalEncoder {
    columns:        Vec<String>,
    lookups:        Vec<HashMap<String, usize>>,
    handle_unknown: UnknownCategory,
}

impl OrdinalEncoder {
    /// Build lookup tables from the artifact, rejecting inconsistent specs.
    pub fn from_spec(spec: EncoderSpec) -> Result<Self> {
        if spec.columns.is_empty() {
            bail!("encoder artifact declares no columns");
        }
        if spec.columns.len() != spec.categories.len() {
            bail!(
                "encoder artifact has {} columns but {} category lists",
                spec.columns.len(),
                spec.categories.len()
            );
        }

        let lookups = spec
            .categories
            .iter()
            .map(|cats| {
                cats.iter()
                    .enumerate()
                    .map(|(code, value)| (value.clone(), code))
                    .collect()
            })
            .collect();

        Ok(Self {
            columns: spec.columns,
            lookups,
            handle_unknown: spec.handle_unknown,
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Encode one row. `columns` names the incoming values and must
    /// match the fitted column set exactly, in the same order.
    pub fn transform(&self, columns: &[&str], values: &[&str]) -> Result<Vec<f64>, PipelineError> {
        if columns.len() != self.columns.len() || values.len() != columns.len() {
            return Err(PipelineError::ShapeMismatch {
                stage:    STAGE,
                expected: self.columns.len(),
                actual:   values.len().min(columns.len()),
            });
        }

        for (position, (expected, actual)) in self.columns.iter().zip(columns).enumerate() {
            if expected != actual {
                return Err(PipelineError::ColumnMismatch {
                    stage:    STAGE,
                    position,
                    expected: expected.clone(),
                    actual:   actual.to_string(),
                });
            }
        }

        self.columns
            .iter()
            .zip(&self.lookups)
            .zip(values)
            .map(|((column, lookup), value)| match lookup.get(*value) {
                Some(code) => Ok(*code as f64),
                None => match self.handle_unknown {
                    UnknownCategory::UseEncodedValue(code) => Ok(code),
                    UnknownCategory::Error => Err(PipelineError::UnseenCategory {
                        column: column.clone(),
                        value:  value.to_string(),
                    }),
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::CATEGORICAL_COLUMNS;

    fn spec() -> EncoderSpec {
        EncoderSpec {
            columns:    CATEGORICAL_COLUMNS.iter().map(|c| c.to_string()).collect(),
            categories: vec![
                vec!["Haryana".into(), "Punjab".into()],
                vec!["Amritsar".into(), "Karnal".into(), "Ludhiana".into()],
                vec!["Kharif".into(), "Rabi".into()],
                vec!["Rice".into(), "Wheat".into()],
            ],
            handle_unknown: UnknownCategory::Error,
        }
    }

    #[test]
    fn test_codes_are_category_indices() {
        let enc   = OrdinalEncoder::from_spec(spec()).unwrap();
        let codes = enc
            .transform(&CATEGORICAL_COLUMNS, &["Punjab", "Ludhiana", "Rabi", "Rice"])
            .unwrap();
        assert_eq!(codes, vec![1.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_unseen_district_is_an_error() {
        let enc = OrdinalEncoder::from_spec(spec()).unwrap();
        let err = enc
            .transform(&CATEGORICAL_COLUMNS, &["Punjab", "Atlantis", "Rabi", "Rice"])
            .unwrap_err();
        assert_eq!(
            err,
            PipelineError::UnseenCategory { column: "District".into(), value: "Atlantis".into() }
        );
    }

    #[test]
    fn test_unseen_value_uses_sentinel_when_configured() {
        let enc = OrdinalEncoder::from_spec(EncoderSpec {
            handle_unknown: UnknownCategory::UseEncodedValue(-1.0),
            ..spec()
        })
        .unwrap();
        let codes = enc
            .transform(&CATEGORICAL_COLUMNS, &["Goa", "Ludhiana", "Rabi", "Rice"])
            .unwrap();
        assert_eq!(codes[0], -1.0);
    }

    #[test]
    fn test_reordered_columns_are_rejected() {
        let enc = OrdinalEncoder::from_spec(spec()).unwrap();
        let err = enc
            .transform(&["District", "State", "Season", "Crop"], &["Ludhiana", "Punjab", "Rabi", "Rice"])
            .unwrap_err();
        assert!(matches!(err, PipelineError::ColumnMismatch { position: 0, .. }));
    }

    #[test]
    fn test_wrong_column_count_is_shape_mismatch() {
        let enc = OrdinalEncoder::from_spec(spec()).unwrap();
        let err = enc.transform(&["State"], &["Punjab"]).unwrap_err();
        assert!(matches!(err, PipelineError::ShapeMismatch { expected: 4, actual: 1, .. }));
    }

    #[test]
    fn test_handle_unknown_parses_from_json() {
        let json = r#"{"columns":["State"],"categories":[["Punjab"]],"handle_unknown":{"use_encoded_value":-1.0}}"#;
        let spec: EncoderSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.handle_unknown, UnknownCategory::UseEncodedValue(-1.0));

        let json = r#"{"columns":["State"],"categories":[["Punjab"]]}"#;
        let spec: EncoderSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.handle_unknown, UnknownCategory::Error);
    }

    #[test]
    fn test_mismatched_category_lists_rejected() {
        let bad = EncoderSpec { categories: vec![vec!["Punjab".into()]], ..spec() };
        assert!(OrdinalEncoder::from_spec(bad).is_err());
    }
}
