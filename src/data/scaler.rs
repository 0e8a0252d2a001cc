// ============================================================
// Layer 4 — Feature Scaler
// ============================================================
// Normalises the full ten-column feature row with statistics
// learned at training time. Two fitted kinds are supported:
//
//   standard:  x' = (x - mean) / scale
//   min_max:   x' = (x - data_min) / (data_max - data_min)
//                   * (hi - lo) + lo          with feature_range = [lo, hi]
//
// Artifact format (scaler.json):
//
//   {
//     "kind": "standard",
//     "feature_names": ["State", "District", "Year", ...],
//     "mean":  [ ... ],
//     "scale": [ ... ]
//   }
//
// `feature_names` is optional. When present, the incoming row must
// carry exactly those names in exactly that order; when absent,
// only the count is checked. A zero scale (constant feature at
// training time) divides by 1.0 instead.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::domain::error::PipelineError;
use crate::domain::record::FeatureRow;

const STAGE: &str = "Scaler";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeatureScaler {
    Standard {
        #[serde(default)]
        feature_names: Option<Vec<String>>,
        mean:  Vec<f64>,
        scale: Vec<f64>,
    },
    MinMax {
        #[serde(default)]
        feature_names: Option<Vec<String>>,
        data_min: Vec<f64>,
        data_max: Vec<f64>,
        #[serde(default = "unit_range")]
        feature_range: [f64; 2],
    },
}

fn unit_range() -> [f64; 2] {
    [0.0, 1.0]
}

impl FeatureScaler {
    /// Number of features the scaler was fitted on
    pub fn n_features(&self) -> usize {
        match self {
            FeatureScaler::Standard { mean, .. }   => mean.len(),
            FeatureScaler::MinMax { data_min, .. } => data_min.len(),
        }
    }

    pub fn feature_names(&self) -> Option<&[String]> {
        match self {
            FeatureScaler::Standard { feature_names, .. }
            | FeatureScaler::MinMax { feature_names, .. } => feature_names.as_deref(),
        }
    }

    /// Reject artifacts whose statistics disagree in length.
    pub fn validate(&self) -> Result<()> {
        let n = self.n_features();
        if n == 0 {
            bail!("scaler artifact was fitted on zero features");
        }

        let other = match self {
            FeatureScaler::Standard { scale, .. }     => scale.len(),
            FeatureScaler::MinMax { data_max, .. }    => data_max.len(),
        };
        if other != n {
            bail!("scaler artifact statistics disagree in length ({n} vs {other})");
        }

        if let Some(names) = self.feature_names() {
            if names.len() != n {
                bail!(
                    "scaler artifact names {} features but carries statistics for {n}",
                    names.len()
                );
            }
        }
        Ok(())
    }

    /// Scale one row, checking its shape against the fitted one first.
    pub fn transform(&self, row: &FeatureRow) -> Result<Vec<f64>, PipelineError> {
        self.check_shape(row)?;

        let scaled = match self {
            FeatureScaler::Standard { mean, scale, .. } => row
                .values
                .iter()
                .zip(mean.iter().zip(scale))
                .map(|(x, (m, s))| (x - m) / non_zero(*s))
                .collect(),

            FeatureScaler::MinMax { data_min, data_max, feature_range, .. } => {
                let [lo, hi] = *feature_range;
                row.values
                    .iter()
                    .zip(data_min.iter().zip(data_max))
                    .map(|(x, (min, max))| (x - min) / non_zero(max - min) * (hi - lo) + lo)
                    .collect()
            }
        };

        Ok(scaled)
    }

    fn check_shape(&self, row: &FeatureRow) -> Result<(), PipelineError> {
        let expected = self.n_features();
        let actual   = row.values.len();
        if actual != expected || row.columns.len() != actual {
            return Err(PipelineError::ShapeMismatch {
                stage: STAGE,
                expected,
                actual,
            });
        }

        if let Some(names) = self.feature_names() {
            for (position, (expected, actual)) in names.iter().zip(&row.columns).enumerate() {
                if expected != actual {
                    return Err(PipelineError::ColumnMismatch {
                        stage:    STAGE,
                        position,
                        expected: expected.clone(),
                        actual:   actual.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

fn non_zero(divisor: f64) -> f64 {
    if divisor == 0.0 { 1.0 } else { divisor }
}
