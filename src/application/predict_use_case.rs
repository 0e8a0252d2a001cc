// ============================================================
// Layer 2 — PredictUseCase
// ============================================================
// The inference pipeline, run once per explicit user action:
//
//   Step 1: Build the Input Record       (Layer 3 - domain)
//   Step 2: Encode categorical columns   (Layer 4 - data)
//   Step 3: Scale the full feature row   (Layer 4 - data)
//   Step 4: Predict with the model       (Layer 5 - ml)
//
// Artifacts are loaded once in `new()`; `predict()` only reads
// them, so the same inputs always give the same prediction.

use anyhow::{Context, Result};

use crate::data::{encoder::OrdinalEncoder, scaler::FeatureScaler};
use crate::domain::error::PipelineError;
use crate::domain::form::FormInput;
use crate::domain::prediction::YieldPrediction;
use crate::domain::record::{InputRecord, CATEGORICAL_COLUMNS};
use crate::domain::traits::YieldPredictor;
use crate::infra::artifact_store::ArtifactStore;
use crate::ml::inferencer::Inferencer;

pub struct PredictUseCase {
    encoder:    OrdinalEncoder,
    scaler:     FeatureScaler,
    inferencer: Inferencer,
}

impl PredictUseCase {
    /// Load all three artifacts, failing on the first problem.
    pub fn new(store: &ArtifactStore) -> Result<Self> {
        store.verify_present()?;

        let encoder    = store.load_encoder()?;
        let scaler     = store.load_scaler()?;
        let inferencer = Inferencer::from_artifacts(store)
            .with_context(|| format!("Cannot load model from '{}'", store.dir().display()))?;

        if scaler.n_features() != inferencer.input_size() {
            // Not fatal: every prediction will report the mismatch instead
            tracing::warn!(
                "Scaler was fitted on {} features but the model expects {}",
                scaler.n_features(),
                inferencer.input_size()
            );
        }

        Ok(Self { encoder, scaler, inferencer })
    }
}

impl YieldPredictor for PredictUseCase {
    fn predict(&self, input: &FormInput) -> Result<YieldPrediction, PipelineError> {
        // ── Step 1: single-row record with the placeholder year ──────────────
        let record = InputRecord::from_form(input);

        // ── Step 2: categorical columns → fitted codes ────────────────────────
        let codes = self.encoder.transform(&CATEGORICAL_COLUMNS, &record.categorical_values())?;
        let codes: [f64; 4] = codes.try_into().map_err(|v: Vec<f64>| {
            PipelineError::ShapeMismatch {
                stage:    "Encoder",
                expected: CATEGORICAL_COLUMNS.len(),
                actual:   v.len(),
            }
        })?;
        let row = record.to_feature_row(codes);

        // ── Step 3: scale all ten features in training order ──────────────────
        let scaled = self.scaler.transform(&row)?;

        // ── Step 4: model output for the one row ──────────────────────────────
        let value = self.inferencer.predict(&scaled)?;
        tracing::debug!("Pipeline complete for {}/{}", record.state, record.crop);

        Ok(YieldPrediction::new(value))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::artifact_store::{MODEL_WEIGHTS_FILE, SCALER_FILE};
    use crate::test_support::{punjab_rice, write_artifacts};
    use std::fs;

    fn use_case(dir: &std::path::Path) -> PredictUseCase {
        write_artifacts(dir).unwrap();
        PredictUseCase::new(&ArtifactStore::new(dir)).unwrap()
    }

    #[test]
    fn test_end_to_end_prediction_is_finite() {
        let dir        = tempfile::tempdir().unwrap();
        let prediction = use_case(dir.path()).predict(&punjab_rice()).unwrap();

        assert!(prediction.value.is_finite());
        let shown = prediction.display_value();
        assert!(shown.ends_with(" Tonnes/Hectare"));
        assert_eq!(shown, format!("{:.2} Tonnes/Hectare", prediction.value));
    }

    #[test]
    fn test_identical_inputs_identical_predictions() {
        let dir = tempfile::tempdir().unwrap();
        let uc  = use_case(dir.path());

        let first  = uc.predict(&punjab_rice()).unwrap();
        let second = uc.predict(&punjab_rice()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unseen_district_surfaces_error() {
        let dir   = tempfile::tempdir().unwrap();
        let input = FormInput { district: "Atlantis".into(), ..punjab_rice() };

        let err = use_case(dir.path()).predict(&input).unwrap_err();
        assert!(matches!(err, PipelineError::UnseenCategory { ref column, .. } if column == "District"));
    }

    #[test]
    fn test_empty_dropdown_value_is_unseen() {
        let dir   = tempfile::tempdir().unwrap();
        let input = FormInput { crop: String::new(), ..punjab_rice() };

        let err = use_case(dir.path()).predict(&input).unwrap_err();
        assert!(matches!(err, PipelineError::UnseenCategory { .. }));
    }

    #[test]
    fn test_scaler_fitted_on_other_columns_is_shape_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        write_artifacts(dir.path()).unwrap();
        let narrow = FeatureScaler::Standard {
            feature_names: None,
            mean:  vec![0.0; 9],
            scale: vec![1.0; 9],
        };
        fs::write(dir.path().join(SCALER_FILE), serde_json::to_string(&narrow).unwrap()).unwrap();

        let uc  = PredictUseCase::new(&ArtifactStore::new(dir.path())).unwrap();
        let err = uc.predict(&punjab_rice()).unwrap_err();
        assert!(matches!(err, PipelineError::ShapeMismatch { stage: "Scaler", .. }));
    }

    #[test]
    fn test_missing_model_never_builds() {
        let dir = tempfile::tempdir().unwrap();
        write_artifacts(dir.path()).unwrap();
        fs::remove_file(dir.path().join(MODEL_WEIGHTS_FILE)).unwrap();

        let err = PredictUseCase::new(&ArtifactStore::new(dir.path())).err().unwrap();
        assert!(err.to_string().contains("Please run the training script first"));
    }
}
