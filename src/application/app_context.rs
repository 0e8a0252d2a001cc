// ============================================================
// Layer 2 — Application Context
// ============================================================
// Everything that is expensive to build and read-only afterwards,
// constructed once at process start:
//
//   - the prediction pipeline (model, encoder, scaler)
//   - the dropdown options from the reference dataset
//   - the dataset notice, if the dataset could not be read
//
// Each request handler receives a shared reference to this
// context instead of reloading anything.
//
// Artifact problems are fatal here; a missing dataset is not.

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::application::predict_use_case::PredictUseCase;
use crate::data::loader::ReferenceDatasetLoader;
use crate::domain::error::PipelineError;
use crate::domain::form::{FormInput, FormOptions};
use crate::domain::prediction::YieldPrediction;
use crate::domain::traits::YieldPredictor;
use crate::infra::artifact_store::ArtifactStore;

// ─── Application Configuration ───────────────────────────────────────────────
/// Where the artifacts and the reference dataset live. Built from
/// the CLI flags, which carry the defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub artifacts_dir: PathBuf,
    pub dataset_path:  PathBuf,
}

// ─── AppContext ──────────────────────────────────────────────────────────────
pub struct AppContext {
    /// Locked so that predictions run one after another
    predictor: Mutex<Box<dyn YieldPredictor + Send>>,
    options:   FormOptions,
    notice:    Option<String>,
}

impl AppContext {
    /// Load artifacts (fatal on failure), then the reference dataset
    /// (degrades to empty options on failure).
    pub fn initialise(cfg: &AppConfig) -> Result<Self> {
        tracing::info!("Loading artifacts from '{}'", cfg.artifacts_dir.display());
        let predictor = PredictUseCase::new(&ArtifactStore::new(&cfg.artifacts_dir))?;

        let dataset = ReferenceDatasetLoader::new(&cfg.dataset_path).load();
        let options = dataset.form_options();
        tracing::info!(
            "Form options: {} states, {} districts, {} seasons, {} crops",
            options.states.len(),
            options.districts.len(),
            options.seasons.len(),
            options.crops.len(),
        );

        Ok(Self::with_predictor(
            Box::new(predictor),
            options,
            dataset.notice().map(str::to_string),
        ))
    }

    /// Assemble a context from parts that are already loaded.
    pub fn with_predictor(
        predictor: Box<dyn YieldPredictor + Send>,
        options:   FormOptions,
        notice:    Option<String>,
    ) -> Self {
        Self { predictor: Mutex::new(predictor), options, notice }
    }

    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    /// Warning to show when the reference dataset is unavailable
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dataset_loaded(&self) -> bool {
        self.notice.is_none()
    }

    /// Clamp the submission to the control bounds, then predict.
    pub fn predict(&self, input: FormInput) -> Result<YieldPrediction, PipelineError> {
        let input = input.clamped();
        // The predictor holds no mutable state, so a poisoned lock is still usable
        let predictor = self.predictor.lock().unwrap_or_else(|p| p.into_inner());
        predictor.predict(&input)
    }
}
