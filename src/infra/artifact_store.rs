// ============================================================
// Layer 6 — Artifact Store
// ============================================================
// Loads the pre-built artifacts produced by the external
// training pipeline. Nothing here ever writes to disk.
//
// Directory layout:
//   artifacts/
//     model_config.json   ← regressor architecture
//     model.mpk           ← regressor weights (CompactRecorder)
//     encoder.json        ← fitted ordinal encoder
//     scaler.json         ← fitted feature scaler
//
// Every file is required. `verify_present()` checks them all
// before anything is parsed so a missing artifact fails fast
// with a message naming the file, and nothing runs half-loaded.
//
// Burn's CompactRecorder:
//   - named MessagePack, half precision, no compression
//   - loading fails if the architecture in model_config.json
//     does not match the stored weights
//
// Reference: Burn Book §5 (Records and Checkpointing)
//            Rust Book §9 (Error Handling)

use anyhow::{bail, Context, Result};
use burn::{
    prelude::*,
    record::{CompactRecorder, Recorder},
};
use serde::de::DeserializeOwned;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::data::encoder::{EncoderSpec, OrdinalEncoder};
use crate::data::scaler::FeatureScaler;
use crate::ml::model::{YieldRegressor, YieldRegressorConfig};

pub const MODEL_CONFIG_FILE: &str = "model_config.json";
/// Stem passed to the recorder, which appends `.mpk` itself
pub const MODEL_WEIGHTS_STEM: &str = "model";
pub const MODEL_WEIGHTS_FILE: &str = "model.mpk";
pub const ENCODER_FILE:       &str = "encoder.json";
pub const SCALER_FILE:        &str = "scaler.json";

const REQUIRED_FILES: [&str; 4] = [
    MODEL_CONFIG_FILE,
    MODEL_WEIGHTS_FILE,
    ENCODER_FILE,
    SCALER_FILE,
];

/// Read-only access to one artifact directory.
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Fail on the first required artifact that is not on disk.
    pub fn verify_present(&self) -> Result<()> {
        for name in REQUIRED_FILES {
            let path = self.dir.join(name);
            if !path.is_file() {
                bail!(
                    "Model files not found: '{}' is missing. \
                     Please run the training script first.",
                    path.display()
                );
            }
        }
        tracing::debug!("All artifacts present in '{}'", self.dir.display());
        Ok(())
    }

    pub fn load_encoder(&self) -> Result<OrdinalEncoder> {
        let spec: EncoderSpec = self.read_json(ENCODER_FILE)?;
        let encoder = OrdinalEncoder::from_spec(spec)
            .with_context(|| format!("Invalid encoder artifact in '{}'", self.dir.display()))?;
        tracing::info!("Encoder loaded ({} columns)", encoder.columns().len());
        Ok(encoder)
    }

    pub fn load_scaler(&self) -> Result<FeatureScaler> {
        let scaler: FeatureScaler = self.read_json(SCALER_FILE)?;
        scaler
            .validate()
            .with_context(|| format!("Invalid scaler artifact in '{}'", self.dir.display()))?;
        tracing::info!("Scaler loaded ({} features)", scaler.n_features());
        Ok(scaler)
    }

    pub fn load_model_config(&self) -> Result<YieldRegressorConfig> {
        let cfg: YieldRegressorConfig = self.read_json(MODEL_CONFIG_FILE)?;
        if cfg.input_size == 0 {
            bail!("model config in '{}' declares zero inputs", self.dir.display());
        }
        Ok(cfg)
    }

    /// Load weights into a freshly initialised model. The model must
    /// have been built from `load_model_config()` for shapes to line up.
    pub fn load_model<B: Backend>(
        &self,
        model:  YieldRegressor<B>,
        device: &B::Device,
    ) -> Result<YieldRegressor<B>> {
        let path = self.dir.join(MODEL_WEIGHTS_STEM);

        let record = CompactRecorder::new()
            .load(path.clone(), device)
            .with_context(|| {
                format!(
                    "Cannot load model weights '{}.mpk'. \
                     Does model_config.json match the trained model?",
                    path.display()
                )
            })?;

        Ok(model.load_record(record))
    }

    fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let path = self.dir.join(name);
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read '{}'", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Cannot parse '{}'", path.display()))
    }
}
