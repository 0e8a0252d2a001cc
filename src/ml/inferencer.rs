// ============================================================
// Layer 5 — Inferencer
// ============================================================
use anyhow::Result;
use burn::prelude::*;
use burn::tensor::TensorData;

use crate::domain::error::PipelineError;
use crate::infra::artifact_store::ArtifactStore;
use crate::ml::model::YieldRegressor;

pub type InferBackend = burn::backend::NdArray<f32>;
type InferDevice      = burn::backend::ndarray::NdArrayDevice;

const STAGE: &str = "Model";

pub struct Inferencer {
    model:      YieldRegressor<InferBackend>,
    input_size: usize,
    device:     InferDevice,
}

impl Inferencer {
    pub fn from_artifacts(store: &ArtifactStore) -> Result<Self> {
        let device = InferDevice::default();
        let cfg    = store.load_model_config()?;
        let model: YieldRegressor<InferBackend> = cfg.init(&device);
        let model  = store.load_model(model, &device)?;
        tracing::info!(
            "Model loaded ({} inputs, hidden layers {:?})",
            cfg.input_size, cfg.hidden_sizes
        );
        Ok(Self { model, input_size: cfg.input_size, device })
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Run the model on one scaled row and return its single output.
    pub fn predict(&self, features: &[f64]) -> Result<f64, PipelineError> {
        if features.len() != self.input_size {
            return Err(PipelineError::ShapeMismatch {
                stage:    STAGE,
                expected: self.input_size,
                actual:   features.len(),
            });
        }

        let values: Vec<f32> = features.iter().map(|&x| x as f32).collect();
        let input = Tensor::<InferBackend, 2>::from_data(
            TensorData::new(values, [1, self.input_size]),
            &self.device,
        );

        let output: Vec<f32> = self.model
            .forward(input)
            .into_data()
            .to_vec::<f32>()
            .map_err(|e| PipelineError::Inference(format!("{e:?}")))?;

        let value = output
            .first()
            .copied()
            .ok_or_else(|| PipelineError::Inference("model produced no output".into()))?
            as f64;

        tracing::debug!("Model output: {:.4}", value);

        if !value.is_finite() {
            return Err(PipelineError::NonFinite(value));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::write_artifacts;

    #[test]
    fn test_single_finite_output() {
        let dir   = tempfile::tempdir().unwrap();
        write_artifacts(dir.path()).unwrap();
        let store = ArtifactStore::new(dir.path());

        let inferencer = Inferencer::from_artifacts(&store).unwrap();
        let value = inferencer.predict(&[0.5; 10]).unwrap();
        assert!(value.is_finite());
    }

    #[test]
    fn test_same_input_same_output() {
        let dir   = tempfile::tempdir().unwrap();
        write_artifacts(dir.path()).unwrap();
        let inferencer = Inferencer::from_artifacts(&ArtifactStore::new(dir.path())).unwrap();

        let a = inferencer.predict(&[0.1, -0.2, 0.3, 0.0, 1.0, 0.5, -1.0, 2.0, 0.0, 0.7]).unwrap();
        let b = inferencer.predict(&[0.1, -0.2, 0.3, 0.0, 1.0, 0.5, -1.0, 2.0, 0.0, 0.7]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_wrong_width_is_shape_mismatch() {
        let dir   = tempfile::tempdir().unwrap();
        write_artifacts(dir.path()).unwrap();
        let inferencer = Inferencer::from_artifacts(&ArtifactStore::new(dir.path())).unwrap();

        let err = inferencer.predict(&[0.0; 7]).unwrap_err();
        assert_eq!(err, PipelineError::ShapeMismatch { stage: "Model", expected: 10, actual: 7 });
    }
}
