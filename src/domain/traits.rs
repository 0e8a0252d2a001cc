// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The presentation layer talks to these traits, not to the
// concrete loader or pipeline, so a page can be rendered and
// tested without real artifacts on disk.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Trait Objects)

use crate::domain::error::PipelineError;
use crate::domain::form::{FormInput, FormOptions};
use crate::domain::prediction::YieldPrediction;

// ─── OptionSource ─────────────────────────────────────────────────────────────
/// Anything that can supply the dropdown option lists.
///
/// Implementations:
///   - ReferenceDataset → distinct values of a historical CSV
pub trait OptionSource {
    fn form_options(&self) -> FormOptions;
}

// ─── YieldPredictor ───────────────────────────────────────────────────────────
/// Anything that turns one form submission into a yield prediction.
///
/// Implementations:
///   - PredictUseCase → encoder + scaler + burn regression model
pub trait YieldPredictor {
    fn predict(&self, input: &FormInput) -> Result<YieldPrediction, PipelineError>;
}
