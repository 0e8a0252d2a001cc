// ============================================================
// Layer 3 — Pipeline Errors
// ============================================================
// Errors that can happen while answering a single prediction
// request. They are recoverable: the caller shows the message
// and the form returns to Idle.
//
// Startup failures (missing or corrupt artifacts) are NOT here —
// they are fatal and travel as anyhow::Error instead.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// A categorical value the encoder never saw during fitting
    #[error("Unknown {column} '{value}': this value was not seen when the encoder was fitted")]
    UnseenCategory { column: String, value: String },

    /// Column names or order differ from what a fitted artifact expects
    #[error("{stage} expects column '{expected}' at position {position}, got '{actual}'")]
    ColumnMismatch {
        stage:    &'static str,
        position: usize,
        expected: String,
        actual:   String,
    },

    /// Column count differs from what a fitted artifact expects
    #[error("{stage} expects {expected} features, got {actual}")]
    ShapeMismatch {
        stage:    &'static str,
        expected: usize,
        actual:   usize,
    },

    /// The model runtime itself failed
    #[error("Model inference failed: {0}")]
    Inference(String),

    /// The model produced NaN or infinity
    #[error("Model returned a non-finite prediction ({0})")]
    NonFinite(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unseen_category_message_names_the_value() {
        let err = PipelineError::UnseenCategory {
            column: "District".into(),
            value:  "Atlantis".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("District"));
        assert!(msg.contains("Atlantis"));
    }

    #[test]
    fn test_shape_mismatch_message() {
        let err = PipelineError::ShapeMismatch { stage: "Scaler", expected: 10, actual: 9 };
        assert_eq!(err.to_string(), "Scaler expects 10 features, got 9");
    }
}
