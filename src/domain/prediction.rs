// ============================================================
// Layer 3 — Prediction Result and View State
// ============================================================
// The page only ever shows one of two things:
//
//   Idle        — the form, optionally with an error message
//   ResultShown — the form plus the last prediction
//
// Idle → ResultShown happens only when the pipeline succeeds.
// Every failure lands back in Idle with a readable message.

use serde::{Deserialize, Serialize};

use crate::domain::error::PipelineError;

pub const YIELD_UNIT:     &str = "Tonnes/Hectare";
pub const RESULT_HEADING: &str = "Prediction Result";
pub const METRIC_LABEL:   &str = "Predicted Crop Yield";
pub const ADVISORY_NOTE:  &str = "Note: This prediction is based on historical data and serves as an estimate. Actual yield can be affected by various real-world factors.";

/// A single predicted yield value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldPrediction {
    pub value: f64,
}

impl YieldPrediction {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Two-decimal value with the unit, e.g. "3.47 Tonnes/Hectare"
    pub fn display_value(&self) -> String {
        format!("{:.2} {}", self.value, YIELD_UNIT)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle { error: Option<String> },
    ResultShown(YieldPrediction),
}

impl ViewState {
    /// The state of a fresh page
    pub fn idle() -> Self {
        ViewState::Idle { error: None }
    }

    pub fn from_outcome(outcome: Result<YieldPrediction, PipelineError>) -> Self {
        match outcome {
            Ok(prediction) => ViewState::ResultShown(prediction),
            Err(e)         => ViewState::Idle { error: Some(e.to_string()) },
        }
    }

    pub fn prediction(&self) -> Option<&YieldPrediction> {
        match self {
            ViewState::ResultShown(p) => Some(p),
            ViewState::Idle { .. }    => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Idle { error } => error.as_deref(),
            ViewState::ResultShown(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_two_decimals_and_unit() {
        assert_eq!(YieldPrediction::new(3.14159).display_value(), "3.14 Tonnes/Hectare");
        assert_eq!(YieldPrediction::new(2.0).display_value(), "2.00 Tonnes/Hectare");
    }

    #[test]
    fn test_success_moves_to_result_shown() {
        let state = ViewState::from_outcome(Ok(YieldPrediction::new(1.5)));
        assert_eq!(state.prediction().map(|p| p.value), Some(1.5));
        assert!(state.error().is_none());
    }

    #[test]
    fn test_failure_stays_idle_with_message() {
        let state = ViewState::from_outcome(Err(PipelineError::NonFinite(f64::NAN)));
        assert!(state.prediction().is_none());
        assert!(state.error().unwrap().contains("non-finite"));
    }

    #[test]
    fn test_fresh_page_is_idle_without_error() {
        assert_eq!(ViewState::idle(), ViewState::Idle { error: None });
    }
}
