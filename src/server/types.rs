//! Request and response bodies for the JSON endpoints

use serde::{Deserialize, Serialize};

use crate::domain::prediction::{YieldPrediction, YIELD_UNIT};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub prediction: f64,
    pub unit:       String,
    /// Presenter format, e.g. "3.47 Tonnes/Hectare"
    pub display:    String,
}

impl From<YieldPrediction> for PredictResponse {
    fn from(p: YieldPrediction) -> Self {
        Self {
            prediction: p.value,
            unit:       YIELD_UNIT.to_string(),
            display:    p.display_value(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status:         String,
    pub version:        String,
    pub dataset_loaded: bool,
    pub states:         usize,
    pub districts:      usize,
    pub seasons:        usize,
    pub crops:          usize,
}
