// ============================================================
// Test fixtures
// ============================================================
// Writes a small but complete artifact directory and reference
// CSV so tests can exercise the real loading and inference path.
// The model weights are freshly initialised, not trained: tests
// check shapes, determinism and error handling, never accuracy.

use anyhow::Result;
use burn::{
    module::Module,
    record::{CompactRecorder, Recorder},
};
use std::{fs, path::Path, path::PathBuf};

use crate::data::encoder::{EncoderSpec, UnknownCategory};
use crate::data::scaler::FeatureScaler;
use crate::domain::form::FormInput;
use crate::domain::record::{CATEGORICAL_COLUMNS, FEATURE_COLUMNS};
use crate::infra::artifact_store::{
    ENCODER_FILE, MODEL_CONFIG_FILE, MODEL_WEIGHTS_STEM, SCALER_FILE,
};
use crate::ml::inferencer::InferBackend;
use crate::ml::model::YieldRegressorConfig;

pub const REFERENCE_CSV: &str = "\
State,District,Year,Season,Crop,Area_Hectare,Rainfall_mm,Fertilizer_kg,Pesticide_kg,pH,Yield
Punjab,Ludhiana,2018,Kharif,Rice,120.0,950.0,4800.0,900.0,6.8,4.1
Haryana,Karnal,2018,Rabi,Wheat,80.0,600.0,3000.0,500.0,7.2,3.9
Punjab,Amritsar,2019,Rabi,Wheat,95.5,640.0,3500.0,650.0,7.0,4.0
Punjab,Ludhiana,2019,Kharif,Rice,130.0,1010.0,5200.0,1100.0,6.5,4.3
";

pub fn encoder_spec() -> EncoderSpec {
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

pub fn scaler() -> FeatureScaler {
    FeatureScaler::Standard {
        feature_names: Some(FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect()),
        mean:  vec![0.5, 1.0, 2019.0, 0.5, 0.5, 100.0, 800.0, 4000.0, 800.0, 6.8],
        scale: vec![0.5, 1.0, 1.0, 0.5, 0.5, 25.0, 200.0, 1000.0, 250.0, 0.4],
    }
}

/// Write encoder, scaler, model config and model weights into `dir`.
pub fn write_artifacts(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;

    fs::write(dir.join(ENCODER_FILE), serde_json::to_string_pretty(&encoder_spec())?)?;
    fs::write(dir.join(SCALER_FILE), serde_json::to_string_pretty(&scaler())?)?;

    let cfg = YieldRegressorConfig::new(FEATURE_COLUMNS.len(), vec![8, 4]);
    fs::write(dir.join(MODEL_CONFIG_FILE), serde_json::to_string_pretty(&cfg)?)?;

    let device = Default::default();
    let model  = cfg.init::<InferBackend>(&device);
    CompactRecorder::new().record(model.into_record(), dir.join(MODEL_WEIGHTS_STEM))?;
    Ok(())
}

/// Write the reference CSV and return its path.
pub fn write_reference_csv(dir: &Path) -> Result<PathBuf> {
    let path = dir.join("crop_data.csv");
    fs::write(&path, REFERENCE_CSV)?;
    Ok(path)
}

/// The end-to-end example inputs
pub fn punjab_rice() -> FormInput {
    FormInput {
        state:      "Punjab".into(),
        district:   "Ludhiana".into(),
        season:     "Kharif".into(),
        crop:       "Rice".into(),
        area:       100.0,
        rainfall:   1000.0,
        fertilizer: 5000.0,
        pesticide:  1000.0,
        ph:         6.5,
    }
}
