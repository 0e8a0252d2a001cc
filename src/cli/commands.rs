// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `serve`, `predict`, `options`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → f64, SocketAddr, PathBuf, ...)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::{net::SocketAddr, path::PathBuf};

use crate::application::app_context::AppConfig;
use crate::domain::form::{
    FormInput, AREA_DEFAULT, FERTILIZER_DEFAULT, PESTICIDE_DEFAULT, PH_DEFAULT, RAINFALL_DEFAULT,
};

const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";
const DEFAULT_DATASET:       &str = "data/After_EDA_crop_data.csv";

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the prediction form over HTTP
    Serve(ServeArgs),

    /// Predict the yield for one set of inputs and print it
    Predict(PredictArgs),

    /// Print the dropdown options found in the reference dataset
    Options(OptionsArgs),
}

/// Where the artifacts and the reference dataset live.
/// Shared by `serve` and `predict`.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Directory holding model_config.json, model.mpk,
    /// encoder.json and scaler.json
    #[arg(long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: PathBuf,

    /// CSV with at least State, District, Season, Crop columns
    #[arg(long, default_value = DEFAULT_DATASET)]
    pub dataset: PathBuf,
}

impl From<SourceArgs> for AppConfig {
    fn from(a: SourceArgs) -> Self {
        AppConfig {
            artifacts_dir: a.artifacts_dir,
            dataset_path:  a.dataset,
        }
    }
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8501")]
    pub addr: SocketAddr,
}

#[derive(Args, Debug)]
pub struct PredictArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    #[arg(long)]
    pub state: String,

    #[arg(long)]
    pub district: String,

    /// e.g. Kharif, Rabi
    #[arg(long)]
    pub season: String,

    #[arg(long)]
    pub crop: String,

    /// Cultivated area in hectares (minimum 1.0)
    #[arg(long, default_value_t = AREA_DEFAULT)]
    pub area: f64,

    /// Annual rainfall in mm
    #[arg(long, default_value_t = RAINFALL_DEFAULT)]
    pub rainfall: f64,

    /// Fertilizer usage in kg
    #[arg(long, default_value_t = FERTILIZER_DEFAULT)]
    pub fertilizer: f64,

    /// Pesticide usage in kg
    #[arg(long, default_value_t = PESTICIDE_DEFAULT)]
    pub pesticide: f64,

    /// Soil pH, clamped to 4.0–9.0
    #[arg(long, default_value_t = PH_DEFAULT)]
    pub ph: f64,
}

/// Convert CLI PredictArgs into the domain FormInput.
/// The application layer never sees clap types.
impl From<&PredictArgs> for FormInput {
    fn from(a: &PredictArgs) -> Self {
        FormInput {
            state:      a.state.clone(),
            district:   a.district.clone(),
            season:     a.season.clone(),
            crop:       a.crop.clone(),
            area:       a.area,
            rainfall:   a.rainfall,
            fertilizer: a.fertilizer,
            pesticide:  a.pesticide,
            ph:         a.ph,
        }
    }
}

#[derive(Args, Debug)]
pub struct OptionsArgs {
    #[arg(long, default_value = DEFAULT_DATASET)]
    pub dataset: PathBuf,
}
