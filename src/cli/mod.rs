// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap and hands off to Layer 2 (application).
//
// Three commands are supported:
//   1. `serve`   — loads artifacts once and serves the form
//   2. `predict` — one prediction from flags, printed to stdout
//   3. `options` — lists the dropdown values of the dataset
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, OptionsArgs, PredictArgs, ServeArgs};

use crate::application::app_context::{AppConfig, AppContext};
use crate::data::loader::ReferenceDatasetLoader;
use crate::domain::form::FormInput;
use crate::domain::prediction::{ADVISORY_NOTE, METRIC_LABEL};

#[derive(Parser, Debug)]
#[command(
    name = "crop-yield",
    version,
    about = "Predict crop yield from location, crop and environmental inputs."
)]
pub struct Cli {
    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Route to the matching handler. This layer never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve(args)   => Self::run_serve(args),
            Commands::Predict(args) => Self::run_predict(args),
            Commands::Options(args) => Self::run_options(args),
        }
    }

    /// Load everything once, then block on the HTTP server.
    fn run_serve(args: ServeArgs) -> Result<()> {
        let cfg: AppConfig = args.sources.into();
        // Artifact errors abort here, before the port is bound
        let ctx = AppContext::initialise(&cfg)?;

        let runtime = tokio::runtime::Runtime::new()
            .context("Cannot start async runtime")?;
        runtime.block_on(crate::server::app::start_server(ctx, args.addr))
    }

    fn run_predict(args: PredictArgs) -> Result<()> {
        let input          = FormInput::from(&args);
        let cfg: AppConfig = args.sources.into();
        let ctx            = AppContext::initialise(&cfg)?;

        if let Some(notice) = ctx.notice() {
            eprintln!("Warning: {notice}");
        }

        // Pipeline errors are readable as-is; surface them as the exit error
        let prediction = ctx.predict(input)?;

        println!("{METRIC_LABEL}: {}", prediction.display_value());
        println!("{ADVISORY_NOTE}");
        Ok(())
    }

    fn run_options(args: OptionsArgs) -> Result<()> {
        let load = ReferenceDatasetLoader::new(&args.dataset).load();
        if let Some(notice) = load.notice() {
            eprintln!("Warning: {notice}");
        }

        let options = load.form_options();
        for (label, values) in [
            ("States", &options.states),
            ("Districts", &options.districts),
            ("Seasons", &options.seasons),
            ("Crops", &options.crops),
        ] {
            println!("{label} ({}):", values.len());
            for value in values {
                println!("  {value}");
            }
        }
        Ok(())
    }
}
