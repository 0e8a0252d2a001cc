mod cli;
mod application;
mod domain;
mod data;
mod ml;
mod infra;
mod server;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use cli::Cli;
use clap::Parser;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("crop_yield=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
