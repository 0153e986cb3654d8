#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::too_many_arguments)]

// Core modules
pub mod app;
pub mod config;
pub mod reveal;
pub mod series;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (binary + integration tests)
pub use app::{App, Page};
pub use config::{AppConfig, ConfigError, PERSISTENCE};
pub use reveal::{CounterAnimator, CounterReveal, Reveal, RevealState, RevealTrigger, RevealValue};
pub use reveal::{TypewriterAnimator, TypewriterReveal};
pub use series::{Series, SeriesController, SeriesSummary, generate_series};

use std::path::{Path, PathBuf};

use anyhow::Context;
// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Page to open on, overriding the one remembered from last session
    #[arg(long, value_enum)]
    pub page: Option<Page>,

    /// Seed for the synthetic PnL series (reproducible charts)
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON file overriding dashboard figures and landing copy
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Built-in defaults, or the JSON override at `path`. Either way the result is validated.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::from_json_file(path)?,
        None => AppConfig::default(),
    };
    config
        .validate()
        .context("configuration failed validation")?;
    Ok(config)
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli, config: AppConfig) -> App {
    App::new(cc, args, config)
}
