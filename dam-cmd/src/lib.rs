//! Command implementations for the dam dashboard CLI.
//!
//! Every subcommand runs against an injected [`Dashboard`] and writes its
//! report to any `Write`, so the binary only parses arguments and picks
//! stdout.

use clap::Subcommand;
use dam_core::config::{DashboardConfig, MAX_PROJECTION_DAYS};
use dam_core::data_source::DataSource;
use dam_core::Dashboard;
use log::info;
use std::io::Write;
use std::path::Path;

pub mod export;
pub mod inspect;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Write the dataset as CSV (the "Download Data" file)
    Export {
        /// Output path (defaults to the configured export filename)
        #[arg(short = 'o', long)]
        output: Option<String>,
    },

    /// Classify a volume in acre-feet
    Classify {
        /// Volume in acre-feet
        #[arg(allow_negative_numbers = true)]
        volume: f64,
    },

    /// Print the conservative and aggressive projections
    Project {
        /// Number of projected days, 1 to 366 (defaults to the configured value)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_PROJECTION_DAYS as i64))]
        days: Option<u32>,
    },

    /// Print the chart description as JSON
    Chart {
        /// Show the conservative projection
        #[arg(long)]
        conservative: bool,

        /// Show the aggressive projection
        #[arg(long)]
        aggressive: bool,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Resolve a URL path to the page it renders
    Route {
        path: String,
    },

    /// Print the current conditions shown on the home page
    Conditions,
}

/// Build the dashboard from optional config and data files, falling back to
/// the defaults and the embedded sample.
pub fn load_dashboard(config: Option<&Path>, data: Option<&Path>) -> anyhow::Result<Dashboard> {
    let config = match config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            DashboardConfig::from_path(path)
                .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))?
        }
        None => DashboardConfig::default(),
    };

    let data = match data {
        Some(path) => {
            info!("Loading dataset from {}", path.display());
            DataSource::from_path(path)
                .map_err(|e| anyhow::anyhow!("Failed to load dataset {}: {}", path.display(), e))?
        }
        None => DataSource::sample()?,
    };

    Ok(Dashboard::new(config, data)?)
}

pub fn run<W: Write>(command: Command, dashboard: &Dashboard, out: &mut W) -> anyhow::Result<()> {
    match command {
        Command::Export { output } => {
            let path = output.unwrap_or_else(|| dashboard.config().export_filename.clone());
            export::run_export(dashboard, Path::new(&path), out)
        }
        Command::Classify { volume } => inspect::run_classify(dashboard, volume, out),
        Command::Project { days } => {
            inspect::run_project(dashboard, days.map(|d| d as usize), out)
        }
        Command::Chart {
            conservative,
            aggressive,
            pretty,
        } => inspect::run_chart(dashboard, conservative, aggressive, pretty, out),
        Command::Route { path } => inspect::run_route(dashboard, &path, out),
        Command::Conditions => inspect::run_conditions(dashboard, out),
    }
}
