//! dam-cli - Command line tool for the dam monitoring dashboard data.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "dam-cli",
    version,
    about = "Dam monitoring dashboard toolkit"
)]
struct Cli {
    /// JSON configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// CSV dataset with Time, Volume (acre-ft), Dam Name columns
    /// (defaults to the embedded Glenn Canyon sample)
    #[arg(short = 'd', long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: dam_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let dashboard = dam_cmd::load_dashboard(cli.config.as_deref(), cli.data.as_deref())?;
    log::debug!("{:?}", dashboard);
    let stdout = std::io::stdout();
    dam_cmd::run(cli.command, &dashboard, &mut stdout.lock())
}
