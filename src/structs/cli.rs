use clap::Parser;
use std::path::PathBuf;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "audit-report")]
#[clap(about = "Render and serve the HTML report for a security audit", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
