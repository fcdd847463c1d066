use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init {
        #[clap(short, long)]
        path: Option<PathBuf>,
    },
    /// Build the report and write it to the output directory
    Generate {
        #[clap(flatten)]
        report: ReportArgs,
    },
    /// Serve an already generated output directory
    Serve {
        #[clap(flatten)]
        server: ServerArgs,
        #[clap(long)]
        output_dir: Option<PathBuf>,
    },
    /// Generate the report, then serve it
    Run {
        #[clap(flatten)]
        report: ReportArgs,
        #[clap(flatten)]
        server: ServerArgs,
    },
    /// Check the configuration and the presence of every input artifact
    Validate,
}

#[derive(Args, Default)]
pub struct ReportArgs {
    /// Organization name shown in the report title
    #[clap(long)]
    pub org: Option<String>,
    #[clap(long)]
    pub output_dir: Option<PathBuf>,
    /// Abort instead of blanking a section whose input is missing
    #[clap(long)]
    pub strict: bool,
}

#[derive(Args, Default)]
pub struct ServerArgs {
    #[clap(short, long)]
    pub port: Option<u16>,
    /// Open the report in the default browser once the server is up
    #[clap(long)]
    pub open: bool,
}
