use audit_report::logger;
use audit_report::structs::cli::Cli;
use audit_report::workers::command_runner::CommandRunner;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init();
    let cli = Cli::parse();
    CommandRunner::new(cli.config).run_command(cli.command).await?;
    Ok(())
}
