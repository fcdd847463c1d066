use std::path::PathBuf;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::{Commands, ReportArgs, ServerArgs};
use crate::errors::{AuditError, AuditResult};
use crate::services::publisher::Publisher;
use crate::services::report_generator::ReportGenerator;
use crate::structs::config::config::Config;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub const fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> AuditResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init { path } => self.init_command(path),
            Commands::Generate { report } => self.generate_command(&report).map(|_| ()),
            Commands::Serve { server, output_dir } => self.serve_command(&server, output_dir).await,
            Commands::Run { report, server } => self.run_report_command(&report, &server).await,
            Commands::Validate => self.validate_command(),
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(&self, path: Option<PathBuf>) -> AuditResult<()> {
        log::info!("🚀 Initializing audit-report configuration...");
        let target = path.or_else(|| self.config_path.clone());
        ConfigManager::create_sample_config(target.as_deref())?;
        log::info!("📝 Point the [inputs] section at your scanner output.");
        log::info!("🔧 Run 'audit-report validate' to check your configuration.");
        Ok(())
    }

    fn generate_command(&self, args: &ReportArgs) -> AuditResult<Config> {
        let mut config = self.load_config()?;
        Self::apply_report_args(&mut config, args);
        Self::ensure_valid(&config)?;

        log::info!("🔍 Generating report for {}...", config.report.organization);
        let report = ReportGenerator::new(&config).generate()?;

        log::info!(
            "📊 {} issues, {} passed checks",
            report.issue_count,
            report.passed_count
        );
        if !report.degraded_sections.is_empty() {
            log::warn!("⚠️ Sections left empty: {}", report.degraded_sections.join(", "));
        }

        Publisher::write_report(&config.output, &report.html)?;
        log::info!("✅ Report generated");
        Ok(config)
    }

    async fn serve_command(&self, args: &ServerArgs, output_dir: Option<PathBuf>) -> AuditResult<()> {
        let mut config = self.load_config()?;
        if let Some(directory) = output_dir {
            config.output.directory = directory;
        }
        Self::apply_server_args(&mut config, args);
        Self::ensure_valid(&config)?;

        Publisher::serve(&config.server, &config.output).await
    }

    async fn run_report_command(&self, report: &ReportArgs, server: &ServerArgs) -> AuditResult<()> {
        let mut config = self.generate_command(report)?;
        Self::apply_server_args(&mut config, server);
        Self::ensure_valid(&config)?;

        Publisher::serve(&config.server, &config.output).await
    }

    fn validate_command(&self) -> AuditResult<()> {
        log::info!("🔍 Validating audit-report configuration...");

        let config = self.load_config()?;
        Self::ensure_valid(&config)?;
        log::info!("✅ Configuration is valid");

        let missing = ConfigManager::missing_inputs(&config);
        if missing.is_empty() {
            log::info!("✅ All input artifacts are present");
            return Ok(());
        }

        for (key, path) in &missing {
            log::warn!("⚠️ {} not found: {}", key, path.display());
        }

        let mandatory_missing = missing
            .iter()
            .any(|(key, _)| matches!(*key, "inputs.issues" | "inputs.exec_status"));
        if mandatory_missing || config.report.strict {
            return Err(AuditError::config_error(
                "inputs",
                &format!("{} input artifact(s) missing", missing.len()),
                Some("Run the scanner first or fix the [inputs] paths"),
            ));
        }

        log::info!("💡 Missing optional inputs will leave their report sections empty");
        Ok(())
    }

    fn load_config(&self) -> AuditResult<Config> {
        ConfigManager::load(self.config_path.as_deref())
    }

    fn ensure_valid(config: &Config) -> AuditResult<()> {
        ConfigManager::validate_config(config).map_err(|errors| {
            for error in &errors {
                log::error!("❌ {}", error);
            }
            AuditError::config_error(
                "config",
                &format!("{} problem(s) found", errors.len()),
                Some("Fix the values above or run 'audit-report init' for a sample"),
            )
        })
    }

    fn apply_report_args(config: &mut Config, args: &ReportArgs) {
        if let Some(org) = &args.org {
            config.report.organization.clone_from(org);
        }
        if let Some(directory) = &args.output_dir {
            config.output.directory.clone_from(directory);
        }
        if args.strict {
            config.report.strict = true;
        }
    }

    fn apply_server_args(config: &mut Config, args: &ServerArgs) {
        if let Some(port) = args.port {
            config.server.port = port;
        }
        if args.open {
            config.server.open_browser = true;
        }
    }
}
