use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{DEFAULT_CONFIG_FILE_NAME, HOME_CONFIG_DIR, HOME_CONFIG_FILE_NAME};
use crate::errors::{AuditError, AuditResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# audit-report configuration

# Artifacts written by the security scanner
[inputs]
permissions = "output/metadata/permissions.json"
oauth_apps = "output/metadata/oauthApps.json"
issues = "output/issues/issues.json"
exec_status = "output/metadata/execStatus.json"
# JSON object mapping check identifiers to display names
# check_names = "output/metadata/checks.json"

# Where the report is written
[output]
directory = "static"
file_name = "index.html"
# Write the bundled stylesheet and icon next to the report (never overwrites)
write_assets = true

# Static file server for the output directory
[server]
host = "127.0.0.1"
port = 3000
open_browser = false

[report]
organization = "my-organization"
# Checks whose identifier starts with this prefix are statistics only
stats_prefix = "STATS"
# Abort instead of leaving the app or permission section empty when its input is broken
strict = false
"#;

pub struct ConfigManager;

impl ConfigManager {

    /// Load the first config found: the explicit path, `./audit-report.toml`,
    /// then `~/.audit-report/config.toml`. Falls back to defaults when none exists.
    pub fn load(explicit_path: Option<&Path>) -> AuditResult<Config> {
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(AuditError::config_error(
                    "--config",
                    &format!("config file {} does not exist", path.display()),
                    Some("Run 'audit-report init' to create one"),
                ));
            }
            return Self::load_from(path);
        }

        for candidate in Self::candidate_paths() {
            if candidate.exists() {
                return Self::load_from(&candidate);
            }
        }

        log::info!("📋 No config file found, using defaults");
        Ok(Config::default())
    }

    fn load_from(path: &Path) -> AuditResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| AuditError::file_open(path, &e))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_FILE_NAME)];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(HOME_CONFIG_DIR).join(HOME_CONFIG_FILE_NAME));
        }
        paths
    }

    /// Write the sample config. An existing file is never overwritten.
    pub fn create_sample_config(path: Option<&Path>) -> AuditResult<PathBuf> {
        let config_path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE_NAME), Path::to_path_buf);

        if config_path.exists() {
            return Err(AuditError::config_error(
                "config file",
                &format!("{} already exists", config_path.display()),
                Some("Remove it first or pass a different --path"),
            ));
        }

        if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| AuditError::output_write(parent, &e))?;
        }
        fs::write(&config_path, SAMPLE_CONFIG).map_err(|e| AuditError::output_write(&config_path, &e))?;
        log::info!("✅ Created sample config at: {}", config_path.display());
        Ok(config_path)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.server.port == 0 {
            errors.push("server.port must be between 1 and 65535".to_string());
        }

        if let Err(e) = config.server.socket_addr() {
            errors.push(e.to_string());
        }

        let file_name = config.output.file_name.as_str();
        if file_name.is_empty() || file_name.contains(['/', '\\']) || file_name == ".." {
            errors.push(format!("output.file_name must be a plain file name, got '{}'", file_name));
        }

        if config.report.stats_prefix.is_empty() {
            errors.push("report.stats_prefix must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Input artifacts that do not exist on disk, as (config key, path) pairs.
    pub fn missing_inputs(config: &Config) -> Vec<(&'static str, PathBuf)> {
        let inputs = &config.inputs;
        let mut required = vec![
            ("inputs.permissions", inputs.permissions.clone()),
            ("inputs.oauth_apps", inputs.oauth_apps.clone()),
            ("inputs.issues", inputs.issues.clone()),
            ("inputs.exec_status", inputs.exec_status.clone()),
        ];
        if let Some(check_names) = &inputs.check_names {
            required.push(("inputs.check_names", check_names.clone()));
        }

        required.into_iter().filter(|(_, path)| !path.exists()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_config_parses_and_validates() {
        let config: Config = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.report.organization, "my-organization");
        assert!(ConfigManager::validate_config(&config).is_ok());
    }

    #[test]
    fn partial_config_uses_defaults() {
        let config: Config = toml::from_str("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.report.stats_prefix, "STATS");
        assert_eq!(config.output.report_path(), PathBuf::from("static/index.html"));
    }

    #[test]
    fn rejects_bad_values() {
        let mut config = Config::default();
        config.server.port = 0;
        config.server.host = "localhost".to_string();
        config.output.file_name = "../index.html".to_string();
        config.report.stats_prefix = String::new();

        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let result = ConfigManager::load(Some(Path::new("/definitely/not/here.toml")));
        assert!(matches!(result, Err(AuditError::Configuration { .. })));
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/audit-report.toml");

        let written = ConfigManager::create_sample_config(Some(&path)).unwrap();
        assert_eq!(written, path);
        assert!(ConfigManager::load(Some(&path)).is_ok());
        assert!(ConfigManager::create_sample_config(Some(&path)).is_err());
    }
}
