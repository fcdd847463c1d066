use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

/// Locations of the scanner artifacts the report is built from.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct InputConfig {
    #[serde(default = "ConfigHelper::default_permissions_path")]
    pub permissions: PathBuf,

    #[serde(default = "ConfigHelper::default_oauth_apps_path")]
    pub oauth_apps: PathBuf,

    #[serde(default = "ConfigHelper::default_issues_path")]
    pub issues: PathBuf,

    #[serde(default = "ConfigHelper::default_exec_status_path")]
    pub exec_status: PathBuf,

    /// Optional JSON object mapping check identifiers to display names.
    #[serde(default)]
    pub check_names: Option<PathBuf>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            permissions: ConfigHelper::default_permissions_path(),
            oauth_apps: ConfigHelper::default_oauth_apps_path(),
            issues: ConfigHelper::default_issues_path(),
            exec_status: ConfigHelper::default_exec_status_path(),
            check_names: None,
        }
    }
}
