use std::path::PathBuf;

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_permissions_path() -> PathBuf {
        PathBuf::from("output/metadata/permissions.json")
    }

    pub fn default_oauth_apps_path() -> PathBuf {
        PathBuf::from("output/metadata/oauthApps.json")
    }

    pub fn default_issues_path() -> PathBuf {
        PathBuf::from("output/issues/issues.json")
    }

    pub fn default_exec_status_path() -> PathBuf {
        PathBuf::from("output/metadata/execStatus.json")
    }

    pub fn default_output_dir() -> PathBuf {
        PathBuf::from("static")
    }

    pub fn default_report_file_name() -> String {
        "index.html".to_string()
    }

    pub const fn default_write_assets() -> bool {
        true
    }

    pub fn default_host() -> String {
        "127.0.0.1".to_string()
    }

    pub const fn default_port() -> u16 {
        3000
    }

    pub fn default_organization() -> String {
        "organization".to_string()
    }

    pub fn default_stats_prefix() -> String {
        "STATS".to_string()
    }
}
