pub const DEFAULT_CONFIG_FILE_NAME: &str = "audit-report.toml";
pub const HOME_CONFIG_DIR: &str = ".audit-report";
pub const HOME_CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_LOG_FILTER: &str = "info";
pub const SERVER_LOG_TARGET: &str = "audit_report::server";

pub const CWE_DEFINITION_URL: &str = "https://cwe.mitre.org/data/definitions";

pub const STYLESHEET_FILE_NAME: &str = "report.css";
pub const FAVICON_FILE_NAME: &str = "favicon.svg";
