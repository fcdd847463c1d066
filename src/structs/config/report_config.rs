use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReportConfig {
    #[serde(default = "ConfigHelper::default_organization")]
    pub organization: String,

    /// Check identifiers starting with this prefix only feed statistics and are never listed.
    #[serde(default = "ConfigHelper::default_stats_prefix")]
    pub stats_prefix: String,

    /// Abort when an optional section cannot be built instead of leaving it empty.
    #[serde(default)]
    pub strict: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            organization: ConfigHelper::default_organization(),
            stats_prefix: ConfigHelper::default_stats_prefix(),
            strict: false,
        }
    }
}
