use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "ConfigHelper::default_output_dir")]
    pub directory: PathBuf,

    #[serde(default = "ConfigHelper::default_report_file_name")]
    pub file_name: String,

    #[serde(default = "ConfigHelper::default_write_assets")]
    pub write_assets: bool,
}

impl OutputConfig {
    pub fn report_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: ConfigHelper::default_output_dir(),
            file_name: ConfigHelper::default_report_file_name(),
            write_assets: ConfigHelper::default_write_assets(),
        }
    }
}
