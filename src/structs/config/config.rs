use serde::{Deserialize, Serialize};
use crate::structs::config::input_config::InputConfig;
use crate::structs::config::output_config::OutputConfig;
use crate::structs::config::report_config::ReportConfig;
use crate::structs::config::server_config::ServerConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub inputs: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub report: ReportConfig,
}
