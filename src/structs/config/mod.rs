pub mod config;
pub mod input_config;
pub mod output_config;
pub mod report_config;
pub mod server_config;
