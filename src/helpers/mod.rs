pub mod config_helper;
pub mod link_normalizer;
pub mod serde_helper;
