//! Builds a static HTML report from security-audit scan artifacts and serves it.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod templates;
pub mod ui;
pub mod workers;
