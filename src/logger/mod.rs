use env_logger::Env;
use crate::config::constants::DEFAULT_LOG_FILTER;

/// Initialise `env_logger`; `RUST_LOG` overrides the default `info` filter.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
