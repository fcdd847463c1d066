pub mod check_outcome;
pub mod commands;
pub mod oauth_app_state;
pub mod severity;
