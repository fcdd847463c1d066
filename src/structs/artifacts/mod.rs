pub mod check_catalog;
pub mod execution_status;
pub mod issue;
pub mod oauth_app;
pub mod permission_summary;
