pub mod issue_view;
pub mod oauth_app_view;
pub mod passed_check;
pub mod permission_matrix;
pub mod report_page;
