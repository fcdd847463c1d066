use serde::Serialize;
use crate::structs::view::issue_view::IssueView;
use crate::structs::view::passed_check::PassedCheck;

/// Everything the outer report template needs.
#[derive(Debug, Clone, Serialize)]
pub struct ReportPage {
    pub organization: String,
    pub generated_at: String,
    pub issues: Vec<IssueView>,
    pub passed_checks: Vec<PassedCheck>,
    /// Rendered OAuth app section, empty when it could not be built.
    pub app_section: String,
    /// Rendered permission table, empty when it could not be built.
    pub permission_section: String,
}
