use serde::Serialize;

/// An issue decorated for display. The `*_html` fields are already escaped markup.
#[derive(Debug, Clone, Serialize)]
pub struct IssueView {
    pub id: String,
    pub name: String,
    pub severity_html: String,
    pub description_html: String,
    pub remediation_html: String,
    pub cwes_html: String,
    pub resources: Vec<String>,
}
