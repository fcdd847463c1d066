use std::collections::{BTreeSet, HashSet};
use minijinja::HtmlEscape;
use crate::config::constants::CWE_DEFINITION_URL;
use crate::enums::check_outcome::CheckOutcome;
use crate::enums::oauth_app_state::OAuthAppState;
use crate::enums::severity::Severity;
use crate::helpers::link_normalizer::render_rich_text;
use crate::structs::artifacts::check_catalog::CheckCatalog;
use crate::structs::artifacts::execution_status::ExecutionStatus;
use crate::structs::artifacts::issue::Issue;
use crate::structs::artifacts::oauth_app::OAuthApp;
use crate::structs::artifacts::permission_summary::PermissionSummary;
use crate::structs::view::issue_view::IssueView;
use crate::structs::view::oauth_app_view::OAuthAppView;
use crate::structs::view::passed_check::PassedCheck;
use crate::structs::view::permission_matrix::{PermissionMatrix, PermissionRow};

/// Turns loaded artifacts into the structures the templates render.
pub struct ViewModelBuilder;

impl ViewModelBuilder {

    /// Styled label for the five known severities; anything else comes back verbatim.
    pub fn severity_badge(severity: &Severity) -> String {
        let (color, label) = match severity {
            Severity::Informational => ("#ff3acd", "INFO"),
            Severity::Low => ("#b3ff00", "LOW"),
            Severity::Medium => ("yellow", "MEDIUM"),
            Severity::High => ("#ff3a3a", "HIGH"),
            Severity::Critical => ("#af0000", "CRITICAL"),
            Severity::Unrecognized(text) => return text.clone(),
        };
        format!("<span style=\"color:{color}; font-weight:bold;\">[{label}]</span>")
    }

    pub const fn oauth_state_label(code: i64) -> &'static str {
        OAuthAppState::from_code(code).label()
    }

    /// One link per distinct CWE, in first-seen order.
    pub fn cwe_links(cwes: &[u32]) -> String {
        let mut seen = HashSet::new();
        cwes.iter()
            .filter(|cwe| seen.insert(**cwe))
            .map(|cwe| {
                format!(
                    "<a href=\"{CWE_DEFINITION_URL}/{cwe}.html\" target=\"_blank\" rel=\"noopener noreferrer\">{cwe}</a>"
                )
            })
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn build_issue_views(issues: &[Issue], stats_prefix: &str) -> Vec<IssueView> {
        issues
            .iter()
            .filter(|issue| !issue.id.starts_with(stats_prefix))
            .map(|issue| {
                let severity_html = match &issue.severity {
                    Severity::Unrecognized(text) => HtmlEscape(text).to_string(),
                    known => Self::severity_badge(known),
                };
                IssueView {
                    id: issue.id.clone(),
                    name: issue.name.clone(),
                    severity_html,
                    description_html: render_rich_text(&issue.description),
                    remediation_html: render_rich_text(&issue.remediation),
                    cwes_html: Self::cwe_links(&issue.cwes),
                    resources: issue.resource_labels(),
                }
            })
            .collect()
    }

    pub fn build_oauth_app_views(apps: &[OAuthApp]) -> Vec<OAuthAppView> {
        apps.iter()
            .map(|app| OAuthAppView {
                id: app.id,
                name: app.name.clone(),
                description: app.description.clone(),
                requested_by: app.requested_by.clone(),
                state: app.state().label(),
            })
            .collect()
    }

    /// Every user × every permission, both axes sorted, cells holding the sorted resources.
    pub fn build_permission_matrix(summary: &PermissionSummary) -> PermissionMatrix {
        let users: Vec<String> = summary.users().map(str::to_string).collect::<BTreeSet<_>>().into_iter().collect();
        let permissions: Vec<String> = summary.permissions().map(str::to_string).collect::<BTreeSet<_>>().into_iter().collect();

        let rows = users
            .iter()
            .map(|user| PermissionRow {
                user: user.clone(),
                cells: permissions
                    .iter()
                    .map(|permission| {
                        summary
                            .resources(user, permission)
                            .map(|resources| {
                                let sorted: BTreeSet<&str> = resources.iter().map(String::as_str).collect();
                                sorted.into_iter().collect::<Vec<_>>().join(", ")
                            })
                            .unwrap_or_default()
                    })
                    .collect(),
            })
            .collect();

        PermissionMatrix { users, permissions, rows }
    }

    /// Executed checks that produced no issue and are not statistics-only, sorted by display name.
    pub fn passed_checks(
        status: &ExecutionStatus,
        issues: &[Issue],
        catalog: &CheckCatalog,
        stats_prefix: &str,
    ) -> Vec<PassedCheck> {
        let flagged: HashSet<&str> = issues.iter().map(|issue| issue.id.as_str()).collect();

        let mut passed: Vec<PassedCheck> = status
            .0
            .iter()
            .filter(|(id, _)| !flagged.contains(id.as_str()) && !id.starts_with(stats_prefix))
            .map(|(id, outcome)| {
                if let CheckOutcome::Failed(detail) = outcome {
                    log::warn!("⚠️ Check {} reported an error but produced no issue: {}", id, detail);
                }
                PassedCheck {
                    name: catalog.display_name(id).to_string(),
                    id: id.clone(),
                }
            })
            .collect();

        passed.sort();
        passed
    }
}
