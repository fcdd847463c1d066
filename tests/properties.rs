use std::collections::{BTreeMap, HashMap, HashSet};
use proptest::prelude::*;
use audit_report::enums::check_outcome::CheckOutcome;
use audit_report::enums::oauth_app_state::OAuthAppState;
use audit_report::enums::severity::Severity;
use audit_report::helpers::link_normalizer::{is_url, normalize_links};
use audit_report::services::view_model_builder::ViewModelBuilder;
use audit_report::structs::artifacts::check_catalog::CheckCatalog;
use audit_report::structs::artifacts::execution_status::ExecutionStatus;
use audit_report::structs::artifacts::issue::Issue;
use audit_report::structs::artifacts::permission_summary::PermissionSummary;

fn summary_strategy() -> impl Strategy<Value = PermissionSummary> {
    let resources = prop::collection::vec("[a-z]{1,5}", 0..4);
    let permissions = prop::collection::btree_map("(admin|push|pull|triage)", resources, 0..4);
    prop::collection::btree_map("[a-z]{1,6}", permissions, 0..6).prop_map(PermissionSummary)
}

fn token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9,.()<>&]{1,8}",
        "https?://[a-z]{1,8}\\.com(/[a-z]{0,4})?",
    ]
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec((token_strategy(), "( |  |\t|\n)"), 0..12).prop_map(|parts| {
        parts.into_iter().map(|(token, space)| format!("{token}{space}")).collect()
    })
}

fn check_id_strategy() -> impl Strategy<Value = String> {
    "(STATS|AUTH|TOOLS|ORG)-[0-9]"
}

proptest! {
    #[test]
    fn matrix_is_dense_and_cells_are_sorted(summary in summary_strategy()) {
        let matrix = ViewModelBuilder::build_permission_matrix(&summary);

        let users: HashSet<&str> = summary.users().collect();
        let permissions: HashSet<&str> = summary.permissions().collect();
        prop_assert!(matrix.is_rectangular());
        prop_assert_eq!(matrix.cell_count(), users.len() * permissions.len());

        for row in &matrix.rows {
            for cell in &row.cells {
                if cell.is_empty() {
                    continue;
                }
                let resources: Vec<&str> = cell.split(", ").collect();
                let mut sorted = resources.clone();
                sorted.sort_unstable();
                prop_assert_eq!(resources, sorted);
            }
        }
    }

    #[test]
    fn unknown_severities_are_returned_verbatim(text in "[A-Za-z ]{0,12}") {
        let severity = Severity::from_name(&text);
        let badge = ViewModelBuilder::severity_badge(&severity);
        match severity {
            Severity::Unrecognized(_) => prop_assert_eq!(badge, text),
            _ => prop_assert!(badge.starts_with("<span")),
        }
    }

    #[test]
    fn text_without_urls_is_untouched(text in "[a-zA-Z0-9 \t\n,.<>&]{0,60}") {
        prop_assert_eq!(normalize_links(&text), text);
    }

    #[test]
    fn every_url_is_wrapped_once(text in text_strategy()) {
        let url_count = text.split_whitespace().filter(|token| is_url(token)).count();
        let normalized = normalize_links(&text);

        prop_assert_eq!(normalized.matches(">here</a>").count(), url_count);
        prop_assert_eq!(normalize_links(&normalized), normalized.clone());
    }

    #[test]
    fn passed_checks_never_include_flagged_or_stats_ids(
        executed in prop::collection::hash_set(check_id_strategy(), 0..20),
        flagged in prop::collection::vec(check_id_strategy(), 0..10),
    ) {
        let status = ExecutionStatus(
            executed.iter().map(|id| (id.clone(), CheckOutcome::Completed)).collect::<HashMap<_, _>>(),
        );
        let issues: Vec<Issue> = flagged
            .iter()
            .map(|id| Issue { id: id.clone(), ..Issue::default() })
            .collect();

        let passed = ViewModelBuilder::passed_checks(&status, &issues, &CheckCatalog::default(), "STATS");

        let expected: HashSet<&String> = executed
            .iter()
            .filter(|id| !id.starts_with("STATS") && !flagged.contains(id))
            .collect();
        prop_assert_eq!(passed.len(), expected.len());
        for check in &passed {
            prop_assert!(!check.id.starts_with("STATS"));
            prop_assert!(!flagged.contains(&check.id));
        }
        prop_assert!(passed.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn only_codes_one_to_three_are_known(code in any::<i64>()) {
        let state = OAuthAppState::from_code(code);
        match code {
            1 => prop_assert_eq!(state.label(), "Requested"),
            2 => prop_assert_eq!(state.label(), "Approved"),
            3 => prop_assert_eq!(state.label(), "Denied"),
            _ => prop_assert_eq!(state.label(), "Unknown"),
        }
    }
}

#[test]
fn null_users_still_get_a_full_row() {
    let summary = PermissionSummary(BTreeMap::from([
        ("alice".to_string(), BTreeMap::from([("admin".to_string(), vec!["repoA".to_string()])])),
        ("bob".to_string(), BTreeMap::new()),
    ]));
    let matrix = ViewModelBuilder::build_permission_matrix(&summary);
    assert_eq!(matrix.cell_count(), 2);
    assert_eq!(matrix.cell("bob", "admin"), Some(""));
}
