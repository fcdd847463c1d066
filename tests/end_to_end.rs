use std::fs;
use audit_report::errors::AuditError;
use audit_report::services::artifact_loader::ArtifactLoader;
use audit_report::services::publisher::Publisher;
use audit_report::services::report_generator::ReportGenerator;
use audit_report::services::template_renderer::TemplateRenderer;
use audit_report::templates::{permissions, report_page};
use audit_report::templates::{OAUTH_APPS_TEMPLATE_NAME, PERMISSIONS_TEMPLATE_NAME, REPORT_PAGE_TEMPLATE_NAME};
use audit_report::services::view_model_builder::ViewModelBuilder;
use crate::fixtures::write_artifacts;

#[test]
fn permission_matrix_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("permissions.json");
    fs::write(&path, r#"{"alice": {"admin": ["repoA"]}, "bob": {}}"#).unwrap();

    let summary = ArtifactLoader::load_permissions(&path).unwrap();
    let matrix = ViewModelBuilder::build_permission_matrix(&summary);

    assert_eq!(matrix.users, vec!["alice", "bob"]);
    assert_eq!(matrix.permissions, vec!["admin"]);
    assert_eq!(matrix.cell("alice", "admin"), Some("repoA"));
    assert_eq!(matrix.cell("bob", "admin"), Some(""));
}

#[test]
fn full_report_contains_every_section() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_artifacts(dir.path());

    let report = ReportGenerator::new(&config)
        .generate_at("2026-01-01 00:00:00".to_string())
        .unwrap();
    let html = &report.html;

    assert!(report.degraded_sections.is_empty());
    assert_eq!(report.issue_count, 1);
    assert_eq!(report.passed_count, 2);

    assert!(html.contains("<title>Report for acme</title>"));
    assert!(html.contains("Report generated at: 2026-01-01 00:00:00"));

    assert!(html.contains("[CRITICAL]</span> Two-factor authentication not enforced"));
    assert!(html.contains("sign in  without 2FA, see <a href="));
    assert!(html.contains(">here</a> for details"));
    assert_eq!(html.matches("definitions/308.html").count(), 1);
    assert!(html.contains("definitions/287.html"));
    assert!(html.contains("<li>alice</li>"));

    assert!(!html.contains("STATS-0"));
    assert!(!html.contains("Statistics only"));
    let dependabot = html.find("Dependabot alerts enabled").unwrap();
    let deploy_keys = html.find("Stale deploy keys").unwrap();
    assert!(dependabot < deploy_keys);

    assert!(html.contains("CI Bot (ID: 11)"));
    assert!(html.contains("<b>Status:</b> Approved"));
    assert!(html.contains("Shady &lt;Tool&gt; (ID: 12)"));
    assert!(html.contains("<b>Status:</b> Unknown"));

    assert!(html.contains("<th scope=\"row\">carol</th>"));
    assert!(html.contains("<td>repoA, repoB</td>"));
    assert!(html.contains("<td>api, docs</td>"));
    assert_eq!(html.matches("<td>").count(), 3 * 2);
}

#[test]
fn broken_optional_inputs_leave_sections_empty() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = write_artifacts(dir.path());
    fs::remove_file(&config.inputs.permissions).unwrap();
    fs::write(&config.inputs.oauth_apps, "{not json").unwrap();
    config.inputs.check_names = Some(dir.path().join("missing-checks.json"));

    let report = ReportGenerator::new(&config).generate().unwrap();

    assert_eq!(report.degraded_sections, vec!["OAuth apps", "permissions", "check names"]);
    assert!(!report.html.contains("User Permission Statistics"));
    assert!(!report.html.contains("OAuth App Statistics"));
    assert!(report.html.contains("AUTH-1"));
}

fn renderer_with_broken_app_template() -> TemplateRenderer {
    TemplateRenderer::with_templates(&[
        (OAUTH_APPS_TEMPLATE_NAME, "{% for app in %}"),
        (PERMISSIONS_TEMPLATE_NAME, permissions::PERMISSIONS_TEMPLATE),
        (REPORT_PAGE_TEMPLATE_NAME, report_page::REPORT_PAGE_TEMPLATE),
    ])
}

#[test]
fn broken_app_template_leaves_section_empty() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_artifacts(dir.path());

    let report = ReportGenerator::with_renderer(&config, renderer_with_broken_app_template())
        .generate()
        .unwrap();

    assert_eq!(report.degraded_sections, vec!["OAuth apps"]);
    assert!(!report.html.contains("OAuth App Statistics"));
    assert!(report.html.contains("<title>Report for acme</title>"));
    assert!(report.html.contains("User Permission Statistics"));
    assert!(report.html.contains("AUTH-1"));
}

#[test]
fn strict_mode_aborts_on_broken_app_template() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = write_artifacts(dir.path());
    config.report.strict = true;

    let result = ReportGenerator::with_renderer(&config, renderer_with_broken_app_template()).generate();
    assert!(matches!(
        result,
        Err(AuditError::TemplateCompile { ref name, .. }) if name == OAUTH_APPS_TEMPLATE_NAME
    ));
}

#[test]
fn strict_mode_aborts_on_broken_optional_input() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = write_artifacts(dir.path());
    fs::remove_file(&config.inputs.permissions).unwrap();
    config.report.strict = true;

    let result = ReportGenerator::new(&config).generate();
    assert!(matches!(result, Err(AuditError::FileOpen { .. })));
}

#[test]
fn missing_issues_abort_the_report() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_artifacts(dir.path());
    fs::remove_file(&config.inputs.issues).unwrap();

    let result = ReportGenerator::new(&config).generate();
    assert!(matches!(result, Err(AuditError::FileOpen { .. })));
}

#[test]
fn malformed_exec_status_aborts_the_report() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_artifacts(dir.path());
    fs::write(&config.inputs.exec_status, "[1, 2").unwrap();

    let result = ReportGenerator::new(&config).generate();
    assert!(matches!(result, Err(AuditError::JsonDecode { .. })));
}

#[test]
fn published_report_lands_in_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_artifacts(dir.path());

    let report = ReportGenerator::new(&config).generate().unwrap();
    let path = Publisher::write_report(&config.output, &report.html).unwrap();

    assert_eq!(path, dir.path().join("static/index.html"));
    assert_eq!(fs::read_to_string(&path).unwrap(), report.html);
    assert!(dir.path().join("static/report.css").exists());
}
