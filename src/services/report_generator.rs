use chrono::Local;
use crate::errors::{AuditResult, ErrorHandler};
use crate::services::artifact_loader::ArtifactLoader;
use crate::services::template_renderer::TemplateRenderer;
use crate::services::view_model_builder::ViewModelBuilder;
use crate::structs::config::config::Config;
use crate::structs::view::report_page::ReportPage;

/// The composed document together with what went into it.
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    pub html: String,
    pub issue_count: usize,
    pub passed_count: usize,
    /// Sections left empty because their input could not be used.
    pub degraded_sections: Vec<&'static str>,
}

/// Runs loading, view-model building and rendering for one report.
///
/// Issues, executed-check status and the page itself are mandatory. The OAuth
/// app section, the permission table and the check-name catalog degrade to
/// empty when broken, unless the report is configured as strict.
pub struct ReportGenerator<'a> {
    config: &'a Config,
    renderer: TemplateRenderer,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self::with_renderer(config, TemplateRenderer::new())
    }

    pub const fn with_renderer(config: &'a Config, renderer: TemplateRenderer) -> Self {
        Self { config, renderer }
    }

    pub fn generate(&self) -> AuditResult<GeneratedReport> {
        let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        self.generate_at(generated_at)
    }

    pub fn generate_at(&self, generated_at: String) -> AuditResult<GeneratedReport> {
        let inputs = &self.config.inputs;
        let stats_prefix = self.config.report.stats_prefix.as_str();
        let mut degraded_sections = Vec::new();

        log::info!("📥 Loading scan artifacts...");
        let app_section = self.optional_section("OAuth apps", &mut degraded_sections, || {
            let apps = ArtifactLoader::load_oauth_apps(&inputs.oauth_apps)?;
            self.renderer.render_oauth_apps(&ViewModelBuilder::build_oauth_app_views(&apps))
        })?;

        let permission_section = self.optional_section("permissions", &mut degraded_sections, || {
            let summary = ArtifactLoader::load_permissions(&inputs.permissions)?;
            self.renderer.render_permissions(&ViewModelBuilder::build_permission_matrix(&summary))
        })?;

        let catalog = self.optional_section("check names", &mut degraded_sections, || {
            ArtifactLoader::load_check_catalog(inputs.check_names.as_deref())
        })?;

        let issues = ArtifactLoader::load_issues(&inputs.issues)?;
        let status = ArtifactLoader::load_exec_status(&inputs.exec_status)?;

        log::info!("🧮 Building report views...");
        let issue_views = ViewModelBuilder::build_issue_views(&issues, stats_prefix);
        let passed_checks = ViewModelBuilder::passed_checks(&status, &issues, &catalog, stats_prefix);

        let page = ReportPage {
            organization: self.config.report.organization.clone(),
            generated_at,
            issues: issue_views,
            passed_checks,
            app_section,
            permission_section,
        };

        log::info!("🖨️ Rendering report page...");
        let html = self.renderer.render_page(&page)?;

        Ok(GeneratedReport {
            html,
            issue_count: page.issues.len(),
            passed_count: page.passed_checks.len(),
            degraded_sections,
        })
    }

    fn optional_section<T, F>(
        &self,
        section: &'static str,
        degraded_sections: &mut Vec<&'static str>,
        build: F,
    ) -> AuditResult<T>
    where
        T: Default,
        F: FnOnce() -> AuditResult<T>,
    {
        match build() {
            Ok(value) => Ok(value),
            Err(e) if e.is_recoverable() && !self.config.report.strict => {
                log::warn!("⚠️ Could not build the {} section", section);
                ErrorHandler::handle_error(&e);
                degraded_sections.push(section);
                Ok(T::default())
            }
            Err(e) => Err(e),
        }
    }
}
