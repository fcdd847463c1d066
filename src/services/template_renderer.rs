use std::collections::HashMap;
use minijinja::{context, Environment, UndefinedBehavior};
use serde::Serialize;
use crate::errors::{AuditError, AuditResult};
use crate::structs::view::oauth_app_view::OAuthAppView;
use crate::structs::view::permission_matrix::PermissionMatrix;
use crate::structs::view::report_page::ReportPage;
use crate::templates::{
    OAUTH_APPS_TEMPLATE_NAME, PERMISSIONS_TEMPLATE_NAME, REPORT_PAGE_TEMPLATE_NAME, TEMPLATES,
};

/// Compiles the report templates once and renders them on demand.
///
/// A template that fails to compile does not prevent the others from being
/// used; rendering it reports the original compile error instead.
pub struct TemplateRenderer {
    env: Environment<'static>,
    compile_errors: HashMap<&'static str, String>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    pub fn new() -> Self {
        Self::with_templates(TEMPLATES)
    }

    pub fn with_templates(templates: &[(&'static str, &'static str)]) -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        let mut compile_errors = HashMap::new();
        for &(name, source) in templates {
            if let Err(e) = env.add_template(name, source) {
                log::error!("❌ Template '{}' failed to compile: {}", name, e);
                compile_errors.insert(name, e.to_string());
            }
        }

        Self { env, compile_errors }
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> AuditResult<String> {
        if let Some(reason) = self.compile_errors.get(name) {
            return Err(AuditError::template_compile(name, reason));
        }

        let template = self
            .env
            .get_template(name)
            .map_err(|e| AuditError::template_compile(name, e))?;

        template
            .render(ctx)
            .map_err(|e| AuditError::template_render(name, &e))
    }

    pub fn render_oauth_apps(&self, apps: &[OAuthAppView]) -> AuditResult<String> {
        self.render(OAUTH_APPS_TEMPLATE_NAME, context! { apps => apps })
    }

    pub fn render_permissions(&self, matrix: &PermissionMatrix) -> AuditResult<String> {
        self.render(PERMISSIONS_TEMPLATE_NAME, context! { matrix => matrix })
    }

    pub fn render_page(&self, page: &ReportPage) -> AuditResult<String> {
        self.render(REPORT_PAGE_TEMPLATE_NAME, page)
    }
}
