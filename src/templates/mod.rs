pub mod oauth_apps;
pub mod permissions;
pub mod report_page;

pub const OAUTH_APPS_TEMPLATE_NAME: &str = "oauth_apps.html";
pub const PERMISSIONS_TEMPLATE_NAME: &str = "permissions.html";
pub const REPORT_PAGE_TEMPLATE_NAME: &str = "report.html";

/// Every template the renderer compiles, by name.
pub const TEMPLATES: &[(&str, &str)] = &[
    (OAUTH_APPS_TEMPLATE_NAME, oauth_apps::OAUTH_APPS_TEMPLATE),
    (PERMISSIONS_TEMPLATE_NAME, permissions::PERMISSIONS_TEMPLATE),
    (REPORT_PAGE_TEMPLATE_NAME, report_page::REPORT_PAGE_TEMPLATE),
];
