use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use serde::de::DeserializeOwned;
use crate::errors::{AuditError, AuditResult};
use crate::structs::artifacts::check_catalog::CheckCatalog;
use crate::structs::artifacts::execution_status::ExecutionStatus;
use crate::structs::artifacts::issue::Issue;
use crate::structs::artifacts::oauth_app::OAuthApp;
use crate::structs::artifacts::permission_summary::PermissionSummary;

/// Reads scanner artifacts from disk into typed structures.
pub struct ArtifactLoader;

impl ArtifactLoader {

    /// Decode one JSON document. A `null` document yields the empty value.
    pub fn load_json<T>(path: &Path) -> AuditResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let file = File::open(path).map_err(|e| AuditError::file_open(path, &e))?;
        let value: Option<T> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| AuditError::json_decode(path, &e))?;
        Ok(value.unwrap_or_default())
    }

    pub fn load_permissions(path: &Path) -> AuditResult<PermissionSummary> {
        let summary: PermissionSummary = Self::load_json(path)?;
        log::debug!("Loaded permissions for {} users from {}", summary.0.len(), path.display());
        Ok(summary)
    }

    pub fn load_oauth_apps(path: &Path) -> AuditResult<Vec<OAuthApp>> {
        let apps: Vec<OAuthApp> = Self::load_json(path)?;
        log::debug!("Loaded {} OAuth apps from {}", apps.len(), path.display());
        Ok(apps)
    }

    pub fn load_issues(path: &Path) -> AuditResult<Vec<Issue>> {
        let issues: Vec<Issue> = Self::load_json(path)?;
        log::debug!("Loaded {} issues from {}", issues.len(), path.display());
        Ok(issues)
    }

    pub fn load_exec_status(path: &Path) -> AuditResult<ExecutionStatus> {
        let status: ExecutionStatus = Self::load_json(path)?;
        log::debug!("Loaded status of {} executed checks from {}", status.0.len(), path.display());
        Ok(status)
    }

    /// The catalog is optional; without a path every check is shown by its identifier.
    pub fn load_check_catalog(path: Option<&Path>) -> AuditResult<CheckCatalog> {
        path.map_or_else(|| Ok(CheckCatalog::default()), Self::load_json)
    }
}
