use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{FAVICON_FILE_NAME, STYLESHEET_FILE_NAME};
use crate::errors::{AuditError, AuditResult};
use crate::structs::config::output_config::OutputConfig;
use crate::structs::config::server_config::ServerConfig;
use crate::ui::report_server::ReportServer;

const STYLESHEET: &str = include_str!("../../assets/report.css");
const FAVICON: &str = include_str!("../../assets/favicon.svg");

/// Writes the finished report to disk and serves it.
pub struct Publisher;

impl Publisher {

    /// Write the report document, plus any missing bundled assets, into the output directory.
    pub fn write_report(output: &OutputConfig, html: &str) -> AuditResult<PathBuf> {
        fs::create_dir_all(&output.directory)
            .map_err(|e| AuditError::output_write(&output.directory, &e))?;

        let report_path = output.report_path();
        fs::write(&report_path, html).map_err(|e| AuditError::output_write(&report_path, &e))?;
        log::info!("💾 Report written to {}", report_path.display());

        if output.write_assets {
            Self::write_assets(&output.directory)?;
        }

        Ok(report_path)
    }

    /// Bundled assets are only written when absent so customised copies survive regeneration.
    fn write_assets(directory: &Path) -> AuditResult<()> {
        for (file_name, content) in [(STYLESHEET_FILE_NAME, STYLESHEET), (FAVICON_FILE_NAME, FAVICON)] {
            let path = directory.join(file_name);
            if path.exists() {
                log::debug!("Keeping existing asset {}", path.display());
                continue;
            }
            fs::write(&path, content).map_err(|e| AuditError::output_write(&path, &e))?;
            log::debug!("Wrote asset {}", path.display());
        }
        Ok(())
    }

    /// Serve the output directory until interrupted.
    pub async fn serve(server: &ServerConfig, output: &OutputConfig) -> AuditResult<()> {
        ReportServer::new(output.directory.clone(), output.file_name.clone(), server.clone())
            .serve()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_in(dir: &Path) -> OutputConfig {
        OutputConfig {
            directory: dir.join("site"),
            file_name: "index.html".to_string(),
            write_assets: true,
        }
    }

    #[test]
    fn writes_report_and_assets() {
        let dir = tempfile::tempdir().unwrap();
        let output = output_in(dir.path());

        let path = Publisher::write_report(&output, "<html></html>").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "<html></html>");
        assert!(output.directory.join(STYLESHEET_FILE_NAME).exists());
        assert!(output.directory.join(FAVICON_FILE_NAME).exists());
    }

    #[test]
    fn existing_assets_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let output = output_in(dir.path());
        fs::create_dir_all(&output.directory).unwrap();
        fs::write(output.directory.join(STYLESHEET_FILE_NAME), "body{}").unwrap();

        Publisher::write_report(&output, "first").unwrap();
        Publisher::write_report(&output, "second").unwrap();

        assert_eq!(fs::read_to_string(output.directory.join(STYLESHEET_FILE_NAME)).unwrap(), "body{}");
        assert_eq!(fs::read_to_string(output.report_path()).unwrap(), "second");
    }

    #[test]
    fn unwritable_target_is_an_output_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("site");
        fs::write(&blocker, "not a directory").unwrap();

        let result = Publisher::write_report(&output_in(dir.path()), "x");
        assert!(matches!(result, Err(AuditError::OutputWrite { .. })));
    }
}
