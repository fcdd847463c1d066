use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;
use warp::Filter;
use crate::config::constants::SERVER_LOG_TARGET;
use crate::errors::{AuditError, AuditResult};
use crate::structs::config::server_config::ServerConfig;

/// Static file server rooted at the report output directory.
pub struct ReportServer {
    root: PathBuf,
    file_name: String,
    config: ServerConfig,
}

impl ReportServer {
    pub const fn new(root: PathBuf, file_name: String, config: ServerConfig) -> Self {
        Self { root, file_name, config }
    }

    /// Any file below `root`. A bare directory request only finds the report
    /// when it is named `index.html`; use [`ReportServer::report_url`] otherwise.
    pub fn routes(root: PathBuf) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
        warp::fs::dir(root).with(warp::log(SERVER_LOG_TARGET))
    }

    /// Browser address of the report page. A wildcard bind is reached through loopback.
    pub fn report_url(bound: SocketAddr, file_name: &str) -> String {
        let ip = match bound.ip() {
            IpAddr::V4(ip) if ip.is_unspecified() => IpAddr::V4(Ipv4Addr::LOCALHOST),
            IpAddr::V6(ip) if ip.is_unspecified() => IpAddr::V6(Ipv6Addr::LOCALHOST),
            ip => ip,
        };
        format!("http://{}/{}", SocketAddr::new(ip, bound.port()), file_name)
    }

    /// Bind and serve until Ctrl+C.
    pub async fn serve(&self) -> AuditResult<()> {
        if !self.root.is_dir() {
            return Err(AuditError::server_error(
                "serve",
                format!("{} is not a directory; run 'audit-report generate' first", self.root.display()),
            ));
        }

        let addr = self.config.socket_addr()?;
        let (bound, server) = warp::serve(Self::routes(self.root.clone()))
            .try_bind_with_graceful_shutdown(addr, async {
                tokio::signal::ctrl_c().await.ok();
                log::info!("🛑 Shutting down report server...");
            })
            .map_err(|e| AuditError::server_error("bind", e))?;

        let url = Self::report_url(bound, &self.file_name);
        log::info!("🌐 Serving {} on {}", self.root.display(), bound);
        log::info!("📄 Report available at {}", url);
        log::info!("⏹️ Press Ctrl+C to stop the server");

        if self.config.open_browser {
            if let Err(e) = webbrowser::open(&url) {
                log::warn!("⚠️ Could not open a browser: {}", e);
            }
        }

        server.await;
        log::info!("✅ Report server stopped");
        Ok(())
    }
}
