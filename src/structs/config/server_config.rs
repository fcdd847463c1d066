use std::net::{IpAddr, SocketAddr};
use serde::{Deserialize, Serialize};
use crate::errors::{AuditError, AuditResult};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "ConfigHelper::default_host")]
    pub host: String,

    #[serde(default = "ConfigHelper::default_port")]
    pub port: u16,

    #[serde(default)]
    pub open_browser: bool,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> AuditResult<SocketAddr> {
        let ip: IpAddr = self.host.parse().map_err(|_| {
            AuditError::config_error(
                "server.host",
                &format!("'{}' is not an IP address", self.host),
                Some("Use 127.0.0.1 for local viewing or 0.0.0.0 to listen on every interface"),
            )
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: ConfigHelper::default_host(),
            port: ConfigHelper::default_port(),
            open_browser: false,
        }
    }
}
