use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MCP_PATH: &str = "/mcp";

/// Server socket settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
    /// HTTP path the streamable transport is mounted at.
    pub path: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            path: DEFAULT_MCP_PATH.to_string(),
        }
    }
}

impl ServerSection {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: Option<String>,
}

pub fn parse_server_section(
    raw: Option<RawServerSection>,
    path: &Path,
) -> Result<ServerSection, ConfigError> {
    let server_raw = raw.unwrap_or_default();
    let host = server_raw.host.unwrap_or_else(|| DEFAULT_HOST.to_string());
    validate_host(&host, path)?;
    let port = server_raw.port.unwrap_or(DEFAULT_PORT);
    validate_port(port, path)?;
    let mcp_path = server_raw
        .path
        .unwrap_or_else(|| DEFAULT_MCP_PATH.to_string());
    validate_mcp_path(&mcp_path, path)?;
    Ok(ServerSection {
        host,
        port,
        path: mcp_path,
    })
}

fn validate_host(host: &str, path: &Path) -> Result<(), ConfigError> {
    if !host.trim().is_empty() {
        return Ok(());
    }

    Err(ConfigError::InvalidField {
        path: path.to_path_buf(),
        field: "server.host",
        message: "Use a non-empty host such as 0.0.0.0 or 127.0.0.1".into(),
    })
}

fn validate_port(port: u16, path: &Path) -> Result<(), ConfigError> {
    if port != 0 {
        return Ok(());
    }

    Err(ConfigError::InvalidField {
        path: path.to_path_buf(),
        field: "server.port",
        message: "Use a port in the range 1-65535".into(),
    })
}

fn validate_mcp_path(mcp_path: &str, path: &Path) -> Result<(), ConfigError> {
    if mcp_path.starts_with('/') && !mcp_path.chars().any(char::is_whitespace) {
        return Ok(());
    }

    Err(ConfigError::InvalidField {
        path: path.to_path_buf(),
        field: "server.path",
        message: "Use an absolute HTTP path such as /mcp".into(),
    })
}
