use tracing::info;

use super::ServerConfig;

pub fn log_defaults(path: &std::path::Path) {
    info!(
        target: "calculator_mcp::config",
        path = %path.display(),
        "No configuration file found; using built-in defaults"
    );
}

pub fn log_loaded(config: &ServerConfig) {
    info!(
        target: "calculator_mcp::config",
        path = %config.source_display(),
        host = %config.server.host,
        port = config.server.port,
        mcp_path = %config.server.path,
        "Configuration loaded successfully"
    );
}
