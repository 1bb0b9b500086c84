use crate::{
    cli::{LaunchProfile, TransportMode},
    server::config::ServerConfig,
};

/// Build the `ServerInfo.instructions` string shown to MCP clients.
pub fn build_instructions(profile: &LaunchProfile, config: &ServerConfig) -> String {
    let endpoint = match profile.transport {
        TransportMode::Http => format!(
            "streamable HTTP at http://{host}:{port}{path}",
            host = config.server.host,
            port = config.server.port,
            path = config.server.path
        ),
        TransportMode::Stdio => "stdio".to_string(),
    };
    format!(
        "Simple calculator server ({endpoint}, config {source}). Call `add` to sum two numbers, `random_number` for an integer in [min_val, max_val], and read `info://server` for server metadata.",
        source = config.source_display(),
    )
}
