//! Telemetry initialization and tool call span helpers.

use std::time::Instant;

use anyhow::Result;
use serde::Serialize;
use tracing::{info, info_span, warn, Span};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` and format developer logs.
///
/// Logs go to stderr so the stdio transport keeps stdout to itself.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of a single tool call.
pub struct ToolCallSpan {
    span: Span,
    started_at: Instant,
    tool: &'static str,
}

impl ToolCallSpan {
    pub fn start(tool: &'static str) -> Self {
        let span = info_span!(target: "calculator_mcp::tools", "tool_call", tool);
        Self {
            span,
            started_at: Instant::now(),
            tool,
        }
    }

    /// Close the span, logging the outcome at `info` on success and `warn` otherwise.
    pub fn finish(self, status: &'static str) {
        let elapsed_us = self.started_at.elapsed().as_micros();
        let _entered = self.span.enter();
        if status == "ok" {
            info!(
                target: "calculator_mcp::tools",
                tool = self.tool,
                status,
                elapsed_us,
                "Completed tool call"
            );
        } else {
            warn!(
                target: "calculator_mcp::tools",
                tool = self.tool,
                status,
                elapsed_us,
                "Tool call rejected"
            );
        }
    }
}

/// Payload for logging MCP runtime state as structured telemetry.
#[derive(Debug, Serialize)]
pub struct RuntimeModeTelemetry<'a> {
    pub transport: &'a str,
    pub host: Option<&'a str>,
    pub port: Option<u16>,
    pub path: Option<&'a str>,
    pub config_path: &'a str,
    pub instructions: &'a str,
    pub launch_args: &'a [String],
}

/// Emit runtime mode to `tracing`.
pub fn emit_runtime_mode(telemetry: &RuntimeModeTelemetry<'_>) {
    info!(
        target: "calculator_mcp::runtime",
        transport = telemetry.transport,
        host = telemetry.host.unwrap_or(""),
        port = telemetry.port.unwrap_or_default(),
        path = telemetry.path.unwrap_or(""),
        config_path = telemetry.config_path,
        instructions = telemetry.instructions,
        launch_args = ?telemetry.launch_args,
        "Started MCP server"
    );
}
