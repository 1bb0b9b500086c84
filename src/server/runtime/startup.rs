use std::{future::Future, process::ExitCode, sync::Arc};

use anyhow::{Context, Error};
use axum::Router;
use rmcp::{
    transport::streamable_http_server::{
        session::local::LocalSessionManager, StreamableHttpServerConfig, StreamableHttpService,
    },
    ServiceExt,
};
use tokio::net::TcpListener;

use crate::{
    cli::{LaunchProfile, TransportMode},
    lib::telemetry::{emit_runtime_mode, RuntimeModeTelemetry},
    server::{
        config::ServerConfig,
        runtime::{build_instructions, CalculatorServer},
    },
};

/// Bundles a runtime error message with an exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }
}

/// Start the MCP server and select HTTP/stdio based on the launch profile.
pub async fn run_server(profile: LaunchProfile, config: ServerConfig) -> Result<(), RuntimeExit> {
    let instructions = build_instructions(&profile, &config);
    let server = CalculatorServer::new(instructions.clone());
    let is_http = profile.transport == TransportMode::Http;
    let config_path = config.source_display();

    emit_runtime_mode(&RuntimeModeTelemetry {
        transport: profile.transport.as_str(),
        host: is_http.then_some(config.server.host.as_str()),
        port: is_http.then_some(config.server.port),
        path: is_http.then_some(config.server.path.as_str()),
        config_path: &config_path,
        instructions: &instructions,
        launch_args: &profile.launch_args,
    });

    match profile.transport {
        TransportMode::Http => run_http(server, &config).await,
        TransportMode::Stdio => run_stdio(server).await,
    }
}

async fn run_stdio(server: CalculatorServer) -> Result<(), RuntimeExit> {
    let running = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(RuntimeExit::from_error)?;
    running.waiting().await.map_err(RuntimeExit::from_error)?;
    Ok(())
}

async fn run_http(server: CalculatorServer, config: &ServerConfig) -> Result<(), RuntimeExit> {
    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind HTTP port {addr}"))
        .map_err(RuntimeExit::from_error)?;
    tracing::info!(
        target: "calculator_mcp::runtime",
        transport = "http",
        bind_addr = %addr,
        mcp_path = %config.server.path,
        "Started listening in streamable HTTP mode"
    );

    serve_http(listener, server, &config.server.path, shutdown_signal())
        .await
        .map_err(RuntimeExit::from_error)
}

/// Mount the streamable HTTP service at `mcp_path` and serve until `shutdown` resolves.
pub async fn serve_http<F>(
    listener: TcpListener,
    server: CalculatorServer,
    mcp_path: &str,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let router = build_http_router(server, mcp_path);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server terminated with an error")?;
    tracing::info!(target: "calculator_mcp::runtime", "HTTP server stopped");
    Ok(())
}

fn build_http_router(server: CalculatorServer, mcp_path: &str) -> Router {
    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        Arc::new(LocalSessionManager::default()),
        StreamableHttpServerConfig::default(),
    );
    // axum does not allow nesting at the root.
    if mcp_path == "/" {
        Router::new().fallback_service(service)
    } else {
        Router::new().nest_service(mcp_path, service)
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(
            target: "calculator_mcp::runtime",
            error = %err,
            "Failed to listen for Ctrl-C; shutting down"
        );
        return;
    }
    tracing::info!(target: "calculator_mcp::runtime", "Received Ctrl-C; shutting down");
}
