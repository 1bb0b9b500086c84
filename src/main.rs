//! Entry point for the Simple Calculator MCP server.
use std::process::ExitCode;

use anyhow::Error;
use calculator_mcp::{
    cli::{LaunchProfile, LaunchProfileArgs},
    lib::telemetry,
    server::{
        config::ServerConfig,
        runtime::{self, RuntimeExit},
    },
};
use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<(), RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let profile = LaunchProfileArgs::parse()
        .build()
        .map_err(RuntimeExit::from_error)?;
    run_server(profile).await
}

async fn run_server(profile: LaunchProfile) -> Result<(), RuntimeExit> {
    let path = profile.config_path.clone();
    let loaded = if profile.config_source.is_explicit() {
        ServerConfig::load_from_path(path)
    } else {
        ServerConfig::load_optional(path)
    };
    let config = loaded.map_err(|err| RuntimeExit::from_error(Error::new(err)))?;
    runtime::run_server(profile, config).await
}
