use std::{
    process::{Command as StdCommand, Stdio},
    time::Duration,
};

use anyhow::Result;
use rmcp::{model::ClientInfo, serve_client};
use tokio::time::timeout;

use crate::common::{spawn_server_process, BINARY_PATH};

#[tokio::test]
async fn stdio_spawn_lists_tools() -> Result<()> {
    let (mut child, transport, stderr_task) = spawn_server_process().await?;

    let client = serve_client(ClientInfo::default(), transport).await?;
    let list = client.list_tools(None).await?;
    let names: Vec<_> = list.tools.iter().map(|tool| tool.name.to_string()).collect();
    assert!(
        names.iter().any(|name| name == "add") && names.iter().any(|name| name == "random_number"),
        "list_tools should include add and random_number: {names:?}"
    );

    client.cancel().await?;
    let status = timeout(Duration::from_secs(5), child.wait()).await??;
    assert!(
        status.success(),
        "server should exit cleanly but exit status was {status:?}"
    );
    if let Some(handle) = stderr_task {
        let _ = handle.await;
    }
    Ok(())
}

#[test]
fn missing_explicit_config_fails_startup() {
    let status = StdCommand::new(BINARY_PATH)
        .args(["--transport", "stdio", "--config", "/nonexistent/calculator.toml"])
        .env_remove("MCP_CONFIG_PATH")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .status()
        .expect("process should start");
    assert_eq!(status.code(), Some(1), "config load failure must exit 1");
}

#[test]
fn help_lists_transport_flag() {
    let output = StdCommand::new(BINARY_PATH)
        .arg("--help")
        .output()
        .expect("process should start");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--transport"), "{stdout}");
    assert!(stdout.contains("--config"), "{stdout}");
}
