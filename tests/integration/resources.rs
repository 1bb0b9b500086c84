use anyhow::{Context, Result};
use rmcp::{
    model::{ErrorCode, ReadResourceRequestParam, ResourceContents},
    service::ServiceError,
};
use serde_json::{json, Value};

use crate::common::connect_in_process;

fn read_request(uri: &str) -> Result<ReadResourceRequestParam> {
    serde_json::from_value(json!({ "uri": uri })).context("valid read request")
}

#[tokio::test]
async fn initialize_advertises_tools_and_resources() -> Result<()> {
    let (client, server_task) = connect_in_process().await?;
    let info = client.peer_info().cloned().context("server info")?;
    let _ = client.cancel().await;
    let _ = server_task.await;

    assert_eq!(info.server_info.name, "Simple Calculator Server");
    assert_eq!(info.server_info.version, "1.0");
    assert!(info.capabilities.tools.is_some());
    assert!(info.capabilities.resources.is_some());
    assert_eq!(
        info.instructions.as_deref(),
        Some("calculator-integration")
    );
    Ok(())
}

#[tokio::test]
async fn list_resources_returns_server_info() -> Result<()> {
    let (client, server_task) = connect_in_process().await?;
    let list = client.list_resources(None).await?;
    let _ = client.cancel().await;
    let _ = server_task.await;

    assert_eq!(list.resources.len(), 1);
    let resource = &list.resources[0];
    assert_eq!(resource.raw.uri, "info://server");
    assert_eq!(resource.raw.mime_type.as_deref(), Some("application/json"));
    Ok(())
}

#[tokio::test]
async fn read_server_info_returns_fixed_document() -> Result<()> {
    let (client, server_task) = connect_in_process().await?;
    let result = client.read_resource(read_request("info://server")?).await?;
    let _ = client.cancel().await;
    let _ = server_task.await;

    assert_eq!(result.contents.len(), 1);
    let text = match &result.contents[0] {
        ResourceContents::TextResourceContents { uri, text, .. } => {
            assert_eq!(uri, "info://server");
            text.clone()
        }
        other => anyhow::bail!("expected text contents, got {other:?}"),
    };
    assert!(text.starts_with("{\n  \"name\""), "2-space indent: {text}");
    let decoded: Value = serde_json::from_str(&text)?;
    assert_eq!(
        decoded,
        json!({
            "name": "Simple Calculator Server",
            "version": "1.0",
            "description": "A server that provides basic calculator functions and random number generation."
        })
    );
    Ok(())
}

#[tokio::test]
async fn read_unknown_resource_is_not_found() -> Result<()> {
    let (client, server_task) = connect_in_process().await?;
    let result = client.read_resource(read_request("info://missing")?).await;
    let _ = client.cancel().await;
    let _ = server_task.await;

    match result {
        Err(ServiceError::McpError(inner)) => {
            assert_eq!(inner.code, ErrorCode::RESOURCE_NOT_FOUND);
            let data = inner.data.context("error data")?;
            assert_eq!(data["uri"], json!("info://missing"));
        }
        other => anyhow::bail!("expected resource_not_found, got {other:?}"),
    }
    Ok(())
}
