//! Read-only MCP resources exposed by the server.

pub mod server_info;

use rmcp::model::{ErrorData, Resource, ResourceContents};
use serde_json::json;

use crate::lib::errors::RESOURCE_NOT_FOUND_ERROR;

pub use server_info::{ServerInfoDocument, SERVER_INFO_URI};

/// Every resource the server advertises in `resources/list`.
pub fn list() -> Vec<Resource> {
    vec![server_info::descriptor()]
}

/// Resolve a resource URI to its contents.
pub fn read(uri: &str) -> Result<ResourceContents, ErrorData> {
    match uri {
        SERVER_INFO_URI => server_info::contents(),
        other => Err(not_found(other)),
    }
}

fn not_found(uri: &str) -> ErrorData {
    RESOURCE_NOT_FOUND_ERROR
        .builder()
        .retryable(false)
        .with_context_field("uri", json!(uri))
        .build()
        .unwrap_or_else(|builder_err| ErrorData::resource_not_found(builder_err.to_string(), None))
}
