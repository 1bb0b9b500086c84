use rmcp::model::{AnnotateAble, ErrorData, RawResource, Resource, ResourceContents};
use serde::{Deserialize, Serialize};

pub const SERVER_INFO_URI: &str = "info://server";
const SERVER_INFO_NAME: &str = "server_info";
const SERVER_INFO_DESCRIPTION: &str = "Returns server information in JSON format.";
const JSON_MIME_TYPE: &str = "application/json";

/// Body of the `info://server` resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerInfoDocument {
    pub name: String,
    pub version: String,
    pub description: String,
}

impl Default for ServerInfoDocument {
    fn default() -> Self {
        Self {
            name: "Simple Calculator Server".into(),
            version: "1.0".into(),
            description:
                "A server that provides basic calculator functions and random number generation."
                    .into(),
        }
    }
}

impl ServerInfoDocument {
    /// Pretty-printed JSON with 2-space indentation.
    pub fn render(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub(super) fn descriptor() -> Resource {
    let mut raw = RawResource::new(SERVER_INFO_URI, SERVER_INFO_NAME);
    raw.description = Some(SERVER_INFO_DESCRIPTION.into());
    raw.mime_type = Some(JSON_MIME_TYPE.into());
    raw.no_annotation()
}

pub(super) fn contents() -> Result<ResourceContents, ErrorData> {
    let text = ServerInfoDocument::default().render().map_err(|err| {
        ErrorData::internal_error(format!("failed to serialize server info: {err}"), None)
    })?;
    let mut contents = ResourceContents::text(text, SERVER_INFO_URI);
    if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
        *mime_type = Some(JSON_MIME_TYPE.into());
    }
    Ok(contents)
}
