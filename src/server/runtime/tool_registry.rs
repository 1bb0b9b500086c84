use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{
        ErrorData, Implementation, ListResourcesResult, PaginatedRequestParam,
        ReadResourceRequestParam, ReadResourceResult, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, Json, RoleServer,
};

use crate::{
    lib::telemetry::ToolCallSpan,
    resources::{self, ServerInfoDocument},
    tools::{
        self,
        calculator::{self, AddRequest, AddResponse, RandomNumberRequest, RandomNumberResponse},
        ADD_TOOL_ID, RANDOM_NUMBER_TOOL_ID,
    },
};

/// Registers the calculator tools and the `info://server` resource with `rmcp`.
#[derive(Clone)]
pub struct CalculatorServer {
    instructions: Arc<String>,
    tool_router: ToolRouter<Self>,
}

impl CalculatorServer {
    pub fn new(instructions: String) -> Self {
        Self {
            instructions: Arc::new(instructions),
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router(router = tool_router)]
impl CalculatorServer {
    #[tool(name = "add", description = "Returns the sum of two numbers.")]
    fn add(&self, Parameters(request): Parameters<AddRequest>) -> Json<AddResponse> {
        let span = ToolCallSpan::start(ADD_TOOL_ID);
        let response = calculator::add(&request);
        span.finish("ok");
        Json(response)
    }

    #[tool(
        name = "random_number",
        description = "Returns a random integer between min_val and max_val."
    )]
    fn random_number(
        &self,
        Parameters(request): Parameters<RandomNumberRequest>,
    ) -> Result<Json<RandomNumberResponse>, ErrorData> {
        let span = ToolCallSpan::start(RANDOM_NUMBER_TOOL_ID);
        match calculator::random_number(&request) {
            Ok(response) => {
                span.finish("ok");
                Ok(Json(response))
            }
            Err(err) => {
                span.finish("invalid_range");
                Err(tools::range_error_to_error_data(err))
            }
        }
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for CalculatorServer {
    fn get_info(&self) -> ServerInfo {
        let document = ServerInfoDocument::default();
        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: document.name,
                version: document.version,
                ..Implementation::from_build_env()
            },
            instructions: Some((*self.instructions).clone()),
            ..ServerInfo::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult::with_all_items(resources::list()))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        let uri = request.uri;
        let contents = resources::read(&uri).inspect_err(|err| {
            tracing::warn!(
                target: "calculator_mcp::resources",
                uri = %uri,
                reason = %err.message,
                "Rejected resource read"
            );
        })?;
        Ok(ReadResourceResult {
            contents: vec![contents],
        })
    }
}
