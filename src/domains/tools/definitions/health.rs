//! Health check tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use super::common::json_result;

/// The health tool takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct HealthParams {}

/// Health check tool - reports that the service is up.
#[derive(Debug, Clone)]
pub struct HealthTool;

impl HealthTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "health";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Health check endpoint for the application.";

    /// Service name reported in the health payload.
    pub const SERVICE: &'static str = "SoccerAPI";

    /// The fixed health payload.
    pub fn payload() -> Value {
        json!({ "status": "healthy", "service": Self::SERVICE })
    }

    pub fn execute() -> CallToolResult {
        json_result(Self::payload())
    }

    /// HTTP handler for this tool. Arguments are ignored.
    #[cfg(feature = "http")]
    pub fn http_handler(_arguments: Value) -> Result<Value, String> {
        super::common::to_http_response(Self::execute())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<HealthParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |_ctx: ToolCallContext<'_, S>| {
            async move { Ok::<_, McpError>(Self::execute()) }.boxed()
        })
    }
}
