//! Team info tool definition.
//!
//! Looks up a soccer team by name. A blank name aborts the call instead of
//! returning an error payload, unlike `get_leagues_info`.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::common::{json_result, parse_params};
use crate::domains::soccer::{ApiResponse, SoccerClient};
use crate::domains::tools::ToolError;

/// Parameters for the team info tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TeamInfoParams {
    /// Team name to search for.
    #[schemars(description = "Name of the soccer team (e.g. \"Manchester United\")")]
    pub name: String,
}

/// Team info tool - fetches basic information about a team by name.
#[derive(Debug, Clone)]
pub struct TeamInfoTool;

impl TeamInfoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_team_info";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Fetches basic information about a specific soccer team based on its name.";

    /// Message of the aborted call when `name` is blank.
    pub const INVALID_NAME: &'static str = "The 'name' parameter must be a non-empty string.";

    /// Validate the name and forward to the client.
    #[instrument(skip_all, fields(name = %params.name))]
    pub async fn lookup(
        params: &TeamInfoParams,
        client: &SoccerClient,
    ) -> Result<ApiResponse, ToolError> {
        if params.name.trim().is_empty() {
            warn!("Rejected blank team name");
            return Err(ToolError::invalid_arguments(Self::INVALID_NAME));
        }

        info!("Team info tool called");
        Ok(client.get_team_info(&params.name).await)
    }

    /// Execute the tool logic.
    pub async fn execute(
        params: &TeamInfoParams,
        client: &SoccerClient,
    ) -> Result<CallToolResult, ToolError> {
        let response = Self::lookup(params, client).await?;
        Ok(json_result(response.into_value()))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        client: &SoccerClient,
    ) -> Result<serde_json::Value, String> {
        let params: TeamInfoParams = parse_params(arguments).map_err(|e| e.to_string())?;
        let result = Self::execute(&params, client)
            .await
            .map_err(|e| e.to_string())?;
        super::common::to_http_response(result)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<TeamInfoParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>(client: Arc<SoccerClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                let params: TeamInfoParams = parse_params(serde_json::Value::Object(args))?;
                Self::execute(&params, &client)
                    .await
                    .map_err(McpError::from)
            }
            .boxed()
        })
    }
}
