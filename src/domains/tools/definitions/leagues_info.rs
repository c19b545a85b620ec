//! Leagues info tool definition.
//!
//! Looks up soccer leagues by name. A blank name is answered with an
//! `{"error": ...}` payload rather than an aborted call.

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

/// Parameters for the leagues info tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LeaguesInfoParams {
    /// League name to search for.
    #[schemars(description = "Name of the soccer league (e.g. \"Premier League\")")]
    pub name: String,
}

/// Leagues info tool - fetches information about leagues by name.
#[derive(Debug, Clone)]
pub struct LeaguesInfoTool;

impl LeaguesInfoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_leagues_info";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Fetches information about soccer leagues based on their name.";

    /// Error payload message when `name` is blank.
    pub const INVALID_NAME: &'static str = "Parameter 'name' must be a non-empty string.";

    /// Validate the name and forward to the client.
    #[instrument(skip_all, fields(name = %params.name))]
    pub async fn lookup(params: &LeaguesInfoParams, client: &SoccerClient) -> ApiResponse {
        if params.name.trim().is_empty() {
            warn!("Rejected blank league name");
            return ApiResponse::error(Self::INVALID_NAME);
        }

        info!("Leagues info tool called");
        client.get_leagues_info(&params.name).await
    }

    pub async fn execute(params: &LeaguesInfoParams, client: &SoccerClient) -> CallToolResult {
        json_result(Self::lookup(params, client).await.into_value())
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        client: &SoccerClient,
    ) -> Result<serde_json::Value, String> {
        let params: LeaguesInfoParams = parse_params(arguments).map_err(|e| e.to_string())?;
        super::common::to_http_response(Self::execute(&params, client).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<LeaguesInfoParams>(),
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
                let params: LeaguesInfoParams = parse_params(serde_json::Value::Object(args))
                    .map_err(McpError::from)?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ApiConfig;
    use crate::domains::soccer::mock::MockUpstream;
    use serde_json::json;

    fn client_for(upstream: &MockUpstream) -> SoccerClient {
        let config = ApiConfig::new("key", &upstream.base_url, "host").unwrap();
        SoccerClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_blank_name_returns_error_payload() {
        let upstream = MockUpstream::start(200, r#"{"id":1}"#).await;
        let client = client_for(&upstream);

        for name in ["", "   "] {
            let params = LeaguesInfoParams {
                name: name.to_string(),
            };
            let result = LeaguesInfoTool::execute(&params, &client).await;
            assert!(!result.is_error.unwrap_or(false));
            assert_eq!(
                result.structured_content,
                Some(json!({"error": "Parameter 'name' must be a non-empty string."}))
            );
        }
        assert!(upstream.requests().is_empty());
    }

    #[tokio::test]
    async fn test_valid_name_passes_payload_through() {
        let upstream = MockUpstream::start(200, r#"{"id":1}"#).await;
        let client = client_for(&upstream);

        let params = LeaguesInfoParams {
            name: "La Liga".to_string(),
        };
        let response = LeaguesInfoTool::lookup(&params, &client).await;
        assert_eq!(response, ApiResponse::Payload(json!({"id": 1})));

        let requests = upstream.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "/leagues");
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_http_handler_blank_name_is_not_an_rpc_error() {
        let upstream = MockUpstream::start(200, "{}").await;
        let client = client_for(&upstream);

        let result = LeaguesInfoTool::http_handler(json!({"name": ""}), &client)
            .await
            .unwrap();
        assert_eq!(
            result["structuredContent"]["error"],
            "Parameter 'name' must be a non-empty string."
        );
    }
}
