//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The list of available tools and their metadata
//! - HTTP dispatch for tool calls (when the http feature is enabled)

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::domains::soccer::SoccerClient;

use super::definitions::{HealthTool, LeaguesInfoTool, TeamInfoTool, TeamStandingsTool};

/// Tool registry - owns the client the lookup tools forward to.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    #[cfg(feature = "http")]
    client: Arc<SoccerClient>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    ///
    /// The client is only kept when HTTP dispatch is compiled in.
    pub fn new(client: Arc<SoccerClient>) -> Self {
        #[cfg(not(feature = "http"))]
        drop(client);

        Self {
            #[cfg(feature = "http")]
            client,
        }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            HealthTool::NAME,
            TeamInfoTool::NAME,
            LeaguesInfoTool::NAME,
            TeamStandingsTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            HealthTool::to_tool(),
            TeamInfoTool::to_tool(),
            LeaguesInfoTool::to_tool(),
            TeamStandingsTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// `Err` means the call was aborted (unknown tool or invalid arguments);
    /// lookup failures come back as `Ok` with an `{error}` payload.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        match name {
            HealthTool::NAME => HealthTool::http_handler(arguments),
            TeamInfoTool::NAME => TeamInfoTool::http_handler(arguments, &self.client).await,
            LeaguesInfoTool::NAME => LeaguesInfoTool::http_handler(arguments, &self.client).await,
            TeamStandingsTool::NAME => {
                TeamStandingsTool::http_handler(arguments, &self.client).await
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(super::ToolError::not_found(name).to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ApiConfig;

    fn test_client(base_url: &str) -> Arc<SoccerClient> {
        let config = ApiConfig::new("key", base_url, "host").unwrap();
        Arc::new(SoccerClient::new(&config).unwrap())
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(test_client("https://example.test"));
        let names = registry.tool_names();
        assert_eq!(
            names,
            vec![
                "health",
                "get_team_info",
                "get_leagues_info",
                "get_team_standings"
            ]
        );
    }

    #[test]
    fn test_all_tools_have_object_schemas() {
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), 4);
        for tool in tools {
            assert_eq!(
                tool.input_schema.get("type"),
                Some(&serde_json::json!("object"))
            );
            assert!(tool.description.is_some());
        }
    }

    #[test]
    fn test_standings_schema_requires_all_ids() {
        let tool = TeamStandingsTool::to_tool();
        let required = tool.input_schema.get("required").unwrap();
        for field in ["team_id", "league_id", "season"] {
            assert!(required.as_array().unwrap().contains(&serde_json::json!(field)));
        }
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_health() {
        let registry = ToolRegistry::new(test_client("https://example.test"));
        let result = registry
            .call_tool("health", serde_json::json!({}))
            .await
            .unwrap();
        assert_eq!(result["structuredContent"]["status"], "healthy");
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_unknown() {
        let registry = ToolRegistry::new(test_client("https://example.test"));
        let err = registry
            .call_tool("unknown", serde_json::json!({}))
            .await
            .unwrap_err();
        assert_eq!(err, "Unknown tool: unknown");
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_forwards_to_client() {
        let upstream = crate::domains::soccer::mock::MockUpstream::start(200, r#"{"id":1}"#).await;
        let registry = ToolRegistry::new(test_client(&upstream.base_url));

        let result = registry
            .call_tool("get_team_info", serde_json::json!({"name": "Liverpool"}))
            .await
            .unwrap();
        assert_eq!(result["structuredContent"], serde_json::json!({"id": 1}));
        assert_eq!(upstream.requests()[0].path, "/teams");
    }
}
