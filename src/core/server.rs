//! MCP Server implementation.
//!
//! `McpServer` is the application context: it is built once at startup,
//! owns the soccer client and hands it to the tool router (STDIO) and the
//! tool registry (HTTP). Construction fails if the upstream API settings are
//! invalid, so a misconfigured process never exposes any tool.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use super::error::Result as ServerResult;
use crate::domains::{
    soccer::SoccerClient,
    tools::{ToolRegistry, build_tool_router},
};

/// Instructions sent to clients on initialization.
pub const INSTRUCTIONS: &str = "Soccer data server. Use get_team_info and get_leagues_info \
     to search by name, get_team_standings with numeric team, league and season IDs, \
     and health to check the service.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool registry for HTTP dispatch.
    registry: ToolRegistry,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> ServerResult<Self> {
        let client = Arc::new(SoccerClient::new(&config.api)?);
        let tool_router = build_tool_router::<Self>(client.clone());
        info!("Registered {} tools", tool_router.list_all().len());

        Ok(Self {
            config: Arc::new(config),
            registry: ToolRegistry::new(client),
            tool_router,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Number of registered tools.
    pub fn tool_count(&self) -> usize {
        self.tool_router.list_all().len()
    }

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<serde_json::Value, String> {
        self.registry.call_tool(name, arguments).await
    }
}

impl std::fmt::Debug for McpServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpServer")
            .field("name", &self.config.server.name)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
