//! Tool Router - builds the rmcp ToolRouter used by the STDIO transport.
//!
//! Each tool knows how to create its own route; the lookup tools share one
//! client.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::soccer::SoccerClient;

use super::definitions::{HealthTool, LeaguesInfoTool, TeamInfoTool, TeamStandingsTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<SoccerClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(HealthTool::create_route())
        .with_route(TeamInfoTool::create_route(client.clone()))
        .with_route(LeaguesInfoTool::create_route(client.clone()))
        .with_route(TeamStandingsTool::create_route(client))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::config::ApiConfig;

    struct TestServer {}

    fn test_client() -> Arc<SoccerClient> {
        let config = ApiConfig::new("key", "https://example.test", "host").unwrap();
        Arc::new(SoccerClient::new(&config).unwrap())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let tools = router.list_all();
        assert_eq!(tools.len(), 4);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"health"));
        assert!(names.contains(&"get_team_info"));
        assert!(names.contains(&"get_leagues_info"));
        assert!(names.contains(&"get_team_standings"));
    }

    #[test]
    fn test_registry_matches_router() {
        let client = test_client();
        let registry = ToolRegistry::new(client.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(client);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
