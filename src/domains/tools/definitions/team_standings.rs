//! Team standings tool definition.
//!
//! Fetches a team's standings for a league and season. All three identifiers
//! must be strictly positive; anything else is answered with an error
//! payload and never reaches the network.

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

/// Parameters for the team standings tool.
///
/// Signed and wide enough for every JSON integer, so zero, negative values
/// and values beyond `u64` get past deserialization and are reported through
/// the error payload.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TeamStandingsParams {
    #[schemars(description = "Team ID (positive integer)")]
    pub team_id: i128,

    #[schemars(description = "League ID (positive integer)")]
    pub league_id: i128,

    #[schemars(description = "Season year, e.g. 2023 (positive integer)")]
    pub season: i128,
}

impl TeamStandingsParams {
    /// The three identifiers as unsigned values, if all are positive.
    pub fn positive(&self) -> Option<(u64, u64, u64)> {
        let check = |v: i128| u64::try_from(v).ok().filter(|v| *v > 0);
        Some((
            check(self.team_id)?,
            check(self.league_id)?,
            check(self.season)?,
        ))
    }
}

/// Team standings tool.
#[derive(Debug, Clone)]
pub struct TeamStandingsTool;

impl TeamStandingsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_team_standings";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Fetches the current standings of a specific team in a given league and season.";

    /// Error payload message when an identifier is not positive.
    pub const INVALID_IDS: &'static str =
        "Parameters 'team_id', 'league_id', and 'season' must be positive integers.";

    /// Validate the identifiers and forward to the client.
    #[instrument(skip_all, fields(team_id = %params.team_id, league_id = %params.league_id, season = %params.season))]
    pub async fn lookup(params: &TeamStandingsParams, client: &SoccerClient) -> ApiResponse {
        let Some((team_id, league_id, season)) = params.positive() else {
            warn!("Rejected non-positive standings parameters");
            return ApiResponse::error(Self::INVALID_IDS);
        };

        info!("Team standings tool called");
        client.get_team_standings(team_id, league_id, season).await
    }

    pub async fn execute(params: &TeamStandingsParams, client: &SoccerClient) -> CallToolResult {
        json_result(Self::lookup(params, client).await.into_value())
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        client: &SoccerClient,
    ) -> Result<serde_json::Value, String> {
        let params: TeamStandingsParams = parse_params(arguments).map_err(|e| e.to_string())?;
        super::common::to_http_response(Self::execute(&params, client).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<TeamStandingsParams>(),
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
                let params: TeamStandingsParams = parse_params(serde_json::Value::Object(args))
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

    fn params(team_id: i128, league_id: i128, season: i128) -> TeamStandingsParams {
        TeamStandingsParams {
            team_id,
            league_id,
            season,
        }
    }

    #[test]
    fn test_positive() {
        assert_eq!(params(5, 10, 2023).positive(), Some((5, 10, 2023)));
        assert_eq!(params(0, 10, 2023).positive(), None);
        assert_eq!(params(5, -1, 2023).positive(), None);
        assert_eq!(params(5, 10, 0).positive(), None);
        assert_eq!(params(5, 10, i128::from(u64::MAX) + 1).positive(), None);
    }

    #[tokio::test]
    async fn test_ids_beyond_i64_are_forwarded() {
        let upstream = MockUpstream::start(200, "{}").await;
        let client = client_for(&upstream);

        let parsed: TeamStandingsParams = parse_params(json!({
            "team_id": 5,
            "league_id": 10,
            "season": 9223372036854775808u64
        }))
        .unwrap();
        assert_eq!(parsed.season, 9223372036854775808);

        let response = TeamStandingsTool::lookup(&parsed, &client).await;
        assert_eq!(response.into_value(), json!({}));
        assert_eq!(
            upstream.requests()[0].query,
            "team=5&league=10&season=9223372036854775808"
        );
    }

    #[tokio::test]
    async fn test_non_positive_returns_error_without_request() {
        let upstream = MockUpstream::start(200, "{}").await;
        let client = client_for(&upstream);

        for p in [params(0, 10, 2023), params(5, -3, 2023), params(5, 10, -2023)] {
            let result = TeamStandingsTool::execute(&p, &client).await;
            assert_eq!(
                result.structured_content,
                Some(json!({
                    "error": "Parameters 'team_id', 'league_id', and 'season' must be positive integers."
                }))
            );
        }
        assert!(upstream.requests().is_empty());
    }

    #[tokio::test]
    async fn test_valid_ids_are_remapped() {
        let upstream = MockUpstream::start(200, r#"{"response":[{"league":{"id":10}}]}"#).await;
        let client = client_for(&upstream);

        let response = TeamStandingsTool::lookup(&params(5, 10, 2023), &client).await;
        assert_eq!(
            response.into_value(),
            json!({"response": [{"league": {"id": 10}}]})
        );

        let requests = upstream.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "/standings");
        assert_eq!(requests[0].query, "team=5&league=10&season=2023");
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_http_handler_rejects_non_integer() {
        let upstream = MockUpstream::start(200, "{}").await;
        let client = client_for(&upstream);

        let args = json!({"team_id": "five", "league_id": 10, "season": 2023});
        assert!(
            TeamStandingsTool::http_handler(args, &client)
                .await
                .is_err()
        );
        let args = json!({"team_id": 5, "league_id": 10, "season": 2023.5});
        assert!(
            TeamStandingsTool::http_handler(args, &client)
                .await
                .is_err()
        );
        assert!(upstream.requests().is_empty());
    }
}
