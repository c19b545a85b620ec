//! HTTP client for the upstream sports-data provider.
//!
//! Every lookup is a single GET with query parameters and the two
//! `x-rapidapi-*` headers. Lookups never fail with `Err`: a non-200 status
//! becomes a fixed error message and any transport or JSON failure becomes
//! its display text. There are no retries and no timeout beyond reqwest's
//! defaults.

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use tracing::{error, info, instrument, warn};

use super::response::ApiResponse;
use crate::core::config::ApiConfig;
use crate::core::error::{Error, Result};

/// Header carrying the upstream host identifier.
pub const HOST_HEADER: &str = "x-rapidapi-host";

/// Header carrying the upstream API key.
pub const KEY_HEADER: &str = "x-rapidapi-key";

pub const TEAMS_PATH: &str = "/teams";
pub const LEAGUES_PATH: &str = "/leagues";
pub const STANDINGS_PATH: &str = "/standings";

pub const TEAM_INFO_FAILURE: &str = "Failed to fetch team info";
pub const LEAGUES_INFO_FAILURE: &str = "Failed to fetch leagues info";
pub const TEAM_STANDINGS_FAILURE: &str = "Failed to fetch team standings";

#[derive(Serialize)]
struct NameQuery<'a> {
    name: &'a str,
}

/// Upstream parameter names differ from the tool argument names.
#[derive(Serialize)]
struct StandingsQuery {
    team: u64,
    league: u64,
    season: u64,
}

/// Client for the soccer data API.
///
/// Holds the immutable configuration and authentication headers. Cloning is
/// cheap and shares the underlying connection pool.
#[derive(Clone)]
pub struct SoccerClient {
    http: reqwest::Client,
    base_url: String,
    headers: HeaderMap,
}

impl std::fmt::Debug for SoccerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoccerClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl SoccerClient {
    /// Create a client from validated API settings.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            headers: auth_headers(config)?,
        })
    }

    /// Authentication headers attached to every request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Look up a team by name via `GET /teams?name=...`.
    #[instrument(skip(self))]
    pub async fn get_team_info(&self, name: &str) -> ApiResponse {
        self.fetch(TEAMS_PATH, &NameQuery { name }, TEAM_INFO_FAILURE)
            .await
    }

    /// Look up leagues by name via `GET /leagues?name=...`.
    #[instrument(skip(self))]
    pub async fn get_leagues_info(&self, name: &str) -> ApiResponse {
        self.fetch(LEAGUES_PATH, &NameQuery { name }, LEAGUES_INFO_FAILURE)
            .await
    }

    /// Fetch standings via `GET /standings?team=...&league=...&season=...`.
    #[instrument(skip(self))]
    pub async fn get_team_standings(
        &self,
        team_id: u64,
        league_id: u64,
        season: u64,
    ) -> ApiResponse {
        let query = StandingsQuery {
            team: team_id,
            league: league_id,
            season,
        };
        self.fetch(STANDINGS_PATH, &query, TEAM_STANDINGS_FAILURE)
            .await
    }

    async fn fetch<Q>(&self, path: &str, query: &Q, failure: &str) -> ApiResponse
    where
        Q: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        info!("GET {}", url);

        let response = match self
            .http
            .get(&url)
            .headers(self.headers.clone())
            .query(query)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("Request to {} failed: {}", url, e);
                return ApiResponse::error(e.to_string());
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Upstream returned {} for {}", status, url);
            return ApiResponse::error(failure);
        }

        match response.json::<serde_json::Value>().await {
            Ok(body) => ApiResponse::Payload(body),
            Err(e) => {
                error!("Invalid JSON from {}: {}", url, e);
                ApiResponse::error(e.to_string())
            }
        }
    }
}

/// Build the `x-rapidapi-host` / `x-rapidapi-key` header pair.
fn auth_headers(config: &ApiConfig) -> Result<HeaderMap> {
    let host = HeaderValue::from_str(&config.api_version)
        .map_err(|e| Error::config(format!("API_VERSION is not a valid header value: {}", e)))?;
    let mut key = HeaderValue::from_str(&config.api_key)
        .map_err(|e| Error::config(format!("API_KEY is not a valid header value: {}", e)))?;
    key.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(HeaderName::from_static(HOST_HEADER), host);
    headers.insert(HeaderName::from_static(KEY_HEADER), key);
    Ok(headers)
}
