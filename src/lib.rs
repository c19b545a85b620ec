//! Soccer MCP Server Library
//!
//! A Model Context Protocol (MCP) server exposing soccer data lookups from a
//! RapidAPI-style sports-data provider as tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and transports
//! - **domains**
//!   - **soccer**: HTTP client for the upstream provider
//!   - **tools**: `health`, `get_team_info`, `get_leagues_info`, `get_team_standings`
//!
//! # Example
//!
//! ```rust,no_run
//! use soccer_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
