//! Transport layer for the MCP server.
//!
//! - **HTTP**: JSON-RPC over POST plus a `GET /health` probe - feature: `http` (default)
//! - **STDIO**: Standard input/output via rmcp - feature: `stdio`
//!
//! Each transport handles the connection lifecycle and delegates tool calls
//! to the [`McpServer`](crate::core::McpServer).

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::{DEFAULT_HTTP_PORT, HttpConfig};
