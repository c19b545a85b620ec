//! Domains module containing the server's business logic.
//!
//! - **soccer**: client for the upstream sports-data provider
//! - **tools**: MCP tools that validate arguments and call the client

pub mod soccer;
pub mod tools;
