//! Tools domain module.
//!
//! Registers the four soccer tools, checks their arguments and forwards valid
//! calls to the [`SoccerClient`](crate::domains::soccer::SoccerClient).
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - rmcp ToolRouter builder for STDIO transport
//! - `registry.rs` - Tool metadata and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Argument validation
//!
//! Arguments are first deserialized into the tool's parameter struct; a
//! missing field or wrong JSON type aborts the call. Value constraints are
//! then checked per tool: `get_team_info` aborts on a blank name while
//! `get_leagues_info` and `get_team_standings` answer with an
//! `{"error": ...}` payload.

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
