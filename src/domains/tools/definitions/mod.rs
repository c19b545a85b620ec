//! Tool definitions module.
//!
//! One file per tool. Each tool exposes its metadata (`to_tool`), an rmcp
//! route (`create_route`) and an HTTP handler (`http_handler`).

pub mod common;
pub mod health;
pub mod leagues_info;
pub mod team_info;
pub mod team_standings;

pub use health::{HealthParams, HealthTool};
pub use leagues_info::{LeaguesInfoParams, LeaguesInfoTool};
pub use team_info::{TeamInfoParams, TeamInfoTool};
pub use team_standings::{TeamStandingsParams, TeamStandingsTool};
