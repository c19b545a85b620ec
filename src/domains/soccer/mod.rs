//! Soccer data domain.
//!
//! Wraps the upstream sports-data REST API behind [`SoccerClient`], which
//! performs the team, league and standings lookups and folds every failure
//! into an [`ApiResponse::Error`].

mod client;
mod response;

#[cfg(test)]
pub(crate) mod mock;

pub use client::{
    HOST_HEADER, KEY_HEADER, LEAGUES_INFO_FAILURE, LEAGUES_PATH, STANDINGS_PATH,
    SoccerClient, TEAM_INFO_FAILURE, TEAM_STANDINGS_FAILURE, TEAMS_PATH,
};
pub use response::ApiResponse;
