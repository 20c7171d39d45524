//! # Ranking Projection
//!
//! Projects FIFA men's ranking points over a list of fixtures. Independent of
//! the results table; callers provide starting points and fixtures.

pub mod fifa;

pub use fifa::{
    expected_result, MatchImportance, PointsChange, RankingFixture, RankingTable, TeamPoints,
};
