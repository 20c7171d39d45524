//! # Analysis Module
//!
//! Aggregate statistics over a loaded [`MatchTable`](crate::models::MatchTable).
//! Every function is a pure query; [`MatchAnalyzer`] bundles them behind one
//! borrowed handle.
//!
//! ## Submodules
//!
//! - `filter` - row predicates and the textual filter grammar
//! - `grouping` - per-dimension aggregate tables
//! - `city` - closed venue → city lookup
//! - `overall` - whole-history totals
//! - `opponents` - toughest / top-scoring opponents, venue-type buckets
//! - `goalscorers` - leaderboard, player history, duplicate surname scan
//! - `validation` - scorer tally and result cross-checks
//! - `summary` - headline report

pub mod analyzer;
pub mod city;
pub mod filter;
pub mod goalscorers;
pub mod grouping;
pub mod opponents;
pub mod overall;
pub mod summary;
pub mod validation;

#[cfg(test)]
mod worked_examples;

pub use analyzer::MatchAnalyzer;
pub use filter::{MatchFilter, RowPredicate};
pub use goalscorers::{DuplicateSurnameCandidate, PlayerMatchGoals, ScorerStanding, TimelineEntry};
pub use grouping::{group_by, Dimension, GroupRow, GroupTable};
pub use opponents::VenueCategories;
pub use overall::OverallStatistics;
pub use summary::SummaryReport;
pub use validation::{GoalTallyDiscrepancy, ResultInconsistency, ValidationReport};
