//! # eta_core - Scotland National Team Results Analysis
//!
//! Loads a results table, parses the free-text goalscorers column and derives
//! aggregate statistics. No file or network I/O: callers hand over a
//! [`data::RawTable`] and get typed, immutable results back.
//!
//! ## Features
//! - Header synonym tolerance (`Scot`, `Scotland_Goals`, `Home\Away`, ...)
//! - Goalscorer notations: `Name(2)`, `Name 2`, `Name(p)`, `Name[I]`, own goals
//! - Grouped tables by opposition, venue, city, competition, manager, year and
//!   venue type, with composable row filters
//! - Leaderboard, player histories, duplicate-surname scan, validation pass
//! - FIFA ranking points projection
//!
//! ```
//! use eta_core::analysis::{Dimension, MatchAnalyzer};
//! use eta_core::data::{load, RawTable};
//!
//! let raw = RawTable::from_slices(
//!     &["Date", "Opposition", "Venue", "Competition", "Manager", "Scot", "Opp", "Scorers"],
//!     &[&["2021-09-04", "Moldova", "Hampden", "WC Qualifier", "Clarke", "1", "0", "Dykes"]],
//! );
//! let table = load(&raw)?;
//! let analyzer = MatchAnalyzer::new(&table);
//! assert_eq!(analyzer.group_by(Dimension::Opposition).rows[0].wins, 1);
//! assert_eq!(analyzer.goalscorer_leaderboard()[0].player, "Dykes");
//! # Ok::<(), eta_core::error::LoadError>(())
//! ```

pub mod analysis;
pub mod data;
pub mod error;
pub mod models;
pub mod ranking;
pub mod scorers;

pub use analysis::{Dimension, MatchAnalyzer, MatchFilter};
pub use data::{load, RawTable};
pub use error::{FilterError, LoadError, RankingError, Result};
pub use models::{MatchOutcome, MatchRecord, MatchTable, ScorerEntry, VenueType};
pub use scorers::parse_scorers;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
