use super::filter::RowPredicate;
use super::goalscorers::{self, DuplicateSurnameCandidate, PlayerMatchGoals, ScorerStanding, TimelineEntry};
use super::grouping::{self, Dimension, GroupRow, GroupTable};
use super::opponents::{self, VenueCategories};
use super::overall::{self, OverallStatistics};
use super::summary::{self, SummaryReport};
use super::validation::{self, ValidationReport};
use crate::models::MatchTable;

/// Read-only query handle over a loaded [`MatchTable`].
///
/// Holds nothing but the borrow; every call recomputes from the records.
#[derive(Debug, Clone, Copy)]
pub struct MatchAnalyzer<'a> {
    table: &'a MatchTable,
}

impl<'a> MatchAnalyzer<'a> {
    pub fn new(table: &'a MatchTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a MatchTable {
        self.table
    }

    pub fn overall_statistics(&self) -> OverallStatistics {
        overall::overall_statistics(self.table)
    }

    pub fn group_by(&self, dimension: Dimension) -> GroupTable {
        grouping::group_by(self.table, dimension, None)
    }

    pub fn group_by_filtered(&self, dimension: Dimension, filter: &dyn RowPredicate) -> GroupTable {
        grouping::group_by(self.table, dimension, Some(filter))
    }

    pub fn toughest_opponents(&self, min_matches: u32, top_n: usize) -> Vec<GroupRow> {
        opponents::toughest_opponents(self.table, min_matches, top_n)
    }

    pub fn top_scoring_against(&self, top_n: usize) -> Vec<GroupRow> {
        opponents::top_scoring_against(self.table, top_n)
    }

    pub fn venue_categories(&self) -> VenueCategories {
        opponents::categorize_opponents_by_venue_type(self.table)
    }

    pub fn goalscorer_leaderboard(&self) -> Vec<ScorerStanding> {
        goalscorers::goalscorer_leaderboard(self.table)
    }

    /// Goals scored by named players, own goals excluded.
    pub fn named_player_goals(&self) -> u32 {
        goalscorers::named_player_goals(&self.goalscorer_leaderboard())
    }

    pub fn player_scoring_details(&self, player: &str) -> Vec<PlayerMatchGoals> {
        goalscorers::player_scoring_details(self.table, player)
    }

    pub fn player_career_timeline(&self, player: &str) -> Vec<TimelineEntry> {
        goalscorers::player_career_timeline(self.table, player)
    }

    pub fn potential_duplicate_surnames(&self, min_gap_years: u32) -> Vec<DuplicateSurnameCandidate> {
        goalscorers::potential_duplicate_surnames(self.table, min_gap_years)
    }

    pub fn validate(&self) -> ValidationReport {
        validation::validate(self.table)
    }

    pub fn summary(&self) -> SummaryReport {
        summary::summary(self.table)
    }
}
