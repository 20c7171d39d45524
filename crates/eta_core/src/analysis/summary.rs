use super::goalscorers::{goalscorer_leaderboard, ScorerStanding};
use super::grouping::{group_by, Dimension, GroupRow};
use super::overall::{overall_statistics, OverallStatistics};
use crate::models::MatchTable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const SUMMARY_TOP: usize = 5;

/// Headline figures for a whole results table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub first_match: Option<NaiveDate>,
    pub last_match: Option<NaiveDate>,
    pub overall: OverallStatistics,
    /// Empty when the table carries no venue types.
    pub by_venue_type: Vec<GroupRow>,
    pub most_frequent_opponents: Vec<GroupRow>,
    pub top_scorers: Vec<ScorerStanding>,
}

pub fn summary(table: &MatchTable) -> SummaryReport {
    let (first_match, last_match) = table.date_range().unzip();

    let by_venue_type = if table.has_venue_types() {
        group_by(table, Dimension::VenueType, None).rows
    } else {
        Vec::new()
    };

    let mut most_frequent_opponents = group_by(table, Dimension::Opposition, None).rows;
    most_frequent_opponents.truncate(SUMMARY_TOP);

    let mut top_scorers = goalscorer_leaderboard(table);
    top_scorers.truncate(SUMMARY_TOP);

    SummaryReport {
        first_match,
        last_match,
        overall: overall_statistics(table),
        by_venue_type,
        most_frequent_opponents,
        top_scorers,
    }
}
