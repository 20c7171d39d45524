use super::grouping::percentage;
use crate::models::{MatchOutcome, MatchTable};
use serde::{Deserialize, Serialize};

/// Whole-history totals. Values are not rounded; goal totals saturate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverallStatistics {
    pub total_matches: u32,
    pub wins: u32,
    pub wins_on_penalties: u32,
    pub draws: u32,
    pub losses: u32,
    pub win_percentage: f64,
    pub total_goals_for: u32,
    pub total_goals_against: u32,
    pub goal_difference: i64,
    pub goals_per_match: f64,
    pub goals_against_per_match: f64,
}

pub fn overall_statistics(table: &MatchTable) -> OverallStatistics {
    let mut stats = OverallStatistics::default();
    for record in table {
        stats.total_matches += 1;
        match record.result {
            MatchOutcome::Win => stats.wins += 1,
            MatchOutcome::WinOnPenalties => stats.wins_on_penalties += 1,
            MatchOutcome::Draw => stats.draws += 1,
            MatchOutcome::Loss => stats.losses += 1,
            MatchOutcome::Unrecognized(_) => {}
        }
        stats.total_goals_for = stats
            .total_goals_for
            .saturating_add(record.goals_for.unwrap_or(0));
        stats.total_goals_against = stats
            .total_goals_against
            .saturating_add(record.goals_against.unwrap_or(0));
    }

    stats.goal_difference = stats.total_goals_for as i64 - stats.total_goals_against as i64;
    stats.win_percentage = percentage(stats.wins, stats.total_matches);
    if stats.total_matches > 0 {
        let n = stats.total_matches as f64;
        stats.goals_per_match = stats.total_goals_for as f64 / n;
        stats.goals_against_per_match = stats.total_goals_against as f64 / n;
    }
    stats
}
