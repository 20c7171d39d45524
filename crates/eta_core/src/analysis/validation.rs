//! Data-quality pass: parsed scorer tallies and supplied results checked
//! against the score columns.
//!
//! Nothing here fails; every finding is returned for the caller to report.

use super::goalscorers::{goalscorer_leaderboard, own_goal_total};
use crate::models::{MatchOutcome, MatchTable};
use crate::scorers::{parse_scorers, total_goals};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Parsed scorer goals differ from the goals-for column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalTallyDiscrepancy {
    /// Position of the match in the loaded table.
    pub index: usize,
    pub date: NaiveDate,
    pub opposition: String,
    pub goals_for: u32,
    pub parsed_goals: u32,
    pub scorers_text: Option<String>,
}

impl GoalTallyDiscrepancy {
    /// Parsed minus recorded goals.
    pub fn difference(&self) -> i64 {
        self.parsed_goals as i64 - self.goals_for as i64
    }
}

/// Supplied result that contradicts the scoreline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultInconsistency {
    pub index: usize,
    pub date: NaiveDate,
    pub opposition: String,
    pub result: MatchOutcome,
    pub goals_for: u32,
    pub goals_against: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub matches_checked: usize,
    pub goal_tally_discrepancies: Vec<GoalTallyDiscrepancy>,
    pub result_inconsistencies: Vec<ResultInconsistency>,
    pub own_goals: u32,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.goal_tally_discrepancies.is_empty() && self.result_inconsistencies.is_empty()
    }
}

/// Check every match. Rows with an unknown goals-for value are not compared.
pub fn validate(table: &MatchTable) -> ValidationReport {
    let mut report = ValidationReport {
        matches_checked: table.len(),
        own_goals: own_goal_total(&goalscorer_leaderboard(table)),
        ..Default::default()
    };

    for (index, record) in table.iter().enumerate() {
        let entries = parse_scorers(record.scorers());

        if let Some(goals_for) = record.goals_for {
            let parsed_goals = total_goals(&entries);
            if parsed_goals != goals_for {
                report.goal_tally_discrepancies.push(GoalTallyDiscrepancy {
                    index,
                    date: record.date,
                    opposition: record.opposition.clone(),
                    goals_for,
                    parsed_goals,
                    scorers_text: record.scorers().map(str::to_string),
                });
            }
        }

        if let (true, Some(gf), Some(ga)) = (
            record.has_inconsistent_result(),
            record.goals_for,
            record.goals_against,
        ) {
            report.result_inconsistencies.push(ResultInconsistency {
                index,
                date: record.date,
                opposition: record.opposition.clone(),
                result: record.result.clone(),
                goals_for: gf,
                goals_against: ga,
            });
        }
    }

    if !report.is_clean() {
        log::info!(
            "Validation found {} goal tally discrepancies and {} result inconsistencies",
            report.goal_tally_discrepancies.len(),
            report.result_inconsistencies.len()
        );
    }
    report
}
