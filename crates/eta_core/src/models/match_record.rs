use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a match was played relative to Scotland.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VenueType {
    Home,
    Away,
    Neutral,
}

impl VenueType {
    pub const ALL: [VenueType; 3] = [VenueType::Home, VenueType::Away, VenueType::Neutral];

    /// Parse a spreadsheet token (`H`, `Away`, `n`, ...).
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "h" | "home" => Some(VenueType::Home),
            "a" | "away" => Some(VenueType::Away),
            "n" | "neutral" => Some(VenueType::Neutral),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            VenueType::Home => "H",
            VenueType::Away => "A",
            VenueType::Neutral => "N",
        }
    }
}

impl fmt::Display for VenueType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VenueType::Home => write!(f, "Home"),
            VenueType::Away => write!(f, "Away"),
            VenueType::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Result of a match from Scotland's side.
///
/// `Unrecognized` keeps tokens the loader could not map; such rows count as
/// played but never as a win, draw or loss.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    Win,
    WinOnPenalties,
    Draw,
    Loss,
    Unrecognized(String),
}

impl MatchOutcome {
    /// Map a raw `Result` cell. Unknown tokens pass through unchanged.
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "W" | "Win" => MatchOutcome::Win,
            "WP" | "WinPens" | "WinOnPenalties" => MatchOutcome::WinOnPenalties,
            "D" | "Draw" => MatchOutcome::Draw,
            "L" | "Loss" => MatchOutcome::Loss,
            other => MatchOutcome::Unrecognized(other.to_string()),
        }
    }

    pub fn from_goals(goals_for: u32, goals_against: u32) -> Self {
        match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => MatchOutcome::Win,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
            std::cmp::Ordering::Less => MatchOutcome::Loss,
        }
    }

    /// Whether this outcome agrees with a scoreline.
    ///
    /// Unrecognized outcomes are never contradicted.
    pub fn is_consistent_with(&self, goals_for: u32, goals_against: u32) -> bool {
        match self {
            MatchOutcome::Win => goals_for > goals_against,
            MatchOutcome::WinOnPenalties | MatchOutcome::Draw => goals_for == goals_against,
            MatchOutcome::Loss => goals_for < goals_against,
            MatchOutcome::Unrecognized(_) => true,
        }
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatchOutcome::Win => write!(f, "Win"),
            MatchOutcome::WinOnPenalties => write!(f, "WinPens"),
            MatchOutcome::Draw => write!(f, "Draw"),
            MatchOutcome::Loss => write!(f, "Loss"),
            MatchOutcome::Unrecognized(raw) => write!(f, "{}", raw),
        }
    }
}

/// One loaded row of the results table. Never mutated after loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub date: NaiveDate,
    pub opposition: String,
    pub venue: String,
    pub venue_type: Option<VenueType>,
    pub competition: String,
    pub manager: String,
    /// Scotland goals; `None` when the source has no value for this row.
    pub goals_for: Option<u32>,
    pub goals_against: Option<u32>,
    /// Raw goalscorers cell, e.g. `"McGinn(2), Adams, og"`.
    pub scorers_text: Option<String>,
    pub result: MatchOutcome,
}

impl MatchRecord {
    pub fn goal_difference(&self) -> Option<i64> {
        match (self.goals_for, self.goals_against) {
            (Some(gf), Some(ga)) => Some(gf as i64 - ga as i64),
            _ => None,
        }
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Scorers cell with surrounding whitespace removed, if non-blank.
    pub fn scorers(&self) -> Option<&str> {
        self.scorers_text
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Whether the supplied result contradicts the scoreline.
    pub fn has_inconsistent_result(&self) -> bool {
        match (self.goals_for, self.goals_against) {
            (Some(gf), Some(ga)) => !self.result.is_consistent_with(gf, ga),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_token_mapping() {
        assert_eq!(MatchOutcome::from_token("W"), MatchOutcome::Win);
        assert_eq!(MatchOutcome::from_token(" WP "), MatchOutcome::WinOnPenalties);
        assert_eq!(MatchOutcome::from_token("D"), MatchOutcome::Draw);
        assert_eq!(MatchOutcome::from_token("L"), MatchOutcome::Loss);
        assert_eq!(MatchOutcome::from_token("Win"), MatchOutcome::Win);
        assert_eq!(
            MatchOutcome::from_token("Abandoned"),
            MatchOutcome::Unrecognized("Abandoned".to_string())
        );
    }

    #[test]
    fn test_result_from_goals() {
        assert_eq!(MatchOutcome::from_goals(2, 0), MatchOutcome::Win);
        assert_eq!(MatchOutcome::from_goals(1, 1), MatchOutcome::Draw);
        assert_eq!(MatchOutcome::from_goals(0, 3), MatchOutcome::Loss);
    }

    #[test]
    fn test_penalty_win_requires_level_score() {
        assert!(MatchOutcome::WinOnPenalties.is_consistent_with(1, 1));
        assert!(!MatchOutcome::WinOnPenalties.is_consistent_with(2, 1));
        assert!(!MatchOutcome::Win.is_consistent_with(1, 1));
    }

    #[test]
    fn test_venue_type_tokens() {
        assert_eq!(VenueType::from_token("H"), Some(VenueType::Home));
        assert_eq!(VenueType::from_token("away"), Some(VenueType::Away));
        assert_eq!(VenueType::from_token(" N "), Some(VenueType::Neutral));
        assert_eq!(VenueType::from_token("X"), None);
    }
}
