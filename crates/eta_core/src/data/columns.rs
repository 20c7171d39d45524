//! Header resolution for the results table.
//!
//! Each canonical field accepts a fixed list of header spellings. Matching
//! trims whitespace and ignores ASCII case.

use crate::error::{LoadError, Result};

pub const DATE: &[&str] = &["Date"];
pub const OPPOSITION: &[&str] = &["Opposition", "Opponent"];
pub const VENUE: &[&str] = &["Venue"];
pub const COMPETITION: &[&str] = &["Competition"];
pub const MANAGER: &[&str] = &["Manager"];
pub const GOALS_FOR: &[&str] = &["Scot", "Scotland_Goals", "Scotland Goals"];
pub const GOALS_AGAINST: &[&str] = &["Opp", "Opposition_Goals", "Opposition Goals"];
pub const VENUE_TYPE: &[&str] = &["Home\\Away", "Home/Away", "Home_Away", "venue_type"];
pub const RESULT: &[&str] = &["Result"];
pub const SCORERS: &[&str] = &["Scotland Scorers", "Scotland_Scorers", "Scorers"];

/// Column indices of the canonical fields within one raw table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub date: usize,
    pub opposition: usize,
    pub venue: Option<usize>,
    pub competition: Option<usize>,
    pub manager: Option<usize>,
    pub goals_for: Option<usize>,
    pub goals_against: Option<usize>,
    pub venue_type: Option<usize>,
    pub result: Option<usize>,
    pub scorers: Option<usize>,
}

fn find(headers: &[String], synonyms: &[&str]) -> Option<usize> {
    headers.iter().position(|header| {
        let header = header.trim().trim_start_matches('\u{feff}');
        synonyms.iter().any(|s| header.eq_ignore_ascii_case(s))
    })
}

impl ColumnMap {
    /// Map headers onto canonical fields.
    ///
    /// Fails with [`LoadError::MissingColumns`] when date or opposition is
    /// absent, or when the table has neither a result column nor both goal
    /// columns.
    pub fn resolve(headers: &[String]) -> Result<Self> {
        let date = find(headers, DATE);
        let opposition = find(headers, OPPOSITION);
        let goals_for = find(headers, GOALS_FOR);
        let goals_against = find(headers, GOALS_AGAINST);
        let result = find(headers, RESULT);

        let mut missing = Vec::new();
        if date.is_none() {
            missing.push("date".to_string());
        }
        if opposition.is_none() {
            missing.push("opposition".to_string());
        }
        if result.is_none() && (goals_for.is_none() || goals_against.is_none()) {
            missing.push("result".to_string());
            if goals_for.is_none() {
                missing.push("goals_for".to_string());
            }
            if goals_against.is_none() {
                missing.push("goals_against".to_string());
            }
        }

        let (Some(date), Some(opposition)) = (date, opposition) else {
            return Err(LoadError::MissingColumns {
                missing,
                available: headers.to_vec(),
            });
        };
        if !missing.is_empty() {
            return Err(LoadError::MissingColumns {
                missing,
                available: headers.to_vec(),
            });
        }

        let map = ColumnMap {
            date,
            opposition,
            venue: find(headers, VENUE),
            competition: find(headers, COMPETITION),
            manager: find(headers, MANAGER),
            goals_for,
            goals_against,
            venue_type: find(headers, VENUE_TYPE),
            result,
            scorers: find(headers, SCORERS),
        };
        map.warn_on_optional_gaps(headers);
        log::debug!("Resolved result columns: {:?}", map);
        Ok(map)
    }

    fn warn_on_optional_gaps(&self, headers: &[String]) {
        let optional = [
            ("venue", self.venue),
            ("competition", self.competition),
            ("manager", self.manager),
            ("venue_type", self.venue_type),
            ("scorers", self.scorers),
        ];
        let missing: Vec<&str> = optional
            .iter()
            .filter(|(_, ix)| ix.is_none())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            log::warn!(
                "Missing expected columns: {:?}; available columns: {:?}",
                missing,
                headers
            );
        }
    }
}
