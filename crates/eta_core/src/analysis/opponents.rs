//! Opponent-centred views built on the opposition grouping.

use super::grouping::{group_by, Dimension, GroupRow};
use crate::models::{MatchTable, VenueType};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Opponents with at least `min_matches` games, lowest win percentage first.
/// Ties go to the opponent name, ascending.
pub fn toughest_opponents(table: &MatchTable, min_matches: u32, top_n: usize) -> Vec<GroupRow> {
    let mut rows: Vec<GroupRow> = group_by(table, Dimension::Opposition, None)
        .rows
        .into_iter()
        .filter(|r| r.matches_played >= min_matches)
        .collect();
    rows.sort_by(|a, b| {
        a.win_percentage
            .total_cmp(&b.win_percentage)
            .then_with(|| a.key.cmp(&b.key))
    });
    rows.truncate(top_n);
    rows
}

/// Opponents against whom the most goals were scored per match.
pub fn top_scoring_against(table: &MatchTable, top_n: usize) -> Vec<GroupRow> {
    let mut rows = group_by(table, Dimension::Opposition, None).rows;
    rows.sort_by(|a, b| {
        b.avg_goals_for
            .total_cmp(&a.avg_goals_for)
            .then_with(|| a.key.cmp(&b.key))
    });
    rows.truncate(top_n);
    rows
}

/// Opponents bucketed by the set of venue types they were played at.
///
/// Neutral games only decide the bucket when neither home nor away games
/// exist. Opponents whose rows carry no venue type at all land in
/// `unclassified`. Every list is sorted alphabetically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueCategories {
    pub home_and_away: Vec<String>,
    pub home_only: Vec<String>,
    pub away_only: Vec<String>,
    pub neutral_only: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unclassified: Vec<String>,
}

impl VenueCategories {
    /// Total opponents across all buckets.
    pub fn len(&self) -> usize {
        self.home_and_away.len()
            + self.home_only.len()
            + self.away_only.len()
            + self.neutral_only.len()
            + self.unclassified.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bucket name holding `opponent`, if any.
    pub fn bucket_of(&self, opponent: &str) -> Option<&'static str> {
        let buckets: [(&'static str, &Vec<String>); 5] = [
            ("home_and_away", &self.home_and_away),
            ("home_only", &self.home_only),
            ("away_only", &self.away_only),
            ("neutral_only", &self.neutral_only),
            ("unclassified", &self.unclassified),
        ];
        buckets
            .into_iter()
            .find(|(_, names)| names.iter().any(|n| n == opponent))
            .map(|(name, _)| name)
    }
}

pub fn categorize_opponents_by_venue_type(table: &MatchTable) -> VenueCategories {
    if !table.has_venue_types() {
        log::warn!("No venue type data available; cannot categorize opponents");
        return VenueCategories::default();
    }

    let mut seen: FxHashMap<&str, BTreeSet<VenueType>> = FxHashMap::default();
    for record in table {
        if record.opposition.is_empty() {
            continue;
        }
        let types = seen.entry(record.opposition.as_str()).or_default();
        if let Some(vt) = record.venue_type {
            types.insert(vt);
        }
    }

    let mut categories = VenueCategories::default();
    for (opponent, types) in seen {
        let home = types.contains(&VenueType::Home);
        let away = types.contains(&VenueType::Away);
        let bucket = match (home, away) {
            (true, true) => &mut categories.home_and_away,
            (true, false) => &mut categories.home_only,
            (false, true) => &mut categories.away_only,
            (false, false) if types.contains(&VenueType::Neutral) => &mut categories.neutral_only,
            (false, false) => &mut categories.unclassified,
        };
        bucket.push(opponent.to_string());
    }

    for bucket in [
        &mut categories.home_and_away,
        &mut categories.home_only,
        &mut categories.away_only,
        &mut categories.neutral_only,
        &mut categories.unclassified,
    ] {
        bucket.sort();
    }
    categories
}
