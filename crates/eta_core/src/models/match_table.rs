use super::MatchRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Immutable, ordered set of loaded matches.
///
/// Statistics are always recomputed from this value; nothing is cached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchTable {
    records: Vec<MatchRecord>,
    /// Whether the source carried a venue-type column at all.
    has_venue_types: bool,
}

impl MatchTable {
    pub fn new(records: Vec<MatchRecord>, has_venue_types: bool) -> Self {
        Self {
            records,
            has_venue_types,
        }
    }

    /// Build from records, inferring venue-type availability from the rows.
    pub fn from_records(records: Vec<MatchRecord>) -> Self {
        let has_venue_types = records.iter().any(|r| r.venue_type.is_some());
        Self::new(records, has_venue_types)
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_venue_types(&self) -> bool {
        self.has_venue_types
    }

    /// First and last match dates.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.iter().map(|r| r.date).min()?;
        let last = self.records.iter().map(|r| r.date).max()?;
        Some((first, last))
    }
}

impl<'a> IntoIterator for &'a MatchTable {
    type Item = &'a MatchRecord;
    type IntoIter = std::slice::Iter<'a, MatchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
