//! Grouped aggregate tables (by opposition, venue, city, ...).

use super::city::city_for_venue;
use super::filter::RowPredicate;
use crate::models::{MatchOutcome, MatchRecord, MatchTable, VenueType};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Grouping dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Opposition,
    Venue,
    City,
    Competition,
    Manager,
    Year,
    VenueType,
}

impl Dimension {
    pub const ALL: [Dimension; 7] = [
        Dimension::Opposition,
        Dimension::Venue,
        Dimension::City,
        Dimension::Competition,
        Dimension::Manager,
        Dimension::Year,
        Dimension::VenueType,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Opposition => "opposition",
            Dimension::Venue => "venue",
            Dimension::City => "city",
            Dimension::Competition => "competition",
            Dimension::Manager => "manager",
            Dimension::Year => "year",
            Dimension::VenueType => "venue_type",
        }
    }

    /// Look up a dimension by name (`venue-type` and `home_away` accepted).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase().replace('-', "_");
        match name.as_str() {
            "home_away" => Some(Dimension::VenueType),
            other => Self::ALL.into_iter().find(|d| d.name() == other),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Aggregates for one group.
///
/// Averages and `win_percentage` are rounded to 2 decimal places. Goal averages
/// only consider rows whose goal values are known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRow {
    pub key: String,
    pub matches_played: u32,
    pub wins: u32,
    pub wins_on_penalties: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub avg_goals_for: f64,
    pub goals_against: u32,
    pub avg_goals_against: f64,
    pub goal_difference: i64,
    pub avg_goal_difference: f64,
    pub win_percentage: f64,
    /// Distinct venues behind a City row, sorted. Empty for other dimensions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub venues: Vec<String>,
}

/// Ordered group rows for one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupTable {
    pub dimension: Dimension,
    pub rows: Vec<GroupRow>,
}

impl GroupTable {
    pub fn empty(dimension: Dimension) -> Self {
        Self {
            dimension,
            rows: Vec::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&GroupRow> {
        self.rows.iter().find(|r| r.key == key)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GroupRow> {
        self.rows.iter()
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `part / whole * 100`, 0 when `whole` is 0.
pub(crate) fn percentage(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Ordered group key. `Year` and `VenueType` keep their natural ordering until
/// the rows are rendered to strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum GroupKey {
    Text(String),
    Year(i32),
    VenueType(VenueType),
}

impl GroupKey {
    fn of(dimension: Dimension, record: &MatchRecord) -> Option<Self> {
        let text = |s: &str| (!s.is_empty()).then(|| GroupKey::Text(s.to_string()));
        match dimension {
            Dimension::Opposition => text(&record.opposition),
            Dimension::Venue => text(&record.venue),
            Dimension::City => text(city_for_venue(&record.venue)),
            Dimension::Competition => text(&record.competition),
            Dimension::Manager => text(&record.manager),
            Dimension::Year => Some(GroupKey::Year(record.year())),
            Dimension::VenueType => record.venue_type.map(GroupKey::VenueType),
        }
    }

    fn label(&self) -> String {
        match self {
            GroupKey::Text(s) => s.clone(),
            GroupKey::Year(y) => y.to_string(),
            GroupKey::VenueType(vt) => vt.to_string(),
        }
    }
}

#[derive(Debug, Default)]
struct Accumulator {
    matches: u32,
    wins: u32,
    wins_on_penalties: u32,
    draws: u32,
    losses: u32,
    goals_for: u32,
    goals_for_rows: u32,
    goals_against: u32,
    goals_against_rows: u32,
    goal_difference: i64,
    goal_difference_rows: u32,
    venues: Vec<String>,
}

impl Accumulator {
    fn add(&mut self, record: &MatchRecord, track_venue: bool) {
        self.matches += 1;
        match record.result {
            MatchOutcome::Win => self.wins += 1,
            MatchOutcome::WinOnPenalties => self.wins_on_penalties += 1,
            MatchOutcome::Draw => self.draws += 1,
            MatchOutcome::Loss => self.losses += 1,
            MatchOutcome::Unrecognized(_) => {}
        }
        if let Some(gf) = record.goals_for {
            self.goals_for = self.goals_for.saturating_add(gf);
            self.goals_for_rows += 1;
        }
        if let Some(ga) = record.goals_against {
            self.goals_against = self.goals_against.saturating_add(ga);
            self.goals_against_rows += 1;
        }
        if let Some(gd) = record.goal_difference() {
            self.goal_difference += gd;
            self.goal_difference_rows += 1;
        }
        if track_venue && !self.venues.contains(&record.venue) {
            self.venues.push(record.venue.clone());
        }
    }

    fn into_row(mut self, key: String) -> GroupRow {
        let avg = |sum: f64, n: u32| if n == 0 { 0.0 } else { round2(sum / n as f64) };
        self.venues.sort();
        GroupRow {
            key,
            matches_played: self.matches,
            wins: self.wins,
            wins_on_penalties: self.wins_on_penalties,
            draws: self.draws,
            losses: self.losses,
            goals_for: self.goals_for,
            avg_goals_for: avg(self.goals_for as f64, self.goals_for_rows),
            goals_against: self.goals_against,
            avg_goals_against: avg(self.goals_against as f64, self.goals_against_rows),
            goal_difference: self.goal_difference,
            avg_goal_difference: avg(self.goal_difference as f64, self.goal_difference_rows),
            win_percentage: round2(percentage(self.wins, self.matches)),
            venues: self.venues,
        }
    }
}

/// Group the table by `dimension`, optionally restricted by `filter`.
///
/// A filter that selects no rows yields an empty table (logged at `warn`).
/// Rows with no value for the dimension (blank text, unknown venue type) are
/// left out.
pub fn group_by(
    table: &MatchTable,
    dimension: Dimension,
    filter: Option<&dyn RowPredicate>,
) -> GroupTable {
    let selected: Vec<&MatchRecord> = match filter {
        Some(filter) => {
            let rows: Vec<_> = table.iter().filter(|r| filter.matches(r)).collect();
            if rows.is_empty() {
                log::warn!("No matches selected by filter for {} grouping", dimension);
                return GroupTable::empty(dimension);
            }
            log::info!(
                "Applied filter: {} matches selected from {} total",
                rows.len(),
                table.len()
            );
            rows
        }
        None => table.iter().collect(),
    };

    group_records(selected, dimension)
}

fn group_records<'r>(
    records: impl IntoIterator<Item = &'r MatchRecord>,
    dimension: Dimension,
) -> GroupTable {
    let track_venue = dimension == Dimension::City;
    let mut groups: FxHashMap<GroupKey, Accumulator> = FxHashMap::default();
    for record in records {
        if let Some(key) = GroupKey::of(dimension, record) {
            groups.entry(key).or_default().add(record, track_venue);
        }
    }

    let mut keyed: Vec<(GroupKey, GroupRow)> = groups
        .into_iter()
        .map(|(key, acc)| {
            let label = key.label();
            (key, acc.into_row(label))
        })
        .collect();
    keyed.sort_by(|(ka, a), (kb, b)| compare_rows(dimension, ka, a, kb, b));

    GroupTable {
        dimension,
        rows: keyed.into_iter().map(|(_, row)| row).collect(),
    }
}

fn compare_rows(
    dimension: Dimension,
    key_a: &GroupKey,
    a: &GroupRow,
    key_b: &GroupKey,
    b: &GroupRow,
) -> Ordering {
    let primary = match dimension {
        Dimension::Opposition | Dimension::Competition | Dimension::Manager => {
            b.matches_played.cmp(&a.matches_played)
        }
        Dimension::Venue => b
            .matches_played
            .cmp(&a.matches_played)
            .then(b.wins.cmp(&a.wins))
            .then(b.draws.cmp(&a.draws)),
        Dimension::City => b
            .matches_played
            .cmp(&a.matches_played)
            .then(b.win_percentage.total_cmp(&a.win_percentage)),
        Dimension::Year => key_b.cmp(key_a),
        Dimension::VenueType => Ordering::Equal,
    };
    primary.then_with(|| key_a.cmp(key_b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::filter::MatchFilter;
    use chrono::NaiveDate;

    fn record(
        date: &str,
        opposition: &str,
        venue: &str,
        venue_type: Option<VenueType>,
        score: (u32, u32),
    ) -> MatchRecord {
        MatchRecord {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            opposition: opposition.to_string(),
            venue: venue.to_string(),
            venue_type,
            competition: "Friendly".to_string(),
            manager: "Clarke".to_string(),
            goals_for: Some(score.0),
            goals_against: Some(score.1),
            scorers_text: None,
            result: MatchOutcome::from_goals(score.0, score.1),
        }
    }

    fn sample() -> MatchTable {
        MatchTable::from_records(vec![
            record("2019-03-21", "Kazakhstan", "Astana", Some(VenueType::Away), (0, 3)),
            record("2019-06-08", "Cyprus", "Hampden", Some(VenueType::Home), (2, 1)),
            record("2019-09-06", "Russia", "Hampden", Some(VenueType::Home), (1, 2)),
            record("2020-10-08", "Israel", "Hampden", Some(VenueType::Home), (0, 0)),
            record("2021-06-14", "Czech Republic", "Hampden", Some(VenueType::Home), (0, 2)),
            record("2021-06-18", "England", "Wembley", Some(VenueType::Away), (0, 0)),
            record("2021-09-01", "Denmark", "Copenhagen", Some(VenueType::Away), (0, 2)),
            record("2021-11-15", "Denmark", "Hampden", Some(VenueType::Home), (2, 0)),
        ])
    }

    #[test]
    fn test_opposition_sorted_by_matches_then_name() {
        let table = group_by(&sample(), Dimension::Opposition, None);
        let keys: Vec<_> = table.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys[0], "Denmark");
        assert_eq!(&keys[1..3], &["Cyprus", "Czech Republic"]);

        let denmark = table.get("Denmark").unwrap();
        assert_eq!(denmark.matches_played, 2);
        assert_eq!(denmark.wins, 1);
        assert_eq!(denmark.losses, 1);
        assert_eq!(denmark.goal_difference, 0);
        assert_eq!(denmark.avg_goals_for, 1.0);
        assert_eq!(denmark.win_percentage, 50.0);
    }

    #[test]
    fn test_year_sorted_descending() {
        let table = group_by(&sample(), Dimension::Year, None);
        let keys: Vec<_> = table.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["2021", "2020", "2019"]);
        assert_eq!(table.get("2021").unwrap().matches_played, 4);
    }

    #[test]
    fn test_city_merges_stadiums() {
        let mut records = sample().records().to_vec();
        records.push(record("1999-01-01", "Wales", "Ibrox", Some(VenueType::Home), (1, 0)));
        let table = group_by(&MatchTable::from_records(records), Dimension::City, None);

        let glasgow = table.get("Glasgow").unwrap();
        assert_eq!(glasgow.matches_played, 5);
        assert_eq!(glasgow.venues, vec!["Hampden".to_string(), "Ibrox".to_string()]);
        assert_eq!(table.rows[0].key, "Glasgow");
        assert!(table.get("London").is_some());
        assert!(table.get("Astana").unwrap().venues == vec!["Astana".to_string()]);
    }

    #[test]
    fn test_venue_type_order_and_missing_rows() {
        let mut records = sample().records().to_vec();
        records.push(record("2022-01-01", "Peru", "Somewhere", None, (2, 0)));
        records.push(record("2022-06-01", "Ukraine", "Cardiff", Some(VenueType::Neutral), (1, 1)));
        let table = group_by(&MatchTable::from_records(records), Dimension::VenueType, None);

        let keys: Vec<_> = table.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["Home", "Away", "Neutral"]);
        let total: u32 = table.iter().map(|r| r.matches_played).sum();
        assert_eq!(total, 9);
    }

    #[test]
    fn test_venue_sort_uses_wins_then_draws() {
        let table = MatchTable::from_records(vec![
            record("2000-01-01", "A", "Pittodrie", None, (0, 1)),
            record("2000-01-02", "B", "Pittodrie", None, (0, 0)),
            record("2000-01-03", "C", "Tynecastle", None, (1, 0)),
            record("2000-01-04", "D", "Tynecastle", None, (0, 1)),
        ]);
        let grouped = group_by(&table, Dimension::Venue, None);
        assert_eq!(grouped.rows[0].key, "Tynecastle");
        assert_eq!(grouped.rows[1].key, "Pittodrie");
    }

    #[test]
    fn test_filter_restricts_rows() {
        let filter = MatchFilter::exclude_venue_type(VenueType::Home);
        let table = group_by(&sample(), Dimension::Opposition, Some(&filter));
        assert_eq!(table.len(), 3);
        assert!(table.get("Cyprus").is_none());
        assert_eq!(table.get("Denmark").unwrap().matches_played, 1);
    }

    #[test]
    fn test_filter_selecting_nothing_returns_empty_table() {
        let filter = MatchFilter::competition("World Cup");
        let table = group_by(&sample(), Dimension::Opposition, Some(&filter));
        assert!(table.is_empty());
        assert_eq!(table.dimension, Dimension::Opposition);
    }

    #[test]
    fn test_unknown_goals_are_excluded_from_averages() {
        let mut missing = record("2000-01-01", "Wales", "Hampden", None, (0, 0));
        missing.goals_for = None;
        missing.goals_against = None;
        missing.result = MatchOutcome::Win;
        let table = MatchTable::from_records(vec![
            missing,
            record("2001-01-01", "Wales", "Hampden", None, (3, 1)),
        ]);
        let row = group_by(&table, Dimension::Opposition, None).rows.remove(0);
        assert_eq!(row.matches_played, 2);
        assert_eq!(row.wins, 2);
        assert_eq!(row.goals_for, 3);
        assert_eq!(row.avg_goals_for, 3.0);
        assert_eq!(row.avg_goal_difference, 2.0);
    }

    #[test]
    fn test_penalty_wins_and_unrecognized_results() {
        let mut pens = record("2020-11-12", "Serbia", "Belgrade", None, (1, 1));
        pens.result = MatchOutcome::WinOnPenalties;
        let mut odd = record("2020-11-15", "Serbia", "Belgrade", None, (0, 0));
        odd.result = MatchOutcome::Unrecognized("Abandoned".to_string());
        let row = group_by(&MatchTable::from_records(vec![pens, odd]), Dimension::Opposition, None)
            .rows
            .remove(0);
        assert_eq!(row.matches_played, 2);
        assert_eq!(row.wins, 0);
        assert_eq!(row.wins_on_penalties, 1);
        assert_eq!(row.draws, 0);
        assert_eq!(row.win_percentage, 0.0);
    }

    #[test]
    fn test_json_shape() {
        let table = group_by(&sample(), Dimension::Opposition, None);
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["dimension"], "opposition");
        assert_eq!(json["rows"][0]["key"], "Denmark");
        assert!(json["rows"][0].get("venues").is_none());

        let cities = serde_json::to_value(group_by(&sample(), Dimension::City, None)).unwrap();
        assert!(cities["rows"][0]["venues"].is_array());
    }

    #[test]
    fn test_dimension_names_round_trip() {
        for dimension in Dimension::ALL {
            assert_eq!(Dimension::from_name(dimension.name()), Some(dimension));
        }
        assert_eq!(Dimension::from_name("Home-Away"), Some(Dimension::VenueType));
        assert_eq!(Dimension::from_name("stadium"), None);
    }

    #[test]
    fn test_huge_goal_cells_saturate() {
        let table = MatchTable::from_records(vec![
            record("1990-01-01", "Norway", "Oslo", Some(VenueType::Away), (u32::MAX, 0)),
            record("1990-06-01", "Norway", "Hampden", Some(VenueType::Home), (1, 0)),
        ]);
        let rows = group_by(&table, Dimension::Opposition, None);
        let norway = rows.get("Norway").unwrap();
        assert_eq!(norway.matches_played, 2);
        assert_eq!(norway.goals_for, u32::MAX);
        assert_eq!(norway.goal_difference, u32::MAX as i64 + 1);
    }
}
