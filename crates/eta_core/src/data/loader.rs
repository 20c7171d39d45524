//! Raw table → [`MatchTable`].
//!
//! Column names are resolved through [`ColumnMap`]; every row becomes one
//! [`MatchRecord`]. A missing `Result` column is derived from the goals, and
//! present result tokens are normalized (`W`, `WP`, `D`, `L`).

use super::cells::{self, is_blank};
use super::columns::ColumnMap;
use super::raw_table::RawTable;
use crate::error::{LoadError, Result};
use crate::models::{MatchOutcome, MatchRecord, MatchTable};

/// Load statistics, reported alongside the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub total_rows: usize,
    pub loaded: usize,
    pub skipped_blank: usize,
    pub inconsistent_results: usize,
}

/// Load a raw table into an immutable match table.
pub fn load(source: &RawTable) -> Result<MatchTable> {
    load_with_stats(source).map(|(table, _)| table)
}

/// Same as [`load`], also returning row counters.
pub fn load_with_stats(source: &RawTable) -> Result<(MatchTable, LoadStats)> {
    let columns = ColumnMap::resolve(&source.headers)?;
    let width = source.headers.len();
    let mut stats = LoadStats::default();
    let mut records = Vec::with_capacity(source.rows.len());

    for (ix, row) in source.rows.iter().enumerate() {
        stats.total_rows += 1;
        // 1-based data row number, header excluded
        let row_no = ix + 1;

        if row.len() > width {
            return Err(LoadError::RaggedRow {
                row: row_no,
                expected: width,
                found: row.len(),
            });
        }
        if row.iter().all(|c| is_blank(c)) {
            stats.skipped_blank += 1;
            log::debug!("Skipping blank row {}", row_no);
            continue;
        }

        let record = parse_row(&columns, &source.headers, row, row_no)?;
        if record.has_inconsistent_result() {
            stats.inconsistent_results += 1;
            log::warn!(
                "Row {}: result {} contradicts score {}-{} vs {}",
                row_no,
                record.result,
                record.goals_for.unwrap_or_default(),
                record.goals_against.unwrap_or_default(),
                record.opposition
            );
        }
        records.push(record);
    }

    stats.loaded = records.len();
    log::info!(
        "Loaded {} match records ({} blank rows skipped)",
        stats.loaded,
        stats.skipped_blank
    );

    Ok((
        MatchTable::new(records, columns.venue_type.is_some()),
        stats,
    ))
}

fn parse_row(
    columns: &ColumnMap,
    headers: &[String],
    row: &[String],
    row_no: usize,
) -> Result<MatchRecord> {
    let cell = |ix: usize| row.get(ix).map(String::as_str).unwrap_or("");
    let header = |ix: usize| headers[ix].trim();

    let date = cells::parse_date(row_no, header(columns.date), cell(columns.date))?;
    let goals_for = match columns.goals_for {
        Some(ix) => cells::parse_goals(row_no, header(ix), cell(ix))?,
        None => None,
    };
    let goals_against = match columns.goals_against {
        Some(ix) => cells::parse_goals(row_no, header(ix), cell(ix))?,
        None => None,
    };
    let venue_type = match columns.venue_type {
        Some(ix) => cells::parse_venue_type(row_no, header(ix), cell(ix))?,
        None => None,
    };

    let supplied = columns
        .result
        .map(cell)
        .filter(|c| !is_blank(c))
        .map(MatchOutcome::from_token);
    let result = match (supplied, goals_for, goals_against) {
        (Some(result), _, _) => result,
        (None, Some(gf), Some(ga)) => MatchOutcome::from_goals(gf, ga),
        (None, _, _) => MatchOutcome::Unrecognized(String::new()),
    };

    let scorers_text = columns
        .scorers
        .map(cell)
        .filter(|c| !is_blank(c))
        .map(|c| c.trim().to_string());

    Ok(MatchRecord {
        date,
        opposition: cells::text(row.get(columns.opposition)),
        venue: cells::text(columns.venue.and_then(|ix| row.get(ix))),
        venue_type,
        competition: cells::text(columns.competition.and_then(|ix| row.get(ix))),
        manager: cells::text(columns.manager.and_then(|ix| row.get(ix))),
        goals_for,
        goals_against,
        scorers_text,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VenueType;

    const HEADERS: &[&str] = &[
        "Date",
        "Opposition",
        "Venue",
        "Home\\Away",
        "Competition",
        "Manager",
        "Scot",
        "Opp",
        "Scotland Scorers",
    ];

    #[test]
    fn test_derives_result_and_goal_difference() {
        let raw = RawTable::from_slices(
            HEADERS,
            &[
                &["2021-09-04", "Moldova", "Hampden", "H", "WCQ", "Clarke", "1", "0", "Dykes"],
                &["2021-09-07", "Austria", "Vienna", "A", "WCQ", "Clarke", "1", "1", "og"],
                &["2021-10-09", "Israel", "Hampden", "H", "WCQ", "Clarke", "2", "3", ""],
            ],
        );
        let table = load(&raw).unwrap();
        assert_eq!(table.len(), 3);
        assert!(table.has_venue_types());

        let first = &table.records()[0];
        assert_eq!(first.result, MatchOutcome::Win);
        assert_eq!(first.goal_difference(), Some(1));
        assert_eq!(first.venue_type, Some(VenueType::Home));
        assert_eq!(first.scorers(), Some("Dykes"));

        assert_eq!(table.records()[1].result, MatchOutcome::Draw);
        assert_eq!(table.records()[2].result, MatchOutcome::Loss);
        assert_eq!(table.records()[2].scorers_text, None);
    }

    #[test]
    fn test_result_column_tokens_are_normalized() {
        let raw = RawTable::from_slices(
            &["Date", "Opposition", "Result"],
            &[
                &["2000-01-01", "A", "W"],
                &["2000-01-02", "B", "WP"],
                &["2000-01-03", "C", "D"],
                &["2000-01-04", "D", "L"],
                &["2000-01-05", "E", "Abandoned"],
            ],
        );
        let table = load(&raw).unwrap();
        let results: Vec<_> = table.iter().map(|r| r.result.clone()).collect();
        assert_eq!(
            results,
            vec![
                MatchOutcome::Win,
                MatchOutcome::WinOnPenalties,
                MatchOutcome::Draw,
                MatchOutcome::Loss,
                MatchOutcome::Unrecognized("Abandoned".to_string()),
            ]
        );
        assert!(!table.has_venue_types());
        assert_eq!(table.records()[0].goals_for, None);
    }

    #[test]
    fn test_supplied_result_is_kept_when_inconsistent() {
        let raw = RawTable::from_slices(
            &["Date", "Opposition", "Scot", "Opp", "Result"],
            &[&["2000-01-01", "A", "1", "1", "W"]],
        );
        let (table, stats) = load_with_stats(&raw).unwrap();
        assert_eq!(table.records()[0].result, MatchOutcome::Win);
        assert_eq!(stats.inconsistent_results, 1);
    }

    #[test]
    fn test_blank_rows_are_skipped_and_short_rows_padded() {
        let raw = RawTable::from_slices(
            &["Date", "Opposition", "Scot", "Opp", "Venue"],
            &[&["2000-01-01", "A", "2", "0"], &["", "", "", "", ""]],
        );
        let (table, stats) = load_with_stats(&raw).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(stats.skipped_blank, 1);
        assert_eq!(table.records()[0].venue, "");
    }

    #[test]
    fn test_missing_required_columns_fail() {
        let raw = RawTable::from_slices(&["Opposition", "Venue"], &[]);
        let err = load(&raw).unwrap_err();
        assert!(err.is_schema_error());
    }

    #[test]
    fn test_ragged_row_fails() {
        let raw = RawTable::from_slices(
            &["Date", "Opposition", "Result"],
            &[&["2000-01-01", "A", "W", "extra"]],
        );
        assert_eq!(
            load(&raw).unwrap_err(),
            LoadError::RaggedRow {
                row: 1,
                expected: 3,
                found: 4
            }
        );
    }

    #[test]
    fn test_invalid_goal_cell_names_column() {
        let raw = RawTable::from_slices(
            &["Date", "Opposition", "Scot", "Opp"],
            &[&["2000-01-01", "A", "x", "0"]],
        );
        match load(&raw).unwrap_err() {
            LoadError::InvalidCell { row, column, .. } => {
                assert_eq!(row, 1);
                assert_eq!(column, "Scot");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
