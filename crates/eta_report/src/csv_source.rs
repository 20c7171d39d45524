//! CSV export → [`RawTable`] → [`MatchTable`].
//!
//! The reader is flexible about row width so that ragged rows reach the
//! loader, which reports them with a row number.

use anyhow::{bail, Context, Result};
use eta_core::data::{load_with_stats, RawTable};
use eta_core::models::MatchTable;
use std::io::Read;
use std::path::Path;

/// Parse a delimiter setting: a single ASCII character, or `\t` / `tab`.
pub fn delimiter_byte(delimiter: &str) -> Result<u8> {
    match delimiter {
        "\\t" | "\t" | "tab" => Ok(b'\t'),
        d if d.len() == 1 && d.is_ascii() => Ok(d.as_bytes()[0]),
        other => bail!("Unsupported delimiter '{}': expected one ASCII character", other),
    }
}

/// Read CSV text from any reader.
pub fn read_raw_table<R: Read>(reader: R, delimiter: u8) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);

    let headers = reader
        .headers()
        .context("Failed to read CSV header row")?
        .iter()
        .map(str::to_string)
        .collect();
    let mut table = RawTable::new(headers);

    for (ix, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Failed to read CSV row {}", ix + 1))?;
        table.push_row(record.iter().map(str::to_string).collect());
    }
    Ok(table)
}

pub fn read_raw_table_from_path(path: &Path, delimiter: u8) -> Result<RawTable> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open results file: {}", path.display()))?;
    read_raw_table(file, delimiter)
        .with_context(|| format!("Failed to parse results file: {}", path.display()))
}

/// Read and load a results CSV.
pub fn load_matches(path: &Path, delimiter: u8) -> Result<MatchTable> {
    let raw = read_raw_table_from_path(path, delimiter)?;
    let (table, stats) = load_with_stats(&raw)
        .with_context(|| format!("Failed to load match records from {}", path.display()))?;
    if stats.inconsistent_results > 0 {
        log::warn!(
            "{} rows have a result that contradicts the score (see `validate`)",
            stats.inconsistent_results
        );
    }
    Ok(table)
}
