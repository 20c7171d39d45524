//! Typed interpretation of individual string cells.

use crate::error::{LoadError, Result};
use crate::models::VenueType;
use chrono::{NaiveDate, NaiveDateTime};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d.%m.%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Blank or a spreadsheet-export null marker.
pub fn is_blank(cell: &str) -> bool {
    let cell = cell.trim();
    cell.is_empty() || cell.eq_ignore_ascii_case("nan")
}

pub fn parse_date(row: usize, column: &str, cell: &str) -> Result<NaiveDate> {
    let value = cell.trim();
    if is_blank(value) {
        return Err(LoadError::invalid_cell(row, column, cell, "missing date"));
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            return Ok(date);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(dt.date());
        }
    }
    Err(LoadError::invalid_cell(
        row,
        column,
        cell,
        "expected YYYY-MM-DD, DD/MM/YYYY or DD.MM.YYYY",
    ))
}

/// Goal count; integral floats such as `2.0` are accepted.
pub fn parse_goals(row: usize, column: &str, cell: &str) -> Result<Option<u32>> {
    let value = cell.trim();
    if is_blank(value) {
        return Ok(None);
    }
    if let Ok(goals) = value.parse::<u32>() {
        return Ok(Some(goals));
    }
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() && v < 0.0 => Err(LoadError::invalid_cell(
            row,
            column,
            cell,
            "goal count cannot be negative",
        )),
        Ok(v) if v.is_finite() && v.fract() == 0.0 && v <= u32::MAX as f64 => Ok(Some(v as u32)),
        _ => Err(LoadError::invalid_cell(
            row,
            column,
            cell,
            "expected a non-negative whole number",
        )),
    }
}

pub fn parse_venue_type(row: usize, column: &str, cell: &str) -> Result<Option<VenueType>> {
    if is_blank(cell) {
        return Ok(None);
    }
    VenueType::from_token(cell).map(Some).ok_or_else(|| {
        LoadError::invalid_cell(row, column, cell, "expected H, A or N")
    })
}

/// Trimmed text cell; blanks become an empty string.
pub fn text(cell: Option<&String>) -> String {
    match cell {
        Some(c) if !is_blank(c) => c.trim().to_string(),
        _ => String::new(),
    }
}
