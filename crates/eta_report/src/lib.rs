//! eta_report - CSV reader and report rendering for `eta_core`
//!
//! - `csv_source` - results CSV → `RawTable` → `MatchTable`
//! - `config` - `ReportConfig` (JSON file, environment, defaults)
//! - `fixtures` - team / fixture CSVs for the ranking projection
//! - `render` - text tables and JSON output

pub mod config;
pub mod csv_source;
pub mod fixtures;
pub mod render;

pub use config::{OutputFormat, ReportConfig, SOURCE_ENV};
pub use csv_source::{delimiter_byte, load_matches, read_raw_table};
pub use fixtures::{read_fixtures_from_path, read_teams_from_path};
