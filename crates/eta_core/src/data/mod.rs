//! Results table loading.
//!
//! - `raw_table` - untyped header + string cells handed over by a reader
//! - `columns` - canonical field / header synonym resolution
//! - `cells` - typed cell parsing (dates, goals, venue type)
//! - `loader` - raw table → `MatchTable`

pub mod cells;
pub mod columns;
pub mod loader;
pub mod raw_table;

pub use columns::ColumnMap;
pub use loader::{load, load_with_stats, LoadStats};
pub use raw_table::RawTable;
