use thiserror::Error;

/// Errors raised while turning a raw table into a [`crate::models::MatchTable`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Missing required columns: {missing:?} (available: {available:?})")]
    MissingColumns {
        missing: Vec<String>,
        available: Vec<String>,
    },

    #[error("Row {row}: invalid {column} value '{value}': {reason}")]
    InvalidCell {
        row: usize,
        column: String,
        value: String,
        reason: String,
    },

    #[error("Row {row}: expected at most {expected} cells, found {found}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl LoadError {
    pub(crate) fn invalid_cell(
        row: usize,
        column: &str,
        value: &str,
        reason: impl Into<String>,
    ) -> Self {
        LoadError::InvalidCell {
            row,
            column: column.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether the error comes from the header rather than from a data row.
    pub fn is_schema_error(&self) -> bool {
        matches!(self, LoadError::MissingColumns { .. })
    }
}

/// Errors raised while parsing a textual match filter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Empty filter expression")]
    Empty,

    #[error("Unknown filter field: {0}")]
    UnknownField(String),

    #[error("Unsupported operator '{op}' for field {field}")]
    UnsupportedOperator { field: String, op: String },

    #[error("Malformed clause: {0}")]
    MalformedClause(String),

    #[error("Invalid {field} literal: {value}")]
    InvalidLiteral { field: String, value: String },
}

/// Errors raised by the ranking projection.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RankingError {
    #[error("Team not found in standings: {0}")]
    UnknownTeam(String),

    #[error("Penalty winner {winner} did not play in {home} v {away}")]
    InvalidPenaltyWinner {
        winner: String,
        home: String,
        away: String,
    },
}

pub type Result<T> = std::result::Result<T, LoadError>;
