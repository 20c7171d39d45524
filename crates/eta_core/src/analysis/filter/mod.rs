//! # Match Filters
//!
//! Row predicates applied before grouping. A [`MatchFilter`] is a small
//! expression tree over record fields; any `Fn(&MatchRecord) -> bool` closure
//! works as a predicate too.
//!
//! ```
//! use eta_core::analysis::filter::MatchFilter;
//! use eta_core::models::VenueType;
//!
//! // away and neutral games in World Cup qualifiers
//! let filter = MatchFilter::exclude_venue_type(VenueType::Home)
//!     .and(MatchFilter::competition("World Cup Qualifier"));
//! assert_eq!(
//!     filter,
//!     MatchFilter::parse("venue_type != H and competition == 'World Cup Qualifier'").unwrap()
//! );
//! ```

mod parse;

use crate::models::{MatchRecord, VenueType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Anything that can accept or reject a match row.
pub trait RowPredicate {
    fn matches(&self, record: &MatchRecord) -> bool;
}

impl<F> RowPredicate for F
where
    F: Fn(&MatchRecord) -> bool,
{
    fn matches(&self, record: &MatchRecord) -> bool {
        self(record)
    }
}

/// Free-text record fields usable in filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextField {
    Opposition,
    Venue,
    Competition,
    Manager,
}

impl TextField {
    fn value<'r>(&self, record: &'r MatchRecord) -> &'r str {
        match self {
            TextField::Opposition => &record.opposition,
            TextField::Venue => &record.venue,
            TextField::Competition => &record.competition,
            TextField::Manager => &record.manager,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CmpOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl CmpOp {
    pub fn test<T: Ord>(&self, lhs: &T, rhs: &T) -> bool {
        match self {
            CmpOp::Eq => lhs == rhs,
            CmpOp::Ne => lhs != rhs,
            CmpOp::Gt => lhs > rhs,
            CmpOp::Ge => lhs >= rhs,
            CmpOp::Lt => lhs < rhs,
            CmpOp::Le => lhs <= rhs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchFilter {
    /// Venue type is one of the listed values. Rows without one never match.
    VenueTypeIn(Vec<VenueType>),
    /// Exact (case-sensitive) match against any listed value.
    TextIn(TextField, Vec<String>),
    Date(CmpOp, NaiveDate),
    Year(CmpOp, i32),
    Not(Box<MatchFilter>),
    All(Vec<MatchFilter>),
    Any(Vec<MatchFilter>),
}

impl MatchFilter {
    pub fn venue_type(venue_type: VenueType) -> Self {
        MatchFilter::VenueTypeIn(vec![venue_type])
    }

    pub fn exclude_venue_type(venue_type: VenueType) -> Self {
        Self::venue_type(venue_type).negate()
    }

    pub fn competition(name: impl Into<String>) -> Self {
        MatchFilter::TextIn(TextField::Competition, vec![name.into()])
    }

    pub fn opposition(name: impl Into<String>) -> Self {
        MatchFilter::TextIn(TextField::Opposition, vec![name.into()])
    }

    pub fn manager(name: impl Into<String>) -> Self {
        MatchFilter::TextIn(TextField::Manager, vec![name.into()])
    }

    pub fn on_or_after(date: NaiveDate) -> Self {
        MatchFilter::Date(CmpOp::Ge, date)
    }

    pub fn before(date: NaiveDate) -> Self {
        MatchFilter::Date(CmpOp::Lt, date)
    }

    pub fn negate(self) -> Self {
        match self {
            MatchFilter::Not(inner) => *inner,
            other => MatchFilter::Not(Box::new(other)),
        }
    }

    pub fn and(self, other: MatchFilter) -> Self {
        match self {
            MatchFilter::All(mut parts) => {
                parts.push(other);
                MatchFilter::All(parts)
            }
            first => MatchFilter::All(vec![first, other]),
        }
    }

    pub fn or(self, other: MatchFilter) -> Self {
        match self {
            MatchFilter::Any(mut parts) => {
                parts.push(other);
                MatchFilter::Any(parts)
            }
            first => MatchFilter::Any(vec![first, other]),
        }
    }

    /// Parse a textual expression such as
    /// `venue_type in [A, N] and date >= 2000-01-01`.
    pub fn parse(expr: &str) -> Result<Self, crate::error::FilterError> {
        parse::parse_filter(expr)
    }
}

impl RowPredicate for MatchFilter {
    fn matches(&self, record: &MatchRecord) -> bool {
        match self {
            MatchFilter::VenueTypeIn(types) => record
                .venue_type
                .map(|vt| types.contains(&vt))
                .unwrap_or(false),
            MatchFilter::TextIn(field, values) => {
                let value = field.value(record);
                values.iter().any(|v| v == value)
            }
            MatchFilter::Date(op, date) => op.test(&record.date, date),
            MatchFilter::Year(op, year) => op.test(&record.year(), year),
            MatchFilter::Not(inner) => !inner.matches(record),
            MatchFilter::All(parts) => parts.iter().all(|p| p.matches(record)),
            MatchFilter::Any(parts) => parts.iter().any(|p| p.matches(record)),
        }
    }
}
