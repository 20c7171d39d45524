//! # Goalscorer Parser
//!
//! Turns one free-text scorers cell into ordered [`ScorerEntry`] values.
//!
//! The cell is split on `,`; each trimmed token goes through count extraction
//! (`token`) and then own-goal resolution (`own_goal`):
//!
//! | token            | entry                     |
//! |------------------|---------------------------|
//! | `McGinn(2)`      | `McGinn` × 2              |
//! | `McAllister(p)`  | `McAllister` × 1          |
//! | `Hamilton J[I]`  | `Hamilton J[I]` × 1       |
//! | `Law 4`          | `Law` × 4                 |
//! | `og`             | `Own Goal (og)` × 1       |
//!
//! Parsing never fails. Malformed tokens become one-goal entries under
//! whatever text survives cleanup; tokens whose count is zero or whose name
//! is empty after cleanup produce nothing.

pub mod own_goal;
pub mod token;

pub use own_goal::resolve_own_goal;
pub use token::{extract_count, CountNotation, RawScorer, MAX_TOKEN_GOALS};

use crate::models::ScorerEntry;

/// Parse a scorers cell. `None` or blank input yields no entries.
pub fn parse_scorers(text: Option<&str>) -> Vec<ScorerEntry> {
    let Some(text) = text else {
        return Vec::new();
    };
    text.split(',').filter_map(parse_token).collect()
}

/// Parse a single comma-free token.
pub fn parse_token(token: &str) -> Option<ScorerEntry> {
    let token = token.trim();
    if token.is_empty() || token.eq_ignore_ascii_case("nan") {
        return None;
    }

    let raw = extract_count(token);
    if raw.goals == 0 {
        log::debug!("Dropping zero-count {:?} scorer token '{}'", raw.notation, token);
        return None;
    }

    let key = resolve_own_goal(&raw.name);
    if key.is_empty() {
        return None;
    }
    Some(ScorerEntry::new(key, raw.goals))
}

/// Total goals across parsed entries, own goals included.
pub fn total_goals(entries: &[ScorerEntry]) -> u32 {
    sum_goals(entries.iter().map(|e| e.goals))
}

/// Goal sum that saturates at `u32::MAX` instead of overflowing.
pub fn sum_goals<I: IntoIterator<Item = u32>>(goals: I) -> u32 {
    goals.into_iter().fold(0, u32::saturating_add)
}
