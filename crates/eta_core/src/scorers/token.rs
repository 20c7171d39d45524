//! Goal-count extraction for a single scorer token.

use once_cell::sync::Lazy;
use regex::Regex;

static PAREN_COUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\s*(\d+)\s*\)").expect("valid parenthetical count regex"));

static PENALTY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\(\s*p\s*\)").expect("valid penalty marker regex"));

/// Largest per-token count taken at face value. Anything above it is treated
/// like an unreadable count and scores one goal.
pub const MAX_TOKEN_GOALS: u32 = 20;

/// Which notation supplied the goal count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountNotation {
    /// `Name(2)` / `Name( 2 )`
    Parenthetical,
    /// `Name(p)`: marker stripped, one goal
    PenaltyMarker,
    /// Parentheses with anything else, kept verbatim
    ParenthesisedText,
    /// `Name[X]`: disambiguation tag, kept verbatim
    BracketTag,
    /// `Name 2`
    TrailingNumber,
    /// No count notation
    Plain,
}

/// Name and goal count of one token, before own-goal resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawScorer {
    pub name: String,
    pub goals: u32,
    pub notation: CountNotation,
}

fn parse_count(digits: &str, token: &str) -> u32 {
    match digits.parse::<u32>() {
        Ok(goals) if goals <= MAX_TOKEN_GOALS => goals,
        _ => {
            log::debug!("Implausible goal count in scorer token '{}', counting one", token);
            1
        }
    }
}

/// Extract the goal count from a trimmed token. The first matching form wins.
pub fn extract_count(token: &str) -> RawScorer {
    let token = token.trim();

    if token.contains('(') && token.contains(')') {
        if let Some(caps) = PAREN_COUNT_RE.captures(token) {
            let goals = parse_count(&caps[1], token);
            return RawScorer {
                name: PAREN_COUNT_RE.replace_all(token, "").trim().to_string(),
                goals,
                notation: CountNotation::Parenthetical,
            };
        }
        if PENALTY_RE.is_match(token) {
            return RawScorer {
                name: PENALTY_RE.replace_all(token, "").trim().to_string(),
                goals: 1,
                notation: CountNotation::PenaltyMarker,
            };
        }
        return RawScorer {
            name: token.to_string(),
            goals: 1,
            notation: CountNotation::ParenthesisedText,
        };
    }

    if token.contains('[') && token.contains(']') {
        return RawScorer {
            name: token.to_string(),
            goals: 1,
            notation: CountNotation::BracketTag,
        };
    }

    let parts: Vec<&str> = token.split_whitespace().collect();
    if let [name_parts @ .., last] = parts.as_slice() {
        if !name_parts.is_empty() && last.chars().all(|c| c.is_ascii_digit()) {
            return RawScorer {
                name: name_parts.join(" "),
                goals: parse_count(last, token),
                notation: CountNotation::TrailingNumber,
            };
        }
    }

    RawScorer {
        name: token.to_string(),
        goals: 1,
        notation: CountNotation::Plain,
    }
}
