//! Own-goal key resolution.
//!
//! A name equal to `og` (any case) becomes [`OWN_GOAL_KEY`]. A name that merely
//! contains `og` has the literal `og`/`OG` removed and ` (og)` appended; if
//! nothing is left it falls back to [`OWN_GOAL_KEY`]. Surnames containing the
//! letters are affected too (`Hogg` → `Hg (og)`); historical reports depend on
//! this output.

use crate::models::{OWN_GOAL_KEY, OWN_GOAL_SUFFIX};

pub fn resolve_own_goal(name: &str) -> String {
    let name = name.trim();
    if !name.to_lowercase().contains("og") {
        return name.to_string();
    }
    if name.eq_ignore_ascii_case("og") {
        return OWN_GOAL_KEY.to_string();
    }

    let stripped = name.replace("og", "").replace("OG", "");
    let stripped = stripped.trim();
    if stripped.is_empty() {
        OWN_GOAL_KEY.to_string()
    } else {
        format!("{stripped}{OWN_GOAL_SUFFIX}")
    }
}
