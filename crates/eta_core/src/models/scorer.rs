use serde::{Deserialize, Serialize};

/// Leaderboard key used for unattributed own goals.
pub const OWN_GOAL_KEY: &str = "Own Goal (og)";

/// Suffix appended when an own-goal marker was attached to a name fragment.
pub const OWN_GOAL_SUFFIX: &str = " (og)";

/// One parsed goalscorer token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScorerEntry {
    /// Cleaned player name, [`OWN_GOAL_KEY`], or `"<Name> (og)"`.
    pub player_key: String,
    /// Always at least 1.
    pub goals: u32,
}

impl ScorerEntry {
    pub fn new(player_key: impl Into<String>, goals: u32) -> Self {
        Self {
            player_key: player_key.into(),
            goals,
        }
    }

    /// Own goal credited to Scotland, attributed or not.
    pub fn is_own_goal(&self) -> bool {
        self.player_key == OWN_GOAL_KEY || self.player_key.ends_with(OWN_GOAL_SUFFIX)
    }
}
