pub mod match_record;
pub mod match_table;
pub mod scorer;

pub use match_record::{MatchOutcome, MatchRecord, VenueType};
pub use match_table::MatchTable;
pub use scorer::{ScorerEntry, OWN_GOAL_KEY, OWN_GOAL_SUFFIX};
