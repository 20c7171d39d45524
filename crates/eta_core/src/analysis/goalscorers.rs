//! Goalscorer views: leaderboard, per-player history, duplicate-surname scan.
//!
//! Every view matches players by their exact resolved key, so `"Gibson"` and
//! `"Gibson N"` never share goals or games.

use super::grouping::round2;
use crate::models::{MatchOutcome, MatchRecord, MatchTable};
use crate::scorers::{parse_scorers, sum_goals};
use chrono::{Datelike, NaiveDate};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

const DAYS_PER_YEAR: f64 = 365.25;

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorerStanding {
    pub player: String,
    pub goals: u32,
    /// Matches in which this exact key scored at least once.
    pub games_scored_in: u32,
    pub goals_per_scoring_game: f64,
    /// Own-goal sentinel or `"<Name> (og)"` row.
    pub own_goal: bool,
}

/// A match in which a given player scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerMatchGoals {
    pub date: NaiveDate,
    pub opposition: String,
    pub venue: String,
    pub competition: String,
    pub result: MatchOutcome,
    pub goals_for: Option<u32>,
    pub goals_against: Option<u32>,
    pub scorers_text: String,
    pub goals: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub date: NaiveDate,
    pub year: i32,
    pub opposition: String,
    pub venue: String,
    pub goals: u32,
    pub cumulative_goals: u32,
    pub scorers_text: String,
}

/// A scorer key whose goals are split by a long gap, suggesting two players
/// who share a surname.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuplicateSurnameCandidate {
    pub player: String,
    pub total_goals: u32,
    pub total_games: u32,
    pub career_span_years: f64,
    pub max_gap_years: f64,
    pub gap_start: NaiveDate,
    pub gap_end: NaiveDate,
    pub goals_before_gap: u32,
    pub games_before_gap: u32,
    pub goals_after_gap: u32,
    pub games_after_gap: u32,
    pub first_goal: NaiveDate,
    pub last_goal: NaiveDate,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn years_between(start: NaiveDate, end: NaiveDate) -> f64 {
    (end - start).num_days() as f64 / DAYS_PER_YEAR
}

/// Goals per resolved key in one match, in first-appearance order.
fn match_tallies(record: &MatchRecord) -> Vec<(String, u32, bool)> {
    let mut tallies: Vec<(String, u32, bool)> = Vec::new();
    for entry in parse_scorers(record.scorers()) {
        let own_goal = entry.is_own_goal();
        match tallies.iter_mut().find(|(key, _, _)| *key == entry.player_key) {
            Some(tally) => tally.1 = tally.1.saturating_add(entry.goals),
            None => tallies.push((entry.player_key, entry.goals, own_goal)),
        }
    }
    tallies
}

/// Goals and scoring games per resolved key, most goals first, then by name.
///
/// Own goals stay in the table, flagged with `own_goal`.
pub fn goalscorer_leaderboard(table: &MatchTable) -> Vec<ScorerStanding> {
    let mut totals: FxHashMap<String, ScorerStanding> = FxHashMap::default();
    for record in table {
        for (key, goals, own_goal) in match_tallies(record) {
            let standing = totals.entry(key.clone()).or_insert_with(|| ScorerStanding {
                player: key,
                goals: 0,
                games_scored_in: 0,
                goals_per_scoring_game: 0.0,
                own_goal,
            });
            standing.goals = standing.goals.saturating_add(goals);
            standing.games_scored_in += 1;
        }
    }

    let mut standings: Vec<ScorerStanding> = totals
        .into_values()
        .map(|mut s| {
            s.goals_per_scoring_game = round2(s.goals as f64 / s.games_scored_in as f64);
            s
        })
        .collect();
    standings.sort_by(|a, b| b.goals.cmp(&a.goals).then_with(|| a.player.cmp(&b.player)));
    standings
}

/// Goals credited to named Scotland players (own goals excluded).
pub fn named_player_goals(standings: &[ScorerStanding]) -> u32 {
    sum_goals(standings.iter().filter(|s| !s.own_goal).map(|s| s.goals))
}

/// Own goals credited to Scotland, attributed or not.
pub fn own_goal_total(standings: &[ScorerStanding]) -> u32 {
    sum_goals(standings.iter().filter(|s| s.own_goal).map(|s| s.goals))
}

/// Every match in which `player` (exact key) scored, oldest first.
pub fn player_scoring_details(table: &MatchTable, player: &str) -> Vec<PlayerMatchGoals> {
    let mut games: Vec<PlayerMatchGoals> = table
        .iter()
        .filter_map(|record| {
            let goals = match_tallies(record)
                .into_iter()
                .find(|(key, _, _)| key == player)
                .map(|(_, goals, _)| goals)?;
            Some(PlayerMatchGoals {
                date: record.date,
                opposition: record.opposition.clone(),
                venue: record.venue.clone(),
                competition: record.competition.clone(),
                result: record.result.clone(),
                goals_for: record.goals_for,
                goals_against: record.goals_against,
                scorers_text: record.scorers().unwrap_or_default().to_string(),
                goals,
            })
        })
        .collect();
    games.sort_by_key(|g| g.date);
    games
}

/// Scoring history with a running goal total.
pub fn player_career_timeline(table: &MatchTable, player: &str) -> Vec<TimelineEntry> {
    let mut cumulative = 0;
    player_scoring_details(table, player)
        .into_iter()
        .map(|game| {
            cumulative = sum_goals([cumulative, game.goals]);
            TimelineEntry {
                date: game.date,
                year: game.date.year(),
                opposition: game.opposition,
                venue: game.venue,
                goals: game.goals,
                cumulative_goals: cumulative,
                scorers_text: game.scorers_text,
            }
        })
        .collect()
}

/// Scorer keys with more than one goal whose longest gap between scoring
/// matches is at least `min_gap_years`. Longest gap first.
pub fn potential_duplicate_surnames(
    table: &MatchTable,
    min_gap_years: u32,
) -> Vec<DuplicateSurnameCandidate> {
    let candidates: FxHashSet<String> = goalscorer_leaderboard(table)
        .into_iter()
        .filter(|s| !s.own_goal && s.goals > 1 && s.games_scored_in >= 2)
        .map(|s| s.player)
        .collect();

    let mut games: FxHashMap<&str, Vec<(NaiveDate, u32)>> = FxHashMap::default();
    for record in table {
        for (key, goals, _) in match_tallies(record) {
            if let Some(player) = candidates.get(key.as_str()) {
                games.entry(player.as_str()).or_default().push((record.date, goals));
            }
        }
    }

    let mut flagged: Vec<DuplicateSurnameCandidate> = games
        .into_iter()
        .filter_map(|(player, mut dated)| {
            dated.sort_by_key(|(date, _)| *date);
            let (gap_start, gap_end) = dated
                .windows(2)
                .map(|w| (w[0].0, w[1].0))
                .fold(None, |best: Option<(NaiveDate, NaiveDate)>, (a, b)| match best {
                    Some((bs, be)) if (be - bs) >= (b - a) => Some((bs, be)),
                    _ => Some((a, b)),
                })?;
            let gap_years = years_between(gap_start, gap_end);
            if gap_years < min_gap_years as f64 {
                return None;
            }

            let (first_goal, last_goal) = (dated[0].0, dated[dated.len() - 1].0);
            let before = dated.iter().filter(|(d, _)| *d <= gap_start);
            let after = dated.iter().filter(|(d, _)| *d >= gap_end);
            Some(DuplicateSurnameCandidate {
                player: player.to_string(),
                total_goals: sum_goals(dated.iter().map(|(_, g)| *g)),
                total_games: dated.len() as u32,
                career_span_years: round1(years_between(first_goal, last_goal)),
                max_gap_years: round1(gap_years),
                gap_start,
                gap_end,
                goals_before_gap: sum_goals(before.clone().map(|(_, g)| *g)),
                games_before_gap: before.count() as u32,
                goals_after_gap: sum_goals(after.clone().map(|(_, g)| *g)),
                games_after_gap: after.count() as u32,
                first_goal,
                last_goal,
            })
        })
        .collect();

    flagged.sort_by(|a, b| {
        b.max_gap_years
            .total_cmp(&a.max_gap_years)
            .then_with(|| a.player.cmp(&b.player))
    });
    flagged
}
