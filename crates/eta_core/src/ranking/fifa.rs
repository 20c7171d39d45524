//! FIFA "SUM" points projection.
//!
//! `P = P_before + I * (W - We)`, with `We = 1 / (10^(-Δ/600) + 1)`.

use crate::error::RankingError;
use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Rating-difference scale `c`.
pub const SCALE: f64 = 600.0;

/// Match importance coefficient `I`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchImportance {
    FriendlyOutsideWindow,
    FriendlyInsideWindow,
    NationsLeagueGroup,
    NationsLeagueFinals,
    ConfederationQualifiers,
    WorldCupQualifiers,
    ConfederationFinalsEarly,
    ConfederationFinalsLate,
    WorldCupEarly,
    WorldCupLate,
}

impl MatchImportance {
    pub const ALL: [MatchImportance; 10] = [
        MatchImportance::FriendlyOutsideWindow,
        MatchImportance::FriendlyInsideWindow,
        MatchImportance::NationsLeagueGroup,
        MatchImportance::NationsLeagueFinals,
        MatchImportance::ConfederationQualifiers,
        MatchImportance::WorldCupQualifiers,
        MatchImportance::ConfederationFinalsEarly,
        MatchImportance::ConfederationFinalsLate,
        MatchImportance::WorldCupEarly,
        MatchImportance::WorldCupLate,
    ];

    pub fn coefficient(&self) -> f64 {
        match self {
            MatchImportance::FriendlyOutsideWindow => 5.0,
            MatchImportance::FriendlyInsideWindow => 10.0,
            MatchImportance::NationsLeagueGroup => 15.0,
            MatchImportance::NationsLeagueFinals
            | MatchImportance::ConfederationQualifiers
            | MatchImportance::WorldCupQualifiers => 25.0,
            MatchImportance::ConfederationFinalsEarly => 35.0,
            MatchImportance::ConfederationFinalsLate => 40.0,
            MatchImportance::WorldCupEarly => 50.0,
            MatchImportance::WorldCupLate => 60.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MatchImportance::FriendlyOutsideWindow => "friendly_outside_window",
            MatchImportance::FriendlyInsideWindow => "friendly_inside_window",
            MatchImportance::NationsLeagueGroup => "nations_league_group",
            MatchImportance::NationsLeagueFinals => "nations_league_finals",
            MatchImportance::ConfederationQualifiers => "confederation_qualifiers",
            MatchImportance::WorldCupQualifiers => "world_cup_qualifiers",
            MatchImportance::ConfederationFinalsEarly => "confederation_finals_early",
            MatchImportance::ConfederationFinalsLate => "confederation_finals_late",
            MatchImportance::WorldCupEarly => "world_cup_early",
            MatchImportance::WorldCupLate => "world_cup_late",
        }
    }

    /// Case-insensitive lookup by snake_case name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|i| i.name() == name)
    }
}

/// One fixture to project, scores from the home side's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingFixture {
    pub date: NaiveDate,
    pub home: String,
    pub away: String,
    pub home_score: u32,
    pub away_score: u32,
    pub importance: MatchImportance,
    /// Shootout winner for a level score.
    pub penalty_winner: Option<String>,
    /// Knockout ties never lose points.
    pub knockout: bool,
}

impl RankingFixture {
    /// `W` for `team`: 1 win, 0.75 shootout win, 0.5 draw or shootout loss, 0 loss.
    pub fn result_value(&self, team: &str) -> f64 {
        let (own, other) = if team == self.home {
            (self.home_score, self.away_score)
        } else {
            (self.away_score, self.home_score)
        };
        match own.cmp(&other) {
            std::cmp::Ordering::Greater => 1.0,
            std::cmp::Ordering::Less => 0.0,
            std::cmp::Ordering::Equal if self.penalty_winner.as_deref() == Some(team) => 0.75,
            std::cmp::Ordering::Equal => 0.5,
        }
    }
}

/// Expected result `We` for a side holding `points` against `opponent_points`.
pub fn expected_result(points: f64, opponent_points: f64) -> f64 {
    let delta = points - opponent_points;
    1.0 / (10f64.powf(-delta / SCALE) + 1.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamPoints {
    pub team: String,
    pub points: f64,
}

/// Points movement caused by one fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsChange {
    pub date: NaiveDate,
    pub home: String,
    pub away: String,
    pub home_before: f64,
    pub home_after: f64,
    pub away_before: f64,
    pub away_after: f64,
}

/// Running standings that fixtures are applied to.
#[derive(Debug, Clone, Default)]
pub struct RankingTable {
    points: FxHashMap<String, f64>,
}

impl RankingTable {
    pub fn new(teams: impl IntoIterator<Item = TeamPoints>) -> Self {
        Self {
            points: teams
                .into_iter()
                .map(|t| (t.team, round2(t.points)))
                .collect(),
        }
    }

    pub fn points(&self, team: &str) -> Option<f64> {
        self.points.get(team).copied()
    }

    /// Apply one fixture.
    pub fn apply(&mut self, fixture: &RankingFixture) -> Result<PointsChange, RankingError> {
        let home_before = self
            .points(&fixture.home)
            .ok_or_else(|| RankingError::UnknownTeam(fixture.home.clone()))?;
        let away_before = self
            .points(&fixture.away)
            .ok_or_else(|| RankingError::UnknownTeam(fixture.away.clone()))?;
        if let Some(winner) = &fixture.penalty_winner {
            if *winner != fixture.home && *winner != fixture.away {
                return Err(RankingError::InvalidPenaltyWinner {
                    winner: winner.clone(),
                    home: fixture.home.clone(),
                    away: fixture.away.clone(),
                });
            }
        }

        let importance = fixture.importance.coefficient();
        let home_expected = expected_result(home_before, away_before);
        let away_expected = 1.0 - home_expected;
        let mut home_change = importance * (fixture.result_value(&fixture.home) - home_expected);
        let mut away_change = importance * (fixture.result_value(&fixture.away) - away_expected);
        if fixture.knockout {
            home_change = home_change.max(0.0);
            away_change = away_change.max(0.0);
        }

        let home_after = round2(home_before + home_change);
        let away_after = round2(away_before + away_change);
        self.points.insert(fixture.home.clone(), home_after);
        self.points.insert(fixture.away.clone(), away_after);
        log::debug!(
            "{} {}-{} {}: {:.2} -> {:.2}, {:.2} -> {:.2}",
            fixture.home,
            fixture.home_score,
            fixture.away_score,
            fixture.away,
            home_before,
            home_after,
            away_before,
            away_after
        );

        Ok(PointsChange {
            date: fixture.date,
            home: fixture.home.clone(),
            away: fixture.away.clone(),
            home_before,
            home_after,
            away_before,
            away_after,
        })
    }

    /// Apply fixtures oldest first. Same-day fixtures keep their given order.
    pub fn project(&mut self, fixtures: &[RankingFixture]) -> Result<Vec<PointsChange>, RankingError> {
        let mut ordered: Vec<&RankingFixture> = fixtures.iter().collect();
        ordered.sort_by_key(|f| f.date);
        ordered.into_iter().map(|f| self.apply(f)).collect()
    }

    /// Highest points first, ties by team name.
    pub fn standings(&self) -> Vec<TeamPoints> {
        let mut standings: Vec<TeamPoints> = self
            .points
            .iter()
            .map(|(team, points)| TeamPoints {
                team: team.clone(),
                points: *points,
            })
            .collect();
        standings.sort_by(|a, b| {
            b.points
                .total_cmp(&a.points)
                .then_with(|| a.team.cmp(&b.team))
        });
        standings
    }
}
