//! Team and fixture CSVs for the ranking projection.
//!
//! - teams: `team,points`
//! - fixtures: `date,home,away,home_score,away_score,competition,penalty_winner,knockout`
//!
//! `competition` is a snake_case importance name such as `world_cup_qualifiers`.

use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;
use eta_core::ranking::{MatchImportance, RankingFixture, TeamPoints};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct FixtureRow {
    date: String,
    home: String,
    away: String,
    home_score: u32,
    away_score: u32,
    competition: String,
    #[serde(default)]
    penalty_winner: Option<String>,
    #[serde(default)]
    knockout: Option<String>,
}

fn parse_flag(value: Option<&str>) -> Result<bool> {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None | Some("") | Some("false") | Some("no") | Some("0") => Ok(false),
        Some("true") | Some("yes") | Some("1") => Ok(true),
        Some(other) => bail!("Invalid knockout flag '{}'", other),
    }
}

impl FixtureRow {
    fn into_fixture(self) -> Result<RankingFixture> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .with_context(|| format!("Invalid fixture date '{}'", self.date))?;
        let importance = MatchImportance::from_name(&self.competition)
            .ok_or_else(|| anyhow!("Unknown competition '{}'", self.competition))?;
        let penalty_winner = self
            .penalty_winner
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty());

        Ok(RankingFixture {
            date,
            home: self.home.trim().to_string(),
            away: self.away.trim().to_string(),
            home_score: self.home_score,
            away_score: self.away_score,
            importance,
            penalty_winner,
            knockout: parse_flag(self.knockout.as_deref())?,
        })
    }
}

pub fn read_teams<R: Read>(reader: R) -> Result<Vec<TeamPoints>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    reader
        .deserialize::<TeamPoints>()
        .enumerate()
        .map(|(ix, row)| row.with_context(|| format!("Invalid team row {}", ix + 1)))
        .collect()
}

pub fn read_fixtures<R: Read>(reader: R) -> Result<Vec<RankingFixture>> {
    let mut reader = csv::ReaderBuilder::new().from_reader(reader);
    reader
        .deserialize::<FixtureRow>()
        .enumerate()
        .map(|(ix, row)| {
            row.map_err(anyhow::Error::from)
                .and_then(FixtureRow::into_fixture)
                .with_context(|| format!("Invalid fixture row {}", ix + 1))
        })
        .collect()
}

pub fn read_teams_from_path(path: &Path) -> Result<Vec<TeamPoints>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open teams file: {}", path.display()))?;
    read_teams(file)
}

pub fn read_fixtures_from_path(path: &Path) -> Result<Vec<RankingFixture>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open fixtures file: {}", path.display()))?;
    read_fixtures(file)
}
