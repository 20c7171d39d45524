//! Plain-text rendering of core results.

use eta_core::analysis::{
    DuplicateSurnameCandidate, GroupRow, GroupTable, OverallStatistics, ScorerStanding,
    SummaryReport, TimelineEntry, ValidationReport, VenueCategories,
};
use eta_core::ranking::{PointsChange, TeamPoints};
use serde::Serialize;
use std::io::{self, Write};

const RULE_WIDTH: usize = 80;

fn heading(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

/// Pretty JSON followed by a newline.
pub fn json<T: Serialize>(out: &mut impl Write, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn overall(out: &mut impl Write, stats: &OverallStatistics) -> io::Result<()> {
    heading(out, "OVERALL RECORD")?;
    writeln!(out, "Matches:            {}", stats.total_matches)?;
    writeln!(out, "Wins:               {} ({:.1}%)", stats.wins, stats.win_percentage)?;
    if stats.wins_on_penalties > 0 {
        writeln!(out, "Wins on penalties:  {}", stats.wins_on_penalties)?;
    }
    writeln!(out, "Draws:              {}", stats.draws)?;
    writeln!(out, "Losses:             {}", stats.losses)?;
    writeln!(out, "Goals for:          {}", stats.total_goals_for)?;
    writeln!(out, "Goals against:      {}", stats.total_goals_against)?;
    writeln!(out, "Goal difference:    {:+}", stats.goal_difference)?;
    writeln!(out, "Goals per match:    {:.2}", stats.goals_per_match)?;
    writeln!(out, "Conceded per match: {:.2}", stats.goals_against_per_match)
}

fn row_header(out: &mut impl Write, key_label: &str) -> io::Result<()> {
    writeln!(
        out,
        "{:<28} {:>4} {:>4} {:>3} {:>4} {:>4} {:>5} {:>5} {:>6} {:>7}",
        key_label, "P", "W", "WP", "D", "L", "GF", "GA", "GD", "Win%"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

fn group_row(out: &mut impl Write, row: &GroupRow) -> io::Result<()> {
    writeln!(
        out,
        "{:<28} {:>4} {:>4} {:>3} {:>4} {:>4} {:>5} {:>5} {:>+6} {:>7.2}",
        truncate(&row.key, 28),
        row.matches_played,
        row.wins,
        row.wins_on_penalties,
        row.draws,
        row.losses,
        row.goals_for,
        row.goals_against,
        row.goal_difference,
        row.win_percentage
    )
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width - 1).collect();
        cut.push('…');
        cut
    }
}

pub fn group_table(out: &mut impl Write, table: &GroupTable) -> io::Result<()> {
    heading(out, &format!("RESULTS BY {}", table.dimension.name().to_uppercase()))?;
    if table.is_empty() {
        return writeln!(out, "No matches.");
    }
    row_header(out, table.dimension.name())?;
    for row in table.iter() {
        group_row(out, row)?;
        if row.venues.len() > 1 {
            writeln!(out, "    venues: {}", row.venues.join(", "))?;
        }
    }
    Ok(())
}

pub fn ranked_rows(out: &mut impl Write, title: &str, rows: &[GroupRow]) -> io::Result<()> {
    heading(out, title)?;
    if rows.is_empty() {
        return writeln!(out, "No opponents qualify.");
    }
    writeln!(
        out,
        "{:<4} {:<28} {:>4} {:>4} {:>4} {:>4} {:>7} {:>7} {:>7}",
        "#", "opposition", "P", "W", "D", "L", "Win%", "GF/m", "GD/m"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for (rank, row) in rows.iter().enumerate() {
        writeln!(
            out,
            "{:<4} {:<28} {:>4} {:>4} {:>4} {:>4} {:>7.2} {:>7.2} {:>+7.2}",
            rank + 1,
            truncate(&row.key, 28),
            row.matches_played,
            row.wins,
            row.draws,
            row.losses,
            row.win_percentage,
            row.avg_goals_for,
            row.avg_goal_difference
        )?;
    }
    Ok(())
}

pub fn leaderboard(out: &mut impl Write, standings: &[ScorerStanding]) -> io::Result<()> {
    heading(out, "GOALSCORERS")?;
    if standings.is_empty() {
        return writeln!(out, "No goalscorers recorded.");
    }
    writeln!(
        out,
        "{:<4} {:<32} {:>6} {:>6} {:>10}",
        "#", "player", "goals", "games", "per game"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for (rank, s) in standings.iter().enumerate() {
        writeln!(
            out,
            "{:<4} {:<32} {:>6} {:>6} {:>10.2}",
            rank + 1,
            truncate(&s.player, 32),
            s.goals,
            s.games_scored_in,
            s.goals_per_scoring_game
        )?;
    }
    Ok(())
}

pub fn venue_categories(out: &mut impl Write, categories: &VenueCategories) -> io::Result<()> {
    heading(out, "OPPONENTS BY VENUE TYPE")?;
    let buckets = [
        ("Home and away", &categories.home_and_away),
        ("Home only", &categories.home_only),
        ("Away only", &categories.away_only),
        ("Neutral only", &categories.neutral_only),
        ("Unclassified", &categories.unclassified),
    ];
    for (label, names) in buckets {
        if label == "Unclassified" && names.is_empty() {
            continue;
        }
        writeln!(out, "{} ({}):", label, names.len())?;
        for name in names.iter() {
            writeln!(out, "  - {}", name)?;
        }
    }
    Ok(())
}

pub fn player_timeline(out: &mut impl Write, player: &str, timeline: &[TimelineEntry]) -> io::Result<()> {
    heading(out, &format!("SCORING RECORD: {}", player))?;
    if timeline.is_empty() {
        return writeln!(out, "No goals found for '{}'.", player);
    }
    for entry in timeline {
        writeln!(
            out,
            "{}  {:<24} {:<20} {:>2} (total {:>3})  [{}]",
            entry.date,
            truncate(&entry.opposition, 24),
            truncate(&entry.venue, 20),
            entry.goals,
            entry.cumulative_goals,
            entry.scorers_text
        )?;
    }
    Ok(())
}

pub fn duplicates(out: &mut impl Write, candidates: &[DuplicateSurnameCandidate]) -> io::Result<()> {
    heading(out, "POSSIBLE SHARED SURNAMES")?;
    if candidates.is_empty() {
        return writeln!(out, "No scorer has a qualifying gap.");
    }
    for c in candidates {
        writeln!(
            out,
            "{}: {} goals in {} games, {} to {} ({:.1} years)",
            c.player, c.total_goals, c.total_games, c.first_goal, c.last_goal, c.career_span_years
        )?;
        writeln!(
            out,
            "    gap {:.1} years ({} to {}): {} goals/{} games before, {} goals/{} games after",
            c.max_gap_years,
            c.gap_start,
            c.gap_end,
            c.goals_before_gap,
            c.games_before_gap,
            c.goals_after_gap,
            c.games_after_gap
        )?;
    }
    Ok(())
}

pub fn validation(out: &mut impl Write, report: &ValidationReport) -> io::Result<()> {
    heading(out, "DATA VALIDATION")?;
    writeln!(out, "Matches checked: {}", report.matches_checked)?;
    writeln!(out, "Own goals:       {}", report.own_goals)?;
    writeln!(out)?;
    writeln!(out, "Goal tally discrepancies: {}", report.goal_tally_discrepancies.len())?;
    for d in &report.goal_tally_discrepancies {
        writeln!(
            out,
            "  {} v {}: score {} but scorers give {} [{}]",
            d.date,
            d.opposition,
            d.goals_for,
            d.parsed_goals,
            d.scorers_text.as_deref().unwrap_or("-")
        )?;
    }
    writeln!(out, "Result inconsistencies: {}", report.result_inconsistencies.len())?;
    for r in &report.result_inconsistencies {
        writeln!(
            out,
            "  {} v {}: {} with score {}-{}",
            r.date, r.opposition, r.result, r.goals_for, r.goals_against
        )?;
    }
    Ok(())
}

pub fn summary(out: &mut impl Write, report: &SummaryReport) -> io::Result<()> {
    heading(out, "SCOTLAND NATIONAL TEAM STATISTICS SUMMARY")?;
    if let (Some(first), Some(last)) = (report.first_match, report.last_match) {
        writeln!(out, "Data period: {} to {}", first, last)?;
    }

    let o = &report.overall;
    writeln!(out)?;
    writeln!(out, "OVERALL PERFORMANCE:")?;
    writeln!(out, "- Total Matches: {}", o.total_matches)?;
    writeln!(out, "- Wins: {} ({:.1}%)", o.wins, o.win_percentage)?;
    writeln!(out, "- Draws: {}", o.draws)?;
    writeln!(out, "- Losses: {}", o.losses)?;
    writeln!(out, "- Goals Scored: {}", o.total_goals_for)?;
    writeln!(out, "- Goals Conceded: {}", o.total_goals_against)?;
    writeln!(out, "- Goal Difference: {:+}", o.goal_difference)?;
    writeln!(out, "- Goals per Match: {:.2}", o.goals_per_match)?;

    if !report.by_venue_type.is_empty() {
        writeln!(out)?;
        writeln!(out, "PERFORMANCE BY HOME/AWAY:")?;
        for row in &report.by_venue_type {
            writeln!(
                out,
                "- {}: {}-{}-{} ({:.1}% win rate)",
                row.key, row.wins, row.draws, row.losses, row.win_percentage
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "MOST FREQUENT OPPONENTS:")?;
    for row in &report.most_frequent_opponents {
        writeln!(
            out,
            "- {}: {} matches ({:.1}% win rate)",
            row.key, row.matches_played, row.win_percentage
        )?;
    }

    if !report.top_scorers.is_empty() {
        writeln!(out)?;
        writeln!(out, "TOP 5 GOALSCORERS:")?;
        for s in &report.top_scorers {
            writeln!(
                out,
                "- {}: {} goals in {} matches ({:.2} per match)",
                s.player, s.goals, s.games_scored_in, s.goals_per_scoring_game
            )?;
        }
    }
    Ok(())
}

pub fn standings(out: &mut impl Write, standings: &[TeamPoints]) -> io::Result<()> {
    heading(out, "PROJECTED RANKING POINTS")?;
    for (rank, team) in standings.iter().enumerate() {
        writeln!(out, "{:<4} {:<28} {:>10.2}", rank + 1, team.team, team.points)?;
    }
    Ok(())
}

pub fn points_changes(out: &mut impl Write, changes: &[PointsChange]) -> io::Result<()> {
    for c in changes {
        writeln!(out, "{}  {} v {}", c.date, c.home, c.away)?;
        writeln!(
            out,
            "    {}: {:.2} -> {:.2} ({:+.2})",
            c.home,
            c.home_before,
            c.home_after,
            c.home_after - c.home_before
        )?;
        writeln!(
            out,
            "    {}: {:.2} -> {:.2} ({:+.2})",
            c.away,
            c.away_before,
            c.away_after,
            c.away_after - c.away_before
        )?;
    }
    Ok(())
}
