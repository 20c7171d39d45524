//! eta_report CLI
//!
//! Scotland results CSV → statistics tables (text or JSON)
//! Team + fixture CSVs → FIFA ranking points projection

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use eta_core::analysis::{Dimension, MatchAnalyzer, MatchFilter};
#[cfg(feature = "cli")]
use eta_report::{render, OutputFormat, ReportConfig};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "eta_report")]
#[command(about = "Scotland national team results statistics", long_about = None)]
struct Cli {
    /// Results CSV (overrides config and ETA_MATCHES_PATH)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// CSV delimiter (`,`, `;`, `tab`)
    #[arg(long, global = true)]
    delimiter: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Report(ReportCommand),

    /// Project FIFA ranking points over a fixture list
    Rank {
        /// CSV with `team,points`
        #[arg(long)]
        teams: PathBuf,

        /// Fixture CSV
        #[arg(long)]
        fixtures: PathBuf,
    },
}

/// Commands that read the results table.
#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum ReportCommand {
    /// Whole-history record
    Overall,

    /// Results grouped by a dimension
    Group {
        /// opposition, venue, city, competition, manager, year, venue_type
        #[arg(long, value_parser = parse_dimension)]
        by: Dimension,

        /// Row filter, e.g. "venue_type != H and date >= 2000-01-01"
        #[arg(long)]
        filter: Option<String>,
    },

    /// Opponents with the lowest win percentage
    Toughest {
        #[arg(long)]
        min_matches: Option<u32>,

        #[arg(long)]
        top: Option<usize>,
    },

    /// Opponents conceding the most goals per match
    TopScoring {
        #[arg(long)]
        top: Option<usize>,
    },

    /// Goalscorer leaderboard
    Scorers {
        /// Show only the first N rows
        #[arg(long)]
        top: Option<usize>,
    },

    /// Opponents bucketed by home/away/neutral history
    Venues,

    /// Scoring timeline for one player (exact name)
    Player { name: String },

    /// Scorer names that may cover more than one player
    Duplicates {
        #[arg(long)]
        min_gap_years: Option<u32>,
    },

    /// Cross-check scorers and results against the score columns
    Validate,

    /// Headline summary report
    Summary,
}

#[cfg(feature = "cli")]
fn parse_dimension(value: &str) -> std::result::Result<Dimension, String> {
    Dimension::from_name(value).ok_or_else(|| {
        let names: Vec<_> = Dimension::ALL.iter().map(|d| d.name()).collect();
        format!("unknown dimension '{}' (expected one of: {})", value, names.join(", "))
    })
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let mut config = ReportConfig::resolve(cli.config.as_deref())?;
    config.apply_source_override(cli.source.clone());
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(delimiter) = cli.delimiter.clone() {
        config.delimiter = delimiter;
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Rank { teams, fixtures } => run_rank(&mut out, &config, &teams, &fixtures),
        Commands::Report(command) => {
            let source = config.source_path()?;
            let table = eta_report::load_matches(source, config.delimiter_byte()?)?;
            run_report(&mut out, &config, MatchAnalyzer::new(&table), command)
        }
    }
}

#[cfg(feature = "cli")]
fn run_report(
    out: &mut impl std::io::Write,
    config: &ReportConfig,
    analyzer: MatchAnalyzer<'_>,
    command: ReportCommand,
) -> Result<()> {
    let as_json = config.format == OutputFormat::Json;

    match command {
        ReportCommand::Overall => {
            let stats = analyzer.overall_statistics();
            if as_json {
                render::json(out, &stats)?;
            } else {
                render::overall(out, &stats)?;
            }
        }

        ReportCommand::Group { by, filter } => {
            let grouped = match filter {
                Some(expr) => {
                    let filter = MatchFilter::parse(&expr)
                        .with_context(|| format!("Invalid filter: {}", expr))?;
                    analyzer.group_by_filtered(by, &filter)
                }
                None => analyzer.group_by(by),
            };
            if as_json {
                render::json(out, &grouped)?;
            } else {
                render::group_table(out, &grouped)?;
            }
        }

        ReportCommand::Toughest { min_matches, top } => {
            let min_matches = min_matches.unwrap_or(config.min_matches);
            let rows = analyzer.toughest_opponents(min_matches, top.unwrap_or(config.top_n));
            if as_json {
                render::json(out, &rows)?;
            } else {
                let title = format!("TOUGHEST OPPONENTS (min {} matches)", min_matches);
                render::ranked_rows(out, &title, &rows)?;
            }
        }

        ReportCommand::TopScoring { top } => {
            let rows = analyzer.top_scoring_against(top.unwrap_or(config.top_n));
            if as_json {
                render::json(out, &rows)?;
            } else {
                render::ranked_rows(out, "MOST GOALS SCORED PER MATCH", &rows)?;
            }
        }

        ReportCommand::Scorers { top } => {
            let mut standings = analyzer.goalscorer_leaderboard();
            if let Some(top) = top {
                standings.truncate(top);
            }
            if as_json {
                render::json(out, &standings)?;
            } else {
                render::leaderboard(out, &standings)?;
            }
        }

        ReportCommand::Venues => {
            let categories = analyzer.venue_categories();
            if as_json {
                render::json(out, &categories)?;
            } else {
                render::venue_categories(out, &categories)?;
            }
        }

        ReportCommand::Player { name } => {
            let timeline = analyzer.player_career_timeline(&name);
            if as_json {
                render::json(out, &timeline)?;
            } else {
                render::player_timeline(out, &name, &timeline)?;
            }
        }

        ReportCommand::Duplicates { min_gap_years } => {
            let flagged = analyzer
                .potential_duplicate_surnames(min_gap_years.unwrap_or(config.min_gap_years));
            if as_json {
                render::json(out, &flagged)?;
            } else {
                render::duplicates(out, &flagged)?;
            }
        }

        ReportCommand::Validate => {
            let report = analyzer.validate();
            if as_json {
                render::json(out, &report)?;
            } else {
                render::validation(out, &report)?;
            }
        }

        ReportCommand::Summary => {
            let report = analyzer.summary();
            if as_json {
                render::json(out, &report)?;
            } else {
                render::summary(out, &report)?;
            }
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn run_rank(
    out: &mut impl std::io::Write,
    config: &ReportConfig,
    teams: &std::path::Path,
    fixtures: &std::path::Path,
) -> Result<()> {
    use eta_core::ranking::RankingTable;

    let mut table = RankingTable::new(eta_report::read_teams_from_path(teams)?);
    let fixtures = eta_report::read_fixtures_from_path(fixtures)?;
    let changes = table
        .project(&fixtures)
        .context("Failed to apply fixtures")?;
    let standings = table.standings();

    if config.format == OutputFormat::Json {
        render::json(out, &serde_json::json!({ "changes": changes, "standings": standings }))?;
    } else {
        render::points_changes(out, &changes)?;
        render::standings(out, &standings)?;
    }
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("eta_report CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
