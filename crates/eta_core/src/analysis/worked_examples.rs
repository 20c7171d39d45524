//! End-to-end checks through the loader, parser and analyzer.

use super::*;
use crate::data::{load, RawTable};
use crate::models::{MatchOutcome, MatchRecord, MatchTable, VenueType};
use chrono::NaiveDate;
use proptest::prelude::*;

const HEADERS: &[&str] = &[
    "Date",
    "Opposition",
    "Venue",
    "Home/Away",
    "Competition",
    "Manager",
    "Scotland_Goals",
    "Opposition_Goals",
    "Result",
    "Scotland Scorers",
];

fn history() -> MatchTable {
    let rows: &[&[&str]] = &[
        &["2019-09-09", "Belgium", "Hampden", "H", "Euro Qualifier", "Clarke", "0", "4", "L", ""],
        &["2011-09-06", "Lithuania", "Hampden", "H", "Euro Qualifier", "Levein", "1", "0", "", "Naismith"],
        &["2010-09-03", "Lithuania", "Kaunas", "A", "Euro Qualifier", "Levein", "0", "0", "", ""],
        &["2007-09-08", "Lithuania", "Hampden", "H", "Euro Qualifier", "McLeish", "3", "1", "W", "Boyd, McManus, McFadden"],
        &["2021-03-25", "Austria", "Vienna", "A", "WC Qualifier", "Clarke", "2", "2", "D", "Hanley, McGinn"],
        &["2020-11-12", "Serbia", "Belgrade", "A", "Euro Playoff", "Clarke", "1", "1", "WP", "Christie"],
        &["2021-06-22", "Croatia", "Hampden", "H", "Euro", "Clarke", "1", "3", "L", "McGregor"],
        &["2021-09-04", "Moldova", "Hampden", "H", "WC Qualifier", "Clarke", "1", "0", "W", "Dykes"],
        &["2022-06-01", "Ukraine", "Hampden", "N", "WC Playoff", "Clarke", "1", "3", "L", "McGregor"],
        &["2023-03-25", "Spain", "Hampden", "H", "Euro Qualifier", "Clarke", "2", "0", "W", "McTominay(2)"],
        &["2023-10-12", "Spain", "Seville", "A", "Euro Qualifier", "Clarke", "0", "2", "L", ""],
        &["2024-06-14", "Germany", "Munich", "N", "Euro", "Clarke", "1", "5", "L", "og"],
    ];
    load(&RawTable::from_slices(HEADERS, rows)).unwrap()
}

#[test]
fn test_lithuania_opposition_row() {
    let table = history();
    let analyzer = MatchAnalyzer::new(&table);
    let rows = analyzer.group_by(Dimension::Opposition);
    let lithuania = rows.get("Lithuania").unwrap();
    assert_eq!(lithuania.matches_played, 3);
    assert_eq!(lithuania.wins, 2);
    assert_eq!(lithuania.draws, 1);
    assert_eq!(lithuania.losses, 0);
    assert_eq!(lithuania.win_percentage, 66.67);
    assert_eq!(lithuania.goals_for, 4);
    assert_eq!(rows.rows[0].key, "Lithuania");
}

#[test]
fn test_lithuania_row_keeps_supplied_win_on_level_score() {
    let rows: &[&[&str]] = &[
        &["2003-04-02", "Lithuania", "Kaunas", "A", "Euro Qualifier", "Vogts", "2", "0", "W", "Dickov, Fletcher"],
        &["2003-10-11", "Lithuania", "Hampden", "H", "Euro Qualifier", "Vogts", "1", "1", "W", "Fletcher"],
        &["2006-09-02", "Lithuania", "Kaunas", "A", "Euro Qualifier", "Smith", "0", "0", "D", ""],
    ];
    let table = load(&RawTable::from_slices(HEADERS, rows)).unwrap();
    let analyzer = MatchAnalyzer::new(&table);

    let grouped = analyzer.group_by(Dimension::Opposition);
    let lithuania = grouped.get("Lithuania").unwrap();
    assert_eq!(lithuania.matches_played, 3);
    assert_eq!(lithuania.wins, 2);
    assert_eq!(lithuania.draws, 1);
    assert_eq!(lithuania.losses, 0);
    assert_eq!(lithuania.win_percentage, 66.67);
    assert_eq!(lithuania.goals_for, 3);

    let report = analyzer.validate();
    assert_eq!(report.result_inconsistencies.len(), 1);
    assert_eq!(report.result_inconsistencies[0].index, 1);
    assert!(report.goal_tally_discrepancies.is_empty());
}

#[test]
fn test_huge_goal_cells_load_and_aggregate() {
    let rows: &[&[&str]] = &[
        &["1872-11-30", "England", "Hamilton Crescent", "H", "Friendly", "", "4294967295", "0", "", ""],
        &["1873-03-08", "England", "The Oval", "A", "Friendly", "", "1", "0", "", "Law(4294967295)"],
    ];
    let table = load(&RawTable::from_slices(HEADERS, rows)).unwrap();
    let analyzer = MatchAnalyzer::new(&table);

    let stats = analyzer.overall_statistics();
    assert_eq!(stats.total_matches, 2);
    assert_eq!(stats.wins, 2);
    assert_eq!(stats.total_goals_for, u32::MAX);

    let grouped = analyzer.group_by(Dimension::Opposition);
    assert_eq!(grouped.get("England").unwrap().goals_for, u32::MAX);
    assert_eq!(analyzer.group_by(Dimension::City).len(), 2);

    let board = analyzer.goalscorer_leaderboard();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].goals, 1);
    assert_eq!(analyzer.validate().goal_tally_discrepancies.len(), 1);
}

#[test]
fn test_home_only_opponent() {
    let records: Vec<MatchRecord> = (0..5)
        .map(|i| MatchRecord {
            date: NaiveDate::from_ymd_opt(1980 + i, 4, 1).unwrap(),
            opposition: "Northern Ireland".to_string(),
            venue: "Hampden".to_string(),
            venue_type: Some(VenueType::Home),
            competition: "Home Championship".to_string(),
            manager: "Stein".to_string(),
            goals_for: Some(1),
            goals_against: Some(1),
            scorers_text: None,
            result: MatchOutcome::Draw,
        })
        .collect();
    let table = MatchTable::from_records(records);
    let cats = MatchAnalyzer::new(&table).venue_categories();
    assert_eq!(cats.home_only, vec!["Northern Ireland"]);
    assert!(cats.home_and_away.is_empty());
    assert!(cats.away_only.is_empty());
    assert!(cats.neutral_only.is_empty());
}

#[test]
fn test_toughest_with_unreachable_threshold_is_empty() {
    let table = history();
    assert!(MatchAnalyzer::new(&table).toughest_opponents(50, 5).is_empty());
}

#[test]
fn test_queries_are_idempotent() {
    let table = history();
    let analyzer = MatchAnalyzer::new(&table);
    assert_eq!(analyzer.overall_statistics(), analyzer.overall_statistics());
    assert_eq!(analyzer.goalscorer_leaderboard(), analyzer.goalscorer_leaderboard());
    for dimension in Dimension::ALL {
        assert_eq!(analyzer.group_by(dimension), analyzer.group_by(dimension));
    }
}

#[test]
fn test_scorer_totals_match_goals_for() {
    let table = history();
    let analyzer = MatchAnalyzer::new(&table);
    let board = analyzer.goalscorer_leaderboard();
    let scored: u32 = board.iter().map(|s| s.goals).sum();
    let goals_for: u32 = table.iter().filter_map(|r| r.goals_for).sum();
    assert_eq!(scored, goals_for);
    assert!(analyzer.validate().is_clean());

    // the own goal is in the tally but not among named players
    assert_eq!(analyzer.named_player_goals(), goals_for - 1);
    assert_eq!(analyzer.validate().own_goals, 1);
}

#[test]
fn test_loaded_results_and_penalty_win() {
    let table = history();
    let stats = MatchAnalyzer::new(&table).overall_statistics();
    assert_eq!(stats.total_matches, 12);
    assert_eq!(stats.wins, 4);
    assert_eq!(stats.wins_on_penalties, 1);
    assert_eq!(stats.draws, 2);
    assert_eq!(stats.losses, 5);
}

#[test]
fn test_games_scored_in_uses_exact_names() {
    let mk = |date: &str, scorers: &str| MatchRecord {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        opposition: "Wales".to_string(),
        venue: "Ninian Park".to_string(),
        venue_type: Some(VenueType::Away),
        competition: "Home Championship".to_string(),
        manager: String::new(),
        goals_for: Some(2),
        goals_against: Some(0),
        scorers_text: Some(scorers.to_string()),
        result: MatchOutcome::Win,
    };
    let table = MatchTable::from_records(vec![
        mk("1900-01-01", "Gibson 2"),
        mk("1926-01-01", "Gibson N, Gallacher"),
        mk("1927-01-01", "Gibson N(2)"),
    ]);
    let board = MatchAnalyzer::new(&table).goalscorer_leaderboard();

    let gibson = board.iter().find(|s| s.player == "Gibson").unwrap();
    assert_eq!(gibson.goals, 2);
    assert_eq!(gibson.games_scored_in, 1);

    let gibson_n = board.iter().find(|s| s.player == "Gibson N").unwrap();
    assert_eq!(gibson_n.goals, 3);
    assert_eq!(gibson_n.games_scored_in, 2);
    assert_eq!(gibson_n.goals_per_scoring_game, 1.5);
}

#[test]
fn test_comma_separated_number_is_not_a_count() {
    let mk = |date: &str, scorers: &str| MatchRecord {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        opposition: "Ireland".to_string(),
        venue: "Solitude".to_string(),
        venue_type: Some(VenueType::Away),
        competition: "Home Championship".to_string(),
        manager: String::new(),
        goals_for: Some(2),
        goals_against: Some(0),
        scorers_text: Some(scorers.to_string()),
        result: MatchOutcome::Win,
    };
    let table = MatchTable::from_records(vec![
        mk("1899-03-25", "Gibson, 2"),
        mk("1926-02-27", "Gibson N, Gallacher"),
    ]);
    let board = MatchAnalyzer::new(&table).goalscorer_leaderboard();

    let gibson = board.iter().find(|s| s.player == "Gibson").unwrap();
    assert_eq!(gibson.goals, 1);
    assert_eq!(gibson.games_scored_in, 1);

    let gibson_n = board.iter().find(|s| s.player == "Gibson N").unwrap();
    assert_eq!(gibson_n.games_scored_in, 1);
}

#[test]
fn test_filtered_grouping_by_text_expression() {
    let table = history();
    let analyzer = MatchAnalyzer::new(&table);
    let filter = MatchFilter::parse("venue_type in [A, N] and year >= 2020").unwrap();
    let rows = analyzer.group_by_filtered(Dimension::Opposition, &filter);
    let mut keys: Vec<_> = rows.iter().map(|r| r.key.as_str()).collect();
    keys.sort();
    assert_eq!(keys, vec!["Austria", "Germany", "Serbia", "Spain", "Ukraine"]);
}

fn venue_type_strategy() -> impl Strategy<Value = VenueType> {
    prop_oneof![
        Just(VenueType::Home),
        Just(VenueType::Away),
        Just(VenueType::Neutral),
    ]
}

fn games_strategy() -> impl Strategy<Value = Vec<(usize, VenueType, u32, u32)>> {
    proptest::collection::vec((0usize..6, venue_type_strategy(), 0u32..6, 0u32..6), 1..40)
}

fn build(games: &[(usize, VenueType, u32, u32)]) -> MatchTable {
    let records = games
        .iter()
        .enumerate()
        .map(|(i, &(opp, vt, gf, ga))| MatchRecord {
            date: NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + chrono::Duration::days(i as i64 * 40),
            opposition: format!("Opponent {opp}"),
            venue: format!("Ground {}", opp % 3),
            venue_type: Some(vt),
            competition: "Friendly".to_string(),
            manager: String::new(),
            goals_for: Some(gf),
            goals_against: Some(ga),
            scorers_text: None,
            result: MatchOutcome::from_goals(gf, ga),
        })
        .collect();
    MatchTable::from_records(records)
}

proptest! {
    #[test]
    fn prop_win_percentage_bounded(games in games_strategy()) {
        let table = build(&games);
        for dimension in Dimension::ALL {
            for row in group_by(&table, dimension, None).iter() {
                prop_assert!(row.matches_played > 0);
                prop_assert!((0.0..=100.0).contains(&row.win_percentage));
                prop_assert!(row.wins + row.draws + row.losses <= row.matches_played);
            }
        }
        let overall = MatchAnalyzer::new(&table).overall_statistics();
        prop_assert!((0.0..=100.0).contains(&overall.win_percentage));
    }

    #[test]
    fn prop_opponents_partitioned(games in games_strategy()) {
        let table = build(&games);
        let cats = MatchAnalyzer::new(&table).venue_categories();
        let mut opponents: Vec<String> = table.iter().map(|r| r.opposition.clone()).collect();
        opponents.sort();
        opponents.dedup();

        prop_assert_eq!(cats.len(), opponents.len());
        prop_assert!(cats.unclassified.is_empty());
        for opponent in &opponents {
            prop_assert!(cats.bucket_of(opponent).is_some());
        }
    }

    #[test]
    fn prop_group_totals_cover_all_rows(games in games_strategy()) {
        let table = build(&games);
        let rows = group_by(&table, Dimension::Opposition, None);
        let played: u32 = rows.iter().map(|r| r.matches_played).sum();
        prop_assert_eq!(played as usize, table.len());
    }
}
