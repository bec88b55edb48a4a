use super::*;
use checkers_core::{Board, SearchResult, Square, TurnMove};
use classical_engine::ClassicalEngine;
use random_engine::RandomEngine;

/// Always tries to move one of the opponent's starting men.
struct CheatingEngine;

impl Engine for CheatingEngine {
    fn search(&mut self, _board: &Board, to_move: Color, _limits: &SearchLimits) -> SearchResult {
        let mv = match to_move {
            Color::Dark => TurnMove::step(Square::new(5, 0), Square::new(4, 1)),
            Color::Light => TurnMove::step(Square::new(2, 1), Square::new(3, 2)),
        };
        SearchResult {
            best_move: Some(mv),
            ..SearchResult::no_move(1)
        }
    }

    fn name(&self) -> &str {
        "Cheater"
    }
}

/// Never finds a move.
struct SilentEngine;

impl Engine for SilentEngine {
    fn search(&mut self, _board: &Board, _to_move: Color, _limits: &SearchLimits) -> SearchResult {
        SearchResult::no_move(1)
    }

    fn name(&self) -> &str {
        "Silent"
    }
}

fn quiet_config(num_games: u32, depth: u8, max_plies: u32) -> MatchConfig {
    MatchConfig {
        num_games,
        depth,
        max_plies,
        ..Default::default()
    }
}

#[test]
fn test_self_play() {
    let mut engine1 = ClassicalEngine::new();
    let mut engine2 = ClassicalEngine::new();

    let runner = MatchRunner::new(quiet_config(2, 2, 50));
    let result = runner.run_match(&mut engine1, &mut engine2);

    // Self-play should complete without panic
    assert_eq!(result.total_games(), 2);
}

#[test]
fn test_colors_alternate() {
    let mut engine1 = RandomEngine::seeded(1);
    let mut engine2 = RandomEngine::seeded(2);

    let runner = MatchRunner::new(quiet_config(4, 1, 30));
    let report = runner.play_match(&mut engine1, &mut engine2);

    let colors: Vec<Color> = report.games.iter().map(|g| g.engine1_color).collect();
    assert_eq!(
        colors,
        vec![Color::Dark, Color::Light, Color::Dark, Color::Light]
    );
    assert_eq!(report.result.total_games(), 4);
}

#[test]
fn test_illegal_move_loses() {
    let mut cheater = CheatingEngine;
    let mut random = RandomEngine::seeded(3);

    let runner = MatchRunner::new(quiet_config(2, 1, 100));
    let report = runner.play_match(&mut cheater, &mut random);

    assert_eq!(report.result.losses, 2);
    for g in &report.games {
        assert_eq!(g.termination, Termination::IllegalMove);
        assert_eq!(g.winner, Some(g.engine1_color.other()));
    }
    // As DARK the cheater fails at once; as LIGHT after one random ply.
    assert_eq!(report.games[0].plies, 0);
    assert_eq!(report.games[1].plies, 1);
}

#[test]
fn test_no_move_loses_for_side_to_move() {
    let mut random = RandomEngine::seeded(4);
    let mut silent = SilentEngine;

    let runner = MatchRunner::new(quiet_config(2, 1, 100));
    let report = runner.play_match(&mut random, &mut silent);

    assert_eq!(report.result.wins, 2);
    assert!(report
        .games
        .iter()
        .all(|g| g.termination == Termination::NoMove));
    assert_eq!(report.engine2, "Silent");
}

#[test]
fn test_max_plies_is_a_draw() {
    let mut engine1 = RandomEngine::seeded(5);
    let mut engine2 = RandomEngine::seeded(6);

    let runner = MatchRunner::new(quiet_config(1, 1, 10));
    let report = runner.play_match(&mut engine1, &mut engine2);

    let game = &report.games[0];
    assert_eq!(game.termination, Termination::MaxPlies);
    assert_eq!(game.result, GameResult::Draw);
    assert_eq!(game.plies, 10);
    assert_eq!(game.moves.len(), 10);
}

#[test]
fn test_paired_games_share_opening() {
    let mut engine1 = ClassicalEngine::new();
    let mut engine2 = ClassicalEngine::new();

    let config = MatchConfig {
        opening_plies: 4,
        seed: 42,
        ..quiet_config(2, 1, 20)
    };
    let runner = MatchRunner::new(config);
    let report = runner.play_match(&mut engine1, &mut engine2);

    let first = &report.games[0].moves;
    let second = &report.games[1].moves;
    assert!(first.len() >= 4 && second.len() >= 4);
    assert_eq!(first[..4], second[..4]);
}

#[test]
fn test_config_from_toml_keeps_defaults() {
    let config = MatchConfig::from_toml("num_games = 4\nmove_time_ms = 50\nopening_plies = 2\n")
        .unwrap();
    assert_eq!(config.num_games, 4);
    assert_eq!(config.move_time_ms, Some(50));
    assert_eq!(config.opening_plies, 2);
    assert_eq!(config.depth, MatchConfig::default().depth);
    assert!(config.alternate_colors);

    assert!(MatchConfig::from_toml("num_games = \"many\"").is_err());
}

#[test]
fn test_quick_match() {
    let mut engine1 = ClassicalEngine::new();
    let mut engine2 = RandomEngine::seeded(8);
    let result = quick_match(&mut engine1, &mut engine2, 2, 1);
    assert_eq!(result.total_games(), 2);
}
