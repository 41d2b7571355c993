use super::*;
use crate::error::HarnessError;

fn config(white: &str, black: &str, games: u32) -> MatchConfig {
    MatchConfig {
        games,
        max_moves: 60,
        white: white.to_string(),
        black: black.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_self_play() {
    let runner = MatchRunner::new(config("random", "random", 2));
    let report = runner.run_match().unwrap();

    // Self-play should complete without panic
    assert_eq!(report.result.total_games(), 2);
    assert_eq!(report.games.len(), 2);
}

#[test]
fn colors_alternate_between_games() {
    let report = MatchRunner::new(config("alphabeta:1", "random", 2))
        .run_match()
        .unwrap();
    assert_eq!(report.games[0].white, "alphabeta:1");
    assert_eq!(report.games[1].white, "random");
    assert_eq!(report.games[1].black, "alphabeta:1");
}

#[test]
fn finished_games_end_on_a_position_without_moves() {
    let cfg = config("random", "random", 4);
    let report = MatchRunner::new(cfg.clone()).run_match().unwrap();
    for game in &report.games {
        let board = replay(cfg.start_description(), cfg.to_move.into(), &game.transcript[..]).unwrap();
        assert_eq!(game.plies as usize, game.transcript.len());
        match game.winner {
            Some(side) => {
                assert!(board.game_over());
                assert_eq!(Side::from_color(board.turn()), Some(side.opposite()));
            }
            None => assert_eq!(game.plies, cfg.max_moves),
        }
    }
}

#[test]
fn same_seed_same_match() {
    let a = MatchRunner::new(config("alphabeta:2", "random", 2)).run_match().unwrap();
    let b = MatchRunner::new(config("alphabeta:2", "random", 2)).run_match().unwrap();
    assert_eq!(a, b);
}

#[test]
fn lost_start_position_is_scored_without_moves() {
    let cfg = MatchConfig {
        games: 1,
        start: Some("- - - - b  - - - - -  - - - - -  - - - - -  w - - - -".to_string()),
        ..config("alphabeta:3", "random", 1)
    };
    let report = MatchRunner::new(cfg).run_match().unwrap();
    assert_eq!(report.games[0].plies, 0);
    assert_eq!(report.games[0].winner, Some(Side::Black));
    assert_eq!(report.result.losses, 1);
}

#[test]
fn unknown_engine_is_reported() {
    let err = MatchRunner::new(config("stockfish", "random", 1))
        .run_match()
        .unwrap_err();
    assert!(matches!(err, HarnessError::UnknownEngine(_)));
}
