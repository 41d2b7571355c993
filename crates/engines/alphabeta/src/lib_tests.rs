use super::*;

#[test]
fn engine_returns_legal_move_from_start() {
    let mut engine = AlphaBetaEngine::with_seed(3);
    let board = Board::new();

    let result = engine.search(&board, 3);

    let best = result.best_move.expect("start position has moves");
    assert!(board.legal(&best));
    assert_eq!(result.depth, 3);
    assert!(result.nodes > 0);
}

#[test]
fn engine_handles_finished_game() {
    let mut engine = AlphaBetaEngine::with_seed(3);
    let board =
        Board::from_description("- - - - b  - - - - -  - - - - -  - - - - -  w - - - -", PieceColor::White)
            .unwrap();

    let result = engine.search(&board, MAX_DEPTH);

    assert!(result.best_move.is_none());
}

#[test]
fn choose_move_answers_the_forced_capture() {
    let mut board = Board::new();
    board.apply(&"c2-c3".parse().unwrap()).unwrap();

    let chosen = choose_move(&board, PieceColor::Black, 11);

    assert_eq!(chosen, Some("c4-c2".parse().unwrap()));
}

#[test]
fn choose_move_is_legal_along_a_game() {
    let mut board = Board::new();
    for ply in 0..12u64 {
        let Some(mv) = choose_move(&board, board.turn(), ply) else {
            break;
        };
        assert!(board.legal(&mv), "{mv} chosen but illegal on\n{board}");
        board.apply(&mv).unwrap();
    }
}

#[test]
fn new_game_replays_the_same_choices() {
    let lost = Board::from_description(
        "w - b - -  - - - - -  b - b - -  - - - - -  - - - - -",
        PieceColor::White,
    )
    .unwrap();
    let mut engine = AlphaBetaEngine::with_seed(42);

    let first: Vec<_> = (0..4).map(|_| engine.search(&lost, 3).best_move).collect();
    engine.new_game();
    let second: Vec<_> = (0..4).map(|_| engine.search(&lost, 3).best_move).collect();

    assert_eq!(first, second);
}
