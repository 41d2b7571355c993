//! Static evaluation of a Qirkat position

use qirkat_core::{legal_moves, Board, PieceColor};

/// Scores `board` for the side to move.
///
/// Material is always White minus Black. The capture count and the longest
/// available chain count toward the side to move: added when White is to
/// move, subtracted when Black is.
pub fn evaluate(board: &Board) -> i32 {
    let material =
        board.count(PieceColor::White) as i32 - board.count(PieceColor::Black) as i32;

    let mut captures = 0i32;
    let mut longest = 0i32;
    for mv in legal_moves(board).iter().filter(|m| m.is_jump()) {
        captures += 1;
        longest = longest.max(mv.jump_len() as i32);
    }

    match board.turn() {
        PieceColor::White => material + captures + longest,
        _ => material - captures - longest,
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
