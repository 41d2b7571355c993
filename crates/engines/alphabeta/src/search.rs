//! Fixed-depth minimax with alpha-beta pruning

use qirkat_core::{legal_moves_into, Board, Move, PieceColor};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

use crate::eval::evaluate;

/// Value bound wider than any static score; a side with no moves is
/// scored at the bound of the player it loses to.
pub const INFINITY: i32 = i32::MAX;

/// What a root search settled on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Root move that raised (White) or lowered (Black) the window
    pub best_move: Option<Move>,
    /// Minimax value of the root, positive favouring White
    pub score: i32,
}

/// +1 when `color` maximizes, -1 when it minimizes.
fn sense_of(color: PieceColor) -> i32 {
    if color == PieceColor::White {
        1
    } else {
        -1
    }
}

/// Searches `board` to `depth` plies on behalf of `color`.
///
/// The returned best move is only set when some root move strictly
/// improved the opening window; a lost or hopeless root leaves it `None`.
pub fn find_move(board: &Board, color: PieceColor, depth: u8, nodes: &mut u64) -> SearchOutcome {
    let mut scratch = board.clone();
    let mut best = None;
    let score = minimax(
        &mut scratch,
        depth,
        sense_of(color),
        -INFINITY,
        INFINITY,
        nodes,
        Some(&mut best),
    );

    let shown = best
        .as_ref()
        .map_or_else(|| "none".to_string(), |m: &Move| m.to_string());
    debug!(depth, nodes = *nodes, score, best = %shown, "search finished");

    SearchOutcome {
        best_move: best,
        score,
    }
}

/// Searches, then falls back to a random generated move when nothing beat
/// the window. Returns `None` only when the side to move has no moves.
pub fn pick_best_move<R: Rng + ?Sized>(
    board: &Board,
    color: PieceColor,
    depth: u8,
    nodes: &mut u64,
    rng: &mut R,
) -> SearchOutcome {
    if board.game_over() {
        return SearchOutcome {
            best_move: None,
            score: evaluate(board),
        };
    }

    let mut outcome = find_move(board, color, depth, nodes);
    if outcome.best_move.is_none() {
        outcome.best_move = random_fallback(board, rng);
        if let Some(mv) = &outcome.best_move {
            trace!(%mv, "no root move beat the window, picked at random");
        }
    }
    outcome
}

/// Uniform pick among the captures if any exist, else among the steps.
fn random_fallback<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Move> {
    let mut moves = Vec::with_capacity(16);
    legal_moves_into(board, &mut moves);

    let (jumps, steps): (Vec<Move>, Vec<Move>) = moves.into_iter().partition(Move::is_jump);
    let pool = if jumps.is_empty() { steps } else { jumps };
    pool.choose(rng).cloned()
}

/// Fail-hard minimax over the window `(alpha, beta)`.
///
/// `sense` is +1 where White chooses and -1 where Black chooses. Maximizing
/// nodes return `alpha`, minimizing nodes return `beta`; a node without moves
/// therefore returns the bound it was given. `root` receives the move that
/// last tightened the window at the top level.
fn minimax(
    board: &mut Board,
    depth: u8,
    sense: i32,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
    mut root: Option<&mut Option<Move>>,
) -> i32 {
    *nodes += 1;

    if depth == 0 {
        return evaluate(board);
    }

    let mut moves = Vec::with_capacity(16);
    legal_moves_into(board, &mut moves);

    for mv in moves {
        board
            .apply(&mv)
            .expect("generated moves are always legal");
        let value = minimax(board, depth - 1, -sense, alpha, beta, nodes, None);
        board.undo().expect("undo follows a successful apply");

        let improved = if sense > 0 && value > alpha {
            alpha = value;
            true
        } else if sense < 0 && value < beta {
            beta = value;
            true
        } else {
            false
        };

        if improved {
            if let Some(best) = root.as_deref_mut() {
                *best = Some(mv);
            }
        }

        if alpha >= beta {
            break; // window closed
        }
    }

    if sense < 0 {
        beta
    } else {
        alpha
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
