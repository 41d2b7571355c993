//! Alpha-Beta Qirkat Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over a material plus
//! capture-mobility evaluation. When no root move beats the opening window
//! the engine picks a generated move with its own seeded random source, so
//! a given seed always reproduces the same game.

mod eval;
mod search;

use qirkat_core::{Board, Engine, Move, PieceColor, SearchResult};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use eval::evaluate;
pub use search::{find_move, pick_best_move, SearchOutcome, INFINITY};

/// Search depth used by the computer player.
pub const MAX_DEPTH: u8 = 5;

/// Computer player searching a fixed number of plies.
#[derive(Debug, Clone)]
pub struct AlphaBetaEngine {
    rng: StdRng,
    seed: u64,
    /// Node counter for statistics
    nodes: u64,
}

impl AlphaBetaEngine {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// An engine whose tie-breaking is reproducible from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            nodes: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for AlphaBetaEngine {
    fn search(&mut self, board: &Board, depth: u8) -> SearchResult {
        self.nodes = 0;
        let outcome = pick_best_move(board, board.turn(), depth, &mut self.nodes, &mut self.rng);

        SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "AlphaBeta v1.0"
    }

    fn new_game(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.nodes = 0;
    }
}

/// Chooses a move for `color` on `board` at [`MAX_DEPTH`].
///
/// `color` is expected to be the side to move. Returns `None` once the game
/// is over; otherwise the move is always legal on `board`.
pub fn choose_move(board: &Board, color: PieceColor, seed: u64) -> Option<Move> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut nodes = 0;
    pick_best_move(board, color, MAX_DEPTH, &mut nodes, &mut rng).best_move
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
