//! Random Move Qirkat Engine
//!
//! Selects uniformly among the legal moves of the side to move. Handy as
//! a baseline opponent for the alpha-beta player and for shaking out the
//! move generator over long games.

use qirkat_core::{legal_moves_into, Board, Engine, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// A player that picks any legal move at random.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    seed: u64,
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            nodes: 0,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, _depth: u8) -> SearchResult {
        let mut moves = Vec::with_capacity(16);
        legal_moves_into(board, &mut moves);

        self.nodes = 1;

        let best_move = moves.choose(&mut self.rng).cloned();

        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.nodes = 0;
    }
}
