pub mod board;
pub mod error;
pub mod events;
pub mod movegen;
pub mod moves;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::QirkatError;
pub use events::*;
pub use movegen::*;
pub use moves::*;
pub use perft::perft;
pub use types::*;

// =============================================================================
// Engine trait, implemented by every move-choosing player
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The move to play (None if the side to move has lost)
    pub best_move: Option<Move>,
    /// Evaluation of the position, positive favouring White
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of positions visited
    pub nodes: u64,
}

/// Trait that all Qirkat engines must implement.
///
/// The board passed to `search` is the live game position; engines that
/// need to explore work on their own copy.
pub trait Engine: Send {
    /// Choose a move for the side to move, looking `depth` plies ahead.
    fn search(&mut self, board: &Board, depth: u8) -> SearchResult;

    /// Returns the engine's name for reports
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
