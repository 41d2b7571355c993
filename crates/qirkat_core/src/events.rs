use crate::moves::Move;
use crate::types::PieceColor;

/// Change notification returned by every board mutation, for callers that
/// mirror the board elsewhere (renderers, transcripts, logs).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardEvent {
    Applied {
        mv: Move,
        mover: PieceColor,
        game_over: bool,
    },
    Undone {
        mv: Move,
        to_move: PieceColor,
    },
    Reset {
        to_move: PieceColor,
    },
}
