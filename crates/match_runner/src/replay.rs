//! Re-playing recorded transcripts

use qirkat_core::{Board, Move, PieceColor};

use crate::error::{HarnessError, Result};

/// Replays `transcript` from the position `start` with `turn` to move.
///
/// Every entry is parsed as move notation and applied in order. The first
/// entry that fails to parse or is illegal aborts the replay with its
/// 1-based ply number.
pub fn replay<S: AsRef<str>>(start: &str, turn: PieceColor, transcript: &[S]) -> Result<Board> {
    let mut board = Board::from_description(start, turn)?;
    for (i, text) in transcript.iter().enumerate() {
        let ply = i + 1;
        let mv: Move = text
            .as_ref()
            .parse()
            .map_err(|source| HarnessError::Replay { ply, source })?;
        board
            .apply(&mv)
            .map_err(|source| HarnessError::Replay { ply, source })?;
    }
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qirkat_core::{QirkatError, INITIAL_LAYOUT};

    #[test]
    fn replays_opening() {
        let board = replay(INITIAL_LAYOUT, PieceColor::White, &["c2-c3", "c4-c2", "c1-c3"]).unwrap();
        assert_eq!(board.history_len(), 3);
        assert_eq!(board.turn(), PieceColor::Black);
        assert_eq!(board.count(PieceColor::White), 11);
        assert_eq!(board.count(PieceColor::Black), 11);
    }

    #[test]
    fn empty_transcript_is_the_start() {
        let none: [&str; 0] = [];
        let board = replay(INITIAL_LAYOUT, PieceColor::White, &none).unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn reports_ply_of_illegal_move() {
        let err = replay(INITIAL_LAYOUT, PieceColor::White, &["c2-c3", "b4-b3"]).unwrap_err();
        match err {
            HarnessError::Replay { ply, source } => {
                assert_eq!(ply, 2);
                assert!(matches!(source, QirkatError::IllegalMove(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reports_ply_of_bad_notation() {
        let err = replay(INITIAL_LAYOUT, PieceColor::White, &["c2-c3", "z9-c2"]).unwrap_err();
        assert!(matches!(
            err,
            HarnessError::Replay {
                ply: 2,
                source: QirkatError::Parse(_)
            }
        ));
    }

    #[test]
    fn rejects_bad_start() {
        let err = replay("w w w", PieceColor::White, &["c2-c3"]).unwrap_err();
        assert!(matches!(err, HarnessError::Rules(QirkatError::InvalidLayout(_))));
    }
}
