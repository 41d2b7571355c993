use crate::{board::Board, movegen::legal_moves_into, moves::Move};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`.
pub fn perft(board: &mut Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &mut Board, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let (buf, rest) = layers
            .split_first_mut()
            .expect("perft requires one buffer per remaining ply");

        legal_moves_into(board, buf);

        let mut nodes = 0u64;
        for mv in buf.iter() {
            board
                .apply(mv)
                .expect("generated moves are always legal");
            nodes += inner(board, depth - 1, rest);
            board.undo().expect("undo follows a successful apply");
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(16); depth as usize];
    inner(board, depth, &mut layers[..])
}
