use crate::board::{Board, Cells, Restriction};
use crate::moves::{is_adjacent, jump_midpoint, Move};
use crate::types::*;

/// Generate all legal moves, returning a freshly allocated vector.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut out = Vec::with_capacity(16);
    legal_moves_into(board, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
///
/// When any capture exists only jump chains are produced, each extended
/// until no further capture is available from its landing square.
pub fn legal_moves_into(board: &Board, out: &mut Vec<Move>) {
    out.clear();
    let mover = board.turn();
    if !mover.is_piece() {
        return;
    }
    if jump_possible(board) {
        // Chains are explored on a scratch copy that is restored after
        // every capture.
        let mut scratch = *board.cells();
        let mut path = Vec::with_capacity(8);
        for from in 0..=MAX_INDEX {
            if scratch[from as usize] == mover {
                path.clear();
                path.push(from);
                gen_jumps(&mut scratch, mover, &mut path, out);
            }
        }
    } else {
        for from in 0..=MAX_INDEX {
            if board.get(from) != mover {
                continue;
            }
            for to in 0..=MAX_INDEX {
                if !is_adjacent(from, to) {
                    continue;
                }
                if let Ok(mv) = Move::step(from, to) {
                    if step_allowed(board, &mv) {
                        out.push(mv);
                    }
                }
            }
        }
    }
}

fn gen_jumps(cells: &mut Cells, mover: PieceColor, path: &mut Vec<Square>, out: &mut Vec<Move>) {
    let from = match path.last() {
        Some(&s) => s,
        None => return,
    };
    for to in 0..=MAX_INDEX {
        if !can_jump(cells, mover, from, to) {
            continue;
        }
        let over = match jump_midpoint(from, to) {
            Some(o) => o,
            None => continue,
        };
        cells[from as usize] = PieceColor::Empty;
        cells[over as usize] = PieceColor::Empty;
        cells[to as usize] = mover;
        path.push(to);

        let before = out.len();
        gen_jumps(cells, mover, path, out);
        if out.len() == before {
            out.push(Move::jump_chain_unchecked(path.clone()));
        }

        path.pop();
        cells[to as usize] = PieceColor::Empty;
        cells[over as usize] = mover.opposite();
        cells[from as usize] = mover;
    }
}

/// True iff some legal move exists for the side to move.
pub fn has_legal_move(board: &Board) -> bool {
    let mover = board.turn();
    if !mover.is_piece() {
        return false;
    }
    if jump_possible(board) {
        return true;
    }
    (0..=MAX_INDEX)
        .filter(|&from| board.get(from) == mover)
        .any(|from| {
            (0..=MAX_INDEX).any(|to| {
                is_adjacent(from, to)
                    && Move::step(from, to).is_ok_and(|mv| step_allowed(board, &mv))
            })
        })
}

/// True iff `mover`'s piece on `from` can capture by landing on `to`.
fn can_jump(cells: &Cells, mover: PieceColor, from: Square, to: Square) -> bool {
    match jump_midpoint(from, to) {
        Some(over) => {
            cells[from as usize] == mover
                && cells[over as usize] == mover.opposite()
                && cells[to as usize] == PieceColor::Empty
        }
        None => false,
    }
}

fn any_jump_from(cells: &Cells, mover: PieceColor, from: Square) -> bool {
    (0..=MAX_INDEX).any(|to| can_jump(cells, mover, from, to))
}

/// True iff the side to move has a capture starting at `sq`.
pub fn jump_possible_from(board: &Board, sq: Square) -> bool {
    let mover = board.turn();
    valid_square(sq) && mover.is_piece() && any_jump_from(board.cells(), mover, sq)
}

/// True iff the side to move has any capture on the board.
pub fn jump_possible(board: &Board) -> bool {
    (0..=MAX_INDEX).any(|sq| jump_possible_from(board, sq))
}

/// Legality of `mv` for the side to move on `board`.
pub fn is_legal(board: &Board, mv: &Move) -> bool {
    let mover = board.turn();
    if !mover.is_piece() || !valid_square(mv.from()) || board.get(mv.from()) != mover {
        return false;
    }
    if mv.is_jump() {
        check_jump(*board.cells(), mover, mv)
    } else {
        !jump_possible(board) && step_allowed(board, mv)
    }
}

/// Step rules other than mandatory capture.
fn step_allowed(board: &Board, mv: &Move) -> bool {
    let mover = board.turn();
    let from = mv.from();
    if board.get(from) != mover || board.get(mv.to()) != PieceColor::Empty {
        return false;
    }
    if !mv.is_single_move(mover) {
        return false;
    }
    let left = mv.is_left_move();
    let right = mv.is_right_move();
    match board.restriction(from) {
        Restriction::NoLeft if left => return false,
        Restriction::NoRight if right => return false,
        _ => {}
    }
    if (left || right) && mover.back_row() == Some(row_of(from)) {
        return false;
    }
    true
}

/// Plays every capture of `mv` on `cells` in order, checking each against
/// the partially updated position, then requires that the chain cannot
/// be continued from its landing square.
fn check_jump(mut cells: Cells, mover: PieceColor, mv: &Move) -> bool {
    let mut played = 0;
    for step in mv.segments() {
        if !can_jump(&cells, mover, step.from, step.to) {
            return false;
        }
        cells[step.from as usize] = PieceColor::Empty;
        cells[step.over as usize] = PieceColor::Empty;
        cells[step.to as usize] = mover;
        played += 1;
    }
    played == mv.jump_len() && played > 0 && !any_jump_from(&cells, mover, mv.to())
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
