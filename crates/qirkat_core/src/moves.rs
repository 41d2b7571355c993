//! Steps and capture chains.
//!
//! A [`Move`] is an owned path of squares: the origin followed by every
//! landing square. A step has exactly two squares; a jump chain has one
//! more square than it has captures, and each consecutive pair is a
//! two-square capture whose midpoint holds the captured piece.

use std::fmt;
use std::str::FromStr;

use crate::error::{QirkatError, Result};
use crate::types::*;

/// Direction of a single step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Diagonal,
}

/// One capture inside a chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JumpStep {
    pub from: Square,
    pub over: Square,
    pub to: Square,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    jump: bool,
    path: Vec<Square>,
}

fn deltas(from: Square, to: Square) -> (i8, i8) {
    (col_of(to) - col_of(from), row_of(to) - row_of(from))
}

fn check_squares(from: Square, to: Square) -> Result<()> {
    if !valid_square(from) || !valid_square(to) {
        return Err(QirkatError::InvalidMove(format!(
            "square index out of range: {from}-{to}"
        )));
    }
    if from == to {
        return Err(QirkatError::InvalidMove(format!(
            "{} does not move",
            sq_to_coord(from)
        )));
    }
    Ok(())
}

/// True iff `from` and `to` are neighbours along a line of the board.
pub fn is_adjacent(from: Square, to: Square) -> bool {
    if !valid_square(from) || !valid_square(to) || from == to {
        return false;
    }
    let (dc, dr) = deltas(from, to);
    if dc.abs() > 1 || dr.abs() > 1 {
        return false;
    }
    dc == 0 || dr == 0 || on_diagonal(from)
}

/// Midpoint of a two-square straight-line capture from `from` to `to`.
pub fn jump_midpoint(from: Square, to: Square) -> Option<Square> {
    if !valid_square(from) || !valid_square(to) || from == to {
        return None;
    }
    let (dc, dr) = deltas(from, to);
    if !matches!(dc, -2 | 0 | 2) || !matches!(dr, -2 | 0 | 2) {
        return None;
    }
    if dc != 0 && dr != 0 && !on_diagonal(from) {
        return None;
    }
    sq(col_of(from) + dc / 2, row_of(from) + dr / 2)
}

impl Move {
    /// A non-capturing move between adjacent squares.
    pub fn step(from: Square, to: Square) -> Result<Move> {
        check_squares(from, to)?;
        if !is_adjacent(from, to) {
            return Err(QirkatError::InvalidMove(format!(
                "{} and {} are not adjacent",
                sq_to_coord(from),
                sq_to_coord(to)
            )));
        }
        Ok(Move {
            jump: false,
            path: vec![from, to],
        })
    }

    /// A single capture over the midpoint of `from` and `to`.
    pub fn jump(from: Square, to: Square) -> Result<Move> {
        check_squares(from, to)?;
        if jump_midpoint(from, to).is_none() {
            return Err(QirkatError::InvalidMove(format!(
                "{} cannot jump to {}",
                sq_to_coord(from),
                sq_to_coord(to)
            )));
        }
        Ok(Move {
            jump: true,
            path: vec![from, to],
        })
    }

    /// Prepend the single jump `first` to the chain `rest`.
    pub fn chain(first: Move, rest: Move) -> Result<Move> {
        if !first.jump || !rest.jump {
            return Err(QirkatError::InvalidMove(
                "only jumps can be chained".to_string(),
            ));
        }
        if first.path.len() != 2 {
            return Err(QirkatError::InvalidMove(format!(
                "{first} is already a chain"
            )));
        }
        if first.to() != rest.from() {
            return Err(QirkatError::InvalidMove(format!(
                "{first} does not land where {rest} starts"
            )));
        }
        let mut path = first.path;
        path.extend_from_slice(&rest.path[1..]);
        Ok(Move { jump: true, path })
    }

    /// A step if the squares are adjacent, a single jump if they are two
    /// apart in a line.
    pub fn between(from: Square, to: Square) -> Result<Move> {
        if is_adjacent(from, to) {
            Move::step(from, to)
        } else {
            Move::jump(from, to)
        }
    }

    /// Build a jump chain from its visited squares.
    pub fn jump_path(path: &[Square]) -> Result<Move> {
        if path.len() < 2 {
            return Err(QirkatError::InvalidMove(
                "a jump needs at least two squares".to_string(),
            ));
        }
        for pair in path.windows(2) {
            Move::jump(pair[0], pair[1])?;
        }
        Ok(Move {
            jump: true,
            path: path.to_vec(),
        })
    }

    /// Chain over `path` whose geometry and occupancy the caller has
    /// already verified.
    pub(crate) fn jump_chain_unchecked(path: Vec<Square>) -> Move {
        Move { jump: true, path }
    }

    pub fn from(&self) -> Square {
        self.path[0]
    }

    /// Final landing square.
    pub fn to(&self) -> Square {
        self.path[self.path.len() - 1]
    }

    pub fn is_jump(&self) -> bool {
        self.jump
    }

    /// Square captured by the first jump of the chain.
    pub fn captured_square(&self) -> Option<Square> {
        if !self.jump {
            return None;
        }
        jump_midpoint(self.path[0], self.path[1])
    }

    /// The rest of the chain after the first capture.
    pub fn next(&self) -> Option<Move> {
        if !self.jump || self.path.len() <= 2 {
            return None;
        }
        Some(Move {
            jump: true,
            path: self.path[1..].to_vec(),
        })
    }

    /// Origin followed by every landing square.
    pub fn path(&self) -> &[Square] {
        &self.path
    }

    /// Number of captures; zero for a step.
    pub fn jump_len(&self) -> usize {
        if self.jump { self.path.len() - 1 } else { 0 }
    }

    /// Captures of a jump chain in order; empty for a step.
    pub fn segments(&self) -> impl Iterator<Item = JumpStep> + '_ {
        let jump = self.jump;
        self.path.windows(2).filter(move |_| jump).filter_map(|pair| {
            jump_midpoint(pair[0], pair[1]).map(|over| JumpStep {
                from: pair[0],
                over,
                to: pair[1],
            })
        })
    }

    pub fn captured_squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.segments().map(|s| s.over)
    }

    /// Direction of a step; `None` for jumps.
    pub fn direction(&self) -> Option<Direction> {
        if self.jump {
            return None;
        }
        let (dc, dr) = deltas(self.from(), self.to());
        Some(match (dc, dr) {
            (0, 1) => Direction::Up,
            (0, -1) => Direction::Down,
            (-1, 0) => Direction::Left,
            (1, 0) => Direction::Right,
            _ => Direction::Diagonal,
        })
    }

    pub fn is_left_move(&self) -> bool {
        self.direction() == Some(Direction::Left)
    }

    pub fn is_right_move(&self) -> bool {
        self.direction() == Some(Direction::Right)
    }

    /// True iff this is a step `color` may make ignoring occupancy:
    /// forward, sideways, or diagonally forward.
    pub fn is_single_move(&self, color: PieceColor) -> bool {
        if self.jump || !color.is_piece() {
            return false;
        }
        let dr = row_of(self.to()) - row_of(self.from());
        dr == 0 || dr == color.forward()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &s) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            f.write_str(&sq_to_coord(s))?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = QirkatError;

    /// Parses `c2-c3` (step), `a1-a3` (jump), or `a1-a3-a5` (chain).
    fn from_str(s: &str) -> Result<Move> {
        let txt = s.trim();
        let mut squares = Vec::new();
        for part in txt.split('-') {
            let part = part.trim();
            let square = coord_to_sq(part).ok_or_else(|| {
                QirkatError::Parse(format!("bad square {part:?} in move {txt:?}"))
            })?;
            squares.push(square);
        }
        match squares.len() {
            0 | 1 => Err(QirkatError::Parse(format!(
                "move {txt:?} needs at least two squares"
            ))),
            2 => Move::between(squares[0], squares[1]),
            _ => Move::jump_path(&squares),
        }
    }
}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod moves_tests;
