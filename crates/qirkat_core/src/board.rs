use std::fmt::{self, Write as _};

use crate::error::{QirkatError, Result};
use crate::events::BoardEvent;
use crate::movegen;
use crate::moves::Move;
use crate::types::*;

/// Occupancy of every square, indexed by linearized square.
pub type Cells = [PieceColor; NUM_SQUARES];

/// Starting layout, row 1 first.
pub const INITIAL_LAYOUT: &str = "w w w w w  w w w w w  b b - w w  b b b b b  b b b b b";

const INITIAL_CELLS: Cells = {
    use PieceColor::{Black as B, Empty as E, White as W};
    [
        W, W, W, W, W, //
        W, W, W, W, W, //
        B, B, E, W, W, //
        B, B, B, B, B, //
        B, B, B, B, B,
    ]
};

/// Horizontal slides forbidden to the piece standing on a square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Restriction {
    #[default]
    None,
    NoLeft,
    NoRight,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct HistoryEntry {
    mv: Move,
    restrictions: [Restriction; NUM_SQUARES],
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Cells,
    turn: PieceColor,
    game_over: bool,
    restrictions: [Restriction; NUM_SQUARES],
    history: Vec<HistoryEntry>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A board in the starting position with White to move.
    pub fn new() -> Self {
        let mut b = Board {
            cells: [PieceColor::Empty; NUM_SQUARES],
            turn: PieceColor::White,
            game_over: false,
            restrictions: [Restriction::None; NUM_SQUARES],
            history: Vec::new(),
        };
        b.clear();
        b
    }

    /// A board set up from a description (see [`Board::reset`]).
    pub fn from_description(description: &str, next_to_move: PieceColor) -> Result<Self> {
        let mut b = Board::new();
        b.reset(description, next_to_move)?;
        Ok(b)
    }

    /// Return to the starting position with White to move.
    pub fn clear(&mut self) -> BoardEvent {
        self.cells = INITIAL_CELLS;
        self.install(PieceColor::White)
    }

    /// Install the layout given by `description`: 25 characters from
    /// `b`, `w` and `-` (any case), row 1 first and column a first.
    /// Whitespace and `/` separators are ignored. At least one square
    /// must be empty. History and restrictions are cleared.
    pub fn reset(&mut self, description: &str, next_to_move: PieceColor) -> Result<BoardEvent> {
        if !next_to_move.is_piece() {
            return Err(QirkatError::InvalidLayout(
                "side to move must be white or black".to_string(),
            ));
        }
        self.cells = parse_description(description)?;
        Ok(self.install(next_to_move))
    }

    fn install(&mut self, next_to_move: PieceColor) -> BoardEvent {
        self.turn = next_to_move;
        self.restrictions = [Restriction::None; NUM_SQUARES];
        self.history.clear();
        self.game_over = !movegen::has_legal_move(self);
        BoardEvent::Reset {
            to_move: next_to_move,
        }
    }

    pub fn get(&self, sq: Square) -> PieceColor {
        self.cells[sq as usize]
    }

    /// Contents of the square at column `c` ('a'..='e') and row `r` ('1'..='5').
    pub fn get_at(&self, c: char, r: char) -> Option<PieceColor> {
        let mut coord = String::with_capacity(2);
        coord.push(c);
        coord.push(r);
        coord_to_sq(&coord).map(|sq| self.get(sq))
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    pub fn turn(&self) -> PieceColor {
        self.turn
    }

    /// True iff the side to move has no legal move, i.e. has lost.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn restriction(&self, sq: Square) -> Restriction {
        self.restrictions[sq as usize]
    }

    pub fn restrictions(&self) -> &[Restriction; NUM_SQUARES] {
        &self.restrictions
    }

    pub fn count(&self, color: PieceColor) -> usize {
        self.cells.iter().filter(|&&c| c == color).count()
    }

    /// Applied moves, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &Move> {
        self.history.iter().map(|h| &h.mv)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last().map(|h| &h.mv)
    }

    pub fn legal(&self, mv: &Move) -> bool {
        movegen::is_legal(self, mv)
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        movegen::legal_moves(self)
    }

    pub fn jump_possible(&self) -> bool {
        movegen::jump_possible(self)
    }

    pub fn jump_possible_from(&self, sq: Square) -> bool {
        movegen::jump_possible_from(self, sq)
    }

    /// Play `mv` for the side to move. The board is left untouched if the
    /// move is illegal.
    pub fn apply(&mut self, mv: &Move) -> Result<BoardEvent> {
        if !self.legal(mv) {
            return Err(QirkatError::IllegalMove(mv.clone()));
        }
        let mover = self.turn;
        self.history.push(HistoryEntry {
            mv: mv.clone(),
            restrictions: self.restrictions,
        });

        if mv.is_jump() {
            for step in mv.segments() {
                self.cells[step.from as usize] = PieceColor::Empty;
                self.cells[step.over as usize] = PieceColor::Empty;
                self.restrictions[step.from as usize] = Restriction::None;
                self.restrictions[step.over as usize] = Restriction::None;
            }
        } else if mv.is_left_move() {
            self.restrictions[mv.to() as usize] = Restriction::NoRight;
        } else if mv.is_right_move() {
            self.restrictions[mv.to() as usize] = Restriction::NoLeft;
        }
        self.cells[mv.from() as usize] = PieceColor::Empty;
        self.restrictions[mv.from() as usize] = Restriction::None;
        self.cells[mv.to() as usize] = mover;

        self.turn = mover.opposite();
        self.game_over = !movegen::has_legal_move(self);

        Ok(BoardEvent::Applied {
            mv: mv.clone(),
            mover,
            game_over: self.game_over,
        })
    }

    /// Take back the last applied move.
    pub fn undo(&mut self) -> Result<BoardEvent> {
        let entry = self.history.pop().ok_or(QirkatError::EmptyHistory)?;
        let mv = entry.mv;
        self.restrictions = entry.restrictions;
        self.turn = self.turn.opposite();
        let mover = self.turn;

        self.cells[mv.to() as usize] = PieceColor::Empty;
        for over in mv.captured_squares() {
            self.cells[over as usize] = mover.opposite();
        }
        self.cells[mv.from() as usize] = mover;
        self.game_over = !movegen::has_legal_move(self);

        Ok(BoardEvent::Undone { mv, to_move: mover })
    }

    /// Compact 25-character description accepted by [`Board::reset`].
    pub fn description(&self) -> String {
        self.cells.iter().map(|c| c.short_name()).collect()
    }

    /// Text depiction with row numbers and column letters.
    pub fn to_string_with_legend(&self) -> String {
        let mut out = String::new();
        for row in (0..SIDE as i8).rev() {
            let _ = write!(out, "{}", (b'1' + row as u8) as char);
            for col in 0..SIDE as i8 {
                let c = self.at(col, row).short_name();
                let _ = if col == 0 {
                    write!(out, "  {c}")
                } else {
                    write!(out, " {c}")
                };
            }
            out.push('\n');
        }
        out.push_str("   a b c d e");
        out
    }

    fn at(&self, col: i8, row: i8) -> PieceColor {
        sq(col, row).map_or(PieceColor::Empty, |s| self.get(s))
    }
}

impl fmt::Display for Board {
    /// Rows 5 down to 1, each indented by two spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..SIDE as i8).rev() {
            f.write_str(" ")?;
            for col in 0..SIDE as i8 {
                write!(f, " {}", self.at(col, row).short_name())?;
            }
            if row != 0 {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

fn parse_description(description: &str) -> Result<Cells> {
    let mut cells = [PieceColor::Empty; NUM_SQUARES];
    let mut n = 0usize;
    for ch in description.chars() {
        if ch.is_whitespace() || ch == '/' {
            continue;
        }
        let color = PieceColor::from_char(ch).ok_or_else(|| {
            QirkatError::InvalidLayout(format!("unexpected character {ch:?}"))
        })?;
        if n == NUM_SQUARES {
            return Err(QirkatError::InvalidLayout(format!(
                "more than {NUM_SQUARES} squares"
            )));
        }
        cells[n] = color;
        n += 1;
    }
    if n != NUM_SQUARES {
        return Err(QirkatError::InvalidLayout(format!(
            "expected {NUM_SQUARES} squares, found {n}"
        )));
    }
    if !cells.contains(&PieceColor::Empty) {
        return Err(QirkatError::InvalidLayout(
            "at least one square must be empty".to_string(),
        ));
    }
    Ok(cells)
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
