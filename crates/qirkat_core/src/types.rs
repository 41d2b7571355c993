use std::fmt;

/// Number of rows and columns on the board.
pub const SIDE: u8 = 5;

/// Number of intersections on the board.
pub const NUM_SQUARES: usize = (SIDE as usize) * (SIDE as usize);

/// Largest linearized square index.
pub const MAX_INDEX: u8 = (NUM_SQUARES - 1) as u8;

/// Linearized square index, 0..25, row-major with row 0 = '1' and column 0 = 'a'.
pub type Square = u8;

/// Contents of a square, and the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceColor {
    Empty,
    White,
    Black,
}

impl PieceColor {
    /// The opposing side. Panics on `Empty`, which has no opponent.
    pub fn opposite(self) -> PieceColor {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
            PieceColor::Empty => panic!("EMPTY has no opposite color"),
        }
    }

    pub fn is_piece(self) -> bool {
        self != PieceColor::Empty
    }

    /// One-character name used by board descriptions.
    pub fn short_name(self) -> char {
        match self {
            PieceColor::Empty => '-',
            PieceColor::White => 'w',
            PieceColor::Black => 'b',
        }
    }

    /// Inverse of `short_name`, case-insensitive.
    pub fn from_char(ch: char) -> Option<PieceColor> {
        match ch.to_ascii_lowercase() {
            '-' => Some(PieceColor::Empty),
            'w' => Some(PieceColor::White),
            'b' => Some(PieceColor::Black),
            _ => None,
        }
    }

    /// Row the side advances toward; sideways steps are forbidden there.
    pub fn back_row(self) -> Option<i8> {
        match self {
            PieceColor::White => Some(SIDE as i8 - 1),
            PieceColor::Black => Some(0),
            PieceColor::Empty => None,
        }
    }

    /// Row delta of a forward step.
    pub fn forward(self) -> i8 {
        match self {
            PieceColor::White => 1,
            PieceColor::Black => -1,
            PieceColor::Empty => 0,
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceColor::Empty => "Empty",
            PieceColor::White => "White",
            PieceColor::Black => "Black",
        };
        f.write_str(name)
    }
}

// Helpers
pub fn col_of(sq: Square) -> i8 {
    (sq % SIDE) as i8
}
pub fn row_of(sq: Square) -> i8 {
    (sq / SIDE) as i8
}
pub fn sq(col: i8, row: i8) -> Option<Square> {
    if (0..SIDE as i8).contains(&col) && (0..SIDE as i8).contains(&row) {
        Some((row as u8) * SIDE + (col as u8))
    } else {
        None
    }
}

pub fn valid_square(sq: Square) -> bool {
    sq <= MAX_INDEX
}

/// Diagonal lines of the board only pass through squares whose
/// column and row sum to an even number.
pub fn on_diagonal(sq: Square) -> bool {
    (col_of(sq) + row_of(sq)) % 2 == 0
}

pub fn sq_to_coord(sq: Square) -> String {
    let c = (b'a' + (sq % SIDE)) as char;
    let r = (b'1' + (sq / SIDE)) as char;
    format!("{c}{r}")
}

pub fn coord_to_sq(c: &str) -> Option<Square> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let col = b[0];
    let row = b[1];
    if !(b'a'..=b'e').contains(&col) || !(b'1'..=b'5').contains(&row) {
        return None;
    }
    Some((row - b'1') * SIDE + (col - b'a'))
}
