use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChessError;

/// A square on the 8x8 board.
///
/// Row 0 is Black's back rank (rank 8), row 7 is White's (rank 1); col 0 is the a-file.
/// Both coordinates are always in `0..8`: the only public constructors validate them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// All 64 squares in row-major order.
    pub const ALL: [Square; 64] = {
        let mut all = [Square { row: 0, col: 0 }; 64];
        let mut i = 0;
        while i < 64 {
            all[i] = Square { row: (i / 8) as u8, col: (i % 8) as u8 };
            i += 1;
        }
        all
    };

    pub fn new(row: i32, col: i32) -> Result<Self, ChessError> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Square { row: row as u8, col: col as u8 })
        } else {
            Err(ChessError::InvalidSquare(format!("({row}, {col}) is off the board")))
        }
    }

    pub fn row(self) -> usize { self.row as usize }

    pub fn col(self) -> usize { self.col as usize }

    /// The square `(dr, dc)` away, or `None` when that falls off the board.
    pub fn offset(self, dr: i32, dc: i32) -> Option<Square> {
        Square::new(self.row as i32 + dr, self.col as i32 + dc).ok()
    }

    pub fn index(self) -> usize { self.row() * 8 + self.col() }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = 8 - self.row;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.trim().as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::InvalidSquare(s.to_string()));
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ChessError::InvalidSquare(s.to_string()));
        }
        Square::new(i32::from(b'8' - rank), i32::from(file - b'a'))
    }
}

impl TryFrom<String> for Square {
    type Error = ChessError;

    fn try_from(s: String) -> Result<Self, Self::Error> { s.parse() }
}

impl From<Square> for String {
    fn from(sq: Square) -> String { sq.to_string() }
}
