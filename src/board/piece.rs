use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self { Color::White => Color::Black, Color::Black => Color::White }
    }

    /// Row delta of a pawn step: White moves toward row 0, Black toward row 7.
    pub fn forward(self) -> i32 {
        match self { Color::White => -1, Color::Black => 1 }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self { Color::White => write!(f, "White"), Color::Black => write!(f, "Black") }
    }
}

impl std::str::FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "w" | "white" => Ok(Color::White),
            "b" | "black" => Ok(Color::Black),
            other => Err(format!("invalid color '{other}': use 'white' or 'black'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self { Piece { kind, color } }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub fn symbol(self) -> char {
        let c = match self.kind {
            PieceKind::King => 'k', PieceKind::Queen => 'q', PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n', PieceKind::Rook => 'r', PieceKind::Pawn => 'p',
        };
        match self.color { Color::White => c.to_ascii_uppercase(), Color::Black => c }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        let kind = match c.to_ascii_lowercase() {
            'k' => PieceKind::King, 'q' => PieceKind::Queen, 'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight, 'r' => PieceKind::Rook, 'p' => PieceKind::Pawn,
            _ => return None,
        };
        Some(Piece::new(kind, color))
    }

    pub fn glyph(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::King) => '♔', (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖', (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘', (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚', (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜', (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞', (Color::Black, PieceKind::Pawn) => '♟',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip_and_reject_garbage() {
        for c in "KQBNRPkqbnrp".chars() {
            assert_eq!(Piece::from_symbol(c).map(Piece::symbol), Some(c));
        }
        assert_eq!(Piece::from_symbol('x'), None);
        assert_eq!(Piece::from_symbol('1'), None);
    }

    #[test]
    fn pawn_direction_depends_on_color() {
        assert_eq!(Color::White.forward(), -1);
        assert_eq!(Color::Black.forward(), 1);
        assert_eq!(Color::White.opponent(), Color::Black);
    }

    #[test]
    fn parse_color() {
        assert_eq!("W".parse::<Color>(), Ok(Color::White));
        assert_eq!("black".parse::<Color>(), Ok(Color::Black));
        assert!("red".parse::<Color>().is_err());
    }
}
