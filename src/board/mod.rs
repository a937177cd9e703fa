//! Board representation: squares, pieces and the 8x8 grid.
//!
//! `Board` is a plain `Copy` value. Copying it yields a fully independent snapshot, which is
//! what check simulation in [`crate::engine`] relies on.

mod piece;
mod square;

pub use piece::{Color, Piece, PieceKind};
pub use square::Square;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ChessError;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook, PieceKind::Knight, PieceKind::Bishop, PieceKind::Queen,
    PieceKind::King, PieceKind::Bishop, PieceKind::Knight, PieceKind::Rook,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self { Self::standard() }
}

impl Board {
    pub fn empty() -> Self {
        Self { cells: [[None; 8]; 8] }
    }

    /// The standard starting position: Black on rows 0-1, White on rows 6-7.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.iter().copied().enumerate() {
            board.cells[0][col] = Some(Piece::new(kind, Color::Black));
            board.cells[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.cells[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.cells[7][col] = Some(Piece::new(kind, Color::White));
        }
        board
    }

    pub fn get(&self, sq: Square) -> Option<Piece> { self.cells[sq.row()][sq.col()] }

    /// Puts `piece` on `sq`, returning whatever stood there before.
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.cells[sq.row()][sq.col()], piece)
    }

    pub fn is_empty_at(&self, sq: Square) -> bool { self.get(sq).is_none() }

    /// Occupied squares with their pieces, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::ALL.into_iter().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    /// Moves the piece on `from` to `to`, capturing anything on `to`.
    ///
    /// No legality check is made; use [`crate::engine::LegalMoves::commit`] for that. Fails
    /// without touching the board when `from` is empty or equals `to`.
    pub fn apply(&mut self, from: Square, to: Square) -> Result<Option<Piece>, ChessError> {
        if from == to {
            return Err(ChessError::IllegalMove { from, to, reason: "origin and destination coincide" });
        }
        let Some(piece) = self.get(from) else {
            return Err(ChessError::IllegalMove { from, to, reason: "no piece on origin square" });
        };
        self.set(from, None);
        Ok(self.set(to, Some(piece)))
    }

    /// Reads the piece placement field of a FEN string. Any further fields are ignored.
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let placement = fen.split_whitespace().next().ok_or_else(|| ChessError::InvalidFen(fen.to_string()))?;
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(ChessError::InvalidFen(format!("expected 8 ranks, found {}", ranks.len())));
        }
        let mut board = Self::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err(ChessError::InvalidFen(format!("bad empty-square count '{c}'")));
                    }
                    col += skip as usize;
                } else {
                    let piece = Piece::from_symbol(c).ok_or_else(|| ChessError::InvalidFen(format!("unknown piece '{c}'")))?;
                    if col >= 8 {
                        return Err(ChessError::InvalidFen(format!("rank '{rank}' is too long")));
                    }
                    board.cells[row][col] = Some(piece);
                    col += 1;
                }
            }
            if col != 8 {
                return Err(ChessError::InvalidFen(format!("rank '{rank}' covers {col} squares")));
            }
        }
        Ok(board)
    }

    pub fn fen_placement(&self) -> String {
        let mut out = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 { out.push('/'); }
            let mut gap = 0;
            for cell in cells {
                match cell {
                    Some(p) => {
                        if gap > 0 { out.push_str(&gap.to_string()); gap = 0; }
                        out.push(p.symbol());
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 { out.push_str(&gap.to_string()); }
        }
        out
    }

    /// Diagram with rank labels on the left and file labels underneath.
    pub fn render(&self, unicode: bool) -> String {
        let mut out = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            out.push_str(&format!("{} ", 8 - row));
            for cell in cells {
                let c = match cell {
                    Some(p) if unicode => p.glyph(),
                    Some(p) => p.symbol(),
                    None => '.',
                };
                out.push(' ');
                out.push(c);
            }
            out.push('\n');
        }
        out.push_str("   a b c d e f g h");
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(false))
    }
}
