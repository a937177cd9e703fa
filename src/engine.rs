//! Check detection and check-safe legal moves built on top of [`crate::rules`].

use std::collections::BTreeSet;
use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, Piece, PieceKind, Square};
use crate::error::ChessError;
use crate::rules::{destinations, pseudo_moves};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// First king of `color` in row-major order.
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board
        .pieces()
        .find(|(_, p)| p.kind == PieceKind::King && p.color == color)
        .map(|(sq, _)| sq)
}

/// True when some enemy piece could move onto the king of `color`.
/// A side without a king is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king) = king_square(board, color) else { return false };
    board
        .pieces()
        .filter(|(_, p)| p.color != color)
        .any(|(sq, p)| destinations(p, sq, board).contains(&king))
}

/// Legal destinations of the piece on `origin`, bound to the board they were computed on.
pub fn legal_moves(board: &Board, origin: Square) -> LegalMoves {
    let piece = board.get(origin);
    let destinations = match piece {
        None => BTreeSet::new(),
        Some(piece) => pseudo_moves(board, origin)
            .into_iter()
            .filter(|&to| {
                let mut sim = *board;
                sim.set(to, Some(piece));
                sim.set(origin, None);
                let safe = !is_in_check(&sim, piece.color);
                if !safe {
                    debug!("{origin}{to} rejected: leaves the {} king in check", piece.color);
                }
                safe
            })
            .collect(),
    };
    LegalMoves { origin, piece, destinations, snapshot: *board }
}

/// Relocates the piece on `from` to `to` without any legality check.
pub fn apply(board: &mut Board, from: Square, to: Square) -> Result<Option<Piece>, ChessError> {
    board.apply(from, to)
}

/// Every legal move of `color`, grouped by origin in row-major order.
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .pieces()
        .filter(|(_, p)| p.color == color)
        .flat_map(|(from, _)| legal_moves(board, from).iter().map(move |to| Move { from, to }).collect::<Vec<_>>())
        .collect()
}

/// Legal destinations of one piece.
///
/// Holds a snapshot of the board it was computed on, so a move can only be committed while
/// that board is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalMoves {
    origin: Square,
    piece: Option<Piece>,
    destinations: BTreeSet<Square>,
    snapshot: Board,
}

impl LegalMoves {
    pub fn origin(&self) -> Square { self.origin }

    /// The piece that would move, `None` for an empty origin.
    pub fn piece(&self) -> Option<Piece> { self.piece }

    pub fn contains(&self, sq: Square) -> bool { self.destinations.contains(&sq) }

    /// Destinations in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ { self.destinations.iter().copied() }

    pub fn len(&self) -> usize { self.destinations.len() }

    pub fn is_empty(&self) -> bool { self.destinations.is_empty() }

    /// Applies `origin -> to` to `board` if `to` is one of these destinations and `board` is
    /// the position they were computed on. Returns the captured piece.
    pub fn commit(&self, board: &mut Board, to: Square) -> Result<Option<Piece>, ChessError> {
        if *board != self.snapshot {
            warn!("refusing {}{to}: board changed since its moves were computed", self.origin);
            return Err(ChessError::StaleMoves);
        }
        if !self.contains(to) {
            warn!("refusing {}{to}: not a legal destination", self.origin);
            return Err(ChessError::IllegalMove { from: self.origin, to, reason: "not a legal destination" });
        }
        board.apply(self.origin, to)
    }
}
