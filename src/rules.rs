//! Pseudo-legal move rules: where a piece may go by its movement pattern and the occupancy of
//! the board, without regard to its own king's safety.

use crate::board::{Board, Color, Piece, PieceKind, Square};

const KING_STEPS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

const KNIGHT_JUMPS: [(i32, i32); 8] = [
    (2, 1), (2, -1), (-2, 1), (-2, -1),
    (1, 2), (1, -2), (-1, 2), (-1, -2),
];

const ORTHOGONAL: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const DIAGONAL: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Pseudo-legal destinations of the piece on `from`; empty when the square is empty.
pub fn pseudo_moves(board: &Board, from: Square) -> Vec<Square> {
    match board.get(from) {
        Some(piece) => destinations(piece, from, board),
        None => Vec::new(),
    }
}

/// Pseudo-legal destinations for `piece` standing on `from`.
pub fn destinations(piece: Piece, from: Square, board: &Board) -> Vec<Square> {
    let color = piece.color;
    match piece.kind {
        PieceKind::King => step_moves(from, color, board, &KING_STEPS),
        PieceKind::Knight => step_moves(from, color, board, &KNIGHT_JUMPS),
        PieceKind::Rook => slide_moves(from, color, board, &ORTHOGONAL),
        PieceKind::Bishop => slide_moves(from, color, board, &DIAGONAL),
        PieceKind::Queen => {
            let mut out = destinations(Piece::new(PieceKind::Rook, color), from, board);
            out.extend(destinations(Piece::new(PieceKind::Bishop, color), from, board));
            out
        }
        PieceKind::Pawn => pawn_moves(from, color, board),
    }
}

fn can_land(board: &Board, sq: Square, color: Color) -> bool {
    board.get(sq).map_or(true, |p| p.color != color)
}

fn step_moves(from: Square, color: Color, board: &Board, offsets: &[(i32, i32)]) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|&sq| can_land(board, sq, color))
        .collect()
}

fn slide_moves(from: Square, color: Color, board: &Board, dirs: &[(i32, i32)]) -> Vec<Square> {
    let mut out = Vec::new();
    for &(dr, dc) in dirs {
        let mut cur = from;
        while let Some(next) = cur.offset(dr, dc) {
            match board.get(next) {
                None => out.push(next),
                Some(p) => {
                    if p.color != color { out.push(next); }
                    break;
                }
            }
            cur = next;
        }
    }
    out
}

// No double step, no en passant, no promotion.
fn pawn_moves(from: Square, color: Color, board: &Board) -> Vec<Square> {
    let dr = color.forward();
    let mut out = Vec::new();
    if let Some(ahead) = from.offset(dr, 0) {
        if board.is_empty_at(ahead) { out.push(ahead); }
    }
    for dc in [-1, 1] {
        if let Some(diag) = from.offset(dr, dc) {
            if board.get(diag).is_some_and(|p| p.color != color) { out.push(diag); }
        }
    }
    out
}
