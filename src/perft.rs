// Perft over this crate's rules (single pawn steps, no castling, no promotion), copying the
// board per child the same way legality simulation does.
use crate::board::{Board, Color};
use crate::engine::all_legal_moves;

pub fn perft(board: &Board, color: Color, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let moves = all_legal_moves(board, color);
    if depth == 1 { return moves.len() as u64; }
    let mut nodes = 0u64;
    for mv in moves {
        let mut child = *board;
        if child.apply(mv.from, mv.to).is_ok() {
            nodes += perft(&child, color.opponent(), depth - 1);
        }
    }
    nodes
}
