// Cross-check against cozy-chess on positions where both rule sets coincide: no castling
// rights, no en passant, no pawns on their start or promotion ranks.
use chess_rules::engine::all_legal_moves;
use chess_rules::{Board, Color};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

const POSITIONS: &[&str] = &[
    "4k3/8/8/8/8/8/8/R3K2R w - - 0 1",
    "8/8/3k4/8/8/1N6/8/4K2Q w - - 0 1",
    "4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1",
    "8/5k2/8/3p4/4P3/2n5/8/4K3 w - - 0 1",
    "4k3/8/8/8/8/8/3q4/4K3 w - - 0 1",
    "r3k3/8/8/8/8/5n2/8/R3K3 w - - 0 1",
    "3rk3/8/8/1b6/8/2P5/3K4/8 w - - 0 1",
];

fn ours(fen: &str) -> BTreeSet<String> {
    let b = Board::from_fen(fen).unwrap();
    all_legal_moves(&b, Color::White).iter().map(|m| m.to_string()).collect()
}

fn theirs(fen: &str) -> BTreeSet<String> {
    let b = cozy_chess::Board::from_fen(fen, false).unwrap();
    let mut out = BTreeSet::new();
    b.generate_moves(|moves| {
        for m in moves { out.insert(format!("{}", m)); }
        false
    });
    out
}

#[test]
fn legal_moves_agree_with_cozy_chess() {
    for fen in POSITIONS {
        assert_eq!(ours(fen), theirs(fen), "{fen}");
    }
}
