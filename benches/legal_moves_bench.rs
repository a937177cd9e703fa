use chess_rules::engine::all_legal_moves;
use chess_rules::{is_in_check, legal_moves, Board, Color, Square};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

const MIDDLEGAME: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";

fn bench_legal_moves(c: &mut Criterion) {
    let b = Board::from_fen(MIDDLEGAME).unwrap();
    let queen: Square = "f3".parse().unwrap();
    c.bench_function("legal_moves_queen_middlegame", |ben| {
        ben.iter(|| black_box(legal_moves(black_box(&b), queen).len()))
    });
    c.bench_function("all_legal_moves_white_middlegame", |ben| {
        ben.iter(|| black_box(all_legal_moves(black_box(&b), Color::White).len()))
    });
}

fn bench_is_in_check(c: &mut Criterion) {
    let b = Board::from_fen(MIDDLEGAME).unwrap();
    c.bench_function("is_in_check_middlegame", |ben| {
        ben.iter(|| black_box(is_in_check(black_box(&b), Color::Black)))
    });
}

criterion_group!(benches, bench_legal_moves, bench_is_in_check);
criterion_main!(benches);
