use chess_rules::session::{ClickOutcome, Session};
use chess_rules::{Board, Color, Move, Piece, PieceKind, Square};
use pretty_assertions::assert_eq;

fn sq(s: &str) -> Square { s.parse().unwrap() }

fn selected(outcome: ClickOutcome) -> Vec<Square> {
    match outcome {
        ClickOutcome::Selected(moves) => moves.iter().collect(),
        other => panic!("expected a selection, got {other:?}"),
    }
}

#[test]
fn first_click_returns_highlights() {
    let mut s = Session::default();
    assert_eq!(selected(s.click(sq("e2"))), vec![sq("e3")]);
    assert_eq!(s.highlights().map(|m| m.iter().collect::<Vec<_>>()), Some(vec![sq("e3")]));
}

#[test]
fn every_non_legal_second_click_cancels() {
    for second in ["e2", "e5", "e4", "d2", "a8"] {
        let mut s = Session::default();
        selected(s.click(sq("e2")));
        assert_eq!(s.click(sq(second)), ClickOutcome::Cancelled, "second click on {second}");
        assert_eq!(s.selected(), None);
        assert_eq!(*s.board(), Board::standard());
    }
}

#[test]
fn move_exposing_the_king_is_refused() {
    let board = Board::from_fen("4r1k1/8/8/8/8/8/4R3/4K3").unwrap();
    let mut s = Session::new(board);
    selected(s.click(sq("e2")));
    assert_eq!(s.click(sq("a2")), ClickOutcome::Cancelled);
    assert_eq!(*s.board(), board);
}

#[test]
fn capture_reports_the_taken_piece() {
    let board = Board::from_fen("4r1k1/8/8/8/8/8/4R3/4K3").unwrap();
    let mut s = Session::new(board);
    selected(s.click(sq("e2")));
    let out = s.click(sq("e8"));
    assert_eq!(
        out,
        ClickOutcome::Moved {
            mv: Move { from: sq("e2"), to: sq("e8") },
            captured: Some(Piece::new(PieceKind::Rook, Color::Black)),
        }
    );
    assert_eq!(s.board().get(sq("e8")), Some(Piece::new(PieceKind::Rook, Color::White)));
    assert_eq!(s.board().pieces().count(), 3);
}

#[test]
fn turns_are_not_enforced() {
    let mut s = Session::default();
    for (from, to) in [("b8", "c6"), ("c6", "d4"), ("g8", "f6")] {
        selected(s.click(sq(from)));
        assert!(matches!(s.click(sq(to)), ClickOutcome::Moved { .. }), "{from}{to}");
    }
    assert_eq!(s.into_board().fen_placement(), "r1bqkb1r/pppppppp/5n2/8/3n4/8/PPPPPPPP/RNBQKBNR");
}

#[test]
fn a_cancel_needs_a_fresh_selection() {
    let mut s = Session::default();
    selected(s.click(sq("g1")));
    assert_eq!(s.click(sq("g1")), ClickOutcome::Cancelled);
    // with nothing selected, f3 is just an empty square
    assert_eq!(s.click(sq("f3")), ClickOutcome::Ignored);
    assert_eq!(*s.board(), Board::standard());
}
