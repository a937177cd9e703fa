//! Click-driven selection over an owned board.
//!
//! A first click on a piece selects it; a second click either moves it to a legal destination
//! or cancels the selection. Turns are not enforced.

use log::{debug, info, warn};

use crate::board::{Board, Piece, Square};
use crate::engine::{legal_moves, LegalMoves, Move};
use crate::rules::pseudo_moves;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece was selected; carries its legal destinations for highlighting.
    Selected(LegalMoves),
    /// Click on an empty square with nothing selected.
    Ignored,
    Moved { mv: Move, captured: Option<Piece> },
    /// Second click on anything that is not a legal destination.
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    selection: Option<LegalMoves>,
}

impl Default for Session {
    fn default() -> Self { Self::new(Board::standard()) }
}

impl Session {
    pub fn new(board: Board) -> Self { Self { board, selection: None } }

    pub fn board(&self) -> &Board { &self.board }

    pub fn into_board(self) -> Board { self.board }

    pub fn selected(&self) -> Option<Square> { self.selection.as_ref().map(LegalMoves::origin) }

    /// Legal destinations of the selected piece, if any.
    pub fn highlights(&self) -> Option<&LegalMoves> { self.selection.as_ref() }

    pub fn click(&mut self, sq: Square) -> ClickOutcome {
        let Some(moves) = self.selection.take() else {
            return self.select(sq);
        };
        let from = moves.origin();
        if !moves.contains(sq) {
            if pseudo_moves(&self.board, from).contains(&sq) {
                info!("{from}{sq} refused: the king would be left in check");
            } else {
                debug!("selection of {from} cancelled by click on {sq}");
            }
            return ClickOutcome::Cancelled;
        }
        match moves.commit(&mut self.board, sq) {
            Ok(captured) => {
                let mv = Move { from, to: sq };
                match captured {
                    Some(p) => info!("{mv} captures {p}"),
                    None => info!("{mv}"),
                }
                ClickOutcome::Moved { mv, captured }
            }
            Err(e) => {
                warn!("{from}{sq} could not be committed: {e}");
                ClickOutcome::Cancelled
            }
        }
    }

    fn select(&mut self, sq: Square) -> ClickOutcome {
        if self.board.is_empty_at(sq) {
            debug!("click on empty {sq} ignored");
            return ClickOutcome::Ignored;
        }
        let moves = legal_moves(&self.board, sq);
        debug!("selected {sq} with {} legal destinations", moves.len());
        self.selection = Some(moves.clone());
        ClickOutcome::Selected(moves)
    }
}
