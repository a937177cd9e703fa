// Chess rules engine: piece move rules, check-safe legal moves and a click-selection session
pub mod board;
pub mod engine;
pub mod error;
pub mod perft;
pub mod rules;
pub mod session;

pub use board::{Board, Color, Piece, PieceKind, Square};
pub use engine::{apply, is_in_check, legal_moves, LegalMoves, Move};
pub use error::ChessError;
