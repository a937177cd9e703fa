use crate::board::Square;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("illegal move: {from} -> {to}: {reason}")]
    IllegalMove {
        from: Square,
        to: Square,
        reason: &'static str,
    },

    #[error("legal move set is stale: the board changed since it was computed")]
    StaleMoves,

    #[error("invalid FEN string: {0}")]
    InvalidFen(String),
}
