//! Error type for 2048 game operations.

use crate::types::BoardError;

/// Error that can occur when building or advancing a game.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum GameError {
    /// Input did not name one of the four directions.
    #[display("Invalid direction: {:?}", _0)]
    InvalidDirection(String),

    /// An injected board is not a valid 2048 board.
    #[display("Malformed board: {}", _0)]
    MalformedBoard(BoardError),

    /// An injected score cannot result from merges.
    #[display("Score {} is not a multiple of 4", _0)]
    InvalidScore(u64),

    /// Game rules are out of range.
    #[display("Invalid rules: {}", _0)]
    InvalidRules(String),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        Self::MalformedBoard(err)
    }
}
