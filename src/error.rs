use thiserror::Error;

use crate::types::{Color, Square};

/// Every rejection the engine can report. All of them are recoverable:
/// the caller re-prompts and the game state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("({x}, {y}) is outside the {size}x{size} board")]
    OutOfBounds { x: i32, y: i32, size: u8 },

    #[error("no piece at {0}")]
    EmptySelection(Square),

    #[error("illegal move: {0}")]
    IllegalMove(String),

    #[error("it is {expected}'s turn, but the selected piece is {found}")]
    NotYourTurn { expected: Color, found: Color },

    #[error("game is already over")]
    GameOver,

    #[error("invalid board configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid board diagram: {0}")]
    InvalidDiagram(String),
}
