use std::fmt;

use super::position::Position;

/// Errors produced by board construction and food placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The board is too small for the requested operation
    InvalidFieldSize { size: usize, min: usize },
    /// Board coordinates would not fit in a `Position`
    FieldTooLarge { size: usize },
    /// A position lies outside the `size × size` board
    PositionOutOfBounds { position: Position, size: usize },
    /// Every interior cell is occupied
    NoFreeCell { size: usize },
    /// Difficulty level has no entry in the difficulty table
    UnknownDifficulty { level: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidFieldSize { size, min } => {
                write!(f, "field size {} is too small (minimum {})", size, min)
            }
            GameError::FieldTooLarge { size } => {
                write!(f, "field size {} has coordinates beyond i32", size)
            }
            GameError::PositionOutOfBounds { position, size } => write!(
                f,
                "position ({}, {}) is outside a {}x{} field",
                position.x, position.y, size, size
            ),
            GameError::NoFreeCell { size } => {
                write!(f, "no free interior cell left on a {}x{} field", size, size)
            }
            GameError::UnknownDifficulty { level } => {
                write!(f, "unknown difficulty level {}", level)
            }
        }
    }
}

impl std::error::Error for GameError {}
