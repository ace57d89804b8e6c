//! Core board logic for Snake
//!
//! Lookup tables, board construction and food placement, with no I/O or
//! rendering dependencies. A game loop owns the [`Field`] and calls into
//! this module when it starts a round or needs new food.

pub mod config;
pub mod constants;
pub mod direction;
pub mod error;
pub mod field;
pub mod food;
pub mod position;

// Re-export commonly used types
pub use config::GameConfig;
pub use constants::{Difficulty, GameStatus, DEFAULT_DIFFICULTY, DIFFICULTY, MIN_FIELD_SIZE};
pub use direction::{Direction, ParseDirectionError};
pub use error::GameError;
pub use field::{init_fields, Cell, Field};
pub use food::{food_position_with_rng, get_food_position, MAX_SAMPLING_ATTEMPTS};
pub use position::Position;
