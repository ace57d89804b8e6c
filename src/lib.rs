//! Snake Board - lookup tables and board helpers for a grid-based Snake game
//!
//! This library provides:
//! - Direction, difficulty and status tables (game module)
//! - Initial board construction and food placement (game module)
//! - Arrow key code lookup (input module)

pub mod game;
pub mod input;
