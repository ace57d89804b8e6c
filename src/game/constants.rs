//! Fixed game tables: tick intervals per difficulty and session status

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Tick interval in milliseconds for each difficulty level.
/// Higher levels tick faster.
pub const DIFFICULTY: [u64; 5] = [1000, 500, 100, 50, 10];

/// Level used when the player picks nothing
pub const DEFAULT_DIFFICULTY: usize = 3;

/// Smallest board with at least one interior cell
pub const MIN_FIELD_SIZE: usize = 3;

/// A validated index into [`DIFFICULTY`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Difficulty(usize);

impl Difficulty {
    pub fn new(level: usize) -> Result<Self, GameError> {
        if level < DIFFICULTY.len() {
            Ok(Self(level))
        } else {
            Err(GameError::UnknownDifficulty { level })
        }
    }

    pub fn level(&self) -> usize {
        self.0
    }

    pub fn interval_ms(&self) -> u64 {
        DIFFICULTY[self.0]
    }

    /// How long the game loop should wait between two ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms())
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(DEFAULT_DIFFICULTY)
    }
}

/// Lifecycle stage of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    #[serde(rename = "start")]
    Init,
    Playing,
    Suspended,
    Gameover,
}

impl GameStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            GameStatus::Init => "start",
            GameStatus::Playing => "playing",
            GameStatus::Suspended => "suspended",
            GameStatus::Gameover => "gameover",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
