use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::constants::{Difficulty, DEFAULT_DIFFICULTY, MIN_FIELD_SIZE};
use super::error::GameError;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board
    pub field_size: usize,
    /// Index into the difficulty table
    pub difficulty: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_size: 20,
            difficulty: DEFAULT_DIFFICULTY,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom board size
    pub fn new(field_size: usize) -> Self {
        Self {
            field_size,
            ..Default::default()
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Create a large board
    pub fn large() -> Self {
        Self::new(30)
    }

    /// Check the board can hold food and the difficulty exists
    pub fn validate(&self) -> Result<Difficulty, GameError> {
        if self.field_size < MIN_FIELD_SIZE {
            return Err(GameError::InvalidFieldSize {
                size: self.field_size,
                min: MIN_FIELD_SIZE,
            });
        }
        Difficulty::new(self.difficulty)
    }

    /// Load a configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: GameConfig =
            serde_json::from_str(&json).context("Failed to deserialize config")?;
        config.validate().context("Invalid config")?;
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }
}
