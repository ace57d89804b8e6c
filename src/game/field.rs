use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::position::Position;

/// Contents of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Snake,
    Food,
}

impl Cell {
    pub const fn as_str(self) -> &'static str {
        match self {
            Cell::Empty => "",
            Cell::Snake => "snake",
            Cell::Food => "food",
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Snake => 'o',
            Cell::Food => '*',
        }
    }
}

/// Square game board, stored row-major (`rows[y][x]`).
///
/// Only built through [`Field::empty`] or [`init_fields`], so every row
/// holds exactly `size` cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    size: usize,
    rows: Vec<Vec<Cell>>,
}

impl Field {
    /// An all-empty `size × size` board
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            rows: vec![vec![Cell::Empty; size]; size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Cell at `pos`, or `None` when it lies off the board
    pub fn get(&self, pos: Position) -> Option<Cell> {
        let (x, y) = pos.to_index(self.size)?;
        self.rows.get(y)?.get(x).copied()
    }

    pub fn set(&mut self, pos: Position, cell: Cell) -> Result<(), GameError> {
        let size = self.size;
        let out_of_bounds = || GameError::PositionOutOfBounds {
            position: pos,
            size,
        };
        let (x, y) = pos.to_index(size).ok_or_else(out_of_bounds)?;
        let slot = self
            .rows
            .get_mut(y)
            .and_then(|row| row.get_mut(x))
            .ok_or_else(out_of_bounds)?;
        *slot = cell;
        Ok(())
    }

    /// True when `pos` is past any wall of the board
    pub fn is_out_of_bounds(&self, pos: Position) -> bool {
        pos.to_index(self.size).is_none()
    }

    /// True when moving onto `pos` would run into the snake's own body
    pub fn is_snake_at(&self, pos: Position) -> bool {
        self.get(pos) == Some(Cell::Snake)
    }

    /// Every non-empty position, scanning rows top to bottom
    pub fn occupied(&self) -> Vec<Position> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.iter().enumerate().filter_map(move |(x, cell)| {
                    if cell.is_empty() {
                        return None;
                    }
                    Some(Position::new(i32::try_from(x).ok()?, i32::try_from(y).ok()?))
                })
            })
            .collect()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Build the starting board with one snake segment and one piece of food.
///
/// Food is written last, so it wins when both positions coincide.
/// Both positions must lie on the board.
pub fn init_fields(field_size: usize, snake: Position, food: Position) -> Result<Field, GameError> {
    if field_size == 0 {
        return Err(GameError::InvalidFieldSize {
            size: field_size,
            min: 1,
        });
    }

    let mut field = Field::empty(field_size);
    field.set(snake, Cell::Snake)?;
    field.set(food, Cell::Food)?;

    log::debug!(
        "initialised {}x{} field: snake at ({}, {}), food at ({}, {})",
        field_size,
        field_size,
        snake.x,
        snake.y,
        food.x,
        food.y
    );

    Ok(field)
}
