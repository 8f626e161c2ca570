pub use board::*;
pub use cell::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod game;
mod generator;
mod types;

/// Board dimensions and mine count, validated so that generation always terminates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    rows: Coord,
    cols: Coord,
    mines: CellCount,
}

impl GameConfig {
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::EmptyBoard);
        }

        let total_cells = rows.checked_mul(cols).ok_or(GameError::TooManyMines {
            mines,
            max: CellCount::MAX,
        })?;
        if mines >= total_cells {
            return Err(GameError::TooManyMines {
                mines,
                max: total_cells - 1,
            });
        }

        Ok(Self { rows, cols, mines })
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn cols(&self) -> Coord {
        self.cols
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        self.rows * self.cols
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            mines: 10,
        }
    }
}
