use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid move. Try again.")]
    InvalidCoords,
    #[error("Cell already revealed. Try again.")]
    AlreadyRevealed,
    #[error("Too many mines: requested {mines}, but at most {max} fit")]
    TooManyMines { mines: usize, max: usize },
    #[error("Board must have at least one row and one column")]
    EmptyBoard,
}

pub type Result<T> = core::result::Result<T, GameError>;
