use core::fmt;

use crate::*;

/// Valid transitions:
/// - InProgress -> Over
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    /// Board generated, moves accepted
    InProgress,
    /// A mine was revealed
    Over,
}

impl GameState {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Over)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Outcome of revealing a hidden cell
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    HitMine,
    Number(u8),
    Empty,
}

impl RevealOutcome {
    pub const fn ends_game(self) -> bool {
        matches!(self, Self::HitMine)
    }
}

impl fmt::Display for RevealOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::HitMine => "Game Over! You hit a mine.",
            Self::Number(_) => "Cell is a number. Keep playing.",
            Self::Empty => "Cell is empty. Keep playing.",
        })
    }
}

/// Represents a game from board generation until a mine is hit
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    board: Board,
    state: GameState,
}

impl Game {
    pub fn new(config: GameConfig, generator: impl BoardGenerator) -> Self {
        Self::from_board(generator.generate(config))
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            state: Default::default(),
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn game_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.board.revealed_count()
    }

    /// Reveal a single hidden cell at 0-indexed `(row, col)`, neighbors are never opened.
    ///
    /// Rejected moves leave the board untouched. Calls after the game is over are still
    /// applied, the state just stays over.
    pub fn play(&mut self, row: isize, col: isize) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(row, col)?;

        if self.board.cell_at(coords).is_revealed() {
            log::debug!("Cell at {:?} already revealed", coords);
            return Err(GameError::AlreadyRevealed);
        }

        let cell = self.board.reveal(coords);
        log::debug!("Revealed cell at {:?}: {:?}", coords, cell.kind());

        Ok(match cell.kind() {
            CellKind::Mine => {
                self.state = GameState::Over;
                RevealOutcome::HitMine
            }
            CellKind::Number(count) => RevealOutcome::Number(count),
            CellKind::Empty => RevealOutcome::Empty,
        })
    }

    /// Text rendering of the board as the player sees it.
    pub fn display_board(&self) -> String {
        self.board.to_string()
    }
}
