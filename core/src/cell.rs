use core::fmt;

/// What a grid position holds, fixed once the board has been set up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Mine,
    /// Non-mine with at least one adjacent mine, never zero.
    Number(u8),
}

impl Default for CellKind {
    fn default() -> Self {
        Self::Empty
    }
}

/// One grid position together with whether the player has revealed it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    kind: CellKind,
    revealed: bool,
}

impl Cell {
    pub const HIDDEN_GLYPH: char = '-';
    pub const EMPTY_GLYPH: char = ' ';
    pub const MINE_GLYPH: char = '*';

    pub const fn new(kind: CellKind) -> Self {
        Self {
            kind,
            revealed: false,
        }
    }

    pub const fn kind(self) -> CellKind {
        self.kind
    }

    pub const fn is_mine(self) -> bool {
        matches!(self.kind, CellKind::Mine)
    }

    pub const fn is_number(self) -> bool {
        matches!(self.kind, CellKind::Number(_))
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    /// Revealing is one-way, calling it again has no further effect.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Single character shown for this cell in the text board.
    pub fn glyph(self) -> char {
        use CellKind::*;

        if !self.revealed {
            return Self::HIDDEN_GLYPH;
        }

        match self.kind {
            Empty => Self::EMPTY_GLYPH,
            Mine => Self::MINE_GLYPH,
            Number(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        }
    }

    /// Promotes an empty cell to a number during board setup.
    pub(crate) fn set_adjacent_count(&mut self, count: u8) {
        if matches!(self.kind, CellKind::Empty) && count > 0 {
            self.kind = CellKind::Number(count);
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
