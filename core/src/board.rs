use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::*;

/// Grid of cells with mines already placed and adjacency counts filled in.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    grid: Array2<Cell>,
    mine_count: CellCount,
}

impl Board {
    /// Every cell empty and hidden, no mines yet.
    pub(crate) fn empty(size: Coord2) -> Self {
        Self {
            grid: Array2::default(size),
            mine_count: 0,
        }
    }

    /// Builds a board with mines at exactly the given coordinates, duplicates collapse.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::EmptyBoard);
        }

        let mut board = Self::empty(size);
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            board.set_mine(coords);
        }

        board.calculate_numbers();
        Ok(board)
    }

    /// Places `count` mines uniformly among all cells with a partial Fisher-Yates shuffle.
    ///
    /// Callers guarantee the board is still empty and `count` fits.
    pub(crate) fn place_mines<R: Rng + ?Sized>(&mut self, count: CellCount, rng: &mut R) {
        let (_, cols) = self.size();
        let mut indices: Vec<usize> = (0..self.total_cells()).collect();
        let (chosen, _) = indices.partial_shuffle(rng, count);

        for &index in chosen.iter() {
            self.set_mine((index / cols, index % cols));
        }
    }

    /// Turns every non-mine cell with adjacent mines into a number.
    pub(crate) fn calculate_numbers(&mut self) {
        let (rows, cols) = self.size();
        for row in 0..rows {
            for col in 0..cols {
                let coords = (row, col);
                if self.grid[coords].is_mine() {
                    continue;
                }
                let count = self.adjacent_mine_count(coords);
                self.grid[coords].set_adjacent_count(count);
            }
        }
        log::trace!("Calculated adjacency counts for {}x{} board", rows, cols);
    }

    fn set_mine(&mut self, coords: Coord2) {
        if !self.grid[coords].is_mine() {
            self.grid[coords] = Cell::new(CellKind::Mine);
            self.mine_count += 1;
        }
    }

    /// Checks signed player coordinates against the board bounds.
    pub fn validate_coords(&self, row: isize, col: isize) -> Result<Coord2> {
        let (rows, cols) = self.size();
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(row), Ok(col)) if row < rows && col < cols => Ok((row, col)),
            _ => Err(GameError::InvalidCoords),
        }
    }

    pub fn size(&self) -> Coord2 {
        self.grid.dim()
    }

    pub fn total_cells(&self) -> CellCount {
        self.grid.len()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.grid[coords]
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.grid.iter_neighbors(coords)
    }

    /// Mines among the bounds-clipped 8-neighborhood, at most 8.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self.grid[pos].is_mine())
            .count() as u8
    }

    pub fn revealed_count(&self) -> CellCount {
        self.grid.iter().filter(|cell| cell.is_revealed()).count()
    }

    pub(crate) fn reveal(&mut self, coords: Coord2) -> Cell {
        let cell = &mut self.grid[coords];
        cell.reveal();
        *cell
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.grid[coords]
    }
}

/// Row-major, every glyph followed by a space, one row per line.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            for cell in row {
                write!(f, "{cell} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn numbers_around_corner_mine() {
        let board = Board::from_mine_coords((2, 2), &[(0, 0)]).unwrap();

        assert!(board[(0, 0)].is_mine());
        assert_eq!(board[(0, 1)].kind(), CellKind::Number(1));
        assert_eq!(board[(1, 0)].kind(), CellKind::Number(1));
        assert_eq!(board[(1, 1)].kind(), CellKind::Number(1));
    }

    #[test]
    fn cells_without_adjacent_mines_stay_empty() {
        let board = Board::from_mine_coords((3, 4), &[(0, 0)]).unwrap();

        assert_eq!(board[(0, 2)].kind(), CellKind::Empty);
        assert_eq!(board[(2, 3)].kind(), CellKind::Empty);
        assert_eq!(board[(1, 1)].kind(), CellKind::Number(1));
    }

    #[test]
    fn surrounded_cell_counts_eight() {
        let mines: Vec<_> = (0..3)
            .flat_map(|row| (0..3).map(move |col| (row, col)))
            .filter(|&coords| coords != (1, 1))
            .collect();
        let board = Board::from_mine_coords((3, 3), &mines).unwrap();

        assert_eq!(board[(1, 1)].kind(), CellKind::Number(8));
        assert_eq!(board.mine_count(), 8);
    }

    #[test]
    fn duplicate_mine_coords_collapse() {
        let board = Board::from_mine_coords((2, 2), &[(1, 1), (1, 1)]).unwrap();
        assert_eq!(board.mine_count(), 1);
    }

    #[test]
    fn out_of_range_mine_is_rejected() {
        assert_eq!(
            Board::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(
            Board::from_mine_coords((0, 3), &[]),
            Err(GameError::EmptyBoard)
        );
    }

    #[test]
    fn place_mines_places_exact_count() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut board = Board::empty((4, 5));
        board.place_mines(19, &mut rng);

        let placed = board.grid.iter().filter(|cell| cell.is_mine()).count();
        assert_eq!(placed, 19);
        assert_eq!(board.mine_count(), 19);
    }

    #[test]
    fn validate_coords_rejects_negative_and_overflow() {
        let board = Board::from_mine_coords((2, 3), &[]).unwrap();

        assert_eq!(board.validate_coords(1, 2), Ok((1, 2)));
        assert_eq!(board.validate_coords(-1, 0), Err(GameError::InvalidCoords));
        assert_eq!(board.validate_coords(0, -1), Err(GameError::InvalidCoords));
        assert_eq!(board.validate_coords(2, 0), Err(GameError::InvalidCoords));
        assert_eq!(board.validate_coords(0, 3), Err(GameError::InvalidCoords));
    }

    #[test]
    fn renders_hidden_board() {
        let board = Board::from_mine_coords((2, 3), &[(0, 0)]).unwrap();
        assert_eq!(board.to_string(), "- - - \n- - - \n");
    }

    #[test]
    fn cell_at_matches_index() {
        let board = Board::from_mine_coords((2, 2), &[(1, 0)]).unwrap();
        assert!(board.cell_at((1, 0)).is_mine());
        assert_eq!(board.cell_at((0, 1)), board[(0, 1)]);
        assert_eq!(board.cell_at((0, 1)).kind(), CellKind::Number(1));
    }
}
