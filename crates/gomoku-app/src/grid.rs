//! Fixed-size matrix of cell states.

use crate::{
    Coordinate, PlacementError,
    constants::{BOARD_HEIGHT, BOARD_WIDTH},
};

/// Content of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CellState {
    /// No stone.
    #[default]
    Empty = 0,
    /// Stone of the first player.
    Black = 1,
    /// Stone of the second player.
    White = 2,
}

impl CellState {
    /// `true` for [`CellState::Empty`].
    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }
}

impl From<CellState> for u8 {
    fn from(state: CellState) -> Self {
        state as u8
    }
}

/// Board matrix, row-major.
///
/// Dimensions are fixed at construction and never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    rows: Vec<Vec<CellState>>,
}

impl Grid {
    /// Create an all-empty grid.
    pub fn new(width: u32, height: u32) -> Self {
        let rows = vec![vec![CellState::Empty; width as usize]; height as usize];
        Self { width, height, rows }
    }

    /// The 19x19 Gomoku board.
    pub fn standard() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> &[Vec<CellState>] {
        &self.rows
    }

    /// State of `cell`. `None` outside the grid.
    pub fn get(&self, cell: Coordinate) -> Option<CellState> {
        self.rows.get(cell.y() as usize)?.get(cell.x() as usize).copied()
    }

    /// Put `state` into an empty cell.
    pub fn place(&mut self, cell: Coordinate, state: CellState) -> Result<(), PlacementError> {
        let slot = self
            .rows
            .get_mut(cell.y() as usize)
            .and_then(|row| row.get_mut(cell.x() as usize))
            .ok_or(PlacementError::OutOfBounds { cell })?;

        if !slot.is_empty() {
            return Err(PlacementError::Occupied { cell });
        }
        *slot = state;
        Ok(())
    }

    /// Number of cells holding `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.rows.iter().flatten().filter(|&&c| c == state).count()
    }

    /// Reset every cell to [`CellState::Empty`].
    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.fill(CellState::Empty);
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_grid_is_all_zero() {
        let grid = Grid::standard();

        assert_eq!(grid.rows().len(), 19);
        assert!(grid.rows().iter().all(|row| row.len() == 19));
        assert!(grid.rows().iter().flatten().all(|&c| u8::from(c) == 0));
    }

    #[test]
    fn place_keeps_dimensions() {
        let mut grid = Grid::new(5, 3);
        assert_eq!(grid.place(Coordinate::from_unsigned(4, 2), CellState::Black), Ok(()));
        grid.clear();

        assert_eq!((grid.width(), grid.height()), (5, 3));
        assert_eq!(grid.rows().len(), 3);
        assert_eq!(grid.count(CellState::Empty), 15);
    }

    #[test]
    fn place_rejects_out_of_bounds_and_occupied() {
        let mut grid = Grid::new(3, 3);
        let cell = Coordinate::from_unsigned(1, 1);

        assert_eq!(grid.place(cell, CellState::White), Ok(()));
        assert_eq!(grid.place(cell, CellState::Black), Err(PlacementError::Occupied { cell }));
        assert_eq!(grid.get(cell), Some(CellState::White));

        let outside = Coordinate::from_unsigned(3, 0);
        assert_eq!(
            grid.place(outside, CellState::Black),
            Err(PlacementError::OutOfBounds { cell: outside })
        );
        assert_eq!(grid.get(outside), None);
    }
}
