//! Board model: the grid plus stone alternation.

use crate::{CellState, Coordinate, Grid, PlacementError};

/// Gomoku board.
///
/// Stones alternate Black, White, Black... based on how many are already on
/// the grid. No rule checking beyond empty-cell placement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
}

impl Board {
    /// Empty board of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { grid: Grid::new(width, height) }
    }

    /// Empty 19x19 board.
    pub fn standard() -> Self {
        Self { grid: Grid::standard() }
    }

    /// Underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of stones on the board.
    pub fn stone_count(&self) -> usize {
        self.grid.count(CellState::Black) + self.grid.count(CellState::White)
    }

    /// Colour of the next stone to be placed.
    pub fn next_stone(&self) -> CellState {
        if self.stone_count() % 2 == 0 { CellState::Black } else { CellState::White }
    }

    /// Place the next stone on `cell` and return its colour.
    pub fn place_stone(&mut self, cell: Coordinate) -> Result<CellState, PlacementError> {
        let stone = self.next_stone();
        self.grid.place(cell, stone)?;
        Ok(stone)
    }

    /// Remove every stone.
    pub fn clear(&mut self) {
        self.grid.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stones_alternate() {
        let mut board = Board::standard();

        assert_eq!(board.place_stone(Coordinate::from_unsigned(9, 9)), Ok(CellState::Black));
        assert_eq!(board.place_stone(Coordinate::from_unsigned(9, 10)), Ok(CellState::White));
        assert_eq!(board.next_stone(), CellState::Black);
        assert_eq!(board.stone_count(), 2);
    }

    #[test]
    fn rejected_placement_does_not_flip_colour() {
        let mut board = Board::new(3, 3);
        let cell = Coordinate::from_unsigned(0, 0);

        assert!(board.place_stone(cell).is_ok());
        assert!(board.place_stone(cell).is_err());
        assert_eq!(board.next_stone(), CellState::White);

        board.clear();
        assert_eq!(board.stone_count(), 0);
        assert_eq!(board.next_stone(), CellState::Black);
    }
}
