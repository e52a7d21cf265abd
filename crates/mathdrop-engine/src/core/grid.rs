use serde::{Deserialize, Serialize};

use crate::PlacementError;

use super::shape::Shape;

/// Side length of the square board.
pub const GRID_SIZE: usize = 10;

/// Anchor cell where a shape's top-left corner is placed.
///
/// Coordinates are zero-based: `row` grows downward, `col` grows rightward.
/// Negative anchors are unrepresentable; anchors outside the board are
/// representable and simply fail placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Cell one row up, or `None` on the top edge.
    #[must_use]
    pub const fn up(self) -> Option<Self> {
        if self.row == 0 {
            None
        } else {
            Some(Self::new(self.row - 1, self.col))
        }
    }

    /// Cell one row down, or `None` on the bottom edge.
    #[must_use]
    pub const fn down(self) -> Option<Self> {
        if self.row >= GRID_SIZE - 1 {
            None
        } else {
            Some(Self::new(self.row + 1, self.col))
        }
    }

    /// Cell one column left, or `None` on the left edge.
    #[must_use]
    pub const fn left(self) -> Option<Self> {
        if self.col == 0 {
            None
        } else {
            Some(Self::new(self.row, self.col - 1))
        }
    }

    /// Cell one column right, or `None` on the right edge.
    #[must_use]
    pub const fn right(self) -> Option<Self> {
        if self.col >= GRID_SIZE - 1 {
            None
        } else {
            Some(Self::new(self.row, self.col + 1))
        }
    }
}

/// Occupancy matrix of the board.
///
/// Cells are non-negative integers with binary meaning (0 = empty, ≥ 1 =
/// occupied). As long as every write goes through [`Grid::check_placement`]
/// first, every cell stays in `{0, 1}`.
///
/// # Example
///
/// ```
/// use mathdrop_engine::{Grid, Position, ShapeKind};
///
/// let mut grid = Grid::EMPTY;
/// let square = ShapeKind::Square.shape();
/// let anchor = Position::new(8, 0);
///
/// assert!(grid.can_place(square, anchor));
/// grid.place(square, anchor);
/// assert_eq!(grid.cell(8, 1), 1);
/// assert!(!grid.can_place(square, anchor));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl Default for Grid {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Grid {
    pub const EMPTY: Self = Self {
        cells: [[0; GRID_SIZE]; GRID_SIZE],
    };

    /// Returns the raw cell value at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the board.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    #[must_use]
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] > 0
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8; GRID_SIZE]> {
        self.cells.iter()
    }

    /// Returns the number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&c| c > 0).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }

    /// Validates placing `shape` with its top-left corner at `position`.
    ///
    /// Bounds are checked first: a bounding box that leaves the board is
    /// [`PlacementError::OutOfBounds`] regardless of occupancy.
    pub fn check_placement(&self, shape: &Shape, position: Position) -> Result<(), PlacementError> {
        if position.row().saturating_add(shape.height()) > GRID_SIZE
            || position.col().saturating_add(shape.width()) > GRID_SIZE
        {
            return Err(PlacementError::OutOfBounds);
        }
        let overlaps = shape
            .occupied_offsets()
            .into_iter()
            .any(|(dr, dc)| self.cells[position.row() + dr][position.col() + dc] > 0);
        if overlaps {
            return Err(PlacementError::Overlap);
        }
        Ok(())
    }

    /// Returns whether `shape` fits at `position` without leaving the board or
    /// overlapping an occupied cell. Never panics.
    #[must_use]
    pub fn can_place(&self, shape: &Shape, position: Position) -> bool {
        self.check_placement(shape, position).is_ok()
    }

    /// Writes `shape` onto the board at `position`.
    ///
    /// Performs no validation: callers must have seen [`Self::can_place`]
    /// return `true` for the same shape and position. Each occupied shape cell
    /// is added to the board cell, which under that precondition is a set to 1.
    ///
    /// # Panics
    ///
    /// Panics if the shape leaves the board.
    pub fn place(&mut self, shape: &Shape, position: Position) {
        debug_assert!(self.can_place(shape, position));
        for (dr, dc) in shape.occupied_offsets() {
            self.cells[position.row() + dr][position.col() + dc] += 1;
        }
    }

    /// Returns whether the topmost row holds any occupied cell.
    ///
    /// Pure function of the board; repeated calls on an unchanged board agree.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.cells[0].iter().any(|&c| c > 0)
    }
}
