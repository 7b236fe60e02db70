//! Grid representation and utilities for Game of Life

use crate::error::LifeError;
use itertools::iproduct;
use serde::{Deserialize, Serialize};
use std::slice::Chunks;

/// Relative positions of the 8 cells surrounding a cell
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A rectangular grid of cells, stored row-major
///
/// Cells outside the grid are always dead: the edge is fixed, not toroidal.
/// Every constructor, deserialization included, guarantees positive
/// dimensions and exactly `rows * cols` cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

/// Unchecked wire form of [`Grid`]
#[derive(Deserialize)]
struct RawGrid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = LifeError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let mut grid = Grid::new(raw.rows, raw.cols)?;
        if raw.cells.len() != grid.cells.len() {
            return Err(LifeError::CellCountMismatch {
                rows: raw.rows,
                cols: raw.cols,
                found: raw.cells.len(),
            });
        }
        grid.cells = raw.cells;
        Ok(grid)
    }
}

impl Grid {
    /// Create a new all-dead grid
    pub fn new(rows: usize, cols: usize) -> Result<Self, LifeError> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::InvalidDimension { rows, cols });
        }

        Ok(Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        })
    }

    /// Create a grid from nested rows, checking that it is rectangular
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, LifeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if height == 0 || width == 0 {
            return Err(LifeError::InvalidDimension {
                rows: height,
                cols: width,
            });
        }

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(LifeError::MalformedGrid {
                row,
                found,
                expected: width,
            });
        }

        Ok(Self {
            rows: height,
            cols: width,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Create a grid from integer rows, any non-zero value is alive
    pub fn from_bits(rows: &[&[u8]]) -> Result<Self, LifeError> {
        Self::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|&bit| bit != 0).collect())
                .collect(),
        )
    }

    /// All-dead grid with the same dimensions
    pub fn blank_like(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            cells: vec![false; self.cells.len()],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major cell states
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Mutable row-major cell states; the length is fixed
    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Iterate over rows as slices
    pub fn iter_rows(&self) -> Chunks<'_, bool> {
        self.cells.chunks(self.cols)
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Get cell value at coordinates, out of bounds cells are dead
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.contains(row, col) && self.cells[self.index(row, col)]
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<(), LifeError> {
        if !self.contains(row, col) {
            return Err(LifeError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let idx = self.index(row, col);
        self.cells[idx] = value;
        Ok(())
    }

    /// Mark every cell dead
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn same_dimensions(&self, other: &Grid) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Count living neighbors for a cell
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dr, dc)| self.is_neighbor_alive(row as isize + dr, col as isize + dc))
            .count() as u8
    }

    fn is_neighbor_alive(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && self.get(row as usize, col as usize)
    }

    /// Get all living cell coordinates in row-major order
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.rows, 0..self.cols)
            .filter(|&(row, col)| self.get(row, col))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Fraction of living cells
    pub fn density(&self) -> f64 {
        self.living_count() as f64 / self.cells.len() as f64
    }

    /// Copy the grid out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.iter_rows().map(<[bool]>::to_vec).collect()
    }
}
