//! The grid graph arena: all cells of one maze, allocated together.

use crate::cell::Cell;
use crate::geom::Coord;

/// A rows × cols matrix of [`Cell`]s with designated start and end cells.
///
/// Cells live in a single row-major arena and are addressed by flat index;
/// positions are stable identities for the lifetime of the grid. Individual
/// cells are never destroyed — a new run replaces the whole grid.
#[derive(Clone, Debug)]
pub struct GridGraph {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
    start: usize,
    end: usize,
}

impl GridGraph {
    /// Allocate a fresh grid with the start cell at the top-left corner and
    /// the end cell at the bottom-right.
    ///
    /// Returns `None` for non-positive dimensions, or for a 1×1 grid where
    /// start and end could not be distinct.
    pub fn new(rows: i32, cols: i32) -> Option<Self> {
        if rows <= 0 || cols <= 0 || rows as i64 * (cols as i64) < 2 {
            return None;
        }
        let len = rows as usize * cols as usize;
        let mut cells = Vec::with_capacity(len);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::new(Coord::new(row, col)));
            }
        }
        Some(Self {
            rows,
            cols,
            cells,
            start: 0,
            end: len - 1,
        })
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat index of the start cell.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Flat index of the end cell.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn start_coord(&self) -> Coord {
        self.coord(self.start)
    }

    #[inline]
    pub fn end_coord(&self) -> Coord {
        self.coord(self.end)
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a coordinate to a flat index. Returns `None` if out of range.
    #[inline]
    pub fn idx(&self, c: Coord) -> Option<usize> {
        if c.row < 0 || c.row >= self.rows || c.col < 0 || c.col >= self.cols {
            return None;
        }
        Some((c.row * self.cols + c.col) as usize)
    }

    /// Convert a flat index back to a coordinate.
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        Coord::new(idx as i32 / self.cols, idx as i32 % self.cols)
    }

    // -----------------------------------------------------------------------
    // Cell access
    // -----------------------------------------------------------------------

    /// The cell at `c`, or `None` if out of range.
    #[inline]
    pub fn cell(&self, c: Coord) -> Option<&Cell> {
        self.idx(c).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `c`.
    #[inline]
    pub fn cell_mut(&mut self, c: Coord) -> Option<&mut Cell> {
        self.idx(c).map(|i| &mut self.cells[i])
    }

    /// All cells, in row-major order. Indices into this slice are the flat
    /// indices used by `neighbors` and `parent` links.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Clear search state on every cell; structure is untouched.
    pub fn reset_search(&mut self) {
        for cell in &mut self.cells {
            cell.reset_search();
        }
    }
}
