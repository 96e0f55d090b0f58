//! Per-cell state: wall flags and search bookkeeping.

use crate::geom::{Coord, Side};

// ---------------------------------------------------------------------------
// Walls
// ---------------------------------------------------------------------------

/// Wall flags on the four sides of a cell. Only meaningful in walled mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Walls {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Walls {
    /// All four walls up.
    pub const fn solid() -> Self {
        Self {
            top: true,
            right: true,
            bottom: true,
            left: true,
        }
    }

    /// No walls.
    pub const fn open() -> Self {
        Self {
            top: false,
            right: false,
            bottom: false,
            left: false,
        }
    }

    /// Whether the wall on `side` is up.
    #[inline]
    pub const fn has(self, side: Side) -> bool {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    /// Knock down the wall on `side`.
    #[inline]
    pub const fn clear(&mut self, side: Side) {
        match side {
            Side::Top => self.top = false,
            Side::Right => self.right = false,
            Side::Bottom => self.bottom = false,
            Side::Left => self.left = false,
        }
    }
}

impl Default for Walls {
    fn default() -> Self {
        Self::solid()
    }
}

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// One grid position with structural and search state.
///
/// Structural state (`traversable`, `walls`, `neighbors`) is populated once
/// by maze generation; search state (`g`, `h`, `f`, `parent`, `visited`,
/// `open`) is reset at the start of every search.
///
/// `neighbors` holds flat indices into the owning [`GridGraph`] arena, and
/// `parent` is a non-owning back-reference of the same kind.
///
/// [`GridGraph`]: crate::GridGraph
#[derive(Clone, Debug)]
pub struct Cell {
    coord: Coord,
    /// Cost of the best known path from the start cell.
    pub g: f64,
    /// Heuristic estimate of the remaining cost to the end cell.
    pub h: f64,
    /// Total estimated cost, `g + h` whenever both are finite.
    pub f: f64,
    /// Predecessor on the best known path, if any.
    pub parent: Option<usize>,
    /// Whether the cell has been settled (its `g` is final).
    pub visited: bool,
    /// Whether the cell is pending in the open set. Never true together
    /// with `visited`.
    pub open: bool,
    /// Whether search and generation may pass through this cell.
    pub traversable: bool,
    pub walls: Walls,
    pub neighbors: Vec<usize>,
}

impl Cell {
    /// Create a fresh cell at `coord`: solid walls, traversable, no
    /// adjacency, search state cleared.
    pub fn new(coord: Coord) -> Self {
        Self {
            coord,
            g: f64::INFINITY,
            h: f64::INFINITY,
            f: f64::INFINITY,
            parent: None,
            visited: false,
            open: false,
            traversable: true,
            walls: Walls::solid(),
            neighbors: Vec::new(),
        }
    }

    /// The cell's fixed grid position.
    #[inline]
    pub const fn coord(&self) -> Coord {
        self.coord
    }

    /// Clear search state only; walls, adjacency and traversability are
    /// untouched.
    pub fn reset_search(&mut self) {
        self.g = f64::INFINITY;
        self.h = f64::INFINITY;
        self.f = f64::INFINITY;
        self.parent = None;
        self.visited = false;
        self.open = false;
    }
}
