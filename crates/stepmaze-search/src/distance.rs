//! Distance functions used as both edge cost and heuristic.

use stepmaze_core::Coord;

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> f64 {
    ((a.row - b.row).abs() + (a.col - b.col).abs()) as f64
}

/// Euclidean (L2) distance between two coordinates.
#[inline]
pub fn euclidean(a: Coord, b: Coord) -> f64 {
    let dr = (a.row - b.row) as f64;
    let dc = (a.col - b.col) as f64;
    (dr * dr + dc * dc).sqrt()
}

/// The metric a search runs under.
///
/// Walled mazes move in four directions at unit cost, so Manhattan distance
/// is admissible and consistent. Open grids move in eight directions with
/// diagonal cost √2, where Euclidean distance is admissible. The same
/// metric serves as edge cost so heuristic and cost stay consistent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    Manhattan,
    Euclidean,
}

impl Metric {
    /// Distance from `a` to `b` under this metric.
    #[inline]
    pub fn dist(self, a: Coord, b: Coord) -> f64 {
        match self {
            Metric::Manhattan => manhattan(a, b),
            Metric::Euclidean => euclidean(a, b),
        }
    }
}
