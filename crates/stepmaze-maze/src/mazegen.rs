//! Maze generation: adjacency and wall carving for a [`GridGraph`].
//!
//! Two modes. Walled mode carves a perfect maze with randomized iterative
//! depth-first search, producing a spanning tree of passages over the
//! traversable cells reachable from the start. Open mode links every cell
//! to its full 8-neighborhood with no walls and no randomness.
//!
//! Generation runs to completion in one call and only touches structural
//! state (walls, neighbor lists, traversability); search state is left to
//! the search engine.

use log::debug;
use rand::{Rng, RngExt};

use stepmaze_core::{Coord, GridGraph, Side, Walls};

/// Randomized generation over a grid, parameterized on the RNG so tests can
/// inject a seeded one.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Mark interior cells non-traversable with probability `density`.
    ///
    /// Edge cells are never touched, and the start and end cells are forced
    /// traversable regardless of the dice. Returns the number of stones
    /// placed. `density` is expected in `[0, 1)`; callers validate.
    pub fn scatter_stones(&mut self, grid: &mut GridGraph, density: f64) -> usize {
        let start = grid.start();
        let end = grid.end();
        let mut placed = 0;
        for row in 1..grid.rows() - 1 {
            for col in 1..grid.cols() - 1 {
                let Some(i) = grid.idx(Coord::new(row, col)) else {
                    continue;
                };
                if i == start || i == end {
                    continue;
                }
                if self.rng.random::<f64>() < density {
                    grid.cells_mut()[i].traversable = false;
                    placed += 1;
                }
            }
        }
        grid.cells_mut()[start].traversable = true;
        grid.cells_mut()[end].traversable = true;
        debug!("placed {placed} stones");
        placed
    }

    /// Carve a perfect maze with randomized iterative depth-first search.
    ///
    /// Pops a cell off an explicit stack, collects its unvisited traversable
    /// candidates in up/right/down/left order, and if any exist pushes the
    /// cell back, picks one candidate uniformly at random, knocks down the
    /// wall on both sides, links the two cells' neighbor lists, and pushes
    /// the candidate. A cell with no candidates left is dropped (backtrack).
    ///
    /// Candidates are recollected at every pop, so their validity reflects
    /// the carving done so far. On an all-traversable grid the resulting
    /// passage graph is a spanning tree.
    pub fn carve(&mut self, grid: &mut GridGraph) {
        // Carving bookkeeping is transient and deliberately separate from
        // the cells' search `visited` flag.
        let mut carved = vec![false; grid.len()];
        let start = grid.start();
        carved[start] = true;
        let mut stack = vec![start];
        let mut candidates: Vec<(usize, Side)> = Vec::with_capacity(4);
        let mut passages = 0usize;

        while let Some(ci) = stack.pop() {
            let cc = grid.coord(ci);
            candidates.clear();
            for side in Side::ALL {
                let Some(ni) = grid.idx(cc + side.delta()) else {
                    continue;
                };
                let cell = &grid.cells()[ni];
                if cell.traversable && !carved[ni] {
                    candidates.push((ni, side));
                }
            }
            if candidates.is_empty() {
                continue;
            }
            stack.push(ci);
            let (ni, side) = candidates[self.rng.random_range(0..candidates.len())];

            let cells = grid.cells_mut();
            cells[ci].walls.clear(side);
            cells[ci].neighbors.push(ni);
            cells[ni].walls.clear(side.opposite());
            cells[ni].neighbors.push(ci);
            carved[ni] = true;
            stack.push(ni);
            passages += 1;
        }
        debug!("carved {passages} passages");
    }
}

/// Link every cell to all cells in its 8-neighborhood, bounded by the grid
/// edges, and drop all walls. Non-traversable cells still appear in
/// neighbor lists; the search skips them by flag.
pub fn connect_open(grid: &mut GridGraph) {
    for i in 0..grid.len() {
        let c = grid.coord(i);
        let ns: Vec<usize> = c.neighbors_8().iter().filter_map(|&n| grid.idx(n)).collect();
        let cell = &mut grid.cells_mut()[i];
        cell.neighbors = ns;
        cell.walls = Walls::open();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn reachable_from_start(grid: &GridGraph) -> usize {
        let mut seen = vec![false; grid.len()];
        let mut stack = vec![grid.start()];
        seen[grid.start()] = true;
        let mut count = 1;
        while let Some(i) = stack.pop() {
            for &n in &grid.cells()[i].neighbors {
                if !seen[n] {
                    seen[n] = true;
                    count += 1;
                    stack.push(n);
                }
            }
        }
        count
    }

    #[test]
    fn carve_makes_a_spanning_tree() {
        let mut grid = GridGraph::new(10, 10).unwrap();
        let mut generator = MazeGen::new(StdRng::seed_from_u64(7));
        generator.carve(&mut grid);

        // connected, with exactly n - 1 undirected edges: a tree
        assert_eq!(reachable_from_start(&grid), grid.len());
        let link_ends: usize = grid.cells().iter().map(|c| c.neighbors.len()).sum();
        assert_eq!(link_ends, 2 * (grid.len() - 1));
    }

    #[test]
    fn carved_links_are_symmetric_cardinal_passages() {
        let mut grid = GridGraph::new(8, 8).unwrap();
        let mut generator = MazeGen::new(StdRng::seed_from_u64(99));
        generator.carve(&mut grid);

        for i in 0..grid.len() {
            let cell = &grid.cells()[i];
            for &n in &cell.neighbors {
                let other = &grid.cells()[n];
                assert!(other.neighbors.contains(&i));
                let d = other.coord() - cell.coord();
                assert_eq!(d.row.abs() + d.col.abs(), 1);
                // the shared wall is down on both sides
                let side = Side::ALL
                    .into_iter()
                    .find(|s| s.delta() == d)
                    .unwrap();
                assert!(!cell.walls.has(side));
                assert!(!other.walls.has(side.opposite()));
            }
        }
    }

    #[test]
    fn carve_routes_around_stones() {
        let mut grid = GridGraph::new(6, 6).unwrap();
        let stone = Coord::new(2, 2);
        grid.cell_mut(stone).unwrap().traversable = false;
        let mut generator = MazeGen::new(StdRng::seed_from_u64(3));
        generator.carve(&mut grid);

        let stone_cell = grid.cell(stone).unwrap();
        assert!(stone_cell.neighbors.is_empty());
        let si = grid.idx(stone).unwrap();
        assert!(grid.cells().iter().all(|c| !c.neighbors.contains(&si)));
        // every other cell is still reached
        assert_eq!(reachable_from_start(&grid), grid.len() - 1);
    }

    #[test]
    fn connect_open_degrees() {
        let mut grid = GridGraph::new(5, 5).unwrap();
        connect_open(&mut grid);
        let degree = |r, c| grid.cell(Coord::new(r, c)).unwrap().neighbors.len();
        assert_eq!(degree(0, 0), 3);
        assert_eq!(degree(0, 2), 5);
        assert_eq!(degree(2, 2), 8);
        assert_eq!(degree(4, 4), 3);
        assert!(grid.cells().iter().all(|c| c.walls == Walls::open()));
    }

    #[test]
    fn connect_open_is_symmetric() {
        let mut grid = GridGraph::new(4, 4).unwrap();
        connect_open(&mut grid);
        for i in 0..grid.len() {
            for &n in &grid.cells()[i].neighbors {
                assert!(grid.cells()[n].neighbors.contains(&i));
            }
        }
    }

    #[test]
    fn stones_spare_edges_and_endpoints() {
        let mut grid = GridGraph::new(10, 10).unwrap();
        let mut generator = MazeGen::new(StdRng::seed_from_u64(42));
        let placed = generator.scatter_stones(&mut grid, 0.95);
        assert!(placed > 0);

        for cell in grid.cells() {
            let c = cell.coord();
            let on_edge =
                c.row == 0 || c.col == 0 || c.row == grid.rows() - 1 || c.col == grid.cols() - 1;
            if on_edge {
                assert!(cell.traversable, "edge cell {c} must stay traversable");
            }
        }
        assert!(grid.cells()[grid.start()].traversable);
        assert!(grid.cells()[grid.end()].traversable);
    }

    #[test]
    fn zero_density_places_nothing() {
        let mut grid = GridGraph::new(6, 6).unwrap();
        let mut generator = MazeGen::new(StdRng::seed_from_u64(1));
        assert_eq!(generator.scatter_stones(&mut grid, 0.0), 0);
        assert!(grid.cells().iter().all(|c| c.traversable));
    }
}
