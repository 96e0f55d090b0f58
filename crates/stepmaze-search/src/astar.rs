//! Stepwise A* over a [`GridGraph`].
//!
//! One call to [`SearchSession::step`] performs exactly one frontier
//! expansion and returns, so an external driver can pace the search (for
//! example one expansion per rendered frame) with no threads or coroutines
//! involved. All search state lives in the grid cells and the session's
//! open-set queue.

use log::debug;

use stepmaze_core::{Coord, GridGraph};

use crate::distance::Metric;
use crate::queue::OrderedQueue;

/// Where a search currently stands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    /// Frontier cells remain and the end cell has not been settled.
    Running,
    /// The end cell was settled; its predecessor chain is the shortest path.
    Solved,
    /// The open set drained without reaching the end cell. Not an error:
    /// the target is unreachable.
    Exhausted,
}

impl SearchState {
    /// Whether the search has reached a terminal state.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, SearchState::Running)
    }
}

/// A single in-flight search: the frontier pointer, the open set, and the
/// running maximum of observed path costs.
///
/// Exactly one session per grid at a time; the session and the grid advance
/// together through [`step`](Self::step).
pub struct SearchSession {
    open: OrderedQueue<usize>,
    current: usize,
    state: SearchState,
    metric: Metric,
    /// Largest tentative g-cost computed so far. Display scaling only,
    /// never consulted by the algorithm.
    max_g: f64,
    /// Scratch buffer for the neighbor list of the cell being expanded.
    nbuf: Vec<usize>,
}

impl SearchSession {
    /// Begin a search on `grid` from its start cell towards its end cell.
    ///
    /// Clears any previous search state on the grid, seeds the start cell
    /// (g = 0, h = dist(start, end)) and enqueues it.
    pub fn start(grid: &mut GridGraph, metric: Metric) -> Self {
        grid.reset_search();
        let start = grid.start();
        let h = metric.dist(grid.start_coord(), grid.end_coord());
        let mut open = OrderedQueue::new();
        {
            let cell = &mut grid.cells_mut()[start];
            cell.g = 0.0;
            cell.h = h;
            cell.f = h;
            cell.visited = false;
            cell.open = true;
        }
        open.enqueue(start, h);
        debug!(
            "search started: {} -> {}, metric {:?}",
            grid.start_coord(),
            grid.end_coord(),
            metric
        );
        Self {
            open,
            current: start,
            state: SearchState::Running,
            metric,
            max_g: 0.0,
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Perform one frontier expansion.
    ///
    /// Terminal states are sticky: once `Solved` or `Exhausted` is reached,
    /// further calls mutate nothing and return the same state.
    pub fn step(&mut self, grid: &mut GridGraph) -> SearchState {
        if self.state.is_terminal() {
            return self.state;
        }
        let Some(ci) = self.open.dequeue_min() else {
            debug!("open set drained, end cell unreachable");
            self.state = SearchState::Exhausted;
            return self.state;
        };
        self.current = ci;
        let end = grid.end();
        let end_coord = grid.end_coord();

        {
            let cell = &mut grid.cells_mut()[ci];
            cell.visited = true;
            cell.open = false;
        }

        if ci == end {
            // First settlement of the end cell is optimal under a
            // consistent heuristic; pending frontier work is discarded.
            self.open.clear();
            self.state = SearchState::Solved;
            debug!("solved with g = {}", grid.cells()[ci].g);
            return self.state;
        }

        let current_g = grid.cells()[ci].g;
        let current_coord = grid.cells()[ci].coord();

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        nbuf.extend_from_slice(&grid.cells()[ci].neighbors);

        for &ni in &nbuf {
            let cells = grid.cells_mut();
            let neighbor = &cells[ni];
            if !neighbor.traversable || neighbor.visited {
                continue;
            }
            let ncoord = neighbor.coord();
            let tentative = current_g + self.metric.dist(current_coord, ncoord);
            if tentative > self.max_g {
                self.max_g = tentative;
            }
            if tentative < neighbor.g {
                let neighbor = &mut cells[ni];
                neighbor.parent = Some(ci);
                neighbor.g = tentative;
                neighbor.h = self.metric.dist(ncoord, end_coord);
                neighbor.f = tentative + neighbor.h;
                let f = neighbor.f;
                if neighbor.open {
                    // Priority changed while queued: replace the stale
                    // entry rather than mutating it in place.
                    self.open.remove(&ni);
                } else {
                    neighbor.open = true;
                }
                self.open.enqueue(ni, f);
            }
        }
        self.nbuf = nbuf;
        self.state
    }

    /// Step until the search reaches a terminal state.
    pub fn run_to_completion(&mut self, grid: &mut GridGraph) -> SearchState {
        while !self.state.is_terminal() {
            self.step(grid);
        }
        self.state
    }

    /// The predecessor chain from the current frontier cell back to the
    /// start, returned start-first. After [`SearchState::Solved`] this is
    /// the shortest path from start to end.
    pub fn path(&self, grid: &GridGraph) -> Vec<Coord> {
        let mut path = Vec::new();
        let mut idx = Some(self.current);
        while let Some(i) = idx {
            path.push(grid.cells()[i].coord());
            idx = grid.cells()[i].parent;
        }
        path.reverse();
        path
    }

    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        self.state == SearchState::Solved
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.state == SearchState::Exhausted
    }

    /// Flat index of the frontier cell settled by the latest step.
    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Largest tentative g-cost observed so far.
    #[inline]
    pub fn max_g(&self) -> f64 {
        self.max_g
    }

    /// Number of cells pending in the open set.
    #[inline]
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    /// Lowest total cost in the open set, if any.
    #[inline]
    pub fn min_open_cost(&self) -> Option<f64> {
        self.open.min_priority()
    }

    /// Highest total cost in the open set, if any.
    #[inline]
    pub fn max_open_cost(&self) -> Option<f64> {
        self.open.max_priority()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Link every cell to its in-bounds cardinal neighbors.
    fn link_cardinal(grid: &mut GridGraph) {
        for i in 0..grid.len() {
            let c = grid.coord(i);
            let ns: Vec<usize> = c.neighbors_4().iter().filter_map(|&n| grid.idx(n)).collect();
            grid.cells_mut()[i].neighbors = ns;
        }
    }

    /// Link every cell to its in-bounds 8-neighborhood.
    fn link_all(grid: &mut GridGraph) {
        for i in 0..grid.len() {
            let c = grid.coord(i);
            let ns: Vec<usize> = c.neighbors_8().iter().filter_map(|&n| grid.idx(n)).collect();
            grid.cells_mut()[i].neighbors = ns;
        }
    }

    fn visited_count(grid: &GridGraph) -> usize {
        grid.cells().iter().filter(|c| c.visited).count()
    }

    #[test]
    fn first_step_settles_start() {
        let mut grid = GridGraph::new(5, 5).unwrap();
        link_cardinal(&mut grid);
        let mut session = SearchSession::start(&mut grid, Metric::Manhattan);
        assert_eq!(session.state(), SearchState::Running);
        assert_eq!(session.open_len(), 1);

        session.step(&mut grid);
        let start = grid.cells()[grid.start()].clone();
        assert!(start.visited && !start.open);
        assert_eq!(start.g, 0.0);
        assert_eq!(session.current(), grid.start());
        // corner cell has two cardinal neighbors, both now open
        assert_eq!(session.open_len(), 2);
    }

    #[test]
    fn manhattan_grid_shortest_path() {
        let mut grid = GridGraph::new(5, 5).unwrap();
        link_cardinal(&mut grid);
        let mut session = SearchSession::start(&mut grid, Metric::Manhattan);
        assert_eq!(session.run_to_completion(&mut grid), SearchState::Solved);
        assert!(session.is_solved());

        let end = &grid.cells()[grid.end()];
        assert_eq!(end.g, 8.0);
        let path = session.path(&grid);
        assert_eq!(path.len(), 9);
        assert_eq!(path[0], Coord::new(0, 0));
        assert_eq!(path[8], Coord::new(4, 4));
        // consecutive path cells are cardinal neighbors
        for pair in path.windows(2) {
            let d = pair[1] - pair[0];
            assert_eq!(d.row.abs() + d.col.abs(), 1);
        }
    }

    #[test]
    fn open_grid_takes_the_diagonal() {
        let mut grid = GridGraph::new(3, 3).unwrap();
        link_all(&mut grid);
        let mut session = SearchSession::start(&mut grid, Metric::Euclidean);
        assert_eq!(session.run_to_completion(&mut grid), SearchState::Solved);

        let end = &grid.cells()[grid.end()];
        assert!((end.g - 2.0 * 2f64.sqrt()).abs() < 1e-9);
        assert_eq!(
            session.path(&grid),
            vec![Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)]
        );
    }

    #[test]
    fn f_is_g_plus_h_on_touched_cells() {
        let mut grid = GridGraph::new(4, 4).unwrap();
        link_cardinal(&mut grid);
        let mut session = SearchSession::start(&mut grid, Metric::Manhattan);
        session.run_to_completion(&mut grid);
        for cell in grid.cells() {
            if cell.g.is_finite() && cell.h.is_finite() {
                assert!((cell.f - (cell.g + cell.h)).abs() < 1e-9);
            }
            assert!(!(cell.visited && cell.open));
        }
    }

    #[test]
    fn unreachable_end_exhausts() {
        let mut grid = GridGraph::new(3, 3).unwrap();
        link_cardinal(&mut grid);
        // wall the end corner off behind stones
        grid.cell_mut(Coord::new(1, 2)).unwrap().traversable = false;
        grid.cell_mut(Coord::new(2, 1)).unwrap().traversable = false;

        let mut session = SearchSession::start(&mut grid, Metric::Manhattan);
        assert_eq!(session.run_to_completion(&mut grid), SearchState::Exhausted);
        assert!(session.is_exhausted() && !session.is_solved());
        assert!(!grid.cells()[grid.end()].visited);
        // stones were never expanded
        assert!(!grid.cell(Coord::new(1, 2)).unwrap().visited);
    }

    #[test]
    fn terminal_states_are_idempotent() {
        let mut grid = GridGraph::new(3, 3).unwrap();
        link_cardinal(&mut grid);
        let mut session = SearchSession::start(&mut grid, Metric::Manhattan);
        session.run_to_completion(&mut grid);
        assert!(session.is_solved());

        let current = session.current();
        let visited = visited_count(&grid);
        for _ in 0..3 {
            assert_eq!(session.step(&mut grid), SearchState::Solved);
        }
        assert_eq!(session.current(), current);
        assert_eq!(visited_count(&grid), visited);
        assert_eq!(session.open_len(), 0);
    }

    #[test]
    fn solving_clears_the_open_set() {
        let mut grid = GridGraph::new(4, 4).unwrap();
        link_all(&mut grid);
        let mut session = SearchSession::start(&mut grid, Metric::Euclidean);
        session.run_to_completion(&mut grid);
        assert!(session.is_solved());
        assert_eq!(session.open_len(), 0);
        assert_eq!(session.min_open_cost(), None);
    }

    #[test]
    fn max_g_tracks_observed_costs() {
        let mut grid = GridGraph::new(5, 5).unwrap();
        link_cardinal(&mut grid);
        let mut session = SearchSession::start(&mut grid, Metric::Manhattan);
        assert_eq!(session.max_g(), 0.0);
        session.run_to_completion(&mut grid);
        assert!(session.max_g() >= grid.cells()[grid.end()].g);
    }

    #[test]
    fn open_costs_bound_the_frontier() {
        let mut grid = GridGraph::new(6, 6).unwrap();
        link_cardinal(&mut grid);
        let mut session = SearchSession::start(&mut grid, Metric::Manhattan);
        session.step(&mut grid);
        session.step(&mut grid);
        let lo = session.min_open_cost().unwrap();
        let hi = session.max_open_cost().unwrap();
        assert!(lo <= hi);
    }
}
