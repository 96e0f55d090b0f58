//! The [`Maze`] facade: one grid, one search session, stepped externally.
//!
//! A rendering or input shell owns a `Maze`, calls [`Maze::step`] on its
//! own schedule (for example once per frame) and reads cell state back for
//! display. The facade itself never draws and never blocks.

use rand::Rng;

use stepmaze_core::{Cell, Coord, GridGraph};
use stepmaze_search::{Metric, SearchSession, SearchState};

use crate::mazegen::{MazeGen, connect_open};

/// Construction parameters for a maze run.
///
/// `cell_width` and `cell_height` are carried for rendering collaborators
/// and ignored by generation and search.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeConfig {
    pub rows: i32,
    pub cols: i32,
    pub cell_width: f64,
    pub cell_height: f64,
    /// Carved maze with walls (Manhattan metric) when true; open
    /// 8-connected grid (Euclidean metric) when false.
    pub walled: bool,
    /// Whether to scatter blocking stone cells before building adjacency.
    pub stones: bool,
    /// Probability in `[0, 1)` that an interior cell becomes a stone.
    pub stone_density: f64,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: 40,
            cols: 40,
            cell_width: 20.0,
            cell_height: 20.0,
            walled: true,
            stones: true,
            stone_density: 0.3,
        }
    }
}

impl MazeConfig {
    /// The metric searches run under in this configuration.
    pub fn metric(&self) -> Metric {
        if self.walled {
            Metric::Manhattan
        } else {
            Metric::Euclidean
        }
    }
}

/// A generated grid plus the search session running over it.
pub struct Maze {
    config: MazeConfig,
    grid: GridGraph,
    session: SearchSession,
}

impl Maze {
    /// Generate a maze and start its search.
    ///
    /// Allocates the grid, scatters stones if enabled, builds adjacency by
    /// carving (walled) or full 8-connection (open), and seeds the search
    /// session. Runs to completion synchronously; only the search is
    /// stepped. Returns `None` for degenerate dimensions or a stone
    /// density outside `[0, 1)`, without partial work.
    pub fn generate<R: Rng>(config: MazeConfig, rng: &mut R) -> Option<Self> {
        if !(0.0..1.0).contains(&config.stone_density) {
            return None;
        }
        let mut grid = GridGraph::new(config.rows, config.cols)?;
        let mut generator = MazeGen::new(rng);
        if config.stones {
            generator.scatter_stones(&mut grid, config.stone_density);
        }
        if config.walled {
            generator.carve(&mut grid);
        } else {
            connect_open(&mut grid);
        }
        let session = SearchSession::start(&mut grid, config.metric());
        Some(Self {
            config,
            grid,
            session,
        })
    }

    /// Advance the search by one frontier expansion.
    pub fn step(&mut self) -> SearchState {
        self.session.step(&mut self.grid)
    }

    /// Step until the search is solved or exhausted.
    pub fn run_to_completion(&mut self) -> SearchState {
        self.session.run_to_completion(&mut self.grid)
    }

    /// Rebuild grid and search from the same configuration with fresh
    /// randomness. The old grid is replaced wholesale.
    pub fn regenerate<R: Rng>(&mut self, rng: &mut R) {
        // config was validated when this maze was built
        if let Some(fresh) = Maze::generate(self.config, rng) {
            *self = fresh;
        }
    }

    /// Replace the configuration and rebuild. Returns false (leaving the
    /// maze untouched) if the new configuration is invalid.
    pub fn set_config<R: Rng>(&mut self, config: MazeConfig, rng: &mut R) -> bool {
        match Maze::generate(config, rng) {
            Some(fresh) => {
                *self = fresh;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn config(&self) -> MazeConfig {
        self.config
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.grid.rows()
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.grid.cols()
    }

    /// The cell at `c`, or `None` if out of range.
    #[inline]
    pub fn cell(&self, c: Coord) -> Option<&Cell> {
        self.grid.cell(c)
    }

    /// The underlying grid, for renderers that iterate all cells.
    #[inline]
    pub fn grid(&self) -> &GridGraph {
        &self.grid
    }

    /// Position of the frontier cell settled by the latest step.
    #[inline]
    pub fn current(&self) -> Coord {
        self.grid.coord(self.session.current())
    }

    #[inline]
    pub fn state(&self) -> SearchState {
        self.session.state()
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        self.session.is_solved()
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.session.is_exhausted()
    }

    /// The predecessor chain from the current cell back to the start.
    pub fn path(&self) -> Vec<Coord> {
        self.session.path(&self.grid)
    }

    /// Lowest total cost pending in the open set.
    #[inline]
    pub fn min_open_cost(&self) -> Option<f64> {
        self.session.min_open_cost()
    }

    /// Highest total cost pending in the open set.
    #[inline]
    pub fn max_open_cost(&self) -> Option<f64> {
        self.session.max_open_cost()
    }

    /// Largest tentative path cost observed so far, for display scaling.
    #[inline]
    pub fn max_g(&self) -> f64 {
        self.session.max_g()
    }
}
