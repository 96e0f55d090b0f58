//! **stepmaze-maze** — maze generation and the incremental search facade.
//!
//! [`MazeGen`] fills a grid's adjacency: randomized depth-first carving for
//! walled mazes, [`connect_open`] for open 8-connected grids, and stone
//! scattering for blocking cells. [`Maze`] bundles a generated grid with a
//! stepwise search session behind the surface a rendering shell consumes.

pub mod maze;
pub mod mazegen;

pub use maze::{Maze, MazeConfig};
pub use mazegen::{MazeGen, connect_open};
