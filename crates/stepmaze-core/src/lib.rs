//! **stepmaze-core** — foundational types for stepwise maze search.
//!
//! This crate provides the plain data the rest of the *stepmaze* ecosystem
//! operates on: grid coordinates ([`Coord`], [`Side`]), per-cell wall and
//! search state ([`Cell`], [`Walls`]), and the cell arena ([`GridGraph`]).
//! It performs no searching and no generation itself.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::{Cell, Walls};
pub use geom::{Coord, Side};
pub use grid::GridGraph;
