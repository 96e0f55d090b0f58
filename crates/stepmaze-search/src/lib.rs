//! **stepmaze-search** — the stepwise A* engine and its open-set queue.
//!
//! This crate advances a shortest-path search one expansion at a time:
//!
//! - [`OrderedQueue`] — an ascending-priority open set with stable FIFO
//!   tie-breaks and delete-then-reinsert priority updates
//! - [`Metric`] — the Manhattan / Euclidean distance functions used as both
//!   edge cost and heuristic
//! - [`SearchSession`] — the state machine that settles one frontier cell
//!   per [`step`](SearchSession::step) call
//!
//! The caller owns pacing: invoke `step` until the session reports
//! [`SearchState::Solved`] or [`SearchState::Exhausted`].

pub mod astar;
pub mod distance;
pub mod queue;

pub use astar::{SearchSession, SearchState};
pub use distance::{Metric, euclidean, manhattan};
pub use queue::{OrderedQueue, QueueEntry};
