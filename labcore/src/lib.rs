//! Perfect maze generation and traversal rules for labyrinth.
//!
//! A [`Grid`](gameboard::Grid) is carved by a [`MazeBuilder`](algorithms::MazeBuilder) one step
//! at a time, so callers can animate generation at whatever pace they like. Once carved, the
//! passages form a spanning tree and a [`TraversalSession`](traversal::TraversalSession) walks a
//! token from start to goal.

pub mod algorithms;
pub mod array;
pub mod dims;
pub mod error;
pub mod gameboard;
pub mod progress;
pub mod traversal;

pub use error::MazeError;
