//! **gridreach-core**: grid maze types shared by the gridreach crates.
//!
//! This crate provides geometry primitives, the [`Maze`] grid with its start
//! and end cells, the grid text format, and the [`GridError`] raised for
//! malformed input.

pub mod error;
pub mod format;
pub mod geom;
pub mod maze;

pub use error::GridError;
pub use geom::{Point, Range};
pub use maze::{Maze, Tile};
