//! Random input producers for the gridreach tools.
//!
//! - [`GridGen`] builds square mazes with distinct start and end cells and
//!   randomly placed walls, ready for the BFS checker.
//! - [`GraphGen`] builds connected weighted edge lists printed in the graph
//!   text format.
//!
//! Both take their parameters from a config struct and accept an optional
//! seed for reproducible output.

pub mod error;
pub mod graph;
pub mod grid;
mod rng;

pub use error::GenError;
pub use graph::{Edge, Graph, GraphGen, GraphGenConfig};
pub use grid::{GridGen, GridGenConfig};
pub use rng::seeded_rng;
