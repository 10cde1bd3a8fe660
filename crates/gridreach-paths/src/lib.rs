//! Breadth-first reachability and shortest paths on grid mazes.
//!
//! - **BFS** unweighted distance maps ([`PathRange::bfs_map`]) over any
//!   [`Pather`] neighbour relation
//! - **Start-to-end search** on a [`Maze`](gridreach_core::Maze)
//!   ([`find_path`], [`can_reach`], [`PathRange::shortest_path`])
//!
//! [`PathRange`] owns the visited-distance map and reuses it across queries.

mod bfs;
mod distance;
mod pathrange;
mod reach;
mod traits;

pub use distance::manhattan;
pub use pathrange::{PathRange, UNREACHABLE};
pub use reach::{can_reach, find_path};
pub use traits::Pather;
