//! gridreach: random grid mazes, random weighted graphs and a BFS
//! reachability checker, exposed as one command-line tool.

pub mod cli;
pub mod commands;
pub mod logging;

pub use cli::Cli;
pub use commands::run;
