//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use gridreach_gen::{GraphGenConfig, GridGenConfig};

/// Grid maze generator and breadth-first reachability checker.
#[derive(Parser, Debug)]
#[command(name = "gridreach", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a random grid, print it, then report whether E is reachable from S
    GenGrid(GenGridArgs),
    /// Generate a random connected weighted graph
    GenGraph(GenGraphArgs),
    /// Read a grid and print the shortest S-to-E distance (-1 if unreachable)
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct GenGridArgs {
    /// Grid side length
    #[arg(long, default_value_t = GridGenConfig::default().size)]
    pub size: i32,

    /// Numerator of the per-cell wall chance
    #[arg(long, default_value_t = GridGenConfig::default().wall_numerator)]
    pub wall_num: u32,

    /// Denominator of the per-cell wall chance
    #[arg(long, default_value_t = GridGenConfig::default().wall_denominator)]
    pub wall_den: u32,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the shortest distance instead of true/false
    #[arg(long)]
    pub distance: bool,
}

impl From<&GenGridArgs> for GridGenConfig {
    fn from(args: &GenGridArgs) -> Self {
        Self {
            size: args.size,
            wall_numerator: args.wall_num,
            wall_denominator: args.wall_den,
            seed: args.seed,
        }
    }
}

#[derive(Args, Debug)]
pub struct GenGraphArgs {
    /// Node count
    #[arg(long, default_value_t = GraphGenConfig::default().nodes)]
    pub nodes: usize,

    /// Edge count, at least nodes - 1
    #[arg(long, default_value_t = GraphGenConfig::default().edges)]
    pub edges: usize,

    /// Smallest edge weight
    #[arg(long, default_value_t = GraphGenConfig::default().min_weight)]
    pub min_weight: u32,

    /// Largest edge weight
    #[arg(long, default_value_t = GraphGenConfig::default().max_weight)]
    pub max_weight: u32,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,
}

impl From<&GenGraphArgs> for GraphGenConfig {
    fn from(args: &GenGraphArgs) -> Self {
        Self {
            nodes: args.nodes,
            edges: args.edges,
            min_weight: args.min_weight,
            max_weight: args.max_weight,
            seed: args.seed,
        }
    }
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Grid file; standard input when omitted
    pub file: Option<PathBuf>,

    /// Print true/false instead of the distance
    #[arg(long)]
    pub reachable: bool,
}
