//! Subcommand implementations. Results go to the given writer; diagnostics
//! go through the logger.

use std::fs;
use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use gridreach_core::Maze;
use gridreach_gen::{GraphGen, GraphGenConfig, GridGen, GridGenConfig};
use gridreach_paths::PathRange;

use crate::cli::{CheckArgs, Cli, Command, GenGraphArgs, GenGridArgs};

/// Printed by `check` when the end cannot be reached.
pub const UNREACHABLE_OUTPUT: i32 = -1;

/// Execute a parsed command line.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Command::GenGrid(args) => gen_grid(args, out),
        Command::GenGraph(args) => gen_graph(args, out),
        Command::Check(args) => check(args, out),
    }
}

fn gen_grid(args: &GenGridArgs, out: &mut impl Write) -> Result<()> {
    let config = GridGenConfig::from(args);
    let maze = GridGen::new(config)
        .generate()
        .context("cannot generate grid")?;
    writeln!(out, "{maze}")?;
    let mut pr = PathRange::new(maze.bounds());
    if args.distance {
        writeln!(out, "{}", distance_output(pr.shortest_path(&maze)))?;
    } else {
        writeln!(out, "{}", pr.reachable(&maze))?;
    }
    Ok(())
}

fn gen_graph(args: &GenGraphArgs, out: &mut impl Write) -> Result<()> {
    let config = GraphGenConfig::from(args);
    let graph = GraphGen::new(config)
        .generate()
        .context("cannot generate graph")?;
    write!(out, "{graph}")?;
    Ok(())
}

fn check(args: &CheckArgs, out: &mut impl Write) -> Result<()> {
    let text = match &args.file {
        Some(path) => {
            log::debug!("reading grid from {}", path.display());
            fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("cannot read standard input")?;
            text
        }
    };
    writeln!(out, "{}", check_text(&text, args.reachable)?)?;
    Ok(())
}

/// Parse a grid in the text format and render the check result.
pub fn check_text(text: &str, reachable: bool) -> Result<String> {
    let maze = Maze::parse(text).context("invalid grid")?;
    let dist = gridreach_paths::find_path(&maze);
    Ok(if reachable {
        dist.is_some().to_string()
    } else {
        distance_output(dist)
    })
}

fn distance_output(dist: Option<i32>) -> String {
    dist.unwrap_or(UNREACHABLE_OUTPUT).to_string()
}
