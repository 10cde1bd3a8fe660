//! Random grid mazes.

use gridreach_core::{Maze, Point, Range};
use rand::Rng;
use rand::rngs::StdRng;

use crate::error::GenError;
use crate::rng::seeded_rng;

/// Parameters of the random grid generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridGenConfig {
    /// Side length of the square grid.
    pub size: i32,
    /// A non-endpoint cell is a wall with probability
    /// `wall_numerator / wall_denominator`.
    pub wall_numerator: u32,
    pub wall_denominator: u32,
    /// Fixed seed for reproducible output.
    pub seed: Option<u64>,
}

impl Default for GridGenConfig {
    fn default() -> Self {
        Self {
            size: 10,
            wall_numerator: 1,
            wall_denominator: 5,
            seed: None,
        }
    }
}

impl GridGenConfig {
    /// Check that the parameters can produce a maze.
    pub fn validate(&self) -> Result<(), GenError> {
        if self.size < 2 {
            return Err(GenError::GridTooSmall(self.size));
        }
        if self.wall_denominator == 0 || self.wall_numerator > self.wall_denominator {
            return Err(GenError::WallChance {
                numerator: self.wall_numerator,
                denominator: self.wall_denominator,
            });
        }
        Ok(())
    }
}

/// Generator of `n`×`n` mazes with distinct start and end cells and
/// independently placed walls.
pub struct GridGen<R: Rng> {
    pub rng: R,
    pub config: GridGenConfig,
}

impl GridGen<StdRng> {
    /// Create a generator seeded from `config.seed`.
    pub fn new(config: GridGenConfig) -> Self {
        Self::with_rng(config, seeded_rng(config.seed))
    }
}

impl<R: Rng> GridGen<R> {
    /// Create a generator drawing from the given random source.
    pub fn with_rng(config: GridGenConfig, rng: R) -> Self {
        Self { rng, config }
    }

    /// Produce one random maze.
    ///
    /// The end cell is re-drawn until it differs from the start cell. Every
    /// other cell becomes a wall with the configured probability.
    pub fn generate(&mut self) -> Result<Maze, GenError> {
        self.config.validate()?;
        let n = self.config.size;
        let start = self.random_cell();
        let mut end = self.random_cell();
        while end == start {
            end = self.random_cell();
        }

        let mut walls = Vec::new();
        for p in Range::square(n).iter() {
            if p == start || p == end {
                continue;
            }
            if self
                .rng
                .random_ratio(self.config.wall_numerator, self.config.wall_denominator)
            {
                walls.push(p);
            }
        }
        log::debug!(
            "generated {n}x{n} grid with {} walls, start {start}, end {end}",
            walls.len()
        );
        Ok(Maze::from_parts(n, walls, start, end)?)
    }

    fn random_cell(&mut self) -> Point {
        let n = self.config.size;
        Point::new(self.rng.random_range(0..n), self.rng.random_range(0..n))
    }
}
