//! Random weighted graphs and the graph text format.
//!
//! ```text
//! 4 3
//! 0 2 5120
//! 1 3 77
//! 2 3 9001
//! ```
//!
//! The first line holds the node count `n` and edge count `m`, followed by
//! `m` lines of `from to weight`.

use std::fmt;

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::GenError;
use crate::rng::seeded_rng;

/// A directed weighted edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: u32,
}

/// An edge list over nodes `0..nodes`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    pub nodes: usize,
    pub edges: Vec<Edge>,
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.nodes, self.edges.len())?;
        for e in &self.edges {
            writeln!(f, "{} {} {}", e.from, e.to, e.weight)?;
        }
        Ok(())
    }
}

/// Parameters of the random graph generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GraphGenConfig {
    pub nodes: usize,
    /// Total edge count, at least `nodes - 1`.
    pub edges: usize,
    /// Inclusive weight bounds.
    pub min_weight: u32,
    pub max_weight: u32,
    /// Fixed seed for reproducible output.
    pub seed: Option<u64>,
}

impl Default for GraphGenConfig {
    fn default() -> Self {
        Self {
            nodes: 4,
            edges: 3,
            min_weight: 1,
            max_weight: 10_000,
            seed: None,
        }
    }
}

impl GraphGenConfig {
    /// Check that the parameters can produce a graph.
    pub fn validate(&self) -> Result<(), GenError> {
        let n = self.nodes;
        if n == 0 {
            return Err(GenError::NoNodes);
        }
        let min = n - 1;
        let max = n.checked_mul(n - 1).map(|pairs| pairs / 2);
        if max.is_none_or(|max| self.edges < min || self.edges > max) {
            return Err(GenError::EdgeCount {
                nodes: n,
                edges: self.edges,
                min,
                max: max.unwrap_or(usize::MAX),
            });
        }
        if self.min_weight == 0 || self.min_weight > self.max_weight {
            return Err(GenError::WeightRange {
                min: self.min_weight,
                max: self.max_weight,
            });
        }
        Ok(())
    }
}

/// Generator of connected random graphs.
pub struct GraphGen<R: Rng> {
    pub rng: R,
    pub config: GraphGenConfig,
}

impl GraphGen<StdRng> {
    /// Create a generator seeded from `config.seed`.
    pub fn new(config: GraphGenConfig) -> Self {
        Self::with_rng(config, seeded_rng(config.seed))
    }
}

impl<R: Rng> GraphGen<R> {
    /// Create a generator drawing from the given random source.
    pub fn with_rng(config: GraphGenConfig, rng: R) -> Self {
        Self { rng, config }
    }

    /// Produce one random graph.
    ///
    /// Every node `i < n - 1` gets an edge to a random higher node, which
    /// spans all nodes. The remaining edges join random distinct node pairs
    /// not already joined in either direction. Edges are listed by source
    /// node, each node's spanning edge first.
    pub fn generate(&mut self) -> Result<Graph, GenError> {
        self.config.validate()?;
        let n = self.config.nodes;
        let mut adj: Vec<Vec<usize>> = vec![Vec::new(); n];

        for (i, out) in adj.iter_mut().enumerate().take(n - 1) {
            out.push(self.rng.random_range(i + 1..n));
        }

        let extra = self.config.edges - (n - 1);
        let mut added = 0;
        while added < extra {
            let from = self.rng.random_range(0..n);
            let to = self.rng.random_range(0..n);
            if from == to || adj[from].contains(&to) || adj[to].contains(&from) {
                continue;
            }
            adj[from].push(to);
            added += 1;
        }

        let mut edges = Vec::with_capacity(self.config.edges);
        for (from, out) in adj.iter().enumerate() {
            for &to in out {
                let weight = self
                    .rng
                    .random_range(self.config.min_weight..=self.config.max_weight);
                edges.push(Edge { from, to, weight });
            }
        }
        log::debug!("generated graph with {n} nodes and {} edges", edges.len());
        Ok(Graph { nodes: n, edges })
    }
}
