use gridreach_core::GridError;

/// Errors raised for generator parameters that cannot produce valid output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenError {
    /// The grid cannot hold distinct start and end cells.
    #[error("grid size must be at least 2, got {0}")]
    GridTooSmall(i32),
    /// Wall chance is not a probability.
    #[error("invalid wall chance {numerator}/{denominator}")]
    WallChance { numerator: u32, denominator: u32 },
    #[error("graph needs at least one node")]
    NoNodes,
    /// The edge count cannot form a spanning tree or exceeds the number of
    /// distinct node pairs. A node count whose pair count overflows is
    /// reported with `max` saturated to `usize::MAX`.
    #[error("{edges} edges do not fit {nodes} nodes (expected {min}..={max})")]
    EdgeCount {
        nodes: usize,
        edges: usize,
        min: usize,
        max: usize,
    },
    #[error("invalid weight range {min}..={max}")]
    WeightRange { min: u32, max: u32 },
    #[error(transparent)]
    Grid(#[from] GridError),
}
