use crate::geom::Point;

/// Errors raised when a grid maze is malformed.
///
/// Every variant is an invalid-input condition: the grid cannot be searched
/// and nothing is recovered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The input contained no grid at all.
    #[error("grid: empty input")]
    Empty,
    /// The dimension line is not a positive integer.
    #[error("grid: invalid dimension {0:?}")]
    InvalidDimension(String),
    /// Fewer rows than the dimension line announced.
    #[error("grid: expected {expected} rows, found {found}")]
    MissingRows { expected: usize, found: usize },
    /// A row is not exactly `n` cells wide.
    #[error("grid: row {row} has width {found}, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A tile buffer whose length is not `size * size`.
    #[error("grid: {found} tiles do not fill a {size}x{size} grid")]
    TileCount { size: i32, found: usize },
    /// A character outside `S`, `E`, `W`, `.`.
    #[error("grid: invalid symbol '{ch}' at {pos}")]
    InvalidSymbol { ch: char, pos: Point },
    #[error("grid: no start cell 'S'")]
    MissingStart,
    #[error("grid: no end cell 'E'")]
    MissingEnd,
    #[error("grid: second start cell at {second} (first at {first})")]
    DuplicateStart { first: Point, second: Point },
    #[error("grid: second end cell at {second} (first at {first})")]
    DuplicateEnd { first: Point, second: Point },
    /// Non-blank content after the last grid row (1-based line number).
    #[error("grid: unexpected content on line {line}")]
    TrailingContent { line: usize },
    /// A coordinate outside the grid.
    #[error("grid: point {0} is out of bounds")]
    OutOfBounds(Point),
    /// A wall placed on the start or end cell.
    #[error("grid: wall on endpoint {0}")]
    WallOnEndpoint(Point),
}
