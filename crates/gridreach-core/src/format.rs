//! The grid text format.
//!
//! ```text
//! 3
//! S..
//! .W.
//! ..E
//! ```
//!
//! The first line holds the dimension `n`, followed by `n` rows of exactly
//! `n` symbols from `S`, `E`, `W` and `.`. Line endings may be `\n` or
//! `\r\n`, and blank lines after the last row are ignored.

use std::str::FromStr;

use crate::error::GridError;
use crate::geom::Point;
use crate::maze::{END, Maze, OPEN, START, Tile, WALL};

impl Maze {
    /// Parse a maze from the grid text format.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        if text.trim().is_empty() {
            return Err(GridError::Empty);
        }
        let mut lines = text.lines();
        let first = lines.next().unwrap_or_default().trim();
        let n: i32 = first
            .parse()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| GridError::InvalidDimension(first.to_string()))?;
        let width = n as usize;

        // Not pre-sized: `n` is untrusted until the rows are read.
        let mut tiles = Vec::new();
        let mut start: Option<Point> = None;
        let mut end: Option<Point> = None;

        for y in 0..n {
            let row = lines.next().ok_or(GridError::MissingRows {
                expected: width,
                found: y as usize,
            })?;
            let found = row.chars().count();
            if found != width {
                return Err(GridError::RowWidth {
                    row: y as usize,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let pos = Point::new(x as i32, y);
                let tile = match ch {
                    OPEN => Tile::Open,
                    WALL => Tile::Wall,
                    START => {
                        if let Some(first) = start {
                            return Err(GridError::DuplicateStart { first, second: pos });
                        }
                        start = Some(pos);
                        Tile::Open
                    }
                    END => {
                        if let Some(first) = end {
                            return Err(GridError::DuplicateEnd { first, second: pos });
                        }
                        end = Some(pos);
                        Tile::Open
                    }
                    _ => return Err(GridError::InvalidSymbol { ch, pos }),
                };
                tiles.push(tile);
            }
        }

        // Dimension line plus `n` rows precede any trailing content.
        for (i, line) in lines.enumerate() {
            if !line.trim().is_empty() {
                return Err(GridError::TrailingContent {
                    line: width + 2 + i,
                });
            }
        }

        let start = start.ok_or(GridError::MissingStart)?;
        let end = end.ok_or(GridError::MissingEnd)?;
        log::debug!("parsed {n}x{n} grid, start {start}, end {end}");
        Maze::from_tiles(tiles, n, start, end)
    }

    /// Parse a maze from its rows alone; the dimension is the row count.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let mut text = rows.len().to_string();
        for row in rows {
            text.push('\n');
            text.push_str(row.as_ref());
        }
        Self::parse(&text)
    }

    /// Render the maze in the grid text format, dimension line included.
    pub fn to_text(&self) -> String {
        format!("{}\n{}\n", self.size(), self)
    }
}

impl FromStr for Maze {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
