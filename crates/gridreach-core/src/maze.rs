//! The square grid maze searched by the pathfinders.
//!
//! A [`Maze`] stores a row-major buffer of [`Tile`] values together with the
//! coordinates of its start and end cells. The start and end cells are
//! always passable.

use std::fmt;

use crate::error::GridError;
use crate::geom::{Point, Range};

/// Terrain of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Open,
    Wall,
}

impl Tile {
    /// Whether a path may cross this tile.
    #[inline]
    pub const fn is_passable(self) -> bool {
        matches!(self, Tile::Open)
    }

    /// The text-format symbol of the tile.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Tile::Open => OPEN,
            Tile::Wall => WALL,
        }
    }
}

pub const START: char = 'S';
pub const END: char = 'E';
pub const WALL: char = 'W';
pub const OPEN: char = '.';

/// An `n`×`n` maze with exactly one start and one end cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Maze {
    tiles: Vec<Tile>,
    size: i32,
    start: Point,
    end: Point,
}

impl Maze {
    /// Build a maze from its dimension, wall positions and endpoints.
    ///
    /// Unlike the text format, `start` and `end` may be the same cell.
    pub fn from_parts(
        size: i32,
        walls: impl IntoIterator<Item = Point>,
        start: Point,
        end: Point,
    ) -> Result<Self, GridError> {
        let len = Range::square(size).len();
        let mut maze = Self::from_tiles(vec![Tile::Open; len], size, start, end)?;
        for p in walls {
            maze.set_wall(p)?;
        }
        Ok(maze)
    }

    /// Build a maze from a row-major tile buffer, checking that the buffer
    /// fills the grid and that both endpoints are open cells inside it.
    pub(crate) fn from_tiles(
        tiles: Vec<Tile>,
        size: i32,
        start: Point,
        end: Point,
    ) -> Result<Self, GridError> {
        if size <= 0 {
            return Err(GridError::InvalidDimension(size.to_string()));
        }
        let side = size as usize;
        if side.checked_mul(side) != Some(tiles.len()) {
            return Err(GridError::TileCount {
                size,
                found: tiles.len(),
            });
        }
        let maze = Self {
            tiles,
            size,
            start,
            end,
        };
        for p in [start, end] {
            match maze.tile(p) {
                None => return Err(GridError::OutOfBounds(p)),
                Some(Tile::Wall) => return Err(GridError::WallOnEndpoint(p)),
                Some(Tile::Open) => {}
            }
        }
        Ok(maze)
    }

    /// Side length `n` of the grid.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Range of valid coordinates.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::square(self.size)
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds().contains(p) {
            return None;
        }
        Some((p.y * self.size + p.x) as usize)
    }

    /// Tile at `p`, or `None` when out of bounds.
    pub fn tile(&self, p: Point) -> Option<Tile> {
        self.index(p).map(|i| self.tiles[i])
    }

    /// Whether `p` is inside the grid and not a wall.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.tile(p).is_some_and(Tile::is_passable)
    }

    /// Text-format symbol at `p`. The start symbol wins when start and end
    /// coincide.
    pub fn symbol(&self, p: Point) -> Option<char> {
        let tile = self.tile(p)?;
        Some(if p == self.start {
            START
        } else if p == self.end {
            END
        } else {
            tile.symbol()
        })
    }

    /// Turn the cell at `p` into a wall.
    pub fn set_wall(&mut self, p: Point) -> Result<(), GridError> {
        if p == self.start || p == self.end {
            return Err(GridError::WallOnEndpoint(p));
        }
        let i = self.index(p).ok_or(GridError::OutOfBounds(p))?;
        self.tiles[i] = Tile::Wall;
        Ok(())
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.tiles.iter().filter(|t| **t == Tile::Wall).count()
    }

    /// Iterate over `(Point, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.bounds().iter().zip(self.tiles.iter().copied())
    }

    /// The grid rows as strings of symbols, top to bottom.
    pub fn rows(&self) -> Vec<String> {
        (0..self.size)
            .map(|y| {
                (0..self.size)
                    .filter_map(|x| self.symbol(Point::new(x, y)))
                    .collect()
            })
            .collect()
    }
}

/// Deserialisation goes through the same checks as every other constructor.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Maze {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct RawMaze {
            tiles: Vec<Tile>,
            size: i32,
            start: Point,
            end: Point,
        }

        let raw = <RawMaze as serde::Deserialize>::deserialize(deserializer)?;
        Maze::from_tiles(raw.tiles, raw.size, raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}

/// Renders the grid rows separated by newlines, without the dimension line.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn maze_round_trip() {
        let m = Maze::from_parts(2, [Point::new(1, 0)], Point::ZERO, Point::new(1, 1)).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        let back: Maze = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }

    #[test]
    fn short_tile_buffer_is_rejected() {
        let json = r#"{"tiles":[],"size":2,"start":{"x":0,"y":0},"end":{"x":1,"y":1}}"#;
        let err = serde_json::from_str::<Maze>(json).unwrap_err();
        assert!(err.to_string().contains("0 tiles do not fill a 2x2 grid"));
    }

    #[test]
    fn walled_or_outside_endpoints_are_rejected() {
        let walled = r#"{"tiles":["Open","Open","Open","Wall"],"size":2,"start":{"x":0,"y":0},"end":{"x":1,"y":1}}"#;
        assert!(serde_json::from_str::<Maze>(walled).is_err());
        let outside = r#"{"tiles":["Open","Open","Open","Open"],"size":2,"start":{"x":0,"y":0},"end":{"x":5,"y":1}}"#;
        assert!(serde_json::from_str::<Maze>(outside).is_err());
    }
}
