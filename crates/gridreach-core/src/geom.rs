//! Grid coordinates.
//!
//! A [`Point`] addresses one cell: `x` is the column and `y` the row, both
//! counted from the top-left corner. A [`Range`] is the rectangle of cells a
//! maze or a search covers.

use std::fmt;

/// A cell coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cells one step away: up, right, down, left.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        let Point { x, y } = self;
        [
            Self::new(x, y - 1),
            Self::new(x + 1, y),
            Self::new(x, y + 1),
            Self::new(x - 1, y),
        ]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cells `min.x..max.x` by `min.y..max.y`; `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// The `n`×`n` block of cells starting at the origin.
    #[inline]
    pub const fn square(n: i32) -> Self {
        Self {
            min: Point::ZERO,
            max: Point::new(n, n),
        }
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Number of cells covered; zero when either side is not positive.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.width() as usize * (self.max.y - self.min.y) as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Cells in row-major order, the same order the grid text format uses.
    pub fn iter(self) -> impl Iterator<Item = Point> {
        let xs = self.min.x..self.max.x;
        (self.min.y..self.max.y).flat_map(move |y| xs.clone().map(move |x| Point::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_go_clockwise_from_up() {
        assert_eq!(
            Point::new(3, 7).neighbors_4(),
            [
                Point::new(3, 6),
                Point::new(4, 7),
                Point::new(3, 8),
                Point::new(2, 7),
            ]
        );
    }

    #[test]
    fn display_shows_column_then_row() {
        assert_eq!(Point::new(4, 1).to_string(), "(4, 1)");
    }

    #[test]
    fn square_covers_its_cells() {
        let r = Range::square(3);
        assert_eq!(r.width(), 3);
        assert_eq!(r.len(), 9);
        assert!(r.contains(Point::ZERO));
        assert!(r.contains(Point::new(2, 2)));
        assert!(!r.contains(Point::new(3, 0)));
        assert!(!r.contains(Point::new(0, -1)));
    }

    #[test]
    fn empty_square() {
        let r = Range::square(0);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.iter().count(), 0);
        assert!(!r.contains(Point::ZERO));
    }

    #[test]
    fn iteration_follows_rows() {
        let cells: Vec<_> = Range::square(2).iter().collect();
        assert_eq!(
            cells,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(1, 1),
            ]
        );
    }

    #[test]
    fn offset_range() {
        let r = Range {
            min: Point::new(2, 1),
            max: Point::new(4, 4),
        };
        assert_eq!(r.len(), 6);
        assert_eq!(r.iter().next(), Some(Point::new(2, 1)));
        assert!(!r.contains(Point::new(1, 1)));
    }
}
