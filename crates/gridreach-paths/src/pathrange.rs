use std::collections::VecDeque;

use gridreach_core::{Point, Range};

/// Distance of a cell no search has reached.
pub const UNREACHABLE: i32 = i32::MAX;

/// Breadth-first search state for one grid rectangle.
///
/// The distance map, frontier queue and neighbor buffer are kept between
/// searches so that repeated searches on a grid of the same size do not
/// reallocate. Every search starts by marking all cells [`UNREACHABLE`].
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) dist: Vec<i32>,
    pub(crate) frontier: VecDeque<usize>,
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            dist: vec![UNREACHABLE; rng.len()],
            frontier: VecDeque::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Switch to another rectangle. The distance map only grows.
    pub fn set_range(&mut self, rng: Range) {
        self.rng = rng;
        if rng.len() > self.dist.len() {
            self.dist.resize(rng.len(), UNREACHABLE);
        }
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Flat row-major index of `p`, `None` outside the rectangle.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let col = (p.x - self.rng.min.x) as usize;
        let row = (p.y - self.rng.min.y) as usize;
        Some(row * self.rng.width() as usize + col)
    }

    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let w = self.rng.width() as usize;
        Point::new(
            self.rng.min.x + (idx % w) as i32,
            self.rng.min.y + (idx / w) as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_and_point_agree() {
        let pr = PathRange::new(Range {
            min: Point::new(2, 3),
            max: Point::new(6, 8),
        });
        for (i, p) in pr.range().iter().enumerate() {
            assert_eq!(pr.idx(p), Some(i));
            assert_eq!(pr.point(i), p);
        }
        assert_eq!(pr.idx(Point::new(6, 3)), None);
        assert_eq!(pr.idx(Point::new(2, 2)), None);
    }

    #[test]
    fn shrinking_keeps_the_map() {
        let mut pr = PathRange::new(Range::square(8));
        pr.set_range(Range::square(3));
        assert_eq!(pr.range(), Range::square(3));
        assert_eq!(pr.dist.len(), 64);
        assert_eq!(pr.idx(Point::new(2, 1)), Some(5));
    }

    #[test]
    fn growing_extends_the_map() {
        let mut pr = PathRange::new(Range::square(2));
        pr.set_range(Range::square(6));
        assert_eq!(pr.dist.len(), 36);
    }
}
