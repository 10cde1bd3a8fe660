use gridreach_core::Point;

/// Minimal pathfinding interface: neighbor enumeration.
///
/// Every neighbor has a uniform step cost of 1.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}
