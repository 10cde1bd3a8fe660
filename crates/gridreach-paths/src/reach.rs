//! Start-to-end reachability and shortest distance on a [`Maze`].

use gridreach_core::{Maze, Point};

use crate::PathRange;
use crate::distance::manhattan;
use crate::pathrange::UNREACHABLE;
use crate::traits::Pather;

/// Cardinal moves between passable cells.
impl Pather for Maze {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.is_passable(n) {
                buf.push(n);
            }
        }
    }
}

impl PathRange {
    /// Number of steps on the shortest path from the maze's start to its
    /// end, or `None` when the end cannot be reached.
    ///
    /// The range is switched to the maze's bounds if it differs. The search
    /// stops once the end is reached.
    pub fn shortest_path(&mut self, maze: &Maze) -> Option<i32> {
        if self.rng != maze.bounds() {
            self.set_range(maze.bounds());
        }
        let reached = self.search(maze, &[maze.start()], Some(maze.end()), UNREACHABLE);
        let dist = self.bfs_at(maze.end());
        log::trace!(
            "bfs from {} reached {reached} cells, end {} at {}",
            maze.start(),
            maze.end(),
            if dist == UNREACHABLE { "unreachable".to_string() } else { dist.to_string() },
        );
        if dist == UNREACHABLE {
            return None;
        }
        debug_assert!(dist >= manhattan(maze.start(), maze.end()));
        Some(dist)
    }

    /// Whether the maze's end is reachable from its start.
    pub fn reachable(&mut self, maze: &Maze) -> bool {
        self.shortest_path(maze).is_some()
    }
}

/// Shortest start-to-end distance of `maze` in cell steps, `None` if the end
/// is unreachable.
pub fn find_path(maze: &Maze) -> Option<i32> {
    PathRange::new(maze.bounds()).shortest_path(maze)
}

/// Whether the end of `maze` is reachable from its start.
pub fn can_reach(maze: &Maze) -> bool {
    find_path(maze).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridreach_core::Range;
    use proptest::prelude::*;

    fn maze(rows: &[&str]) -> Maze {
        Maze::from_rows(rows).unwrap()
    }

    #[test]
    fn two_by_two_open() {
        assert_eq!(find_path(&maze(&["S.", ".E"])), Some(2));
        assert!(can_reach(&maze(&["S.", ".E"])));
    }

    #[test]
    fn two_by_two_blocked() {
        assert_eq!(find_path(&maze(&["SW", "WE"])), None);
        assert!(!can_reach(&maze(&["SW", "WE"])));
    }

    #[test]
    fn three_by_three_corners() {
        assert_eq!(find_path(&maze(&["S..", "...", "..E"])), Some(4));
    }

    #[test]
    fn detour_around_walls() {
        let m = maze(&[
            "S.W..",
            "W.W.W",
            "..W..",
            ".WWW.",
            "....E",
        ]);
        // S(0,0) -> (1,0) -> (1,1) -> (1,2) -> (0,2) -> (0,3) -> (0,4) -> ... -> (4,4)
        assert_eq!(find_path(&m), Some(10));
    }

    #[test]
    fn walls_on_border_only_path() {
        let m = maze(&["SWWW", ".WWW", ".WWW", "...E"]);
        assert_eq!(find_path(&m), Some(6));
    }

    #[test]
    fn same_cell_is_zero() {
        let m = Maze::from_parts(3, [Point::new(1, 1)], Point::new(2, 0), Point::new(2, 0)).unwrap();
        assert_eq!(find_path(&m), Some(0));
    }

    #[test]
    fn walled_in_endpoints() {
        // E is walled in even though S can move.
        let m = maze(&["...", ".SW", "WWE"]);
        assert_eq!(find_path(&m), None);
        let m = maze(&["W.E", "SW.", "W.."]);
        assert_eq!(find_path(&m), None);
    }

    #[test]
    fn maze_neighbors_skip_walls_and_bounds() {
        let m = maze(&["SW", ".E"]);
        let mut buf = Vec::new();
        m.neighbors(Point::ZERO, &mut buf);
        assert_eq!(buf, vec![Point::new(0, 1)]);
    }

    #[test]
    fn search_stops_at_the_end() {
        let m = maze(&["SE...", ".....", "....."]);
        let mut pr = PathRange::new(m.bounds());
        assert_eq!(pr.shortest_path(&m), Some(1));
        assert_eq!(pr.bfs_at(Point::new(4, 2)), UNREACHABLE);
    }

    #[test]
    fn path_range_is_reused_across_sizes() {
        let mut pr = PathRange::new(Range::square(1));
        assert_eq!(pr.shortest_path(&maze(&["S..", "...", "..E"])), Some(4));
        assert_eq!(pr.range(), Range::square(3));
        assert_eq!(pr.shortest_path(&maze(&["SE", ".."])), Some(1));
        assert!(!pr.reachable(&maze(&["SW", "WE"])));
    }

    fn arb_maze() -> impl Strategy<Value = Maze> {
        (1i32..7)
            .prop_flat_map(|n| {
                let cells = (n * n) as usize;
                (
                    Just(n),
                    prop::collection::vec(prop::bool::weighted(0.3), cells),
                    0..cells,
                    0..cells,
                )
            })
            .prop_map(|(n, walls, s, e)| {
                let at = |i: usize| Point::new(i as i32 % n, i as i32 / n);
                let (start, end) = (at(s), at(e));
                let walls = walls
                    .into_iter()
                    .enumerate()
                    .filter(|&(i, w)| w && at(i) != start && at(i) != end)
                    .map(|(i, _)| at(i));
                Maze::from_parts(n, walls, start, end).unwrap()
            })
    }

    proptest! {
        #[test]
        fn start_equals_end_is_zero(n in 1i32..8, x in 0i32..8, y in 0i32..8) {
            let p = Point::new(x % n, y % n);
            let m = Maze::from_parts(n, [], p, p).unwrap();
            prop_assert_eq!(find_path(&m), Some(0));
        }

        #[test]
        fn open_grid_is_manhattan(n in 1i32..10, a in 0i32..100, b in 0i32..100) {
            let cells = n * n;
            let start = Point::new((a % cells) % n, (a % cells) / n);
            let end = Point::new((b % cells) % n, (b % cells) / n);
            let m = Maze::from_parts(n, [], start, end).unwrap();
            prop_assert_eq!(find_path(&m), Some(manhattan(start, end)));
        }

        #[test]
        fn search_is_idempotent(m in arb_maze()) {
            let mut pr = PathRange::new(m.bounds());
            let first = pr.shortest_path(&m);
            prop_assert_eq!(pr.shortest_path(&m), first);
            prop_assert_eq!(find_path(&m), first);
        }

        #[test]
        fn adding_a_wall_never_shortens(m in arb_maze(), i in 0usize..64) {
            let before = find_path(&m);
            let n = m.size();
            let p = Point::new((i as i32) % n, (i as i32 / n) % n);
            let mut walled = m.clone();
            if walled.set_wall(p).is_ok() {
                match (before, find_path(&walled)) {
                    (None, after) => prop_assert_eq!(after, None),
                    (Some(_), None) => {}
                    (Some(b), Some(a)) => prop_assert!(a >= b),
                }
            }
        }

        #[test]
        fn walled_in_start_is_unreachable(m in arb_maze()) {
            prop_assume!(m.start() != m.end());
            let mut enclosed = m.clone();
            for n in m.start().neighbors_4() {
                // The end may be adjacent; then it cannot be walled off.
                if n == m.end() {
                    return Ok(());
                }
                let _ = enclosed.set_wall(n);
            }
            prop_assert_eq!(find_path(&enclosed), None);
        }

        #[test]
        fn reachable_matches_distance(m in arb_maze()) {
            prop_assert_eq!(can_reach(&m), find_path(&m).is_some());
        }
    }
}
