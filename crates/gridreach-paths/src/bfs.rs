use gridreach_core::Point;

use crate::PathRange;
use crate::pathrange::UNREACHABLE;
use crate::traits::Pather;

impl PathRange {
    /// Compute a multi-source breadth-first search distance map.
    ///
    /// Each step has cost 1. Expansion stops when the distance exceeds
    /// `max_dist`; pass [`UNREACHABLE`] for an unbounded search. Sources
    /// outside the range are ignored. Returns the number of cells reached,
    /// sources included. Distances are read back with [`bfs_at`](Self::bfs_at).
    pub fn bfs_map<P: Pather>(&mut self, pather: &P, sources: &[Point], max_dist: i32) -> usize {
        self.search(pather, sources, None, max_dist)
    }

    /// Breadth-first search that stops as soon as `target` gets its
    /// distance. Cells farther than the target may be left unreached.
    pub(crate) fn search<P: Pather>(
        &mut self,
        pather: &P,
        sources: &[Point],
        target: Option<Point>,
        max_dist: i32,
    ) -> usize {
        let len = self.rng.len();
        self.dist[..len].fill(UNREACHABLE);
        self.frontier.clear();

        let target = target.and_then(|t| self.idx(t));
        let mut reached = 0;
        for &src in sources {
            let Some(si) = self.idx(src) else {
                continue;
            };
            if self.dist[si] != UNREACHABLE {
                continue;
            }
            self.dist[si] = 0;
            self.frontier.push_back(si);
            reached += 1;
        }
        if target.is_some_and(|ti| self.dist[ti] != UNREACHABLE) {
            return reached;
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        'frontier: while let Some(ci) = self.frontier.pop_front() {
            let next = self.dist[ci] + 1;
            if next > max_dist {
                break;
            }
            nbuf.clear();
            pather.neighbors(self.point(ci), &mut nbuf);
            for &np in &nbuf {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.dist[ni] != UNREACHABLE {
                    continue;
                }
                self.dist[ni] = next;
                self.frontier.push_back(ni);
                reached += 1;
                if target == Some(ni) {
                    break 'frontier;
                }
            }
        }
        self.nbuf = nbuf;
        reached
    }

    /// Distance of `p` in the last search.
    ///
    /// Returns [`UNREACHABLE`] if the point is outside the range or was not
    /// reached.
    pub fn bfs_at(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.dist[i],
            None => UNREACHABLE,
        }
    }
}
