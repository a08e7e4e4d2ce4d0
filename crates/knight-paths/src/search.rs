use std::collections::VecDeque;

use knight_core::{Board, Square};

use crate::traits::Pather;

/// Side length of the standard board.
pub(crate) const SIDE: usize = 8;

/// A position with the number of knight moves needed to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Square,
    pub cost: u32,
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Breadth-first search state for a single query.
///
/// Every grid is a dense `[file][rank]` array sized for the standard board.
/// A `Search` is built for one query and dropped with it; nothing carries
/// over between calls.
pub(crate) struct Search {
    pub(crate) start: Square,
    visited: [[bool; SIDE]; SIDE],
    dist: [[u32; SIDE]; SIDE],
    parent: [[Option<Square>; SIDE]; SIDE],
    frontier: VecDeque<Square>,
    // squares in the order they were first reached
    pub(crate) reached: Vec<PathNode>,
    nbuf: Vec<Square>,
}

impl Search {
    /// Seed a search at `start`, which must be on the board.
    pub(crate) fn new(start: Square) -> Self {
        let mut s = Self {
            start,
            visited: [[false; SIDE]; SIDE],
            dist: [[0; SIDE]; SIDE],
            parent: [[None; SIDE]; SIDE],
            frontier: VecDeque::with_capacity(SIDE * SIDE),
            reached: Vec::with_capacity(SIDE * SIDE),
            nbuf: Vec::with_capacity(8),
        };
        if let Some((f, r)) = cell(start) {
            s.visited[f][r] = true;
            s.frontier.push_back(start);
            s.reached.push(PathNode { pos: start, cost: 0 });
        }
        s
    }

    /// Expand the frontier until `target` is reached or the frontier is
    /// empty. With no target the whole reachable board is flooded.
    ///
    /// Returns `true` if `target` was reached.
    pub(crate) fn run<P: Pather>(&mut self, pather: &P, target: Option<Square>) -> bool {
        if target == Some(self.start) {
            return true;
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        'search: while let Some(cur) = self.frontier.pop_front() {
            let Some((cf, cr)) = cell(cur) else {
                continue;
            };
            let next = self.dist[cf][cr] + 1;
            log::trace!("expand {cur} at distance {}", next - 1);

            nbuf.clear();
            pather.neighbors(cur, &mut nbuf);

            for &np in nbuf.iter() {
                let Some((nf, nr)) = cell(np) else {
                    continue;
                };
                if self.visited[nf][nr] {
                    continue;
                }
                self.visited[nf][nr] = true;
                self.dist[nf][nr] = next;
                self.parent[nf][nr] = Some(cur);
                self.frontier.push_back(np);
                self.reached.push(PathNode { pos: np, cost: next });

                if target == Some(np) {
                    found = true;
                    break 'search;
                }
            }
        }

        self.nbuf = nbuf;
        found
    }

    /// Distance tag of `sq`, if the search reached it.
    pub(crate) fn distance(&self, sq: Square) -> Option<u32> {
        let (f, r) = cell(sq)?;
        self.visited[f][r].then(|| self.dist[f][r])
    }

    /// The square from which `sq` was first reached. `None` for the start
    /// square and for squares the search never reached.
    pub(crate) fn parent(&self, sq: Square) -> Option<Square> {
        let (f, r) = cell(sq)?;
        self.parent[f][r]
    }

    /// Walk predecessors back from `end` and return the squares in
    /// start-to-end order. `end` must have been reached.
    pub(crate) fn path_to(&self, end: Square) -> Vec<Square> {
        let mut path = Vec::with_capacity(self.distance(end).unwrap_or(0) as usize + 1);
        let mut cur = Some(end);
        while let Some(sq) = cur {
            path.push(sq);
            if sq == self.start {
                break;
            }
            cur = self.parent(sq);
        }
        path.reverse();
        path
    }
}

/// Grid coordinates of `sq`, or `None` if it is off the board.
#[inline]
fn cell(sq: Square) -> Option<(usize, usize)> {
    if !Board::STANDARD.contains(sq) {
        return None;
    }
    Some((sq.file as usize, sq.rank as usize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighbors::KnightMoves;

    #[test]
    fn fresh_search_only_knows_start() {
        let s = Search::new(Square::A1);
        assert_eq!(s.distance(Square::A1), Some(0));
        assert_eq!(s.parent(Square::A1), None);
        assert_eq!(s.distance(Square::new(2, 1)), None);
        assert_eq!(s.reached.len(), 1);
    }

    #[test]
    fn run_stops_at_target() {
        let mut s = Search::new(Square::A1);
        assert!(s.run(&KnightMoves, Some(Square::new(2, 1))));
        assert_eq!(s.distance(Square::new(2, 1)), Some(1));
        assert_eq!(s.parent(Square::new(2, 1)), Some(Square::A1));
        // b3 is discovered before c2, then the search stops.
        assert_eq!(s.reached.len(), 3);
    }

    #[test]
    fn flood_reaches_every_square() {
        let mut s = Search::new(Square::new(3, 3));
        assert!(!s.run(&KnightMoves, None));
        assert_eq!(s.reached.len(), 64);
        for sq in Board::STANDARD {
            assert!(s.distance(sq).is_some(), "{sq} not reached");
        }
    }

    #[test]
    fn each_parent_is_one_closer() {
        let mut s = Search::new(Square::A1);
        s.run(&KnightMoves, None);
        for sq in Board::STANDARD {
            if let Some(p) = s.parent(sq) {
                assert_eq!(s.distance(p).unwrap() + 1, s.distance(sq).unwrap());
                assert!(KnightMoves::is_move(p, sq));
            } else {
                assert_eq!(sq, Square::A1);
            }
        }
    }

    #[test]
    fn off_board_lookups_are_none() {
        let s = Search::new(Square::A1);
        assert_eq!(s.distance(Square::new(8, 0)), None);
        assert_eq!(s.parent(Square::new(0, -1)), None);
    }

    #[test]
    fn path_to_start_is_single_square() {
        let s = Search::new(Square::new(4, 4));
        assert_eq!(s.path_to(Square::new(4, 4)), vec![Square::new(4, 4)]);
    }
}
