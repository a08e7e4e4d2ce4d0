use knight_core::{Board, Square};

use crate::search::{PathNode, SIDE, Search};

/// Knight distances from one source square to every square it can reach.
///
/// Produced by [`KnightPathfinder::distance_map`](crate::KnightPathfinder::distance_map).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    source: Square,
    costs: [Option<u32>; SIDE * SIDE],
    nodes: Vec<PathNode>,
}

impl DistanceMap {
    /// Collect the results of a finished flood.
    pub(crate) fn from_search(search: Search) -> Self {
        let mut costs = [None; SIDE * SIDE];
        for node in &search.reached {
            if let Some(i) = Board::STANDARD.index(node.pos) {
                costs[i] = Some(node.cost);
            }
        }
        Self {
            source: search.start,
            costs,
            nodes: search.reached,
        }
    }

    /// The square the distances are measured from.
    #[inline]
    pub fn source(&self) -> Square {
        self.source
    }

    /// Query the distance at a specific square.
    ///
    /// Returns `None` if the square is off the board or was not reached.
    #[inline]
    pub fn at(&self, sq: Square) -> Option<u32> {
        self.costs[Board::STANDARD.index(sq)?]
    }

    /// Reached squares in discovery order. Costs never decrease.
    #[inline]
    pub fn nodes(&self) -> &[PathNode] {
        &self.nodes
    }

    /// Number of reached squares, the source included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Distance to the farthest reached square.
    pub fn max_distance(&self) -> u32 {
        self.nodes.last().map_or(0, |n| n.cost)
    }
}
