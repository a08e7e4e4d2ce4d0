//! Shortest knight paths on an 8×8 chessboard.
//!
//! The board is treated as an implicit unweighted graph whose 64 squares are
//! joined by knight moves. [`KnightPathfinder`] answers three queries with a
//! breadth-first search:
//!
//! - **Distance**, the minimum move count ([`KnightPathfinder::distance`])
//! - **Path**, one minimum-length move sequence ([`KnightPathfinder::shortest_path`])
//! - **Distance map**, distances to every square ([`KnightPathfinder::distance_map`])
//!
//! Each query owns its search state, so the finder itself is a stateless
//! value that can be shared freely.
//!
//! ```
//! use knight_core::Square;
//! use knight_paths::KnightPathfinder;
//!
//! let finder = KnightPathfinder::new();
//! let a1 = Square::new(0, 0);
//! let h8 = Square::new(7, 7);
//! assert_eq!(finder.distance(a1, h8), Ok(6));
//! assert_eq!(finder.shortest_path(a1, h8).unwrap().len(), 7);
//! ```

mod bfs;
mod error;
mod neighbors;
mod path;
mod pathfinder;
mod search;
mod traits;

pub use bfs::DistanceMap;
pub use error::{InvalidPath, PathError};
pub use neighbors::{KNIGHT_OFFSETS, KnightMoves};
pub use path::Path;
pub use pathfinder::KnightPathfinder;
pub use search::PathNode;
pub use traits::Pather;
