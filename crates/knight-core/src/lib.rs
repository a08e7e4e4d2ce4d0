//! **knight-core** — chessboard geometry shared by the knight pathfinding
//! crates.
//!
//! This crate provides the value types used across the workspace: board
//! squares, displacements between them, and the rectangular board that
//! decides which squares exist.

pub mod geom;

pub use geom::{Board, BoardIter, Offset, Square};
