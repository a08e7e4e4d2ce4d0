use std::fmt;

use knight_core::Square;

/// Reasons a knight path query produced no result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathError {
    /// A query square lies outside the 8×8 board.
    InvalidSquare(Square),
    /// The search ran out of squares before reaching `end`.
    Unreachable { start: Square, end: Square },
}

impl PathError {
    pub fn is_invalid_square(&self) -> bool {
        matches!(self, Self::InvalidSquare(_))
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable { .. })
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSquare(sq) => write!(f, "square {sq} is off the board"),
            Self::Unreachable { start, end } => {
                write!(f, "no knight path from {start} to {end}")
            }
        }
    }
}

impl std::error::Error for PathError {}

/// Reasons a square sequence cannot be turned into a [`Path`](crate::Path).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPath {
    /// The sequence has no squares.
    Empty,
    /// A square lies outside the 8×8 board.
    OffBoard(Square),
    /// Two consecutive squares are not one knight move apart.
    NotAKnightMove { from: Square, to: Square },
}

impl fmt::Display for InvalidPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "path has no squares"),
            Self::OffBoard(sq) => write!(f, "path square {sq} is off the board"),
            Self::NotAKnightMove { from, to } => {
                write!(f, "path step {from} -> {to} is not a knight move")
            }
        }
    }
}

impl std::error::Error for InvalidPath {}
