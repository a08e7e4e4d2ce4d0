//! Board geometry: [`Square`], [`Offset`] and [`Board`].
//!
//! A [`Square`] is a plain pair of integers and may lie off the board; the
//! [`Board`] decides which squares are real.

use std::fmt;
use std::ops::{Add, Neg, Sub};

// ---------------------------------------------------------------------------
// Square
// ---------------------------------------------------------------------------

/// A board position addressed by `(file, rank)`. File 0 is the a-file and
/// rank 0 is the first rank.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    pub file: i32,
    pub rank: i32,
}

impl Square {
    /// The a1 corner.
    pub const A1: Self = Self { file: 0, rank: 0 };

    /// Create a new square. Coordinates are not checked.
    #[inline]
    pub const fn new(file: i32, rank: i32) -> Self {
        Self { file, rank }
    }

    /// Whether the square lies on the standard 8×8 board.
    #[inline]
    pub const fn is_valid(self) -> bool {
        Board::STANDARD.contains(self)
    }

    /// Return a square shifted by (dfile, drank).
    #[inline]
    pub const fn shift(self, dfile: i32, drank: i32) -> Self {
        Self {
            file: self.file + dfile,
            rank: self.rank + drank,
        }
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank.cmp(&other.rank).then(self.file.cmp(&other.file))
    }
}

impl fmt::Display for Square {
    /// Algebraic notation (`e4`) on the board, raw coordinates off it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            let file = char::from(b'a' + self.file as u8);
            write!(f, "{file}{}", self.rank + 1)
        } else {
            write!(f, "({}, {})", self.file, self.rank)
        }
    }
}

impl Add<Offset> for Square {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Offset) -> Self {
        self.shift(rhs.file, rhs.rank)
    }
}

impl Sub<Offset> for Square {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Offset) -> Self {
        self.shift(-rhs.file, -rhs.rank)
    }
}

impl Sub for Square {
    type Output = Offset;
    #[inline]
    fn sub(self, rhs: Self) -> Offset {
        Offset::new(self.file - rhs.file, self.rank - rhs.rank)
    }
}

// ---------------------------------------------------------------------------
// Offset
// ---------------------------------------------------------------------------

/// A displacement between two squares.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    pub file: i32,
    pub rank: i32,
}

impl Offset {
    #[inline]
    pub const fn new(file: i32, rank: i32) -> Self {
        Self { file, rank }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+}, {:+})", self.file, self.rank)
    }
}

impl Add for Offset {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.file + rhs.file, self.rank + rhs.rank)
    }
}

impl Sub for Offset {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.file - rhs.file, self.rank - rhs.rank)
    }
}

impl Neg for Offset {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.file, -self.rank)
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// A rectangular board anchored at a1: files `[0, files)`, ranks `[0, ranks)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "BoardDims"))]
pub struct Board {
    files: i32,
    ranks: i32,
}

/// Raw board dimensions as they appear on the wire, clamped by [`Board::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct BoardDims {
    files: i32,
    ranks: i32,
}

#[cfg(feature = "serde")]
impl From<BoardDims> for Board {
    fn from(d: BoardDims) -> Self {
        Board::new(d.files, d.ranks)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Board {
    /// The standard 8×8 chessboard.
    pub const STANDARD: Self = Self { files: 8, ranks: 8 };

    /// Create a board. Negative sizes are clamped to zero.
    #[inline]
    pub const fn new(files: i32, ranks: i32) -> Self {
        Self {
            files: if files < 0 { 0 } else { files },
            ranks: if ranks < 0 { 0 } else { ranks },
        }
    }

    /// Number of files (columns).
    #[inline]
    pub const fn files(self) -> i32 {
        self.files
    }

    /// Number of ranks (rows).
    #[inline]
    pub const fn ranks(self) -> i32 {
        self.ranks
    }

    /// Total number of squares.
    #[inline]
    pub const fn len(self) -> usize {
        (self.files as usize) * (self.ranks as usize)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.files == 0 || self.ranks == 0
    }

    /// Whether `sq` is on the board.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        sq.file >= 0 && sq.file < self.files && sq.rank >= 0 && sq.rank < self.ranks
    }

    /// Dense row-major index of `sq`, or `None` when it is off the board.
    #[inline]
    pub fn index(self, sq: Square) -> Option<usize> {
        if !self.contains(sq) {
            return None;
        }
        Some(sq.rank as usize * self.files as usize + sq.file as usize)
    }

    /// Inverse of [`index`](Self::index). Returns `None` past the last square.
    #[inline]
    pub fn square(self, idx: usize) -> Option<Square> {
        if idx >= self.len() {
            return None;
        }
        let files = self.files as usize;
        Some(Square::new((idx % files) as i32, (idx / files) as i32))
    }

    /// Row-major iterator over every square, a1 first.
    #[inline]
    pub fn iter(self) -> BoardIter {
        BoardIter {
            board: self,
            cur: Square::A1,
        }
    }
}

impl IntoIterator for Board {
    type Item = Square;
    type IntoIter = BoardIter;
    #[inline]
    fn into_iter(self) -> BoardIter {
        self.iter()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.files, self.ranks)
    }
}

// ---------------------------------------------------------------------------
// BoardIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the squares of a [`Board`].
#[derive(Clone, Debug)]
pub struct BoardIter {
    board: Board,
    cur: Square,
}

impl Iterator for BoardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.cur.rank >= self.board.ranks || self.board.is_empty() {
            return None;
        }
        let sq = self.cur;
        self.cur.file += 1;
        if self.cur.file >= self.board.files {
            self.cur.file = 0;
            self.cur.rank += 1;
        }
        Some(sq)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.board.is_empty() || self.cur.rank >= self.board.ranks {
            return (0, Some(0));
        }
        let w = self.board.files as usize;
        let remaining_in_rank = (self.board.files - self.cur.file) as usize;
        let remaining_ranks = (self.board.ranks - self.cur.rank - 1) as usize;
        let total = remaining_in_rank + remaining_ranks * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for BoardIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_arithmetic() {
        let a = Square::new(1, 2);
        let d = Offset::new(2, -1);
        assert_eq!(a + d, Square::new(3, 1));
        assert_eq!(a - d, Square::new(-1, 3));
        assert_eq!(Square::new(3, 1) - a, d);
        assert_eq!(-d, Offset::new(-2, 1));
        assert_eq!(d + d, Offset::new(4, -2));
    }

    #[test]
    fn square_validity() {
        assert!(Square::A1.is_valid());
        assert!(Square::new(7, 7).is_valid());
        assert!(!Square::new(8, 0).is_valid());
        assert!(!Square::new(0, -1).is_valid());
        assert!(!Square::new(-3, 9).is_valid());
    }

    #[test]
    fn square_display_algebraic() {
        assert_eq!(Square::A1.to_string(), "a1");
        assert_eq!(Square::new(7, 7).to_string(), "h8");
        assert_eq!(Square::new(4, 3).to_string(), "e4");
        assert_eq!(Square::new(8, 0).to_string(), "(8, 0)");
        assert_eq!(Square::new(0, -1).to_string(), "(0, -1)");
    }

    #[test]
    fn square_ordering_is_rank_major() {
        let mut v = vec![Square::new(1, 1), Square::new(7, 0), Square::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Square::new(7, 0), Square::new(0, 1), Square::new(1, 1)]);
    }

    #[test]
    fn board_basics() {
        let b = Board::STANDARD;
        assert_eq!(b.len(), 64);
        assert!(!b.is_empty());
        assert!(b.contains(Square::new(7, 0)));
        assert!(!b.contains(Square::new(8, 0)));
        assert_eq!(Board::default(), Board::STANDARD);
        assert_eq!(b.to_string(), "8x8");
    }

    #[test]
    fn board_negative_size_is_empty() {
        let b = Board::new(-2, 5);
        assert!(b.is_empty());
        assert_eq!(b.len(), 0);
        assert_eq!(b.iter().count(), 0);
    }

    #[test]
    fn board_index_roundtrip() {
        let b = Board::STANDARD;
        for (i, sq) in b.iter().enumerate() {
            assert_eq!(b.index(sq), Some(i));
            assert_eq!(b.square(i), Some(sq));
        }
        assert_eq!(b.index(Square::new(-1, 0)), None);
        assert_eq!(b.square(64), None);
    }

    #[test]
    fn board_iter_row_major() {
        let b = Board::new(3, 2);
        let sqs: Vec<_> = b.iter().collect();
        assert_eq!(sqs.len(), 6);
        assert_eq!(sqs[0], Square::new(0, 0));
        assert_eq!(sqs[3], Square::new(0, 1));
        assert_eq!(sqs[5], Square::new(2, 1));
    }

    #[test]
    fn board_iter_size_hint() {
        let mut it = Board::STANDARD.iter();
        assert_eq!(it.len(), 64);
        it.next();
        it.next();
        assert_eq!(it.len(), 62);
        assert_eq!(it.by_ref().count(), 62);
        assert_eq!(it.len(), 0);
    }
}
