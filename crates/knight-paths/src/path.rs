use std::ops::Index;

use knight_core::Square;

use crate::error::InvalidPath;
use crate::neighbors::KnightMoves;

/// A shortest knight path, start and end squares included.
///
/// Consecutive squares are exactly one knight move apart. A path of a single
/// square means the knight is already at its destination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Square>", into = "Vec<Square>")
)]
pub struct Path {
    squares: Vec<Square>,
}

impl Path {
    /// Wrap a non-empty square sequence produced by the search.
    pub(crate) fn new(squares: Vec<Square>) -> Self {
        debug_assert!(!squares.is_empty());
        Self { squares }
    }

    #[inline]
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    #[inline]
    pub fn start(&self) -> Square {
        self.squares[0]
    }

    #[inline]
    pub fn end(&self) -> Square {
        self.squares[self.squares.len() - 1]
    }

    /// Number of squares on the path, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Never true for a path returned by the finder.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Number of knight moves, `len() - 1`.
    #[inline]
    pub fn moves(&self) -> u32 {
        (self.squares.len() - 1) as u32
    }

    /// Consecutive `(from, to)` pairs, one per move.
    pub fn steps(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.squares.windows(2).map(|w| (w[0], w[1]))
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.squares.iter()
    }

    pub fn into_vec(self) -> Vec<Square> {
        self.squares
    }
}

impl TryFrom<Vec<Square>> for Path {
    type Error = InvalidPath;

    /// Accept a non-empty sequence of on-board squares joined by knight moves.
    fn try_from(squares: Vec<Square>) -> Result<Self, InvalidPath> {
        if squares.is_empty() {
            return Err(InvalidPath::Empty);
        }
        if let Some(&sq) = squares.iter().find(|sq| !sq.is_valid()) {
            return Err(InvalidPath::OffBoard(sq));
        }
        if let Some(w) = squares.windows(2).find(|w| !KnightMoves::is_move(w[0], w[1])) {
            return Err(InvalidPath::NotAKnightMove {
                from: w[0],
                to: w[1],
            });
        }
        Ok(Self { squares })
    }
}

impl From<Path> for Vec<Square> {
    fn from(p: Path) -> Self {
        p.squares
    }
}

impl Index<usize> for Path {
    type Output = Square;
    #[inline]
    fn index(&self, i: usize) -> &Square {
        &self.squares[i]
    }
}

impl AsRef<[Square]> for Path {
    fn as_ref(&self) -> &[Square] {
        &self.squares
    }
}

impl IntoIterator for Path {
    type Item = Square;
    type IntoIter = std::vec::IntoIter<Square>;
    fn into_iter(self) -> Self::IntoIter {
        self.squares.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;
    fn into_iter(self) -> Self::IntoIter {
        self.squares.iter()
    }
}

impl PartialEq<[Square]> for Path {
    fn eq(&self, other: &[Square]) -> bool {
        self.squares == other
    }
}

impl PartialEq<Vec<Square>> for Path {
    fn eq(&self, other: &Vec<Square>) -> bool {
        &self.squares == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Path {
        Path::new(vec![Square::A1, Square::new(1, 2), Square::new(3, 1), Square::new(1, 0)])
    }

    #[test]
    fn endpoints_and_counts() {
        let p = sample();
        assert_eq!(p.start(), Square::A1);
        assert_eq!(p.end(), Square::new(1, 0));
        assert_eq!(p.len(), 4);
        assert_eq!(p.moves(), 3);
        assert!(!p.is_empty());
        assert_eq!(p[2], Square::new(3, 1));
    }

    #[test]
    fn single_square_is_zero_moves() {
        let p = Path::new(vec![Square::new(4, 4)]);
        assert_eq!(p.moves(), 0);
        assert_eq!(p.start(), p.end());
        assert_eq!(p.steps().count(), 0);
    }

    #[test]
    fn steps_pair_neighbours() {
        let steps: Vec<_> = sample().steps().collect();
        assert_eq!(
            steps,
            vec![
                (Square::A1, Square::new(1, 2)),
                (Square::new(1, 2), Square::new(3, 1)),
                (Square::new(3, 1), Square::new(1, 0)),
            ]
        );
    }

    #[test]
    fn try_from_checks_shape() {
        assert_eq!(Path::try_from(Vec::<Square>::new()), Err(InvalidPath::Empty));
        assert_eq!(
            Path::try_from(vec![Square::A1, Square::new(8, 2)]),
            Err(InvalidPath::OffBoard(Square::new(8, 2)))
        );
        assert_eq!(
            Path::try_from(vec![Square::A1, Square::new(1, 2), Square::new(2, 2)]),
            Err(InvalidPath::NotAKnightMove {
                from: Square::new(1, 2),
                to: Square::new(2, 2),
            })
        );
        assert_eq!(Path::try_from(sample().into_vec()), Ok(sample()));
        assert_eq!(Path::try_from(vec![Square::new(4, 4)]).unwrap().moves(), 0);
    }

    #[test]
    fn iteration() {
        let p = sample();
        let by_ref: Vec<Square> = (&p).into_iter().copied().collect();
        assert_eq!(p, by_ref);
        assert_eq!(p.clone().into_vec(), by_ref);
        assert_eq!(p.into_iter().count(), 4);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serializes_as_plain_list() {
        let p = Path::new(vec![Square::A1, Square::new(2, 1)]);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"[{"file":0,"rank":0},{"file":2,"rank":1}]"#);
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn empty_list_is_rejected() {
        let err = serde_json::from_str::<Path>("[]").unwrap_err();
        assert!(err.to_string().contains("path has no squares"));
    }

    #[test]
    fn broken_step_is_rejected() {
        let json = r#"[{"file":0,"rank":0},{"file":1,"rank":1}]"#;
        assert!(serde_json::from_str::<Path>(json).is_err());
    }
}
