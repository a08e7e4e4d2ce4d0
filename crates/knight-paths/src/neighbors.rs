use knight_core::{Board, Offset, Square};

use crate::traits::Pather;

/// The eight knight displacements, in the order the search expands them.
///
/// The order decides which of several equally short paths is returned.
pub const KNIGHT_OFFSETS: [Offset; 8] = [
    Offset::new(-2, 1),
    Offset::new(-1, 2),
    Offset::new(1, 2),
    Offset::new(2, 1),
    Offset::new(2, -1),
    Offset::new(1, -2),
    Offset::new(-1, -2),
    Offset::new(-2, -1),
];

/// Knight-move neighbor generator for the standard board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KnightMoves;

impl KnightMoves {
    /// Whether `to` is exactly one knight move away from `from`.
    ///
    /// Only the displacement is checked; either square may be off the board.
    #[inline]
    pub fn is_move(from: Square, to: Square) -> bool {
        KNIGHT_OFFSETS.contains(&(to - from))
    }

    /// On-board knight targets of `sq`, in canonical order.
    pub fn targets(sq: Square) -> impl Iterator<Item = Square> {
        KNIGHT_OFFSETS
            .into_iter()
            .map(move |d| sq + d)
            .filter(|&n| Board::STANDARD.contains(n))
    }
}

impl Pather for KnightMoves {
    fn neighbors(&self, sq: Square, buf: &mut Vec<Square>) {
        buf.extend(Self::targets(sq));
    }
}
