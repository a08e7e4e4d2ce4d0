use knight_core::Square;

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `sq` into `buf`. The caller clears `buf` before calling.
    ///
    /// Neighbors off the board are ignored by the search, so implementations
    /// need not filter them.
    fn neighbors(&self, sq: Square, buf: &mut Vec<Square>);
}

impl<P: Pather + ?Sized> Pather for &P {
    #[inline]
    fn neighbors(&self, sq: Square, buf: &mut Vec<Square>) {
        (**self).neighbors(sq, buf);
    }
}
