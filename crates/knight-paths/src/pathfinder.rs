use knight_core::Square;

use crate::bfs::DistanceMap;
use crate::error::PathError;
use crate::neighbors::KnightMoves;
use crate::path::Path;
use crate::search::Search;
use crate::traits::Pather;

// ---------------------------------------------------------------------------
// KnightPathfinder
// ---------------------------------------------------------------------------

/// Breadth-first knight pathfinding on the standard 8×8 board.
///
/// The finder holds no search state: every query allocates its own grids
/// and frontier and drops them on return, so a single finder can serve
/// any number of threads at once.
///
/// The neighbor generator defaults to [`KnightMoves`]. A custom [`Pather`]
/// restricts or reshapes the move graph while keeping the same search.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnightPathfinder<P: Pather = KnightMoves> {
    pather: P,
}

impl KnightPathfinder {
    /// A finder over the full knight-move graph.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: Pather> KnightPathfinder<P> {
    /// A finder that takes its moves from `pather`.
    pub fn with_pather(pather: P) -> Self {
        Self { pather }
    }

    /// The neighbor generator in use.
    pub fn pather(&self) -> &P {
        &self.pather
    }

    /// Minimum number of knight moves from `start` to `end`.
    ///
    /// # Errors
    ///
    /// [`PathError::InvalidSquare`] if either square is off the board,
    /// [`PathError::Unreachable`] if the search exhausts without reaching
    /// `end`.
    pub fn distance(&self, start: Square, end: Square) -> Result<u32, PathError> {
        validate(start, end)?;
        if start == end {
            log::debug!("knight distance {start} -> {end}: 0");
            return Ok(0);
        }

        let search = self.search(start, end)?;
        let d = search.distance(end).ok_or(PathError::Unreachable { start, end })?;
        log::debug!("knight distance {start} -> {end}: {d}");
        Ok(d)
    }

    /// A shortest knight path from `start` to `end`, both included.
    ///
    /// Among equally short paths the one found by expanding
    /// [`KNIGHT_OFFSETS`](crate::KNIGHT_OFFSETS) in order is returned, so
    /// the result depends only on the two squares.
    ///
    /// # Errors
    ///
    /// Same conditions as [`distance`](Self::distance).
    pub fn shortest_path(&self, start: Square, end: Square) -> Result<Path, PathError> {
        validate(start, end)?;
        if start == end {
            log::debug!("knight path {start} -> {end}: 0 moves");
            return Ok(Path::new(vec![start]));
        }

        let search = self.search(start, end)?;
        let path = Path::new(search.path_to(end));
        log::debug!("knight path {start} -> {end}: {} moves", path.moves());
        Ok(path)
    }

    /// Distances from `start` to every square the knight can reach.
    ///
    /// # Errors
    ///
    /// [`PathError::InvalidSquare`] if `start` is off the board.
    pub fn distance_map(&self, start: Square) -> Result<DistanceMap, PathError> {
        validate_square(start)?;

        let mut search = Search::new(start);
        search.run(&self.pather, None);
        let map = DistanceMap::from_search(search);
        log::debug!(
            "knight distance map from {start}: {} squares, max {}",
            map.len(),
            map.max_distance()
        );
        Ok(map)
    }

    /// Run a targeted search from `start`, failing if `end` is never reached.
    fn search(&self, start: Square, end: Square) -> Result<Search, PathError> {
        let mut search = Search::new(start);
        if !search.run(&self.pather, Some(end)) {
            log::debug!("knight search {start} -> {end}: frontier exhausted");
            return Err(PathError::Unreachable { start, end });
        }
        Ok(search)
    }
}

/// Reject off-board squares before any search work, start first.
fn validate(start: Square, end: Square) -> Result<(), PathError> {
    validate_square(start)?;
    validate_square(end)
}

fn validate_square(sq: Square) -> Result<(), PathError> {
    if !sq.is_valid() {
        log::debug!("rejecting off-board square {sq}");
        return Err(PathError::InvalidSquare(sq));
    }
    Ok(())
}
