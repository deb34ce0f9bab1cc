//! Mutable visited-state for a single search.

use crate::core::coord::Coord;
use crate::error::TourError;

/// An `N x N` board of visited flags.
///
/// Internally a dense row-major table, so `Coord -> flag` is O(1). The solver
/// owns one board per search and unwinds every mark it places, so outside a
/// running search the board is always all-unvisited.
#[derive(Debug, Clone)]
pub struct Board {
    size: i32,
    visited: Vec<bool>,
}

impl Board {
    /// A fresh all-unvisited board with side length `size` (at least 1).
    pub fn new(size: i32) -> Result<Self, TourError> {
        if size < 1 {
            return Err(TourError::InvalidSize { size });
        }
        let cells = (size as usize) * (size as usize);
        Ok(Self {
            size,
            visited: vec![false; cells],
        })
    }

    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Total number of cells, `size * size`.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.visited.len()
    }

    #[inline]
    pub fn is_on_board(&self, coord: Coord) -> bool {
        coord.x >= 0 && coord.x < self.size && coord.y >= 0 && coord.y < self.size
    }

    /// Whether `coord` carries a mark. `coord` must lie on the board.
    #[inline]
    pub fn is_visited(&self, coord: Coord) -> bool {
        self.visited[self.index(coord)]
    }

    /// Set or clear the mark at `coord`. `coord` must lie on the board.
    #[inline]
    pub fn mark(&mut self, coord: Coord, visited: bool) {
        let idx = self.index(coord);
        self.visited[idx] = visited;
    }

    /// Number of currently marked cells.
    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|&&v| v).count()
    }

    /// Clear every mark.
    pub fn reset(&mut self) {
        self.visited.fill(false);
    }

    #[inline]
    fn index(&self, coord: Coord) -> usize {
        debug_assert!(self.is_on_board(coord), "off-board access at {coord}");
        (coord.y as usize) * (self.size as usize) + (coord.x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_sizes() {
        assert!(matches!(Board::new(0), Err(TourError::InvalidSize { size: 0 })));
        assert!(matches!(Board::new(-4), Err(TourError::InvalidSize { size: -4 })));
    }

    #[test]
    fn marks_are_independent_per_cell() {
        let mut board = Board::new(3).unwrap();
        assert_eq!(board.cell_count(), 9);
        assert_eq!(board.visited_count(), 0);

        board.mark(Coord::new(1, 2), true);
        assert!(board.is_visited(Coord::new(1, 2)));
        assert!(!board.is_visited(Coord::new(2, 1)));
        assert_eq!(board.visited_count(), 1);

        board.mark(Coord::new(1, 2), false);
        assert_eq!(board.visited_count(), 0);
    }

    #[test]
    fn reset_clears_everything() {
        let mut board = Board::new(2).unwrap();
        for x in 0..2 {
            for y in 0..2 {
                board.mark(Coord::new(x, y), true);
            }
        }
        assert_eq!(board.visited_count(), 4);
        board.reset();
        assert_eq!(board.visited_count(), 0);
    }

    #[test]
    fn on_board_tracks_both_axes() {
        let board = Board::new(5).unwrap();
        assert!(board.is_on_board(Coord::ORIGIN));
        assert!(board.is_on_board(Coord::new(4, 4)));
        assert!(!board.is_on_board(Coord::new(5, 0)));
        assert!(!board.is_on_board(Coord::new(0, 5)));
        assert!(!board.is_on_board(Coord::new(-1, 3)));
        assert!(!board.is_on_board(Coord::new(3, -1)));
    }
}
