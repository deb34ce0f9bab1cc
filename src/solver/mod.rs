//! The backtracking tour search.
//!
//! [`TourSolver`] performs a depth-first, first-success-wins search for an
//! open knight's tour. Candidates are always tried in the fixed
//! [`KNIGHT_STEPS`](crate::core::moves::KNIGHT_STEPS) order, so for a given
//! board size and start cell the search visits the same cells in the same
//! order every time, and the tour it finds is reproducible.
//!
//! The search is exhaustive: `NotFound` means a full proof that no tour
//! exists from that start, which for larger boards can take a very long
//! time. Interactive callers pass a [`CancelToken`](cancel::CancelToken)
//! and an observer instead of running blind.

pub mod cancel;
pub mod observer;

use crate::board::Board;
use crate::core::coord::Coord;
use crate::core::moves::candidates;
use crate::error::TourError;
use crate::solution::SolutionPath;
use crate::solver::cancel::CancelToken;
use crate::solver::observer::{NoObserver, TourObserver};

/// Outcome of probing one cell's subtree.
enum Probe {
    /// The tour is complete through this cell; marks and path are kept.
    Complete,
    /// Every continuation failed; this cell has been unmarked again.
    Exhausted,
    /// The token was observed set; the active path keeps its marks.
    Cancelled,
}

/// An exhaustive knight's tour solver for one board size.
///
/// The solver owns its [`Board`] and a path stack; both are scratch state
/// for the current search. Between searches the board is all-unvisited
/// except after a cancelled run, which deliberately leaves the active
/// path marked so callers can inspect where the search stopped. The next
/// [`solve`](TourSolver::solve) call starts from a clean board again.
#[derive(Debug)]
pub struct TourSolver {
    board: Board,
    last_move: usize,
    path: Vec<Coord>,
}

impl TourSolver {
    pub fn new(size: i32) -> Result<Self, TourError> {
        let board = Board::new(size)?;
        let last_move = board.cell_count() - 1;
        let path = Vec::with_capacity(board.cell_count());
        Ok(Self {
            board,
            last_move,
            path,
        })
    }

    #[inline]
    pub fn size(&self) -> i32 {
        self.board.size()
    }

    /// The solver's board, mainly for inspecting marks after cancellation.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Search for a tour starting at `start`, without observation hooks.
    pub fn solve(&mut self, start: Coord) -> Result<SolutionPath, TourError> {
        self.solve_cancellable(start, &mut NoObserver, &CancelToken::new())
    }

    /// Search for a tour starting at `start`, reporting every placement and
    /// retraction to `observer` and polling `cancel` between expansions.
    ///
    /// The token is also checked once up front, so a token set before the
    /// call returns `Cancelled` without touching the board, even on a 1x1
    /// board where the start cell alone is already a complete tour.
    pub fn solve_cancellable<O: TourObserver>(
        &mut self,
        start: Coord,
        observer: &mut O,
        cancel: &CancelToken,
    ) -> Result<SolutionPath, TourError> {
        if !self.board.is_on_board(start) {
            return Err(TourError::InvalidStart {
                start,
                size: self.board.size(),
            });
        }
        if cancel.is_cancelled() {
            return Err(TourError::Cancelled);
        }

        self.board.reset();
        self.path.clear();

        match self.probe(start, 0, observer, cancel) {
            Probe::Complete => {
                let steps = std::mem::take(&mut self.path);
                self.board.reset();
                SolutionPath::from_steps(self.board.size(), steps)
            }
            Probe::Exhausted => Err(TourError::NotFound),
            Probe::Cancelled => Err(TourError::Cancelled),
        }
    }

    /// Place `coord` as move `move_number` and search every continuation.
    ///
    /// `coord` must be on the board and unvisited. On `Exhausted` the
    /// placement has been retracted and the observer notified; on
    /// `Complete` and `Cancelled` the placement stays.
    fn probe<O: TourObserver>(
        &mut self,
        coord: Coord,
        move_number: usize,
        observer: &mut O,
        cancel: &CancelToken,
    ) -> Probe {
        self.board.mark(coord, true);
        self.path.push(coord);
        observer.visited(coord, move_number);

        if move_number == self.last_move {
            return Probe::Complete;
        }

        for next in candidates(coord) {
            if !self.board.is_on_board(next) || self.board.is_visited(next) {
                continue;
            }
            if cancel.is_cancelled() {
                return Probe::Cancelled;
            }
            match self.probe(next, move_number + 1, observer, cancel) {
                Probe::Exhausted => {}
                outcome => return outcome,
            }
        }

        self.board.mark(coord, false);
        self.path.pop();
        observer.backtracked(coord);
        Probe::Exhausted
    }
}
