//! Observation hooks into the running search.
//!
//! The solver reports every tentative placement and every retraction, in
//! order, from inside its own call stack. That stream is exactly the search
//! trace: an external visualizer can mirror the board cell by cell, and a
//! test can replay it against the legality rules.

use crate::core::coord::Coord;

/// Receives search events synchronously as the solver produces them.
///
/// Callbacks run on the solver's thread between moves, so implementations
/// must return promptly; a slow observer slows the search itself.
pub trait TourObserver {
    /// `coord` was tentatively placed as move `move_number` (0-based).
    #[inline]
    fn visited(&mut self, _coord: Coord, _move_number: usize) {}

    /// The placement at `coord` was retracted.
    #[inline]
    fn backtracked(&mut self, _coord: Coord) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObserver;

impl TourObserver for NoObserver {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One recorded search event.
pub enum TourEvent {
    Visited { coord: Coord, move_number: usize },
    Backtracked { coord: Coord },
}

/// Observer that records the full event sequence.
///
/// Mostly useful in tests and offline analysis; the trace of a hard search
/// can be much longer than the board itself.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    pub events: Vec<TourEvent>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TourObserver for Trace {
    fn visited(&mut self, coord: Coord, move_number: usize) {
        self.events.push(TourEvent::Visited { coord, move_number });
    }

    fn backtracked(&mut self, coord: Coord) {
        self.events.push(TourEvent::Backtracked { coord });
    }
}
