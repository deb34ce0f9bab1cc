//! Error types shared by the board, solver, and solution modules.

use std::fmt;

use crate::core::coord::Coord;

#[derive(Debug)]
/// Structured errors returned by tour construction, search, and persistence.
pub enum TourError {
    /// Board size must be at least 1.
    InvalidSize { size: i32 },
    /// The requested start cell lies outside the board.
    InvalidStart { start: Coord, size: i32 },
    /// The exhaustive search finished without finding a complete tour.
    ///
    /// Expected for boards that admit no tour at all (2x2, 3x3); the search
    /// ran to completion, nothing went wrong.
    NotFound,
    /// The cancellation token was observed set at a search checkpoint.
    Cancelled,
    /// A step sequence failed tour validation.
    MalformedPath { reason: String },
    /// I/O failure while reading or writing a tour file.
    Io {
        stage: &'static str,
        path: String,
        error: String,
    },
}

impl fmt::Display for TourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TourError::InvalidSize { size } => {
                write!(f, "invalid board size {size}: must be at least 1")
            }
            TourError::InvalidStart { start, size } => {
                write!(f, "start {start} is outside the {size}x{size} board")
            }
            TourError::NotFound => write!(f, "no complete tour exists"),
            TourError::Cancelled => write!(f, "search cancelled"),
            TourError::MalformedPath { reason } => write!(f, "malformed tour: {reason}"),
            TourError::Io { stage, path, error } => {
                write!(f, "io error at {stage} for {path}: {error}")
            }
        }
    }
}

impl std::error::Error for TourError {}
