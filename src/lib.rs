//! An exhaustive backtracking solver for the knight's tour on a finite square
//! board, with observer hooks and cooperative cancellation for long searches.

pub mod core;
pub mod error;
pub mod board;
pub mod solver;
pub mod solution;
