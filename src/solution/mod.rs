//! Validated tours: the solver's output and its report / on-disk forms.
//!
//! A [`SolutionPath`] can only be built through [`SolutionPath::from_steps`],
//! so holding one is holding a checked tour:
//! - **complete**: exactly `N * N` steps, visiting every cell once,
//! - **connected**: each consecutive pair of steps is a knight move,
//! - **on-board**: every step lies inside the `N x N` board.
//!
//! Tours render as the two classic text reports (step list and step-number
//! grid) and persist as a small versioned JSON file. See
//! `src/bin/tour_search.rs` and `src/bin/export_tour.rs` for the user-facing
//! tools.

use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;
use crate::core::moves::is_knight_step;
use crate::error::TourError;

pub const FORMAT_VERSION: u32 = 1;

/// A complete knight's tour on an `N x N` board, as the ordered step list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionPath {
    size: i32,
    steps: Vec<Coord>,
}

impl SolutionPath {
    /// Validate `steps` as a complete tour on a `size x size` board.
    ///
    /// Checks run per step, in order: on-board, not yet visited, a knight
    /// move away from the previous step. The first violation is reported.
    pub fn from_steps(size: i32, steps: Vec<Coord>) -> Result<Self, TourError> {
        if size < 1 {
            return Err(TourError::InvalidSize { size });
        }
        let cell_count = (size as usize) * (size as usize);
        if steps.len() != cell_count {
            return Err(TourError::MalformedPath {
                reason: format!(
                    "expected {cell_count} steps for a {size}x{size} board, got {}",
                    steps.len()
                ),
            });
        }

        let mut seen: FxHashSet<Coord> = FxHashSet::default();
        seen.reserve(cell_count);
        for (m, &step) in steps.iter().enumerate() {
            if step.x < 0 || step.x >= size || step.y < 0 || step.y >= size {
                return Err(TourError::MalformedPath {
                    reason: format!("step {m} at {step} is outside the {size}x{size} board"),
                });
            }
            if !seen.insert(step) {
                return Err(TourError::MalformedPath {
                    reason: format!("step {m} revisits {step}"),
                });
            }
            if m > 0 && !is_knight_step(step - steps[m - 1]) {
                return Err(TourError::MalformedPath {
                    reason: format!(
                        "steps {} -> {m} ({} -> {step}) are not a knight move",
                        m - 1,
                        steps[m - 1]
                    ),
                });
            }
        }

        Ok(Self { size, steps })
    }

    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// The tour in move order; `steps()[m]` is where the knight stood at
    /// move `m` (0-based).
    #[inline]
    pub fn steps(&self) -> &[Coord] {
        &self.steps
    }

    /// The inverse view: cell -> move number. Built on demand, never cached.
    pub fn to_grid(&self) -> TourGrid {
        let size = self.size as usize;
        let mut move_numbers = vec![0usize; size * size];
        for (m, &step) in self.steps.iter().enumerate() {
            move_numbers[(step.y as usize) * size + (step.x as usize)] = m;
        }
        TourGrid {
            size: self.size,
            move_numbers,
        }
    }

    /// The step-list report: one line per move, a 1-based ordinal, a tab,
    /// then `x, y`.
    pub fn format_steps(&self) -> Vec<String> {
        self.steps
            .iter()
            .enumerate()
            .map(|(m, step)| format!("{}:\t{}, {}", m + 1, step.x, step.y))
            .collect()
    }

    /// The grid report: one line per board row, each cell showing the
    /// 0-based move number on which the knight arrived, right-aligned to a
    /// common width with three spaces between columns.
    pub fn format_grid(&self) -> Vec<String> {
        let grid = self.to_grid();
        let width = decimal_width(self.steps.len() - 1);
        let mut rows = Vec::with_capacity(self.size as usize);
        for y in 0..self.size {
            let cells: Vec<String> = (0..self.size)
                .map(|x| format!("{:>width$}", grid.move_number(Coord::new(x, y))))
                .collect();
            rows.push(cells.join("   "));
        }
        rows
    }
}

/// A dense cell -> move-number table for one tour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourGrid {
    size: i32,
    move_numbers: Vec<usize>,
}

impl TourGrid {
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// The 0-based move number at `coord`. `coord` must lie on the board.
    #[inline]
    pub fn move_number(&self, coord: Coord) -> usize {
        debug_assert!(
            coord.x >= 0 && coord.x < self.size && coord.y >= 0 && coord.y < self.size,
            "off-board access at {coord}"
        );
        self.move_numbers[(coord.y as usize) * (self.size as usize) + (coord.x as usize)]
    }
}

/// On-disk form of a tour: a versioned JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourManifest {
    pub format_version: u32,
    pub size: i32,
    pub steps: Vec<Coord>,
}

pub fn write_tour(path: &Path, tour: &SolutionPath) -> Result<(), TourError> {
    let manifest = TourManifest {
        format_version: FORMAT_VERSION,
        size: tour.size(),
        steps: tour.steps().to_vec(),
    };

    let f = fs::File::create(path).map_err(|e| TourError::Io {
        stage: "tour_export_create",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, &manifest).map_err(|e| TourError::Io {
        stage: "tour_export_serialize",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    w.flush().map_err(|e| TourError::Io {
        stage: "tour_export_flush",
        path: path.display().to_string(),
        error: e.to_string(),
    })
}

/// Load a tour file and re-validate it; a hand-edited or truncated file
/// never produces a [`SolutionPath`].
pub fn read_tour(path: &Path) -> Result<SolutionPath, TourError> {
    let f = fs::File::open(path).map_err(|e| TourError::Io {
        stage: "tour_load_open",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    let r = BufReader::new(f);
    let manifest: TourManifest = serde_json::from_reader(r).map_err(|e| TourError::Io {
        stage: "tour_load_parse",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;

    if manifest.format_version != FORMAT_VERSION {
        return Err(TourError::MalformedPath {
            reason: format!(
                "unsupported tour format_version {} (expected {FORMAT_VERSION})",
                manifest.format_version
            ),
        });
    }

    SolutionPath::from_steps(manifest.size, manifest.steps)
}

fn decimal_width(mut n: usize) -> usize {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}
