use crate::core::coord::Coord;

/// The 8 knight steps around the origin.
///
/// The order is part of the solver's contract: candidates are tried in
/// exactly this sequence, which fixes which tour is found first.
pub const KNIGHT_STEPS: [Coord; 8] = [
    Coord { x: 2, y: 1 },
    Coord { x: 2, y: -1 },
    Coord { x: -2, y: 1 },
    Coord { x: -2, y: -1 },
    Coord { x: 1, y: 2 },
    Coord { x: 1, y: -2 },
    Coord { x: -1, y: 2 },
    Coord { x: -1, y: -2 },
];

/// All 8 knight destinations from `from`, in [`KNIGHT_STEPS`] order.
///
/// Off-board cells are produced too; callers filter for legality.
#[inline]
pub fn candidates(from: Coord) -> [Coord; 8] {
    KNIGHT_STEPS.map(|step| from + step)
}

/// Whether `delta` is a legal knight step.
#[inline]
pub fn is_knight_step(delta: Coord) -> bool {
    let ax = delta.x.abs();
    let ay = delta.y.abs();
    (ax == 2 && ay == 1) || (ax == 1 && ay == 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_follow_the_step_table_order() {
        let c = candidates(Coord::new(4, 4));
        let want = [
            Coord::new(6, 5),
            Coord::new(6, 3),
            Coord::new(2, 5),
            Coord::new(2, 3),
            Coord::new(5, 6),
            Coord::new(5, 2),
            Coord::new(3, 6),
            Coord::new(3, 2),
        ];
        assert_eq!(c, want);
    }

    #[test]
    fn candidates_include_off_board_cells() {
        let c = candidates(Coord::ORIGIN);
        assert_eq!(c.len(), 8);
        assert!(c.contains(&Coord::new(-2, -1)));
        assert!(c.contains(&Coord::new(-1, -2)));
    }

    #[test]
    fn knight_step_accepts_exactly_the_eight_offsets() {
        for step in KNIGHT_STEPS {
            assert!(is_knight_step(step));
        }
        assert!(!is_knight_step(Coord::ORIGIN));
        assert!(!is_knight_step(Coord::new(1, 1)));
        assert!(!is_knight_step(Coord::new(2, 2)));
        assert!(!is_knight_step(Coord::new(2, 0)));
        assert!(!is_knight_step(Coord::new(3, 1)));
    }
}
