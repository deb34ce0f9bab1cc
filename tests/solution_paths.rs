use knights_tour::core::coord::Coord;
use knights_tour::error::TourError;
use knights_tour::solution::SolutionPath;
use knights_tour::solver::TourSolver;

fn coords(pairs: &[(i32, i32)]) -> Vec<Coord> {
    pairs.iter().map(|&(x, y)| Coord::new(x, y)).collect()
}

fn solved_5x5() -> SolutionPath {
    let mut solver = TourSolver::new(5).unwrap();
    solver.solve(Coord::ORIGIN).unwrap()
}

#[test]
fn trivial_board_has_the_one_step_tour() {
    let path = SolutionPath::from_steps(1, vec![Coord::ORIGIN]).unwrap();
    assert_eq!(path.steps(), &[Coord::ORIGIN]);
    assert_eq!(path.format_steps(), vec!["1:\t0, 0".to_string()]);
    assert_eq!(path.format_grid(), vec!["0".to_string()]);
    assert_eq!(path.to_grid().move_number(Coord::ORIGIN), 0);
}

#[test]
fn non_positive_size_is_invalid() {
    assert!(matches!(
        SolutionPath::from_steps(0, vec![]),
        Err(TourError::InvalidSize { size: 0 })
    ));
}

#[test]
fn wrong_length_is_malformed() {
    let err = SolutionPath::from_steps(5, coords(&[(0, 0), (2, 1)])).unwrap_err();
    match err {
        TourError::MalformedPath { reason } => assert!(reason.contains("expected 25 steps")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn off_board_step_is_malformed() {
    // Right length, knight-connected, but (2, 1) leaves the 2x2 board.
    let err = SolutionPath::from_steps(2, coords(&[(0, 0), (2, 1), (0, 2), (1, 0)])).unwrap_err();
    match err {
        TourError::MalformedPath { reason } => assert!(reason.contains("outside")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn revisited_cell_is_malformed() {
    let tour = solved_5x5();
    let mut steps = tour.steps().to_vec();
    steps[10] = steps[3];
    let err = SolutionPath::from_steps(5, steps).unwrap_err();
    match err {
        TourError::MalformedPath { reason } => assert!(reason.contains("revisits")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_knight_adjacency_is_malformed() {
    // Distinct and on-board, but (0, 0) -> (1, 1) is a king step.
    let err = SolutionPath::from_steps(2, coords(&[(0, 0), (1, 1), (0, 1), (1, 0)])).unwrap_err();
    match err {
        TourError::MalformedPath { reason } => assert!(reason.contains("not a knight move")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn grid_is_the_inverse_of_the_step_list() {
    let tour = solved_5x5();
    let grid = tour.to_grid();
    assert_eq!(grid.size(), 5);
    for (m, &step) in tour.steps().iter().enumerate() {
        assert_eq!(grid.move_number(step), m);
    }
}

#[test]
fn step_report_is_one_based_with_tabs() {
    let tour = solved_5x5();
    let lines = tour.format_steps();
    assert_eq!(lines.len(), 25);
    assert_eq!(lines[0], "1:\t0, 0".to_string());
    for (m, line) in lines.iter().enumerate() {
        let (ordinal, rest) = line.split_once(":\t").unwrap();
        assert_eq!(ordinal.parse::<usize>().unwrap(), m + 1);
        let (x, y) = rest.split_once(", ").unwrap();
        let cell = Coord::new(x.parse().unwrap(), y.parse().unwrap());
        assert_eq!(cell, tour.steps()[m]);
    }
}

#[test]
fn grid_report_rows_align_and_cover_every_move() {
    let tour = solved_5x5();
    let rows = tour.format_grid();
    assert_eq!(rows.len(), 5);
    // Moves 0..=24 print 2 wide: five cells plus four 3-space gaps.
    for row in &rows {
        assert_eq!(row.len(), 22);
    }

    let grid = tour.to_grid();
    let mut seen = [false; 25];
    for (y, row) in rows.iter().enumerate() {
        let numbers: Vec<usize> = row
            .split_whitespace()
            .map(|cell| cell.parse().unwrap())
            .collect();
        assert_eq!(numbers.len(), 5);
        for (x, &m) in numbers.iter().enumerate() {
            assert_eq!(m, grid.move_number(Coord::new(x as i32, y as i32)));
            assert!(!seen[m], "move {m} printed twice");
            seen[m] = true;
        }
    }
    assert!(seen.iter().all(|&s| s));
}
