use knights_tour::core::coord::Coord;
use knights_tour::error::TourError;
use knights_tour::solver::TourSolver;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let (size, start) = match args.len() {
        1 => (5, Coord::ORIGIN),
        2 => (parse_int(&args[1], "size"), Coord::ORIGIN),
        4 => (
            parse_int(&args[1], "size"),
            Coord::new(parse_int(&args[2], "x"), parse_int(&args[3], "y")),
        ),
        _ => {
            eprintln!(
                "Usage: tour_search [<size>] | [<size> <x> <y>]\n\n\
                 Searches for an open knight's tour on a <size> x <size> board\n\
                 starting at (<x>, <y>). Defaults: a 5x5 board from (0, 0)."
            );
            std::process::exit(2);
        }
    };

    let mut solver = match TourSolver::new(size) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Invalid board: {e}");
            std::process::exit(2);
        }
    };
    if !solver.board().is_on_board(start) {
        eprintln!("Invalid start: {start} is outside the {size}x{size} board");
        std::process::exit(2);
    }

    println!("board size:\t{size} x {size}");
    println!("start position:\t{start}");
    println!("Solving Knight's Tour ...");

    match solver.solve(start) {
        Ok(tour) => {
            println!("a solution was found.");
            println!();
            for line in tour.format_steps() {
                println!("{line}");
            }
            println!();
            for row in tour.format_grid() {
                println!("{row}");
            }
        }
        Err(TourError::NotFound) => {
            println!("no solution was found.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Search failed: {e}");
            std::process::exit(1);
        }
    }
}

fn parse_int(arg: &str, what: &str) -> i32 {
    match arg.parse() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("invalid {what} {arg}: {e}");
            std::process::exit(2);
        }
    }
}
