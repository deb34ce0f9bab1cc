use std::path::Path;

use knights_tour::core::coord::Coord;
use knights_tour::error::TourError;
use knights_tour::solution::{read_tour, write_tour};
use knights_tour::solver::TourSolver;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        usage();
    }

    let out_file = Path::new(&args[1]);

    let mut check = false;
    let mut positional: Vec<&str> = Vec::new();
    for arg in &args[2..] {
        match arg.as_str() {
            "--check" => check = true,
            x if x.starts_with("--") => {
                eprintln!("Unknown option: {x}");
                std::process::exit(2);
            }
            x => positional.push(x),
        }
    }

    let (size, start) = match positional.as_slice() {
        [] => (5, Coord::ORIGIN),
        [size] => (parse_int(size, "size"), Coord::ORIGIN),
        [size, x, y] => (
            parse_int(size, "size"),
            Coord::new(parse_int(x, "x"), parse_int(y, "y")),
        ),
        _ => usage(),
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

    let tour = match solver.solve(start) {
        Ok(t) => t,
        Err(TourError::NotFound) => {
            eprintln!("No tour exists on a {size}x{size} board from {start}; nothing exported.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Search failed: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = write_tour(out_file, &tour) {
        eprintln!("Export failed: {e}");
        std::process::exit(1);
    }
    println!(
        "Exported {size}x{size} tour from {start} to {}",
        out_file.display()
    );
    println!("  steps: {}", tour.steps().len());

    if check {
        match read_tour(out_file) {
            Ok(loaded) if loaded == tour => println!("  check: reloaded tour matches"),
            Ok(_) => {
                eprintln!("Check failed: reloaded tour differs from the exported one");
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("Check failed: {e}");
                std::process::exit(1);
            }
        }
    }
}

fn usage() -> ! {
    eprintln!(
        "Usage: export_tour <out_file> [<size>] [<x> <y>] [--check]\n\n\
         Solves an open knight's tour (defaults: a 5x5 board from (0, 0))\n\
         and writes it to <out_file> as versioned JSON. With --check, the\n\
         file is read back and compared against the solved tour."
    );
    std::process::exit(2);
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
