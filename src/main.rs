use std::env;
use std::io::Write;
use std::process;

use log::info;

use tsp_heuristics::io::input;
use tsp_heuristics::io::options::ProgramOptions;
use tsp_heuristics::io::report;
use tsp_heuristics::models::Tour;
use tsp_heuristics::{logging, runner, Result};

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("TSP: {err}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = ProgramOptions::from_args(env::args().skip(1))?;
    let stops = input::read_stops(&options.input_path)?;
    let tour = Tour::new(stops);
    info!("input: {} stops from {}", tour.len(), options.input_path);

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    for &algorithm in &options.algorithms {
        let result = runner::run_algorithm(algorithm, &tour);
        writeln!(stdout, "{}", report::format_line(algorithm, &result))?;
    }
    Ok(())
}
