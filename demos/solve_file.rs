//! Solve a dominating set for a point file and persist the result.
//!
//! Usage:
//!     solve_file <points-file> <edge-threshold> [result-dir]
//!
//! The input is one point per line, two whitespace-separated integers.
//! Results land in `result-dir` (default `.`) as `result<N>.points`; an
//! existing entry that still dominates the input is reused instead of
//! recomputing. Set `RUST_LOG=domset=debug` for per-pass progress.

use domset::{read_points, ResultCache, Solver, SolverConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "domset=info".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("usage: {} <points-file> <edge-threshold> [result-dir]", args[0]);
        return ExitCode::FAILURE;
    }

    let threshold: f64 = match args[2].parse() {
        Ok(t) => t,
        Err(_) => {
            eprintln!("invalid edge threshold: {}", args[2]);
            return ExitCode::FAILURE;
        }
    };
    let result_dir = args.get(3).map(String::as_str).unwrap_or(".");

    match run(&args[1], threshold, result_dir) {
        Ok(size) => {
            println!("dominating set size: {size}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str, threshold: f64, result_dir: &str) -> Result<usize, domset::Error> {
    let points = read_points(path)?;
    let mut solver = Solver::new(SolverConfig::new(threshold))?;
    solver.set_points(points)?;

    let cache = ResultCache::new(result_dir);
    if let Some(cached) = cache.load("result", &solver) {
        println!("reusing cached result");
        return Ok(cached.len());
    }

    let start = std::time::Instant::now();
    let set = solver.solve();
    println!(
        "solved {} points in {:.1?}",
        solver.count_points(),
        start.elapsed()
    );

    let saved = cache.save("result", &set)?;
    println!("saved to {}", saved.display());
    Ok(set.len())
}
