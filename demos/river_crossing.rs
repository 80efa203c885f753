//! Solve the fox, goose and grain puzzle and print the plan.
//!
//! Run with `RUST_LOG=crossing=debug` to see one line per expansion round.

use crossing::puzzle;
use crossing::search::{SearchPolicy, Solver};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();

    let built = puzzle! {
        carrier: "farmer",
        entities: ["fox", "goose", "grain"],
        origin: "near",
        destination: "far",
        capacity: 1,
        unsafe: [["fox", "goose"], ["goose", "grain"]],
    };
    let puzzle = match built {
        Ok(puzzle) => puzzle,
        Err(error) => {
            eprintln!("invalid puzzle: {error}");
            return ExitCode::FAILURE;
        }
    };

    let policy = SearchPolicy::unbounded().with_timeout(Duration::from_secs(10));
    match Solver::new(&puzzle).with_policy(policy).solve() {
        Ok(solution) => {
            println!("{}", solution.render(&puzzle));
            println!(
                "{} actions, {} crossings, {} rounds",
                solution.len(),
                solution.crossings(),
                solution.stats().rounds
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("no plan: {error}");
            ExitCode::FAILURE
        }
    }
}
