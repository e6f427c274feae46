//! Solves the catalog problems and prints a report for each.
//!
//! # Usage
//!
//! ```text
//! cargo run --bin rootline
//! cargo run --bin rootline -- 2 3 --trace
//! cargo run --bin rootline -- --json --config solvers.json
//! ```

use std::{error::Error, process};

use rootline_catalog::{
    args::{Args, ArgsError, USAGE},
    config, problems,
    render::{Report, TraceTable},
    trace,
};
use rootline_solvers::report::{ProblemReport, ReportConfig};

fn main() -> Result<(), Box<dyn Error>> {
    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(ArgsError::Help) => {
            println!("{USAGE}");
            return Ok(());
        }
        Err(error) => {
            eprintln!("{error}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    let config = match &args.config {
        Some(path) => config::load(path)?,
        None => ReportConfig::default(),
    };

    let mut reports = Vec::with_capacity(args.problems.len());
    for &number in &args.problems {
        let Some(problem) = problems::get(number) else {
            eprintln!("Unknown problem: {number}");
            process::exit(1);
        };

        let report = ProblemReport::solve(&problem, &config)?;

        if !args.json {
            println!("{}", "=".repeat(72));
            print!("{}", Report(&report));
            if args.trace {
                println!();
                println!("  Iterations");
                for run in trace::collect(&problem, &report.starts, &config) {
                    print!("{}", TraceTable(&run));
                }
            }
        }

        reports.push(report);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(())
}
