//! Command-line arguments for the `rootline` binary.

use std::path::PathBuf;

use thiserror::Error;

use crate::problems;

/// Usage text printed on `--help` and argument errors.
pub const USAGE: &str = "\
Usage: rootline [PROBLEM...] [--json] [--trace] [--config FILE]

Solves the catalog problems (1-4, default all) with bisection,
Newton-Raphson and secant, and prints a report for each.

Options:
  --json          print the reports as JSON
  --trace         print an iteration table for every run
  --config FILE   read solver settings from a JSON file
  -h, --help      print this help";

/// Parsed command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// Problem numbers to run, in the order given.
    pub problems: Vec<usize>,
    pub json: bool,
    pub trace: bool,
    pub config: Option<PathBuf>,
}

/// Errors that can occur when parsing arguments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgsError {
    #[error("unknown problem '{0}', expected a number from 1 to {max}", max = problems::COUNT)]
    UnknownProblem(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("option '{0}' needs a value")]
    MissingValue(&'static str),

    #[error("help requested")]
    Help,
}

impl Args {
    /// Parses arguments, excluding the program name.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown options, out-of-range problem numbers,
    /// a `--config` without a path, or when help is requested.
    pub fn parse<I>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Args {
            problems: Vec::new(),
            json: false,
            trace: false,
            config: None,
        };

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => parsed.json = true,
                "--trace" => parsed.trace = true,
                "--config" => {
                    let path = args.next().ok_or(ArgsError::MissingValue("--config"))?;
                    parsed.config = Some(PathBuf::from(path));
                }
                "-h" | "--help" => return Err(ArgsError::Help),
                option if option.starts_with('-') && option.parse::<f64>().is_err() => {
                    return Err(ArgsError::UnknownOption(option.to_owned()));
                }
                number => match number.parse::<usize>() {
                    Ok(n) if (1..=problems::COUNT).contains(&n) => parsed.problems.push(n),
                    _ => return Err(ArgsError::UnknownProblem(number.to_owned())),
                },
            }
        }

        if parsed.problems.is_empty() {
            parsed.problems = (1..=problems::COUNT).collect();
        }
        Ok(parsed)
    }
}
