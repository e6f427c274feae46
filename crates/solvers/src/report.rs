//! Scans and solves one problem with every method.
//!
//! [`ProblemReport::solve`] scans the problem's range, picks starting data
//! according to [`StartSelection`], then runs bisection, Newton-Raphson and
//! secant batches. The report keeps every [`Attempt`] aligned with the starts
//! it came from, so failures stay visible next to the successes.

mod config;
mod problem;

pub use config::{ReportConfig, StartSelection};
pub use problem::{Problem, Starts};

use rootline_core::Equation;
use thiserror::Error;

use crate::{
    batch::run_batch,
    equation::{Attempt, Bisection, Method, Newton, Secant},
    scan::{RangeError, Scan, SearchRange, scan},
};

/// Errors that can occur when building a report.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid search range: {0}")]
    Range(#[from] RangeError),
}

/// Scan and solver results for one problem.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProblemReport {
    pub name: String,
    pub range: SearchRange,
    pub scan: Scan,

    /// Starting data the batches ran from.
    pub starts: Starts,

    /// One attempt per bracket in `starts.brackets`.
    pub bisection: Vec<Attempt>,

    /// One attempt per guess in `starts.guesses`.
    pub newton: Vec<Attempt>,

    /// One attempt per pair in `starts.pairs`.
    pub secant: Vec<Attempt>,
}

impl ProblemReport {
    /// Scans `problem` and solves it with all three methods.
    ///
    /// # Errors
    ///
    /// Returns an error if the problem's range is not a valid [`SearchRange`].
    /// Solver failures are recorded in the report, not returned.
    pub fn solve<F, D>(problem: &Problem<F, D>, config: &ReportConfig) -> Result<Self, Error>
    where
        F: Equation,
        D: Equation,
    {
        let range = SearchRange::try_from(problem.range)?;
        let scan = scan(&problem.f, &range, &config.scan);
        let starts = select_starts(problem, &scan, config.selection);

        let bisection = run_batch(
            &Bisection::new(&problem.f, config.bisection),
            &starts.brackets,
        );
        let newton = run_batch(
            &Newton::new(&problem.f, &problem.df, config.newton),
            &starts.guesses,
        );
        let secant = run_batch(&Secant::new(&problem.f, config.secant), &starts.pairs);

        Ok(Self {
            name: problem.name.clone(),
            range,
            scan,
            starts,
            bisection,
            newton,
            secant,
        })
    }

    /// Returns every attempt made with `method`.
    #[must_use]
    pub fn attempts(&self, method: Method) -> &[Attempt] {
        match method {
            Method::Bisection => &self.bisection,
            Method::Newton => &self.newton,
            Method::Secant => &self.secant,
        }
    }

    /// Returns the roots `method` found, in start order, skipping failures.
    #[must_use]
    pub fn roots(&self, method: Method) -> Vec<f64> {
        self.attempts(method)
            .iter()
            .filter_map(|attempt| attempt.as_ref().ok().map(|s| s.root))
            .collect()
    }

    /// Returns every root found by any method, rounded to `decimals` places,
    /// sorted and deduplicated.
    #[must_use]
    pub fn distinct_roots(&self, decimals: i32) -> Vec<f64> {
        let scale = 10f64.powi(decimals);
        let mut roots: Vec<f64> = Method::ALL
            .iter()
            .flat_map(|&method| self.roots(method))
            .map(|root| (root * scale).round() / scale)
            .collect();

        roots.sort_by(f64::total_cmp);
        roots.dedup();
        roots
    }

    /// Returns true if every method found the same number of roots.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let bisection = self.roots(Method::Bisection).len();
        bisection == self.roots(Method::Newton).len()
            && bisection == self.roots(Method::Secant).len()
    }
}

fn select_starts<F, D>(problem: &Problem<F, D>, scan: &Scan, selection: StartSelection) -> Starts {
    match selection {
        StartSelection::PreferDetected if scan.intervals.len() > problem.brackets.len() => {
            let brackets = scan.brackets();
            Starts {
                guesses: scan.midpoints(),
                pairs: brackets.clone(),
                brackets,
            }
        }
        _ => problem.starts(),
    }
}
