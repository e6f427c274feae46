//! Iteration tables for every run in a report.

use rootline_core::Equation;
use rootline_observers::{
    History, Row,
    traits::{HasError, HasEstimate, HasIteration, HasResidual},
};
use rootline_solvers::{
    equation::{Attempt, Bisection, Method, Newton, RootFinder, Secant},
    report::{Problem, ReportConfig, Starts},
};

/// The iteration history of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub method: Method,

    /// Human-readable starting data, e.g. `[3, 4]` or `x0 = 3.5`.
    pub start: String,

    pub rows: Vec<Row>,
    pub outcome: Attempt,
}

/// Reruns every start in `starts` with a [`History`] attached.
///
/// Pass the starts a [`ProblemReport`] used so the traces line up with its
/// attempts.
///
/// [`ProblemReport`]: rootline_solvers::report::ProblemReport
pub fn collect<F, D>(problem: &Problem<F, D>, starts: &Starts, config: &ReportConfig) -> Vec<Trace>
where
    F: Equation,
    D: Equation,
{
    let mut traces = Vec::new();

    let bisection = Bisection::new(&problem.f, config.bisection);
    traces.extend(run(&bisection, &starts.brackets, bracket_label));

    let newton = Newton::new(&problem.f, &problem.df, config.newton);
    traces.extend(run(&newton, &starts.guesses, guess_label));

    let secant = Secant::new(&problem.f, config.secant);
    traces.extend(run(&secant, &starts.pairs, pair_label));

    traces
}

fn run<R>(finder: &R, starts: &[R::Start], label: fn(&R::Start) -> String) -> Vec<Trace>
where
    R: RootFinder,
    R::Event: HasIteration + HasEstimate + HasResidual + HasError,
{
    starts
        .iter()
        .map(|start| {
            let mut history = History::new();
            let outcome = finder.solve_observed(*start, &mut history);
            Trace {
                method: finder.method(),
                start: label(start),
                rows: history.into_rows(),
                outcome,
            }
        })
        .collect()
}

/// Formats a bisection bracket.
#[must_use]
pub fn bracket_label(bracket: &[f64; 2]) -> String {
    format!("[{}, {}]", bracket[0], bracket[1])
}

/// Formats a Newton-Raphson guess.
#[must_use]
pub fn guess_label(x0: &f64) -> String {
    format!("x0 = {x0}")
}

/// Formats a secant starting pair.
#[must_use]
pub fn pair_label(pair: &[f64; 2]) -> String {
    format!("x0 = {}, x1 = {}", pair[0], pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::problems;

    #[test]
    fn one_trace_per_start_with_matching_rows() {
        let problem = problems::get(1).expect("problem 1 exists");
        let config = ReportConfig::default();
        let traces = collect(&problem, &problem.starts(), &config);

        assert_eq!(traces.len(), 6);
        for trace in &traces {
            let solution = trace.outcome.as_ref().expect("every start solves");
            assert_eq!(trace.rows.len(), solution.iters);
        }
    }

    #[test]
    fn failed_runs_keep_their_rows() {
        let mut problem = problems::get(2).expect("problem 2 exists");
        problem.brackets = vec![[0.0, 1.0]];
        let traces = collect(&problem, &problem.starts(), &ReportConfig::default());

        let bisection = &traces[0];
        assert_eq!(bisection.method, Method::Bisection);
        assert!(bisection.outcome.is_err());
        assert!(bisection.rows.is_empty());
    }

    #[test]
    fn labels() {
        assert_eq!(bracket_label(&[3.0, 4.5]), "[3, 4.5]");
        assert_eq!(guess_label(&-1.0), "x0 = -1");
        assert_eq!(pair_label(&[0.0, 1.0]), "x0 = 0, x1 = 1");
    }
}
