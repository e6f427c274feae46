//! Runs one root finder across many starting points.
//!
//! Each start is solved independently: a failure on one start is recorded in
//! its slot and never affects the others. Output order matches input order.

use crate::equation::{Action, Attempt, RootFinder};

/// Solves `finder` from every start, one [`Attempt`] per start.
pub fn run_batch<R: RootFinder>(finder: &R, starts: &[R::Start]) -> Vec<Attempt> {
    starts.iter().map(|&start| finder.solve(start)).collect()
}

/// Like [`run_batch`], passing the start index along with each event.
///
/// The observer can stop the current run with [`Action::StopEarly`]; the
/// remaining starts still run.
pub fn run_batch_observed<R, Obs>(finder: &R, starts: &[R::Start], mut observer: Obs) -> Vec<Attempt>
where
    R: RootFinder,
    Obs: FnMut(usize, &R::Event) -> Option<Action>,
{
    starts
        .iter()
        .enumerate()
        .map(|(index, &start)| finder.solve_observed(start, |event: &R::Event| observer(index, event)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::equation::{Bisection, Config, FailureKind, Newton, Secant, Status};

    fn cubic(x: f64) -> f64 {
        (x - 1.0) * (x - 2.0) * (x - 3.0)
    }

    fn cubic_prime(x: f64) -> f64 {
        3.0 * x * x - 12.0 * x + 11.0
    }

    #[test]
    fn one_attempt_per_start_in_order() {
        let finder = Bisection::new(&cubic, Config::bisection());
        let attempts = run_batch(&finder, &[[0.5, 1.5], [1.5, 2.5], [2.5, 3.5]]);

        assert_eq!(attempts.len(), 3);
        for (attempt, root) in attempts.iter().zip([1.0, 2.0, 3.0]) {
            let solution = attempt.as_ref().expect("each bracket solves");
            assert_relative_eq!(solution.root, root, epsilon = 1e-6);
        }
    }

    #[test]
    fn failures_are_isolated() {
        let finder = Bisection::new(&cubic, Config::bisection());
        let attempts = run_batch(&finder, &[[0.5, 1.5], [1.2, 1.8], [2.5, 3.5]]);

        assert!(attempts[0].is_ok());
        assert_eq!(
            attempts[1].as_ref().map_err(|f| f.kind),
            Err(FailureKind::NoSignChange)
        );
        assert!(attempts[2].is_ok());
    }

    #[test]
    fn newton_batch_reports_flat_derivative() {
        let flat = |_x: f64| 0.0;
        let finder = Newton::new(&cubic, &flat, Config::newton());
        let attempts = run_batch(&finder, &[0.0, 4.0]);
        assert!(attempts.iter().all(|a| {
            matches!(a, Err(f) if f.kind == FailureKind::DerivativeNearZero)
        }));

        let finder = Newton::new(&cubic, &cubic_prime, Config::newton());
        let attempts = run_batch(&finder, &[0.0, 4.0]);
        assert_relative_eq!(attempts[0].as_ref().expect("solves").root, 1.0, epsilon = 1e-9);
        assert_relative_eq!(attempts[1].as_ref().expect("solves").root, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn empty_starts_give_empty_batch() {
        let finder = Secant::new(&cubic, Config::secant());
        assert!(run_batch(&finder, &[]).is_empty());
    }

    #[test]
    fn observer_sees_start_index() {
        let finder = Secant::new(&cubic, Config::secant());
        let mut indices = Vec::new();

        let attempts = run_batch_observed(&finder, &[[0.5, 1.5], [2.6, 3.4]], |index, _event| {
            indices.push(index);
            (index == 0).then_some(Action::StopEarly)
        });

        let first = attempts[0].as_ref().expect("stopped cleanly");
        assert_eq!(first.status, Status::StoppedByObserver);
        assert_eq!(first.iters, 1);
        assert!(attempts[1].as_ref().expect("solves").is_converged());

        assert_eq!(indices.iter().filter(|&&i| i == 0).count(), 1);
        assert!(indices.iter().skip(1).all(|&i| i == 1));
    }
}
