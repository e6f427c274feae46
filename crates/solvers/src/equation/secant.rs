//! Secant iteration through the two most recent points.
//!
//! # Algorithm
//!
//! Starting from the pair `[x0, x1]`, each iteration evaluates `f(x0)` and
//! `f(x1)` and steps to the intercept of the line through both points:
//!
//! ```text
//! x2 = x1 - f(x1) · (x1 - x0) / (f(x1) - f(x0))
//! ```
//!
//! The window then shifts, `x0 ← x1` and `x1 ← x2`. Every iteration fails
//! with [`Error::StagnantEvaluations`] if `|f(x1) - f(x0)|` is below
//! [`STAGNATION_THRESHOLD`].
//!
//! The run stops when `|f(x1)| < tolerance` or `|x2 - x1| < tolerance`, and
//! reports `x2` with `f(x2)`. If neither happens within `max_iters`, the last
//! `x1` is returned with [`Status::MaxIters`] and `|f(x1)|` as its error.

mod error;
mod event;


pub use error::Error;
pub use event::Event;

use rootline_core::{Equation, Observer};

use crate::equation::{
    Action, Config, STAGNATION_THRESHOLD, Solution, Status,
    eval::{eval_finite, finite},
};

/// Finds a root of `f` starting from the pair `[x0, x1]` using the secant method.
///
/// # Errors
///
/// Returns an error if a starting point is non-finite, if consecutive
/// evaluations stagnate, or if `f` or a step produce a non-finite value.
pub fn solve<Obs>(
    f: &impl Equation,
    pair: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    let [mut x0, mut x1] = pair;
    if !x0.is_finite() || !x1.is_finite() {
        return Err(Error::InvalidPair { x0, x1 });
    }

    for iter in 1..=config.max_iters() {
        let f0 = eval_finite(f, x0)?;
        let f1 = eval_finite(f, x1)?;

        let df = f1 - f0;
        if df.abs() < STAGNATION_THRESHOLD {
            return Err(Error::StagnantEvaluations { x0, x1, f0, f1 });
        }

        let x2 = finite(x1, x1 - f1 * (x1 - x0) / df)?;
        let error = (x2 - x1).abs();

        let event = Event {
            iter,
            x_prev: x0,
            x_curr: x1,
            f_prev: f0,
            f_curr: f1,
            x_next: x2,
            error,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            let f2 = eval_finite(f, x2)?;
            return Ok(Solution::new(
                Status::StoppedByObserver,
                x2,
                f2,
                error,
                iter,
            ));
        }

        if config.is_converged(f1, error) {
            let f2 = eval_finite(f, x2)?;
            return Ok(Solution::new(Status::Converged, x2, f2, error, iter));
        }

        x0 = x1;
        x1 = x2;
    }

    let f1 = eval_finite(f, x1)?;
    Ok(Solution::new(
        Status::MaxIters,
        x1,
        f1,
        f1.abs(),
        config.max_iters(),
    ))
}

/// Runs the secant method without observation.
///
/// # Errors
///
/// Returns an error if a starting point is non-finite, if consecutive
/// evaluations stagnate, or if `f` or a step produce a non-finite value.
pub fn solve_unobserved(
    f: &impl Equation,
    pair: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, pair, config, ())
}
