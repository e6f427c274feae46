//! Newton-Raphson iteration with a caller-supplied derivative.
//!
//! # Algorithm
//!
//! Starting from `x0`, each iteration evaluates `f(x)` and `f'(x)` and steps
//! to `x_next = x - f(x) / f'(x)`. The error estimate is the step length.
//! Before every step, including the first, the solver fails with
//! [`Error::DerivativeNearZero`] if `|f'(x)|` is below
//! [`DERIVATIVE_THRESHOLD`].
//!
//! The run stops when `|f(x)| < tolerance` or the step length drops below
//! `tolerance`, and reports `x_next` with `f(x_next)`. If neither happens
//! within `max_iters`, the last iterate is returned with [`Status::MaxIters`]
//! and `|f(x)|` as its error.
//!
//! Use [`CentralDifference`] when no analytic derivative is available.
//!
//! [`CentralDifference`]: rootline_core::CentralDifference

mod error;
mod event;


pub use error::Error;
pub use event::Event;

use rootline_core::{Equation, Observer};

use crate::equation::{
    Action, Config, DERIVATIVE_THRESHOLD, Solution, Status,
    eval::{eval_finite, finite},
};

/// Finds a root of `f` starting from `x0` using Newton-Raphson.
///
/// # Errors
///
/// Returns an error if `x0` is non-finite, if `|df(x)|` falls below
/// [`DERIVATIVE_THRESHOLD`] at any iterate, or if `f`, `df` or a step
/// produce a non-finite value.
pub fn solve<Obs>(
    f: &impl Equation,
    df: &impl Equation,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    if !x0.is_finite() {
        return Err(Error::InvalidGuess { x0 });
    }

    let mut x = x0;

    for iter in 1..=config.max_iters() {
        let fx = eval_finite(f, x)?;
        let dfx = eval_finite(df, x)?;

        if dfx.abs() < DERIVATIVE_THRESHOLD {
            return Err(Error::DerivativeNearZero { x, derivative: dfx });
        }

        let x_next = finite(x, x - fx / dfx)?;
        let error = (x_next - x).abs();

        let event = Event {
            iter,
            x,
            fx,
            dfx,
            x_next,
            error,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            let f_next = eval_finite(f, x_next)?;
            return Ok(Solution::new(
                Status::StoppedByObserver,
                x_next,
                f_next,
                error,
                iter,
            ));
        }

        if config.is_converged(fx, error) {
            let f_next = eval_finite(f, x_next)?;
            return Ok(Solution::new(
                Status::Converged,
                x_next,
                f_next,
                error,
                iter,
            ));
        }

        x = x_next;
    }

    let fx = eval_finite(f, x)?;
    Ok(Solution::new(
        Status::MaxIters,
        x,
        fx,
        fx.abs(),
        config.max_iters(),
    ))
}

/// Runs Newton-Raphson without observation.
///
/// # Errors
///
/// Returns an error if `x0` is non-finite, if `|df(x)|` falls below
/// [`DERIVATIVE_THRESHOLD`] at any iterate, or if `f`, `df` or a step
/// produce a non-finite value.
pub fn solve_unobserved(
    f: &impl Equation,
    df: &impl Equation,
    x0: f64,
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, df, x0, config, ())
}
