//! Bisection for single-variable equations.
//!
//! # Algorithm
//!
//! Bisection starts from a bracket `[a, b]` with `f(a) · f(b) < 0` and
//! repeatedly evaluates the midpoint `c = (a + b) / 2`. The error estimate is
//! half the current bracket width. The half kept for the next iteration is
//! chosen by comparing the sign of a fresh evaluation of `f(a)` against
//! `f(c)`.
//!
//! The run stops when `|f(c)| < tolerance` or the error estimate drops below
//! `tolerance`. If neither happens within `max_iters`, the midpoint of the
//! final bracket is returned with [`Status::MaxIters`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per midpoint evaluation. Observers can
//! return [`Action::StopEarly`] to halt and receive that midpoint.

mod bracket;
mod error;
mod event;


pub use bracket::BracketError;
pub use error::Error;
pub use event::Event;

use rootline_core::{Equation, Observer};

use crate::equation::{Action, Config, Solution, Status, eval::eval_finite};

use bracket::Bracket;

/// Finds a root of `f` inside `bracket` using bisection.
///
/// # Errors
///
/// Returns an error if an endpoint is non-finite, if `f(a) · f(b) >= 0`,
/// or if `f` returns a non-finite value.
pub fn solve<Obs>(
    f: &impl Equation,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    let mut bracket = Bracket::new(bracket)?;

    let [a, b] = bracket.as_array();
    let fa = eval_finite(f, a)?;
    let fb = eval_finite(f, b)?;
    if fa * fb >= 0.0 {
        return Err(Error::NoSignChange { a, b, fa, fb });
    }

    for iter in 1..=config.max_iters() {
        let mid = bracket.midpoint();
        let f_mid = eval_finite(f, mid)?;
        let error = bracket.half_width();
        let fa = eval_finite(f, bracket.a())?;

        let event = Event {
            iter,
            bracket: bracket.as_array(),
            fa,
            mid,
            f_mid,
            error,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(
                Status::StoppedByObserver,
                mid,
                f_mid,
                error,
                iter,
            ));
        }

        if config.is_converged(f_mid, error) {
            return Ok(Solution::new(Status::Converged, mid, f_mid, error, iter));
        }

        bracket.shrink(mid, fa, f_mid);
    }

    let mid = bracket.midpoint();
    let f_mid = eval_finite(f, mid)?;
    Ok(Solution::new(
        Status::MaxIters,
        mid,
        f_mid,
        bracket.half_width(),
        config.max_iters(),
    ))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if an endpoint is non-finite, if `f(a) · f(b) >= 0`,
/// or if `f` returns a non-finite value.
pub fn solve_unobserved(
    f: &impl Equation,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(f, bracket, config, ())
}
