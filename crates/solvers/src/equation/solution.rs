/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a root finder run.
///
/// `root`, `fx` and `error` are always finite and `iters` is between 1 and
/// the configured cap.
///
/// The meaning of `error` depends on how the run ended. On convergence it is
/// the solver's step-size estimate (half the bracket width for bisection,
/// the last step length for Newton-Raphson and secant). When Newton-Raphson
/// or secant hit the cap it is `|f(root)|` instead.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Root estimate.
    pub root: f64,

    /// Function value at `root`.
    pub fx: f64,

    /// Final error estimate.
    pub error: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    pub(crate) fn new(status: Status, root: f64, fx: f64, error: f64, iters: usize) -> Self {
        Self {
            status,
            root,
            fx,
            error,
            iters,
        }
    }

    /// Returns true if the solver met its tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
