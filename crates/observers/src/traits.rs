//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasIteration`]: events that know their 1-based iteration
//! - [`HasEstimate`]: events that carry the root estimate produced this step
//! - [`HasResidual`]: events that carry a residual value
//! - [`HasError`]: events that carry the solver's error estimate
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use rootline_core::Observer;
//! use rootline_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_iters: usize,
//!     iter: usize,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         self.iter += 1;
//!         if self.iter >= self.min_iters && event.residual().abs() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use rootline_solvers::equation::{Action, bisection, newton, secant};

/// An event that knows which iteration produced it.
pub trait HasIteration {
    /// Returns the 1-based iteration counter.
    fn iter(&self) -> usize;
}

/// An event that carries the root estimate produced by its iteration.
pub trait HasEstimate {
    /// Returns the estimate the solver would report if stopped now.
    fn estimate(&self) -> f64;
}

/// An event that carries a residual value.
///
/// The residual is not always `f(estimate)`. Bisection evaluates its midpoint,
/// which is also its estimate. Newton and secant evaluate the point they step
/// from, so their residual belongs to the previous estimate or the start.
pub trait HasResidual {
    /// Returns the function value the solver tested for convergence.
    fn residual(&self) -> f64;
}

/// An event that carries an error estimate.
pub trait HasError {
    /// Returns the solver's error estimate for this iteration.
    fn error(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- bisection::Event ---

impl HasIteration for bisection::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasEstimate for bisection::Event {
    fn estimate(&self) -> f64 {
        self.mid
    }
}

impl HasResidual for bisection::Event {
    fn residual(&self) -> f64 {
        self.f_mid
    }
}

impl HasError for bisection::Event {
    fn error(&self) -> f64 {
        self.error
    }
}

// --- newton::Event ---

impl HasIteration for newton::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasEstimate for newton::Event {
    fn estimate(&self) -> f64 {
        self.x_next
    }
}

/// `f(x)` at the pre-step iterate, not at `x_next`.
impl HasResidual for newton::Event {
    fn residual(&self) -> f64 {
        self.fx
    }
}

impl HasError for newton::Event {
    fn error(&self) -> f64 {
        self.error
    }
}

// --- secant::Event ---

impl HasIteration for secant::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasEstimate for secant::Event {
    fn estimate(&self) -> f64 {
        self.x_next
    }
}

/// `f(x_curr)`, the newer window point, not `f(x_next)`.
impl HasResidual for secant::Event {
    fn residual(&self) -> f64 {
        self.f_curr
    }
}

impl HasError for secant::Event {
    fn error(&self) -> f64 {
        self.error
    }
}

// --- CanStopEarly ---

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
