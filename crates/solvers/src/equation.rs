//! Solvers for single-variable equations, finding `x` such that `f(x) = 0`.
//!
//! Every solver takes an [`Equation`], its starting data, a [`Config`] and an
//! [`Observer`], and returns either a [`Solution`] or a solver-specific error.
//! Reaching the iteration cap is not an error: the solver reports its best
//! estimate with [`Status::MaxIters`].
//!
//! # Solvers
//!
//! - [`bisection`]: halves a sign-changing bracket
//! - [`newton`]: Newton-Raphson iteration with a supplied derivative
//! - [`secant`]: Newton-like iteration through two previous points
//!
//! The [`RootFinder`] trait wraps each solver behind a common
//! `solve(start) -> Attempt` call, where failures become [`Failure`] values.
//!
//! [`Equation`]: rootline_core::Equation
//! [`Observer`]: rootline_core::Observer

mod action;
mod config;
mod eval;
mod failure;
mod finder;
mod solution;

pub mod bisection;
pub mod newton;
pub mod secant;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use eval::NonFinite;
pub use failure::{Attempt, Failure, FailureKind};
pub use finder::{Bisection, Method, Newton, RootFinder, Secant};
pub use solution::{Solution, Status};

/// Derivative magnitude below which Newton-Raphson refuses to step.
pub const DERIVATIVE_THRESHOLD: f64 = 1e-12;

/// Difference `|f(x1) - f(x0)|` below which the secant method refuses to step.
pub const STAGNATION_THRESHOLD: f64 = 1e-12;
