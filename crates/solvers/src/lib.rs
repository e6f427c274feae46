//! Root finders for single-variable equations.
//!
//! - [`equation`]: bisection, Newton-Raphson and secant solvers sharing one
//!   [`Solution`](equation::Solution) / [`Failure`](equation::Failure) shape
//! - [`scan`]: coarse sign-change detection over a search range
//! - [`batch`]: runs one solver across many starting points
//! - [`report`]: scans and solves a whole problem definition at once

pub mod batch;
pub mod equation;
pub mod report;
pub mod scan;
