//! Core traits and types for the rootline workspace.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Equation`]: a real-to-real callable whose roots are sought
//! - [`CentralDifference`]: a numeric derivative built from an [`Equation`]
//! - [`Observer`]: receives solver events and optionally returns control actions

mod equation;
mod observer;

pub use equation::{CentralDifference, Equation};
pub use observer::Observer;
