//! Reusable observers for the rootline root finders.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across bisection, Newton-Raphson and secant.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasEstimate`], [`HasResidual`], [`HasError`], [`CanStopEarly`])
//! - [`History`]: records one [`Row`] per iteration, the classic iteration table
//! - [`StopWhen`]: stops a solver once a predicate on its events holds
//!
//! [`Observer`]: rootline_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasEstimate`]: traits::HasEstimate
//! [`HasResidual`]: traits::HasResidual
//! [`HasError`]: traits::HasError
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod history;
mod stop;

pub use history::{History, Row};
pub use stop::{Predicate, ResidualBelow, StopWhen};
