use thiserror::Error;

use crate::equation::NonFinite;

/// Errors that can occur during secant solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("starting points must be finite, got [{x0}, {x1}]")]
    InvalidPair { x0: f64, x1: f64 },

    #[error("evaluations are numerically identical: f({x0}) = {f0}, f({x1}) = {f1}")]
    StagnantEvaluations { x0: f64, x1: f64, f0: f64, f1: f64 },

    #[error("evaluation failed: {0}")]
    NonFinite(#[from] NonFinite),
}
