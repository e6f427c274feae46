use thiserror::Error;

use crate::equation::NonFinite;

/// Errors that can occur during Newton-Raphson solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("initial guess must be finite, got {x0}")]
    InvalidGuess { x0: f64 },

    #[error("derivative {derivative} is too close to zero at x = {x}")]
    DerivativeNearZero { x: f64, derivative: f64 },

    #[error("evaluation failed: {0}")]
    NonFinite(#[from] NonFinite),
}
