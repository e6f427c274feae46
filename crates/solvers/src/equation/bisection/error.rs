use thiserror::Error;

use crate::equation::NonFinite;

use super::BracketError;

/// Errors that can occur during bisection solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("no sign change in [{a}, {b}]: f({a}) = {fa}, f({b}) = {fb}")]
    NoSignChange { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("evaluation failed: {0}")]
    NonFinite(#[from] NonFinite),
}
