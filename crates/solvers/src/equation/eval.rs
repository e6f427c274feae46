use rootline_core::Equation;
use thiserror::Error;

/// A non-finite value produced while iterating.
///
/// `x` is the point being evaluated, or the point a step was taken from when
/// the step itself overflowed.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("non-finite value {value} at x = {x}")]
pub struct NonFinite {
    pub x: f64,
    pub value: f64,
}

/// Evaluates `f` at `x`, rejecting NaN and infinite results.
pub(crate) fn eval_finite(f: &impl Equation, x: f64) -> Result<f64, NonFinite> {
    let value = f.eval(x);
    finite(x, value)
}

/// Passes `value` through if finite.
pub(crate) fn finite(x: f64, value: f64) -> Result<f64, NonFinite> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NonFinite { x, value })
    }
}
