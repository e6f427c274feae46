use thiserror::Error;

/// Errors that can occur when validating a bisection bracket.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    /// An endpoint is NaN or infinite.
    #[error("non-finite endpoint {value}")]
    NonFinite { value: f64 },
}

/// Current bisection bracket `[a, b]`.
///
/// Endpoints keep the order they were given in; `a > b` is allowed and the
/// width is always taken as `|b - a|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    a: f64,
    b: f64,
}

impl Bracket {
    /// Creates a bracket from finite endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NonFinite` if either endpoint is NaN or infinite.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [a, b] = bracket;
        for value in [a, b] {
            if !value.is_finite() {
                return Err(BracketError::NonFinite { value });
            }
        }
        Ok(Self { a, b })
    }

    /// Returns the bracket as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.a, self.b]
    }

    /// Returns the left endpoint `a`.
    pub(super) fn a(&self) -> f64 {
        self.a
    }

    /// Returns the midpoint of the bracket.
    pub(super) fn midpoint(&self) -> f64 {
        (self.a + self.b) / 2.0
    }

    /// Returns half the bracket width, the bisection error estimate.
    pub(super) fn half_width(&self) -> f64 {
        (self.b - self.a).abs() / 2.0
    }

    /// Keeps the half whose endpoints still change sign.
    ///
    /// `fa` must be a fresh evaluation at `a`.
    pub(super) fn shrink(&mut self, mid: f64, fa: f64, f_mid: f64) {
        if fa * f_mid < 0.0 {
            self.b = mid;
        } else {
            self.a = mid;
        }
    }
}
