use thiserror::Error;

/// A finite search interval `[start, end]` with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchRange {
    start: f64,
    end: f64,
}

/// Errors that can occur when constructing a search range.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RangeError {
    #[error("range endpoints must be finite, got [{start}, {end}]")]
    NonFinite { start: f64, end: f64 },

    #[error("range start must be less than end, got [{start}, {end}]")]
    Empty { start: f64, end: f64 },
}

impl SearchRange {
    /// Creates a validated search range.
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is non-finite or `start >= end`.
    pub fn new(start: f64, end: f64) -> Result<Self, RangeError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(RangeError::NonFinite { start, end });
        }
        if start >= end {
            return Err(RangeError::Empty { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }
}

impl TryFrom<[f64; 2]> for SearchRange {
    type Error = RangeError;

    fn try_from([start, end]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}
