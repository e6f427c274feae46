use thiserror::Error;

/// Iteration cap and convergence tolerance shared by the root finders.
///
/// A solver stops as soon as either the residual `|f(x)|` or its step-size
/// error estimate drops below `tolerance`, or after `max_iters` iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawConfig"))]
pub struct Config {
    max_iters: usize,
    tolerance: f64,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be at least 1")]
    ZeroIters,

    #[error("tolerance must be finite and positive")]
    Tolerance,
}

/// Default convergence tolerance for every solver.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

impl Default for Config {
    /// Newton-Raphson and secant defaults: 100 iterations, tolerance `1e-6`.
    fn default() -> Self {
        Self {
            max_iters: 100,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl Config {
    /// Creates a new config with a validated cap and tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or `tolerance` is not a
    /// finite positive number.
    pub fn new(max_iters: usize, tolerance: f64) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::ZeroIters);
        }
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            max_iters,
            tolerance,
        })
    }

    /// Bisection defaults: 20 iterations, tolerance `1e-6`.
    #[must_use]
    pub fn bisection() -> Self {
        Self {
            max_iters: 20,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Newton-Raphson defaults: 100 iterations, tolerance `1e-6`.
    #[must_use]
    pub fn newton() -> Self {
        Self::default()
    }

    /// Secant defaults: 100 iterations, tolerance `1e-6`.
    #[must_use]
    pub fn secant() -> Self {
        Self::default()
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns true if either the residual or the error estimate is within tolerance.
    pub(crate) fn is_converged(&self, residual: f64, error: f64) -> bool {
        residual.abs() < self.tolerance || error < self.tolerance
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawConfig {
    max_iters: usize,
    tolerance: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::new(raw.max_iters, raw.tolerance)
    }
}
