use std::fmt;

use super::{Solution, bisection, newton, secant};

/// Outcome of one root finder run on one starting point.
pub type Attempt = Result<Solution, Failure>;

/// Solver-independent classification of a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FailureKind {
    /// The starting data was non-finite.
    InvalidStart,

    /// The bracket endpoints do not have strictly opposite signs.
    NoSignChange,

    /// Newton-Raphson met a derivative below the threshold.
    DerivativeNearZero,

    /// The secant method met two numerically identical evaluations.
    StagnantEvaluations,

    /// The function or a step produced NaN or infinity.
    NonFiniteEvaluation,
}

impl FailureKind {
    /// Returns a short snake-case label for the kind.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::InvalidStart => "invalid_start",
            Self::NoSignChange => "no_sign_change",
            Self::DerivativeNearZero => "derivative_near_zero",
            Self::StagnantEvaluations => "stagnant_evaluations",
            Self::NonFiniteEvaluation => "non_finite_evaluation",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A failed run, carrying its kind and a human-readable message.
///
/// Failed runs never report a root, and `iters` is always zero.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
    pub iters: usize,
}

impl Failure {
    fn new(kind: FailureKind, error: &impl fmt::Display) -> Self {
        Self {
            kind,
            message: error.to_string(),
            iters: 0,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Failure {}

impl From<bisection::Error> for Failure {
    fn from(error: bisection::Error) -> Self {
        let kind = match error {
            bisection::Error::InvalidBracket(_) => FailureKind::InvalidStart,
            bisection::Error::NoSignChange { .. } => FailureKind::NoSignChange,
            bisection::Error::NonFinite(_) => FailureKind::NonFiniteEvaluation,
        };
        Self::new(kind, &error)
    }
}

impl From<newton::Error> for Failure {
    fn from(error: newton::Error) -> Self {
        let kind = match error {
            newton::Error::InvalidGuess { .. } => FailureKind::InvalidStart,
            newton::Error::DerivativeNearZero { .. } => FailureKind::DerivativeNearZero,
            newton::Error::NonFinite(_) => FailureKind::NonFiniteEvaluation,
        };
        Self::new(kind, &error)
    }
}

impl From<secant::Error> for Failure {
    fn from(error: secant::Error) -> Self {
        let kind = match error {
            secant::Error::InvalidPair { .. } => FailureKind::InvalidStart,
            secant::Error::StagnantEvaluations { .. } => FailureKind::StagnantEvaluations,
            secant::Error::NonFinite(_) => FailureKind::NonFiniteEvaluation,
        };
        Self::new(kind, &error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::equation::NonFinite;

    #[test]
    fn bisection_errors_map_to_kinds() {
        let failure = Failure::from(bisection::Error::NoSignChange {
            a: 0.0,
            b: 1.0,
            fa: 1.0,
            fb: 2.0,
        });

        assert_eq!(failure.kind, FailureKind::NoSignChange);
        assert_eq!(failure.iters, 0);
        assert!(failure.message.contains("[0, 1]"));
    }

    #[test]
    fn non_finite_maps_to_same_kind_for_every_solver() {
        let nan = NonFinite {
            x: 1.0,
            value: f64::NAN,
        };

        let kinds = [
            Failure::from(bisection::Error::from(nan)).kind,
            Failure::from(newton::Error::from(nan)).kind,
            Failure::from(secant::Error::from(nan)).kind,
        ];

        assert!(kinds.iter().all(|&k| k == FailureKind::NonFiniteEvaluation));
    }

    #[test]
    fn display_includes_label() {
        let failure = Failure::from(newton::Error::DerivativeNearZero {
            x: 1.0,
            derivative: 0.0,
        });

        assert!(failure.to_string().starts_with("derivative_near_zero: "));
    }
}
