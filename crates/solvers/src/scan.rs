//! Coarse sign-change detection over a search range.
//!
//! [`scan`] samples `f` at evenly spaced points `x_i = start + (end - start) · i / (n - 1)`
//! and reports every adjacent pair with `y_i · y_{i+1} < 0`. Each pair becomes a
//! [`SignChangeInterval`] whose linear-interpolation crossing gives a first
//! estimate of the root, and whose endpoints can seed bisection or secant runs.
//!
//! A sample that is exactly zero counts only when its two neighbours have
//! strictly opposite signs. It then yields one interval ending at that sample,
//! so a curve that touches zero without crossing reports nothing. Zeros at
//! either end of the range, or in a run of zeros, never yield an interval.
//!
//! Samples where `f` is NaN or infinite are skipped: they are excluded from
//! the value range and no interval involving them is reported.

mod config;
mod range;

pub use config::{ScanConfig, ScanConfigError};
pub use range::{RangeError, SearchRange};

use rootline_core::Equation;

/// Adjacent samples whose function values have opposite signs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SignChangeInterval {
    pub start: f64,
    pub end: f64,

    /// Zero crossing of the chord through both samples.
    pub approx_root: f64,
}

impl SignChangeInterval {
    fn from_samples((x0, y0): (f64, f64), (x1, y1): (f64, f64)) -> Self {
        Self {
            start: x0,
            end: x1,
            approx_root: x0 + (x1 - x0) * y0.abs() / (y0.abs() + y1.abs()),
        }
    }

    /// Returns the interval as a bisection bracket.
    #[must_use]
    pub fn bracket(&self) -> [f64; 2] {
        [self.start, self.end]
    }

    /// Returns the interval midpoint.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.start + self.end)
    }
}

/// Result of scanning a range.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Scan {
    /// Minimum and maximum finite sampled value, or `(NaN, NaN)` if none were finite.
    pub y_range: (f64, f64),

    /// Detected intervals in increasing `x` order.
    pub intervals: Vec<SignChangeInterval>,
}

impl Scan {
    /// Returns every interval as a bracket.
    #[must_use]
    pub fn brackets(&self) -> Vec<[f64; 2]> {
        self.intervals.iter().map(SignChangeInterval::bracket).collect()
    }

    /// Returns every interval midpoint.
    #[must_use]
    pub fn midpoints(&self) -> Vec<f64> {
        self.intervals
            .iter()
            .map(SignChangeInterval::midpoint)
            .collect()
    }
}

/// Samples `f` over `range` and reports sign-change intervals.
///
/// Sampling is deterministic: the same inputs always give the same scan.
pub fn scan(f: &impl Equation, range: &SearchRange, config: &ScanConfig) -> Scan {
    let n = config.samples();
    let (start, end) = (range.start(), range.end());
    let span = end - start;

    #[allow(clippy::cast_precision_loss)]
    let samples: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let x = if i == n - 1 {
                end
            } else {
                start + span * i as f64 / (n - 1) as f64
            };
            (x, f.eval(x))
        })
        .collect();

    let y_range = samples
        .iter()
        .map(|&(_, y)| y)
        .filter(|y| y.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, y| match acc {
            None => Some((y, y)),
            Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
        })
        .unwrap_or((f64::NAN, f64::NAN));

    let intervals = (0..samples.len().saturating_sub(1))
        .filter_map(|i| {
            let (a, b) = (samples[i], samples[i + 1]);
            if opposite(a.1, b.1) {
                return Some(SignChangeInterval::from_samples(a, b));
            }
            // `b` sits exactly on a root that the curve crosses.
            let c = samples.get(i + 2)?;
            (b.1 == 0.0 && opposite(a.1, c.1)).then(|| SignChangeInterval::from_samples(a, b))
        })
        .collect();

    Scan { y_range, intervals }
}

/// Whether `a` and `b` are finite with strictly opposite signs.
fn opposite(a: f64, b: f64) -> bool {
    a.is_finite() && b.is_finite() && a * b < 0.0
}
