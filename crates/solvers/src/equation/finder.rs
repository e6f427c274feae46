use std::fmt;

use rootline_core::{Equation, Observer};

use super::{Action, Attempt, Config, bisection, newton, secant};

/// The root-finding methods available to batch runs and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Method {
    Bisection,
    Newton,
    Secant,
}

impl Method {
    /// Every method, in report order.
    pub const ALL: [Method; 3] = [Method::Bisection, Method::Newton, Method::Secant];

    /// Returns the human-readable method name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Bisection => "Bisection",
            Self::Newton => "Newton-Raphson",
            Self::Secant => "Secant",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A configured root finder that can be run from many starting points.
///
/// Implementors bind an equation (and for Newton-Raphson its derivative) to a
/// [`Config`], so a run only needs the starting data. Solver errors are
/// folded into [`Failure`](super::Failure) values.
pub trait RootFinder {
    /// Starting data for one run.
    type Start: Copy;

    /// Per-iteration event emitted to observers.
    type Event;

    /// Returns which method this finder runs.
    fn method(&self) -> Method;

    /// Runs the finder from `start`, reporting each iteration to `observer`.
    fn solve_observed<Obs>(&self, start: Self::Start, observer: Obs) -> Attempt
    where
        Obs: Observer<Self::Event, Action>;

    /// Runs the finder from `start` without observation.
    fn solve(&self, start: Self::Start) -> Attempt {
        self.solve_observed(start, ())
    }
}

/// Bisection bound to an equation.
#[derive(Debug)]
pub struct Bisection<'a, F> {
    f: &'a F,
    config: Config,
}

impl<'a, F: Equation> Bisection<'a, F> {
    #[must_use]
    pub fn new(f: &'a F, config: Config) -> Self {
        Self { f, config }
    }
}

impl<F: Equation> RootFinder for Bisection<'_, F> {
    type Start = [f64; 2];
    type Event = bisection::Event;

    fn method(&self) -> Method {
        Method::Bisection
    }

    fn solve_observed<Obs>(&self, start: [f64; 2], observer: Obs) -> Attempt
    where
        Obs: Observer<bisection::Event, Action>,
    {
        Ok(bisection::solve(self.f, start, &self.config, observer)?)
    }
}

/// Newton-Raphson bound to an equation and its derivative.
#[derive(Debug)]
pub struct Newton<'a, F, D> {
    f: &'a F,
    df: &'a D,
    config: Config,
}

impl<'a, F: Equation, D: Equation> Newton<'a, F, D> {
    #[must_use]
    pub fn new(f: &'a F, df: &'a D, config: Config) -> Self {
        Self { f, df, config }
    }
}

impl<F: Equation, D: Equation> RootFinder for Newton<'_, F, D> {
    type Start = f64;
    type Event = newton::Event;

    fn method(&self) -> Method {
        Method::Newton
    }

    fn solve_observed<Obs>(&self, start: f64, observer: Obs) -> Attempt
    where
        Obs: Observer<newton::Event, Action>,
    {
        Ok(newton::solve(self.f, self.df, start, &self.config, observer)?)
    }
}

/// Secant method bound to an equation.
#[derive(Debug)]
pub struct Secant<'a, F> {
    f: &'a F,
    config: Config,
}

impl<'a, F: Equation> Secant<'a, F> {
    #[must_use]
    pub fn new(f: &'a F, config: Config) -> Self {
        Self { f, config }
    }
}

impl<F: Equation> RootFinder for Secant<'_, F> {
    type Start = [f64; 2];
    type Event = secant::Event;

    fn method(&self) -> Method {
        Method::Secant
    }

    fn solve_observed<Obs>(&self, start: [f64; 2], observer: Obs) -> Attempt
    where
        Obs: Observer<secant::Event, Action>,
    {
        Ok(secant::solve(self.f, start, &self.config, observer)?)
    }
}
