use rootline_core::Observer;

use crate::traits::{CanStopEarly, HasResidual};

/// A test applied to each solver event.
///
/// Implemented for every `FnMut(&E) -> bool` closure.
pub trait Predicate<E> {
    fn test(&mut self, event: &E) -> bool;
}

impl<E, F> Predicate<E> for F
where
    F: FnMut(&E) -> bool,
{
    fn test(&mut self, event: &E) -> bool {
        self(event)
    }
}

/// Holds when `|residual| < threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualBelow {
    pub threshold: f64,
}

impl<E: HasResidual> Predicate<E> for ResidualBelow {
    fn test(&mut self, event: &E) -> bool {
        event.residual().abs() < self.threshold
    }
}

/// An observer that stops the solver once its predicate holds for an event.
///
/// ```
/// use rootline_observers::StopWhen;
/// use rootline_solvers::equation::{Config, Status, bisection};
///
/// let f = |x: f64| x * x - 2.0;
/// let stop = StopWhen::residual_below(1e-2);
/// let solution = bisection::solve(&f, [1.0, 2.0], &Config::bisection(), stop).unwrap();
///
/// assert_eq!(solution.status, Status::StoppedByObserver);
/// assert!(solution.fx.abs() < 1e-2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StopWhen<P> {
    predicate: P,
}

impl<P> StopWhen<P> {
    /// Creates an observer that stops once `predicate` holds.
    pub fn new(predicate: P) -> Self {
        Self { predicate }
    }
}

impl StopWhen<ResidualBelow> {
    /// Stops once `|residual| < threshold`, usually looser than the solver tolerance.
    #[must_use]
    pub fn residual_below(threshold: f64) -> Self {
        Self::new(ResidualBelow { threshold })
    }
}

impl<E, A, P> Observer<E, A> for StopWhen<P>
where
    A: CanStopEarly,
    P: Predicate<E>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.predicate.test(event).then(A::stop_early)
    }
}
