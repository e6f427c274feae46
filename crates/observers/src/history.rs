use rootline_core::Observer;

use crate::traits::{HasError, HasEstimate, HasIteration, HasResidual};

/// One line of an iteration table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    pub iter: usize,
    pub estimate: f64,

    /// See [`HasResidual`] for the point this was evaluated at.
    pub residual: f64,
    pub error: f64,
}

/// An observer that records one [`Row`] per solver iteration.
///
/// Works with any event implementing the four event capability traits, which
/// covers every solver in `rootline-solvers`. The history never stops a run.
///
/// Pass `&mut History` as the observer to read the rows after the solve:
///
/// ```
/// use rootline_observers::History;
/// use rootline_solvers::equation::{Config, bisection};
///
/// let mut history = History::new();
/// let f = |x: f64| x * x - 2.0;
/// bisection::solve(&f, [1.0, 2.0], &Config::bisection(), &mut history).unwrap();
///
/// assert_eq!(history.rows()[0].estimate, 1.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    rows: Vec<Row>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row built from `event`.
    pub fn record<E>(&mut self, event: &E)
    where
        E: HasIteration + HasEstimate + HasResidual + HasError,
    {
        self.rows.push(Row {
            iter: event.iter(),
            estimate: event.estimate(),
            residual: event.residual(),
            error: event.error(),
        });
    }

    /// Returns the recorded rows in iteration order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Consumes the history, returning its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    /// Discards all recorded rows.
    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

impl<E, A> Observer<E, A> for History
where
    E: HasIteration + HasEstimate + HasResidual + HasError,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

/// Allows `&mut History` to be passed to solvers that take an observer by
/// value, so the rows can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut History
where
    E: HasIteration + HasEstimate + HasResidual + HasError,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootline_solvers::equation::{Config, Status, bisection, newton, secant};

    fn square_minus_two(x: f64) -> f64 {
        x * x - 2.0
    }

    #[test]
    fn records_newton_steps() {
        let mut history = History::new();
        let solution = newton::solve(
            &square_minus_two,
            &|x: f64| 2.0 * x,
            1.0,
            &Config::newton(),
            &mut history,
        )
        .expect("should solve");

        let rows = history.rows();
        assert_eq!(rows.len(), solution.iters);
        assert_relative_eq!(rows[0].estimate, 1.5);
        assert_relative_eq!(rows[0].residual, -1.0);
        assert_relative_eq!(rows[0].error, 0.5);
        assert_eq!(rows.last().map(|r| r.estimate), Some(solution.root));
    }

    #[test]
    fn newton_residual_trails_estimate_by_one_row() {
        let mut history = History::new();
        newton::solve(
            &square_minus_two,
            &|x: f64| 2.0 * x,
            1.0,
            &Config::newton(),
            &mut history,
        )
        .expect("should solve");

        for pair in history.rows().windows(2) {
            assert_relative_eq!(pair[1].residual, square_minus_two(pair[0].estimate));
        }
    }

    #[test]
    fn bisection_residual_is_at_estimate() {
        let mut history = History::new();
        bisection::solve(&square_minus_two, [1.0, 2.0], &Config::bisection(), &mut history)
            .expect("should solve");

        for row in history.rows() {
            assert_relative_eq!(row.residual, square_minus_two(row.estimate));
        }
    }

    #[test]
    fn iterations_are_consecutive() {
        let mut history = History::new();
        secant::solve(&square_minus_two, [1.0, 2.0], &Config::secant(), &mut history)
            .expect("should solve");

        for (index, row) in history.rows().iter().enumerate() {
            assert_eq!(row.iter, index + 1);
        }
    }

    #[test]
    fn history_never_stops_a_run() {
        let mut history = History::new();
        let config = Config::new(3, 1e-12).expect("valid config");
        let solution = secant::solve(&square_minus_two, [1.0, 2.0], &config, &mut history)
            .expect("should finish");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(history.into_rows().len(), 3);
    }
}
