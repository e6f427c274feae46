/// Iteration event emitted by the bisection solver.
///
/// One event is emitted per midpoint evaluation, before the convergence check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Bracket `[a, b]` at the start of this iteration.
    pub bracket: [f64; 2],

    /// Function value at `a`.
    pub fa: f64,

    /// Midpoint of the bracket.
    pub mid: f64,

    /// Function value at the midpoint.
    pub f_mid: f64,

    /// Half the bracket width.
    pub error: f64,
}
