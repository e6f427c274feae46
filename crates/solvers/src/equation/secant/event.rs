/// Iteration event emitted by the secant solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Older point of the secant window.
    pub x_prev: f64,

    /// Newer point of the secant window.
    pub x_curr: f64,

    /// Function value at `x_prev`.
    pub f_prev: f64,

    /// Function value at `x_curr`.
    pub f_curr: f64,

    /// Secant intercept, the next point.
    pub x_next: f64,

    /// Step length `|x_next - x_curr|`.
    pub error: f64,
}
