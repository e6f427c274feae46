/// Iteration event emitted by the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Current iterate.
    pub x: f64,

    /// Function value at `x`.
    pub fx: f64,

    /// Derivative value at `x`.
    pub dfx: f64,

    /// Next iterate `x - fx / dfx`.
    pub x_next: f64,

    /// Step length `|x_next - x|`.
    pub error: f64,
}
