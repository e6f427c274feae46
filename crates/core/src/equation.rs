/// A single-variable real equation `f(x) = 0`.
///
/// Solvers treat an equation as an opaque callable: they evaluate it at the
/// points they choose and never inspect how the value is produced.
/// Any `Fn(f64) -> f64` is an equation, so closures and function pointers
/// can be passed directly.
pub trait Equation {
    /// Evaluates the equation at `x`.
    fn eval(&self, x: f64) -> f64;
}

impl<F> Equation for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}

/// Numeric derivative of an equation using a central difference.
///
/// Evaluates `(f(x + h) - f(x - h)) / 2h`. Useful as the derivative for
/// Newton-Raphson when no analytic derivative is available.
#[derive(Debug, Clone, Copy)]
pub struct CentralDifference<F> {
    equation: F,
    step: f64,
}

impl<F: Equation> CentralDifference<F> {
    /// Default half-width of the difference stencil.
    pub const DEFAULT_STEP: f64 = 1e-7;

    /// Wraps an equation with the default step.
    #[must_use]
    pub fn new(equation: F) -> Self {
        Self::with_step(equation, Self::DEFAULT_STEP)
    }

    /// Wraps an equation with a custom step `h`.
    #[must_use]
    pub fn with_step(equation: F, step: f64) -> Self {
        Self { equation, step }
    }

    /// Returns the stencil half-width.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }
}

impl<F: Equation> Equation for CentralDifference<F> {
    fn eval(&self, x: f64) -> f64 {
        let h = self.step;
        (self.equation.eval(x + h) - self.equation.eval(x - h)) / (2.0 * h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn cube(x: f64) -> f64 {
        x * x * x
    }

    #[test]
    fn closures_and_fn_pointers_are_equations() {
        let offset = 2.0;
        let shifted = |x: f64| x - offset;

        assert_relative_eq!(shifted.eval(5.0), 3.0);
        assert_relative_eq!((cube as fn(f64) -> f64).eval(2.0), 8.0);
    }

    #[test]
    fn central_difference_matches_analytic_derivative() {
        let derivative = CentralDifference::new(cube);

        for x in [-2.0, -0.5, 0.0, 1.0, 3.0] {
            assert_relative_eq!(derivative.eval(x), 3.0 * x * x, epsilon = 1e-6);
        }
    }

    #[test]
    fn central_difference_of_sine_is_cosine() {
        let derivative = CentralDifference::with_step(f64::sin, 1e-5);

        assert_relative_eq!(derivative.step(), 1e-5);
        assert_relative_eq!(derivative.eval(0.3), 0.3_f64.cos(), epsilon = 1e-8);
    }
}
