//! The four reference equations.
//!
//! Each problem carries an analytic derivative for Newton-Raphson, a scan
//! range, and hand-picked brackets, guesses and secant pairs.

use rootline_solvers::report::Problem;

/// A catalog entry: plain function pointers for the equation and its derivative.
pub type CatalogProblem = Problem<fn(f64) -> f64, fn(f64) -> f64>;

/// Number of problems in the catalog.
pub const COUNT: usize = 4;

/// `x³ - e^(0.8x) - 20`
pub fn cubic_exponential(x: f64) -> f64 {
    x.powi(3) - (0.8 * x).exp() - 20.0
}

pub fn cubic_exponential_prime(x: f64) -> f64 {
    3.0 * x * x - 0.8 * (0.8 * x).exp()
}

/// `3 sin(0.5x) - 0.5x + 2`
pub fn damped_sine(x: f64) -> f64 {
    3.0 * (0.5 * x).sin() - 0.5 * x + 2.0
}

pub fn damped_sine_prime(x: f64) -> f64 {
    1.5 * (0.5 * x).cos() - 0.5
}

/// `x³ - x²e^(-0.5x) - 3x + 1`
pub fn decaying_cubic(x: f64) -> f64 {
    x.powi(3) - x * x * (-0.5 * x).exp() - 3.0 * x + 1.0
}

pub fn decaying_cubic_prime(x: f64) -> f64 {
    let decay = (-0.5 * x).exp();
    3.0 * x * x - (2.0 * x * decay - 0.5 * x * x * decay) - 3.0
}

/// `cos²x - 0.5x e^(0.3x) + 5`
pub fn cosine_growth(x: f64) -> f64 {
    x.cos().powi(2) - 0.5 * x * (0.3 * x).exp() + 5.0
}

pub fn cosine_growth_prime(x: f64) -> f64 {
    let growth = (0.3 * x).exp();
    -2.0 * x.cos() * x.sin() - 0.5 * (growth + 0.3 * x * growth)
}

/// Returns problem `number`, counting from 1.
#[must_use]
pub fn get(number: usize) -> Option<CatalogProblem> {
    let problem = match number {
        1 => entry(
            "x^3 - e^(0.8x) = 20 on [0, 8]",
            cubic_exponential,
            cubic_exponential_prime,
            [0.0, 8.0],
            &[[3.0, 4.0], [7.0, 8.0]],
            &[3.5, 7.5],
        ),
        2 => entry(
            "3sin(0.5x) - 0.5x + 2 = 0",
            damped_sine,
            damped_sine_prime,
            [0.0, 10.0],
            &[[5.0, 6.0]],
            &[5.5],
        ),
        3 => entry(
            "x^3 - x^2e^(-0.5x) - 3x = -1",
            decaying_cubic,
            decaying_cubic_prime,
            [-2.0, 4.0],
            &[[-1.5, -0.5], [0.0, 1.0], [1.5, 2.0]],
            &[-1.0, 0.5, 1.8],
        ),
        4 => entry(
            "cos^2x - 0.5xe^(0.3x) + 5 = 0",
            cosine_growth,
            cosine_growth_prime,
            [0.0, 10.0],
            &[[3.0, 4.0]],
            &[3.5],
        ),
        _ => return None,
    };
    Some(problem)
}

/// Every catalog problem uses its brackets as secant pairs too.
fn entry(
    name: &str,
    f: fn(f64) -> f64,
    df: fn(f64) -> f64,
    range: [f64; 2],
    brackets: &[[f64; 2]],
    guesses: &[f64],
) -> CatalogProblem {
    Problem {
        name: name.to_owned(),
        f,
        df,
        range,
        brackets: brackets.to_vec(),
        guesses: guesses.to_vec(),
        pairs: brackets.to_vec(),
    }
}

/// Returns every problem in catalog order.
#[must_use]
pub fn all() -> Vec<CatalogProblem> {
    (1..=COUNT).filter_map(get).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootline_core::{CentralDifference, Equation};

    #[test]
    fn numbering_starts_at_one() {
        assert!(get(0).is_none());
        assert!(get(COUNT + 1).is_none());
        assert_eq!(all().len(), COUNT);
    }

    #[test]
    fn start_lists_match_bracket_count() {
        for problem in all() {
            assert_eq!(problem.guesses.len(), problem.brackets.len());
            assert_eq!(problem.pairs, problem.brackets);
        }
    }

    #[test]
    fn derivatives_match_central_differences() {
        for problem in all() {
            let numeric = CentralDifference::new(problem.f);
            let [start, end] = problem.range;
            for i in 0..=20 {
                let x = start + (end - start) * f64::from(i) / 20.0;
                assert_relative_eq!(
                    (problem.df)(x),
                    numeric.eval(x),
                    epsilon = 1e-4,
                    max_relative = 1e-6
                );
            }
        }
    }
}
