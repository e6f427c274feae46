//! Plain-text rendering of problem reports and iteration traces.

use std::fmt;

use rootline_solvers::{
    equation::{Attempt, Method},
    report::ProblemReport,
};

use crate::trace::{Trace, bracket_label, guess_label, pair_label};

/// Decimal places used when comparing roots across methods.
pub const COMPARISON_DECIMALS: i32 = 4;

/// Displays a [`ProblemReport`] as a text block.
///
/// The block has a scan summary, one section per method and a comparison of
/// the roots each method found.
pub struct Report<'a>(pub &'a ProblemReport);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;

        writeln!(f, "PROBLEM: {}", report.name)?;
        writeln!(
            f,
            "  Scan of [{}, {}]:",
            report.range.start(),
            report.range.end()
        )?;

        let (lo, hi) = report.scan.y_range;
        writeln!(f, "    y range: [{lo:.4}, {hi:.4}]")?;
        if report.scan.intervals.is_empty() {
            writeln!(f, "    no sign changes detected")?;
        }
        for interval in &report.scan.intervals {
            writeln!(
                f,
                "    sign change near x = {:.4} in [{:.2}, {:.2}]",
                interval.approx_root, interval.start, interval.end
            )?;
        }

        for method in Method::ALL {
            writeln!(f)?;
            writeln!(f, "  {method}")?;
            let labels = start_labels(report, method);
            for (label, attempt) in labels.iter().zip(report.attempts(method)) {
                write_attempt(f, label, attempt)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "  Comparison")?;
        for method in Method::ALL {
            let roots: Vec<String> = report
                .roots(method)
                .iter()
                .map(|root| format!("{root:.6}"))
                .collect();
            writeln!(f, "    {:<16}[{}]", format!("{method}:"), roots.join(", "))?;
        }

        let distinct: Vec<String> = report
            .distinct_roots(COMPARISON_DECIMALS)
            .iter()
            .map(|root| format!("{root:.4}"))
            .collect();
        writeln!(f, "    distinct roots: [{}]", distinct.join(", "))?;

        if report.is_consistent() {
            writeln!(f, "    consistent: every method found the same number of roots")
        } else {
            writeln!(f, "    inconsistent: methods found different numbers of roots")
        }
    }
}

fn start_labels(report: &ProblemReport, method: Method) -> Vec<String> {
    let starts = &report.starts;
    match method {
        Method::Bisection => starts.brackets.iter().map(bracket_label).collect(),
        Method::Newton => starts.guesses.iter().map(guess_label).collect(),
        Method::Secant => starts.pairs.iter().map(pair_label).collect(),
    }
}

fn write_attempt(f: &mut fmt::Formatter<'_>, label: &str, attempt: &Attempt) -> fmt::Result {
    match attempt {
        Ok(solution) => {
            writeln!(f, "    {label}: root = {:.8}", solution.root)?;
            writeln!(
                f,
                "      f({:.6}) = {:.2e}, iterations: {}, final error: {:.2e}, status: {:?}",
                solution.root, solution.fx, solution.iters, solution.error, solution.status
            )
        }
        Err(failure) => writeln!(f, "    {label}: failed ({failure})"),
    }
}

/// Displays a [`Trace`] as an iteration table.
pub struct TraceTable<'a>(pub &'a Trace);

impl fmt::Display for TraceTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let trace = self.0;

        let (estimate, residual) = columns(trace.method);
        writeln!(f, "  {} from {}", trace.method, trace.start)?;
        writeln!(
            f,
            "    {:>4}  {:>16}  {:>12}  {:>12}",
            "iter", estimate, residual, "error"
        )?;
        for row in &trace.rows {
            writeln!(
                f,
                "    {:>4}  {:>16.10}  {:>12.4e}  {:>12.4e}",
                row.iter, row.estimate, row.residual, row.error
            )?;
        }

        match &trace.outcome {
            Ok(solution) => writeln!(f, "    -> {:.8} ({:?})", solution.root, solution.status),
            Err(failure) => writeln!(f, "    -> failed ({failure})"),
        }
    }
}

/// Column headings for a row's estimate and residual.
///
/// Newton and secant rows evaluate `f` at the point they step from, which is
/// the previous row's estimate or the start.
fn columns(method: Method) -> (&'static str, &'static str) {
    match method {
        Method::Bisection => ("midpoint", "f(midpoint)"),
        Method::Newton | Method::Secant => ("next x", "f(prev x)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rootline_solvers::report::{ReportConfig, StartSelection};

    use crate::{problems, trace};

    fn report(number: usize) -> ProblemReport {
        let problem = problems::get(number).expect("problem exists");
        ProblemReport::solve(&problem, &ReportConfig::default()).expect("valid range")
    }

    #[test]
    fn report_lists_scan_and_roots() {
        let text = Report(&report(1)).to_string();

        assert!(text.starts_with("PROBLEM: x^3 - e^(0.8x) = 20 on [0, 8]\n"));
        assert!(text.contains("  Scan of [0, 8]:"));
        assert!(text.contains("sign change near x = 3.2082 in [3.20, 3.21]"));
        assert!(text.contains("sign change near x = 7.4898 in [7.49, 7.50]"));
        assert!(text.contains("    [3, 4]: root = 3.20822"));
        assert!(text.contains("    x0 = 7.5: root = 7.48983873"));
        assert!(text.contains("distinct roots: [3.2082, 7.4898]"));
        assert!(text.contains("consistent: every method"));
    }

    #[test]
    fn failures_are_rendered_in_place() {
        let mut problem = problems::get(2).expect("problem exists");
        problem.brackets = vec![[0.0, 1.0], [5.0, 6.0]];
        let config = ReportConfig {
            selection: StartSelection::Given,
            ..ReportConfig::default()
        };
        let report = ProblemReport::solve(&problem, &config).expect("valid range");
        let text = Report(&report).to_string();

        assert!(text.contains("    [0, 1]: failed (no_sign_change: no sign change in [0, 1]"));
        assert!(text.contains("    [5, 6]: root = 5.70641"));
        assert_eq!(report.roots(Method::Bisection).len(), 1);
    }

    #[test]
    fn trace_table_has_one_line_per_row() {
        let problem = problems::get(2).expect("problem exists");
        let traces = trace::collect(&problem, &problem.starts(), &ReportConfig::default());
        let newton = traces
            .iter()
            .find(|t| t.method == Method::Newton)
            .expect("newton trace");

        let text = TraceTable(newton).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "  Newton-Raphson from x0 = 5.5");
        assert_eq!(
            lines[1].split_whitespace().collect::<Vec<_>>(),
            ["iter", "next", "x", "f(prev", "x)", "error"]
        );
        assert_eq!(lines.len(), newton.rows.len() + 3);
        assert!(lines.last().is_some_and(|l| l.starts_with("    -> 5.70641")));
    }

    #[test]
    fn bisection_table_names_midpoint_columns() {
        let problem = problems::get(2).expect("problem exists");
        let traces = trace::collect(&problem, &problem.starts(), &ReportConfig::default());
        let bisection = traces
            .iter()
            .find(|t| t.method == Method::Bisection)
            .expect("bisection trace");

        let text = TraceTable(bisection).to_string();
        let header = text.lines().nth(1).expect("header line");

        assert_eq!(
            header.split_whitespace().collect::<Vec<_>>(),
            ["iter", "midpoint", "f(midpoint)", "error"]
        );
    }
}
