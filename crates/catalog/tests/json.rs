use rootline_catalog::{config, problems};
use rootline_solvers::report::ProblemReport;

#[test]
fn report_serializes_attempts_and_scan() {
    let problem = problems::get(2).expect("problem exists");
    let config = config::parse("{}").expect("valid config");
    let report = ProblemReport::solve(&problem, &config).expect("valid range");

    let value = serde_json::to_value(&report).expect("serializable");

    assert_eq!(value["name"], "3sin(0.5x) - 0.5x + 2 = 0");
    assert_eq!(value["scan"]["intervals"].as_array().map(Vec::len), Some(1));
    assert_eq!(value["bisection"][0]["Ok"]["status"], "Converged");
    assert!(value["newton"][0]["Ok"]["root"].is_f64());
}

#[test]
fn failures_serialize_with_kind() {
    let mut problem = problems::get(4).expect("problem exists");
    problem.guesses = vec![f64::NAN];
    let config = config::parse(r#"{"selection": "given"}"#).expect("valid config");
    let report = ProblemReport::solve(&problem, &config).expect("valid range");

    let value = serde_json::to_value(&report).expect("serializable");
    let failure = &value["newton"][0]["Err"];

    assert_eq!(failure["kind"], "InvalidStart");
    assert_eq!(failure["iters"], 0);
}

#[test]
fn config_file_changes_solver_caps() {
    let problem = problems::get(1).expect("problem exists");
    let config = config::parse(r#"{"bisection": {"max_iters": 5, "tolerance": 1e-6}}"#)
        .expect("valid config");
    let report = ProblemReport::solve(&problem, &config).expect("valid range");

    for attempt in &report.bisection {
        let solution = attempt.as_ref().expect("finishes");
        assert_eq!(solution.iters, 5);
        assert!(!solution.is_converged());
    }
}
