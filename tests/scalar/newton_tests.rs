//! Integration tests for Newton-Raphson.

use surd::scalar::config::SolverCfg;
use surd::scalar::errors::SolveError;
use surd::scalar::newton::newton;
use surd::scalar::report::Criterion;

type TestResult = Result<(), SolveError>;

/// Roots at 2 and -3, with the analytic slope.
fn parabola_pair(x: f64) -> (f64, f64) {
    (x * x + x - 6.0, 2.0 * x + 1.0)
}

#[test]
fn converges_from_offset_guess() -> TestResult {
    let res = newton(parabola_pair, 7.0, SolverCfg::new())?;

    assert!((res.root - 2.0).abs() <= 1e-6);
    assert_eq!(res.criterion, Criterion::StepSize);
    assert_eq!(res.algorithm_name, "newton");
    assert!(res.iterations < 128);
    Ok(())
}

#[test]
fn linear_function_is_exact() -> TestResult {
    let res = newton(|x| (2.0 * x - 6.0, 2.0), 10.0, SolverCfg::new())?;

    assert!((res.root - 3.0).abs() <= f64::EPSILON);
    assert!(res.f_root.abs() <= f64::EPSILON);
    assert_eq!(res.iterations, 2);
    Ok(())
}

#[test]
fn guess_at_root_converges_in_one_iteration() -> TestResult {
    // f(2) = 0 makes the first step exactly zero
    let res = newton(parabola_pair, 2.0, SolverCfg::new())?;

    assert!((res.root - 2.0).abs() <= f64::EPSILON);
    assert_eq!(res.iterations, 1);
    Ok(())
}

#[test]
fn flat_slope_is_rejected() {
    let res = newton(|x| (x * x + 1.0, 2.0 * x), 0.0, SolverCfg::new());
    assert!(matches!(res, Err(SolveError::DegenerateSlope { .. })));
}

#[test]
fn iteration_cap_is_enforced() -> TestResult {
    let cfg = SolverCfg::new().set_max_iter(1)?;
    let res = newton(parabola_pair, 100.0, cfg);

    assert!(matches!(
        res,
        Err(SolveError::MaxIterations { iterations: 1, .. })
    ));
    Ok(())
}

#[test]
fn non_finite_value_is_reported() {
    let res = newton(|_| (f64::NAN, 1.0), 1.0, SolverCfg::new());
    assert!(matches!(res, Err(SolveError::NonFiniteEvaluation { .. })));
}

#[test]
fn non_finite_slope_is_reported() {
    let res = newton(|x| (x, f64::INFINITY), 1.0, SolverCfg::new());
    assert!(matches!(res, Err(SolveError::NonFiniteEvaluation { .. })));
}
