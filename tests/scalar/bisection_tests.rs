//! Integration tests for bisection.

use surd::scalar::bisection::bisection;
use surd::scalar::config::SolverCfg;
use surd::scalar::errors::SolveError;
use surd::scalar::report::Criterion;

type TestResult = Result<(), SolveError>;

/// Roots at 2 and -3.
fn parabola(x: f64) -> f64 {
    (x - 2.0) * (x + 3.0)
}

#[test]
fn converges_on_bracketed_root() -> TestResult {
    let res = bisection(parabola, 0.1, 15.0, SolverCfg::new())?;

    assert!((res.root - 2.0).abs() <= 1e-5);
    assert_eq!(res.criterion, Criterion::BracketWidth);
    assert_eq!(res.algorithm_name, "bisection");
    assert!(res.iterations > 0);
    Ok(())
}

#[test]
fn reversed_bracket_is_accepted() -> TestResult {
    let res = bisection(parabola, 15.0, 0.1, SolverCfg::new())?;

    assert!((res.root - 2.0).abs() <= 1e-5);
    Ok(())
}

#[test]
fn endpoint_root_returns_immediately() -> TestResult {
    let res = bisection(parabola, 2.0, 10.0, SolverCfg::new())?;

    assert!((res.root - 2.0).abs() <= f64::EPSILON);
    assert_eq!(res.criterion, Criterion::Residual);
    assert_eq!(res.iterations, 0);
    assert_eq!(res.evaluations, 1);
    Ok(())
}

#[test]
fn no_sign_change_is_rejected() {
    let res = bisection(parabola, 3.0, 10.0, SolverCfg::new());
    assert!(matches!(res, Err(SolveError::NotBracketed { .. })));
}

#[test]
fn iteration_cap_is_enforced() -> TestResult {
    let cfg = SolverCfg::new().set_max_iter(1)?;
    let res = bisection(parabola, 0.1, 15.0, cfg);

    assert!(matches!(
        res,
        Err(SolveError::MaxIterations { iterations: 1, .. })
    ));
    Ok(())
}

#[test]
fn pole_inside_bracket_is_reported() {
    // 1/x changes sign across zero without a root; the midpoint probe
    // lands exactly on the pole
    let res = bisection(|x: f64| 1.0 / x, -1.0, 1.0, SolverCfg::new());
    assert!(matches!(res, Err(SolveError::NonFiniteEvaluation { x, .. }) if x == 0.0));
}

#[test]
fn same_inputs_give_same_report() -> TestResult {
    let first = bisection(parabola, 0.1, 15.0, SolverCfg::new())?;
    let second = bisection(parabola, 0.1, 15.0, SolverCfg::new())?;

    assert!((first.root - second.root).abs() <= f64::EPSILON);
    assert_eq!(first.iterations, second.iterations);
    assert_eq!(first.evaluations, second.evaluations);
    Ok(())
}

#[test]
fn tight_tolerance_still_converges() -> TestResult {
    let cfg = SolverCfg::new().set_tol(1e-12)?;
    let res = bisection(parabola, 0.1, 15.0, cfg)?;

    assert!((res.root - 2.0).abs() <= 1e-10);
    Ok(())
}

#[test]
fn invalid_tolerance_is_rejected() {
    assert!(matches!(
        SolverCfg::new().set_tol(0.0),
        Err(SolveError::InvalidTolerance { .. })
    ));
    assert!(matches!(
        SolverCfg::new().set_tol(-1e-6),
        Err(SolveError::InvalidTolerance { .. })
    ));
    assert!(matches!(
        SolverCfg::new().set_tol(f64::NAN),
        Err(SolveError::InvalidTolerance { .. })
    ));
}

#[test]
fn invalid_max_iter_is_rejected() {
    assert!(matches!(
        SolverCfg::new().set_max_iter(0),
        Err(SolveError::InvalidMaxIter { got: 0 })
    ));
}
