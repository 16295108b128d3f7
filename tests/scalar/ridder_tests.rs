//! Integration tests for Ridder's method.

use surd::scalar::config::SolverCfg;
use surd::scalar::errors::SolveError;
use surd::scalar::report::Criterion;
use surd::scalar::ridder::ridder;

type TestResult = Result<(), SolveError>;

/// Roots at 2 and -3.
fn parabola(x: f64) -> f64 {
    (x - 2.0) * (x + 3.0)
}

#[test]
fn converges_on_bracketed_root() -> TestResult {
    let res = ridder(parabola, 0.1, 15.0, SolverCfg::new())?;

    assert!((res.root - 2.0).abs() <= 1e-4);
    assert_eq!(res.algorithm_name, "ridder");
    assert!(res.iterations <= 96);
    Ok(())
}

#[test]
fn reversed_bracket_is_accepted() -> TestResult {
    let res = ridder(parabola, 15.0, 0.1, SolverCfg::new())?;

    assert!((res.root - 2.0).abs() <= 1e-4);
    Ok(())
}

#[test]
fn midpoint_on_root_is_exact() -> TestResult {
    // the first midpoint of [-1, 5] is the root itself
    let res = ridder(parabola, -1.0, 5.0, SolverCfg::new())?;

    assert!((res.root - 2.0).abs() <= f64::EPSILON);
    assert!(res.f_root.abs() <= f64::EPSILON);
    assert_eq!(res.criterion, Criterion::Residual);
    assert_eq!(res.iterations, 1);
    Ok(())
}

#[test]
fn endpoint_root_returns_immediately() -> TestResult {
    let res = ridder(parabola, 2.0, 10.0, SolverCfg::new())?;

    assert_eq!(res.iterations, 0);
    assert_eq!(res.criterion, Criterion::Residual);
    Ok(())
}

#[test]
fn no_sign_change_is_rejected() {
    let res = ridder(parabola, 3.0, 10.0, SolverCfg::new());
    assert!(matches!(res, Err(SolveError::NotBracketed { .. })));
}

#[test]
fn iteration_cap_is_enforced() -> TestResult {
    let cfg = SolverCfg::new().set_max_iter(1)?;
    let res = ridder(parabola, 0.1, 15.0, cfg);

    assert!(matches!(
        res,
        Err(SolveError::MaxIterations { iterations: 1, .. })
    ));
    Ok(())
}
