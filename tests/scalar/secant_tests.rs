//! Integration tests for the secant method.

use surd::scalar::config::SolverCfg;
use surd::scalar::errors::SolveError;
use surd::scalar::report::Criterion;
use surd::scalar::secant::secant;

type TestResult = Result<(), SolveError>;

/// Roots at 2 and -3.
fn parabola(x: f64) -> f64 {
    (x - 2.0) * (x + 3.0)
}

#[test]
fn converges_from_estimate_pair() -> TestResult {
    let res = secant(parabola, 4.0, 3.0, SolverCfg::new())?;

    assert!((res.root - 2.0).abs() <= 1e-4);
    assert_eq!(res.criterion, Criterion::StepSize);
    assert_eq!(res.algorithm_name, "secant");
    assert!(res.iterations < 128);
    Ok(())
}

#[test]
fn estimate_order_does_not_matter() -> TestResult {
    // either order seeds the same leading point
    let forward = secant(parabola, 4.0, 3.0, SolverCfg::new())?;
    let reversed = secant(parabola, 3.0, 4.0, SolverCfg::new())?;

    assert!((forward.root - reversed.root).abs() <= f64::EPSILON);
    assert_eq!(forward.iterations, reversed.iterations);
    Ok(())
}

#[test]
fn linear_function_is_exact() -> TestResult {
    let res = secant(|x| 2.0 * x - 6.0, 10.0, 0.0, SolverCfg::new())?;

    assert!((res.root - 3.0).abs() <= f64::EPSILON);
    assert!(res.f_root.abs() <= f64::EPSILON);
    assert_eq!(res.iterations, 2);
    Ok(())
}

#[test]
fn flat_pair_is_rejected() {
    let res = secant(|_| 5.0, 0.0, 1.0, SolverCfg::new());
    assert!(matches!(
        res,
        Err(SolveError::DegenerateSlope { iterations: 1, .. })
    ));
}

#[test]
fn iteration_cap_is_enforced() -> TestResult {
    let cfg = SolverCfg::new().set_max_iter(1)?;
    let res = secant(parabola, 4.0, 3.0, cfg);

    assert!(matches!(
        res,
        Err(SolveError::MaxIterations { iterations: 1, .. })
    ));
    Ok(())
}

#[test]
fn iterate_landing_on_pole_is_reported() {
    let res = secant(|x: f64| 1.0 / x, 1.0, -1.0, SolverCfg::new());
    assert!(matches!(res, Err(SolveError::NonFiniteEvaluation { .. })));
}
