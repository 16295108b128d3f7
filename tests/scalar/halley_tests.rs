//! Integration tests for Halley's method.

use surd::scalar::config::SolverCfg;
use surd::scalar::errors::SolveError;
use surd::scalar::halley::halley;
use surd::scalar::report::Criterion;

type TestResult = Result<(), SolveError>;

/// Roots at 2 and -3.
fn parabola(x: f64) -> f64 {
    (x - 2.0) * (x + 3.0)
}

#[test]
fn converges_from_offset_guess() -> TestResult {
    let res = halley(parabola, 7.0, SolverCfg::new())?;

    assert!((res.root - 2.0).abs() <= 1e-5);
    assert_eq!(res.criterion, Criterion::StepSize);
    assert_eq!(res.algorithm_name, "halley");
    assert!(res.iterations < 128);
    Ok(())
}

#[test]
fn converges_on_cubic() -> TestResult {
    // single real root at 1
    let res = halley(|x: f64| x * x * x - 1.0, 3.0, SolverCfg::new())?;

    assert!((res.root - 1.0).abs() <= 1e-5);
    Ok(())
}

#[test]
fn flat_function_is_rejected() {
    let res = halley(|_| 5.0, 1.0, SolverCfg::new());
    assert!(matches!(res, Err(SolveError::DegenerateSlope { .. })));
}

#[test]
fn iteration_cap_is_enforced() -> TestResult {
    let cfg = SolverCfg::new().set_max_iter(1)?;
    let res = halley(parabola, 7.0, cfg);

    assert!(matches!(
        res,
        Err(SolveError::MaxIterations { iterations: 1, .. })
    ));
    Ok(())
}

#[test]
fn non_finite_evaluation_is_reported() {
    let res = halley(|_| f64::NAN, 1.0, SolverCfg::new());
    assert!(matches!(res, Err(SolveError::NonFiniteEvaluation { .. })));
}
