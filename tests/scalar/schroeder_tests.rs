//! Integration tests for Schroeder's method.

use surd::scalar::config::SolverCfg;
use surd::scalar::errors::SolveError;
use surd::scalar::report::Criterion;
use surd::scalar::schroeder::schroeder;

type TestResult = Result<(), SolveError>;

/// Roots at 2 and -3.
fn parabola(x: f64) -> f64 {
    (x - 2.0) * (x + 3.0)
}

#[test]
fn converges_from_offset_guess() -> TestResult {
    let res = schroeder(parabola, 7.0, SolverCfg::new())?;

    assert!((res.root - 2.0).abs() <= 1e-5);
    assert_eq!(res.criterion, Criterion::StepSize);
    assert_eq!(res.algorithm_name, "schroeder");
    assert!(res.iterations < 128);
    Ok(())
}

#[test]
fn converges_on_cubic() -> TestResult {
    let res = schroeder(|x: f64| x * x * x - 1.0, 3.0, SolverCfg::new())?;

    assert!((res.root - 1.0).abs() <= 1e-5);
    Ok(())
}

#[test]
fn flat_function_is_rejected() {
    let res = schroeder(|_| 5.0, 1.0, SolverCfg::new());
    assert!(matches!(res, Err(SolveError::DegenerateSlope { .. })));
}

#[test]
fn iteration_cap_is_enforced() -> TestResult {
    let cfg = SolverCfg::new().set_max_iter(1)?;
    let res = schroeder(parabola, 7.0, cfg);

    assert!(matches!(
        res,
        Err(SolveError::MaxIterations { iterations: 1, .. })
    ));
    Ok(())
}
