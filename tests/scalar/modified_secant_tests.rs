//! Integration tests for the Illinois, Pegasus, and Anderson-Bjorck
//! variants.

use surd::scalar::config::SolverCfg;
use surd::scalar::errors::SolveError;
use surd::scalar::modified_secant::{anderson_bjorck, illinois, pegasus};
use surd::scalar::report::Criterion;

type TestResult = Result<(), SolveError>;

/// Roots at 2 and -3.
fn parabola(x: f64) -> f64 {
    (x - 2.0) * (x + 3.0)
}

#[test]
fn illinois_converges_on_bracketed_root() -> TestResult {
    let res = illinois(parabola, 0.1, 15.0, SolverCfg::new())?;

    assert!((res.root - 2.0).abs() <= 1e-5);
    assert_eq!(res.criterion, Criterion::Residual);
    assert_eq!(res.algorithm_name, "illinois");
    assert!(res.iterations <= 96);
    Ok(())
}

#[test]
fn pegasus_converges_on_bracketed_root() -> TestResult {
    let res = pegasus(parabola, 0.1, 15.0, SolverCfg::new())?;

    assert!((res.root - 2.0).abs() <= 1e-5);
    assert_eq!(res.criterion, Criterion::Residual);
    assert_eq!(res.algorithm_name, "pegasus");
    Ok(())
}

#[test]
fn anderson_bjorck_converges_on_bracketed_root() -> TestResult {
    let res = anderson_bjorck(parabola, 0.1, 15.0, SolverCfg::new())?;

    assert!((res.root - 2.0).abs() <= 1e-5);
    assert_eq!(res.criterion, Criterion::Residual);
    assert_eq!(res.algorithm_name, "anderson_bjorck");
    Ok(())
}

#[test]
fn converged_residual_is_inside_tolerance() -> TestResult {
    // the residual exit is the only convergent exit, so every report
    // must satisfy it
    for res in [
        illinois(parabola, 0.1, 15.0, SolverCfg::new())?,
        pegasus(parabola, 0.1, 15.0, SolverCfg::new())?,
        anderson_bjorck(parabola, 0.1, 15.0, SolverCfg::new())?,
    ] {
        assert!(res.f_root.abs() <= 1e-6);
    }
    Ok(())
}

#[test]
fn endpoint_root_returns_immediately() -> TestResult {
    // reversed order as well: the hi endpoint carries the root
    let res = pegasus(parabola, 10.0, 2.0, SolverCfg::new())?;

    assert!((res.root - 2.0).abs() <= f64::EPSILON);
    assert_eq!(res.iterations, 0);
    Ok(())
}

#[test]
fn no_sign_change_is_rejected() {
    for res in [
        illinois(parabola, 3.0, 10.0, SolverCfg::new()),
        pegasus(parabola, 3.0, 10.0, SolverCfg::new()),
        anderson_bjorck(parabola, 3.0, 10.0, SolverCfg::new()),
    ] {
        assert!(matches!(res, Err(SolveError::NotBracketed { .. })));
    }
}

#[test]
fn iteration_cap_is_enforced() -> TestResult {
    let cfg = SolverCfg::new().set_max_iter(1)?;
    let res = illinois(parabola, 0.1, 15.0, cfg);

    assert!(matches!(
        res,
        Err(SolveError::MaxIterations { iterations: 1, .. })
    ));
    Ok(())
}
