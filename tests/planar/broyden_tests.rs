//! Integration tests for the planar Broyden solver.

use surd::planar::broyden::broyden;
use surd::planar::config::SolverCfg;
use surd::planar::errors::SolveError;

type TestResult = Result<(), SolveError>;

#[test]
fn converges_on_a_decoupled_linear_system() -> TestResult {
    // root at (2, 7); the estimated inverse is exact on this system,
    // so the opening step lands on the root
    let res = broyden(|x, y| (x - 2.0, y - 7.0), (1.0, 1.0), SolverCfg::new())?;

    assert_eq!(res.x, 2.0);
    assert_eq!(res.y, 7.0);
    assert_eq!(res.f, 0.0);
    assert_eq!(res.g, 0.0);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.evaluations, 5);
    assert_eq!(res.algorithm_name, "planar_broyden");
    Ok(())
}

#[test]
fn converges_on_a_nonlinear_system() -> TestResult {
    let res = broyden(|x, y| (x * x - 4.0, y - 7.0), (1.0, 1.0), SolverCfg::new())?;

    assert!((res.x - 2.0).abs() <= 1e-4);
    assert!((res.y - 7.0).abs() <= 1e-4);
    assert!(res.f.abs() <= 1e-3);
    assert!(res.g.abs() <= 1e-3);
    Ok(())
}

#[test]
fn singular_system_is_rejected_before_stepping() {
    // g = -f everywhere, so the estimated determinant is exactly zero
    let res = broyden(|x, y| (x - y, y - x), (1.0, 1.0), SolverCfg::new());

    assert!(matches!(
        res,
        Err(SolveError::DegenerateJacobian { iterations: 0, .. })
    ));
}

#[test]
fn stalled_residuals_break_the_update() {
    // both components go flat away from the guess; once two steps land
    // on the plateau the residual change is zero and the rank-one
    // correction has nothing to divide by
    let res = broyden(
        |x, y| (x.min(2.0) - 3.0, y.min(2.0) - 4.0),
        (1.0, 1.0),
        SolverCfg::new(),
    );

    assert!(matches!(
        res,
        Err(SolveError::UpdateSingular { iterations: 2, .. })
    ));
}

#[test]
fn iteration_cap_is_enforced() -> TestResult {
    let cfg = SolverCfg::new().set_max_iter(1)?;
    let res = broyden(|x, y| (x * x - 4.0, y - 7.0), (1.0, 1.0), cfg);

    assert!(matches!(
        res,
        Err(SolveError::MaxIterations { iterations: 1, .. })
    ));
    Ok(())
}

#[test]
fn non_finite_system_is_rejected() {
    let res = broyden(|_, _| (0.0, f64::INFINITY), (1.0, 1.0), SolverCfg::new());

    assert!(matches!(res, Err(SolveError::NonFiniteEvaluation { .. })));
}
