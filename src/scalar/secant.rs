//! Secant iteration on a free pair of estimates, no bracket required.

use super::algorithms::{Algorithm, OpenFamily};
use super::config::SolverCfg;
use super::errors::SolveError;
use super::report::{Criterion, SolveReport};

/// Secant method from two starting estimates.
///
/// The pair is ordered so the iterate with the smaller residual leads,
/// then each step replaces the trailing point with the secant-line
/// intercept. The estimates do not need to bracket the root and the
/// iterates may leave `[x0, x1]` entirely.
///
/// # Arguments
/// - `func`     : objective, `x -> f(x)`
/// - `x0`, `x1` : two distinct starting estimates
/// - `cfg`      : shared solver configuration
///
/// # Returns
/// [`SolveReport`] with [`Criterion::StepSize`] once the secant step
/// drops to `cfg.tol() * (1 + |x|)` or below, a relative test so large
/// roots do not demand absolute precision.
///
/// # Errors
/// - [`SolveError::DegenerateSlope`]     : the residuals at the working
///   pair agree to machine epsilon, the intercept is not defined
/// - [`SolveError::MaxIterations`]       : no convergence within the cap
/// - [`SolveError::NonFiniteEvaluation`] : `func` produced NaN or an
///   infinity
pub fn secant<F>(mut func: F, x0: f64, x1: f64, cfg: SolverCfg) -> Result<SolveReport, SolveError>
where
    F: FnMut(f64) -> f64,
{
    let algorithm = Algorithm::Open(OpenFamily::Secant);
    let tol = cfg.tol();
    let num_iter = cfg.resolve_max_iter(algorithm);

    let mut evals: usize = 0;

    // wraps func, increments evals, enforces finiteness
    let mut eval = |x: f64| -> Result<f64, SolveError> {
        evals += 1;
        let fx = func(x);
        if !fx.is_finite() {
            return Err(SolveError::NonFiniteEvaluation { x, fx });
        }
        Ok(fx)
    };

    let (mut a, mut b) = (x0, x1);
    let mut fa = eval(a)?;
    let mut fb = eval(b)?;

    // lead with the smaller residual
    if fa.abs() > fb.abs() {
        std::mem::swap(&mut a, &mut b);
        std::mem::swap(&mut fa, &mut fb);
    }

    // main loop
    for iter in 1..=num_iter {
        let dy = fa - fb;
        if dy.abs() <= f64::EPSILON {
            return Err(SolveError::DegenerateSlope { x: a, slope: dy, iterations: iter });
        }

        let dx = fa * (a - b) / dy;
        if dx.abs() <= tol * (1.0 + a.abs()) {
            let root = a - dx;
            let f_root = eval(root)?;
            return Ok(SolveReport::new(
                algorithm,
                root,
                f_root,
                iter,
                evals,
                Criterion::StepSize,
            ));
        }

        b = a;
        fb = fa;
        a -= dx;
        fa = eval(a)?;
    }

    Err(SolveError::MaxIterations { last: a, iterations: num_iter })
}
