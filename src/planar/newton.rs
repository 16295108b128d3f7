//! Planar Newton iteration with a numeric Jacobian.

use log::debug;

use super::algorithms::Algorithm;
use super::config::SolverCfg;
use super::errors::SolveError;
use super::jacobian::estimate_with;
use super::report::SolveReport;

/// Newton's method for `f(x, y) = 0`, `g(x, y) = 0` from a starting
/// guess.
///
/// Each iteration re-estimates the Jacobian by forward differences and
/// solves the 2x2 linear system by Cramer's rule:
///
/// ```text
/// dx = (g fy - f gy) / det
/// dy = (f gx - g fx) / det
/// ```
///
/// # Arguments
/// - `func`  : system, `(x, y) -> (f(x, y), g(x, y))`
/// - `guess` : starting point
/// - `cfg`   : shared solver configuration
///
/// # Returns
/// [`SolveReport`] once both step components come inside `cfg.tol()`.
/// Four evaluations per iteration: three for the Jacobian probe and
/// one for the report residuals on the converging step.
///
/// # Errors
/// - [`SolveError::DegenerateJacobian`]   : |det| below machine
///   epsilon, no step direction is defined
/// - [`SolveError::MaxIterations`]        : no convergence within the
///   cap
/// - [`SolveError::NonFiniteEvaluation`]  : the system produced NaN or
///   an infinity
pub fn newton<F>(
    mut func: F,
    guess: (f64, f64),
    cfg: SolverCfg,
) -> Result<SolveReport, SolveError>
where
    F: FnMut(f64, f64) -> (f64, f64),
{
    let algorithm = Algorithm::Newton;
    let tol = cfg.tol();
    let num_iter = cfg.max_iter();

    let mut evals: usize = 0;

    // wraps func, increments evals, enforces finiteness of both parts
    let mut eval = |x: f64, y: f64| -> Result<(f64, f64), SolveError> {
        evals += 1;
        let (f, g) = func(x, y);
        if !f.is_finite() || !g.is_finite() {
            return Err(SolveError::NonFiniteEvaluation { x, y, f, g });
        }
        Ok((f, g))
    };

    let (mut x, mut y) = guess;

    // main loop
    for iter in 1..=num_iter {
        let jac = estimate_with(&mut eval, x, y)?;
        if jac.det.abs() < f64::EPSILON {
            return Err(SolveError::DegenerateJacobian {
                x,
                y,
                det        : jac.det,
                iterations : iter,
            });
        }

        let dx = (jac.g * jac.fy - jac.f * jac.gy) / jac.det;
        let dy = (jac.f * jac.gx - jac.g * jac.fx) / jac.det;
        x += dx;
        y += dy;
        debug!("newton step at iter {}: dx = {:e}, dy = {:e}", iter, dx, dy);

        if dx.abs() <= tol && dy.abs() <= tol {
            let (f, g) = eval(x, y)?;
            return Ok(SolveReport::new(algorithm, x, y, f, g, iter, evals));
        }
    }

    Err(SolveError::MaxIterations { x, y, iterations: num_iter })
}
