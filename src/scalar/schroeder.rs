//! Schroeder's method: a Newton step with a second-order correction.

use super::algorithms::{Algorithm, OpenFamily};
use super::config::SolverCfg;
use super::derivative::value_slope_curvature;
use super::errors::SolveError;
use super::report::{Criterion, SolveReport};

/// Schroeder's method from a single starting guess.
///
/// Takes the Newton step `f / f'` scaled by a curvature correction
/// `1 + (f f'') / (2 f'^2)`, using the same central-difference probe as
/// [`super::halley::halley`]. Where Halley folds the curvature into its
/// denominator, Schroeder multiplies the Newton step by it, so the only
/// division is by `f'`.
///
/// # Errors
/// - [`SolveError::DegenerateSlope`]     : |f'(x)| at or below machine
///   epsilon
/// - [`SolveError::MaxIterations`]       : no convergence within the cap
/// - [`SolveError::NonFiniteEvaluation`] : `func` produced NaN or an
///   infinity
pub fn schroeder<F>(mut func: F, x0: f64, cfg: SolverCfg) -> Result<SolveReport, SolveError>
where
    F: FnMut(f64) -> f64,
{
    let algorithm = Algorithm::Open(OpenFamily::Schroeder);
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

    let mut x = x0;

    for iter in 1..=num_iter {
        let (fx, f1, f2) = value_slope_curvature(&mut eval, x)?;

        if f1.abs() <= f64::EPSILON {
            return Err(SolveError::DegenerateSlope { x, slope: f1, iterations: iter });
        }

        let dxn = fx / f1;
        let dx = dxn * (1.0 + 0.5 * dxn * f2 / f1);
        x -= dx;

        if dx.abs() <= tol {
            let f_root = eval(x)?;
            return Ok(SolveReport::new(
                algorithm,
                x,
                f_root,
                iter,
                evals,
                Criterion::StepSize,
            ));
        }
    }

    Err(SolveError::MaxIterations { last: x, iterations: num_iter })
}
