//! Halley's method with finite-difference derivatives.

use super::algorithms::{Algorithm, OpenFamily};
use super::config::SolverCfg;
use super::derivative::value_slope_curvature;
use super::errors::SolveError;
use super::report::{Criterion, SolveReport};

/// Halley's method from a single starting guess.
///
/// Slope and curvature come from a central-difference probe, three
/// evaluations per iteration. The update is
/// `x -= 2 f f' / (2 f'^2 - f f'')`, cubically convergent near a
/// simple root.
///
/// # Errors
/// - [`SolveError::DegenerateSlope`]     : the update denominator
///   `2 f'^2 - f f''` collapsed to machine epsilon
/// - [`SolveError::MaxIterations`]       : no convergence within the cap
/// - [`SolveError::NonFiniteEvaluation`] : `func` produced NaN or an
///   infinity
pub fn halley<F>(mut func: F, x0: f64, cfg: SolverCfg) -> Result<SolveReport, SolveError>
where
    F: FnMut(f64) -> f64,
{
    let algorithm = Algorithm::Open(OpenFamily::Halley);
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

        let d = 2.0 * f1 * f1 - fx * f2;
        if d.abs() <= f64::EPSILON {
            return Err(SolveError::DegenerateSlope { x, slope: d, iterations: iter });
        }

        let dx = 2.0 * fx * f1 / d;
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
