//! Newton-Raphson iteration with a caller-supplied derivative.

use super::algorithms::{Algorithm, OpenFamily};
use super::config::SolverCfg;
use super::errors::SolveError;
use super::report::{Criterion, SolveReport};

/// Newton-Raphson root finding from a single starting guess.
///
/// `func` returns the pair `(f(x), f'(x))` so one call covers both the
/// residual and the slope. Each iteration steps `x -= f(x) / f'(x)`.
///
/// # Arguments
/// - `func` : objective, `x -> (f(x), f'(x))`
/// - `x0`   : starting guess
/// - `cfg`  : shared solver configuration
///
/// # Returns
/// [`SolveReport`] with [`Criterion::StepSize`] once the Newton step
/// (or the change in `x`) drops to `cfg.tol()` or below.
///
/// # Errors
/// - [`SolveError::DegenerateSlope`]      : |f'(x)| at or below machine
///   epsilon, the step is not defined
/// - [`SolveError::MaxIterations`]        : no convergence within the cap
/// - [`SolveError::NonFiniteEvaluation`]  : `func` produced NaN or an
///   infinity in either component
///
/// # Behavior
/// Convergence is judged on the step alone. The report still carries
/// the residual at the accepted root, at the cost of one extra
/// evaluation.
pub fn newton<F>(mut func: F, x0: f64, cfg: SolverCfg) -> Result<SolveReport, SolveError>
where
    F: FnMut(f64) -> (f64, f64),
{
    let algorithm = Algorithm::Open(OpenFamily::Newton);
    let tol = cfg.tol();
    let num_iter = cfg.resolve_max_iter(algorithm);

    let mut evals: usize = 0;

    // wraps func, increments evals, enforces finiteness of both parts
    let mut eval = |x: f64| -> Result<(f64, f64), SolveError> {
        evals += 1;
        let (fx, dfx) = func(x);
        if !fx.is_finite() {
            return Err(SolveError::NonFiniteEvaluation { x, fx });
        }
        if !dfx.is_finite() {
            return Err(SolveError::NonFiniteEvaluation { x, fx: dfx });
        }
        Ok((fx, dfx))
    };

    let mut x = x0;

    // main loop
    for iter in 1..=num_iter {
        let (y, dydx) = eval(x)?;
        if dydx.abs() <= f64::EPSILON {
            return Err(SolveError::DegenerateSlope { x, slope: dydx, iterations: iter });
        }

        let dx = y / dydx;
        let x_prev = x;
        x -= dx;

        if dx.abs() <= tol || (x - x_prev).abs() <= tol {
            let (f_root, _) = eval(x)?;
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
