//! One-dimensional Broyden iteration: secant steps through a rank-one
//! update of the inverse slope.

use super::algorithms::{Algorithm, OpenFamily};
use super::config::SolverCfg;
use super::derivative::{forward_probe, TINY};
use super::errors::SolveError;
use super::report::{Criterion, SolveReport};

/// Broyden's method from a single starting guess.
///
/// A forward-difference probe seeds the inverse slope `k`; afterwards
/// each iteration steps `x += -k * f(x)` and corrects `k` from the
/// observed secant, so the function itself is never differentiated.
///
/// # Arguments
/// - `func` : objective, `x -> f(x)`
/// - `x0`   : starting guess
/// - `cfg`  : shared solver configuration
///
/// # Returns
/// [`SolveReport`] with [`Criterion::Residual`] once |f(x)| drops to
/// `cfg.tol()` or below. A guess already inside tolerance returns with
/// zero iterations.
///
/// # Errors
/// - [`SolveError::DegenerateSlope`]     : the seeding probe saw a flat
///   function
/// - [`SolveError::UpdateSingular`]      : consecutive residuals agree
///   to machine precision away from a root, the rank-one correction
///   divides by (near) zero
/// - [`SolveError::MaxIterations`]       : no convergence within the cap
/// - [`SolveError::NonFiniteEvaluation`] : `func` produced NaN or an
///   infinity
pub fn broyden<F>(mut func: F, x0: f64, cfg: SolverCfg) -> Result<SolveReport, SolveError>
where
    F: FnMut(f64) -> f64,
{
    let algorithm = Algorithm::Open(OpenFamily::Broyden);
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
    let (mut fo, df, h) = forward_probe(&mut eval, x)?;

    // early exit: the guess is already a root
    if fo.abs() <= tol {
        return Ok(SolveReport::new(
            algorithm,
            x,
            fo,
            0,
            evals,
            Criterion::Residual,
        ));
    }
    if df.abs() <= f64::EPSILON * h {
        return Err(SolveError::DegenerateSlope { x, slope: df / h, iterations: 0 });
    }

    // inverse slope seeded from the probe
    let mut k = h / df;

    // main loop
    for iter in 1..=num_iter {
        let dx = -k * fo;
        x += dx;

        let fx = eval(x)?;
        if fx.abs() <= tol {
            return Ok(SolveReport::new(
                algorithm,
                x,
                fx,
                iter,
                evals,
                Criterion::Residual,
            ));
        }

        let dfx = fx - fo;
        if dfx.abs() <= TINY {
            return Err(SolveError::UpdateSingular { x, denom: dfx, iterations: iter });
        }

        // rank-one correction of the inverse slope
        let a = dx * k * dfx;
        let dk = -k * (a - dx * dx) / a;
        k += dk;
        fo = fx;
    }

    Err(SolveError::MaxIterations { last: x, iterations: num_iter })
}
