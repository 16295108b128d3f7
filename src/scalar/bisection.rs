//! Bisection root finding on a sign-change bracket.

use super::algorithms::{Algorithm, BracketFamily};
use super::bracket::{check_bracket, BracketEntry};
use super::config::SolverCfg;
use super::errors::SolveError;
use super::report::{Criterion, SolveReport};

/// Bisection on a bracket `[lo, hi]` whose endpoints straddle a sign
/// change. Either argument order is accepted.
///
/// The tracked endpoint sits on the negative side of the function, and
/// the signed half-width `dx` always points toward the positive side,
/// so each halving keeps the root enclosed without re-checking both
/// endpoints.
///
/// # Arguments
/// - `func`     : objective, `x -> f(x)`
/// - `lo`, `hi` : bracket endpoints with `f(lo) * f(hi) < 0`
/// - `cfg`      : shared solver configuration
///
/// # Returns
/// [`SolveReport`] with [`Criterion::BracketWidth`] once the half-width
/// drops below `cfg.tol()`, or [`Criterion::Residual`] when a midpoint
/// lands within machine epsilon of zero or an endpoint is already a
/// root.
///
/// # Errors
/// - [`SolveError::NotBracketed`]        : endpoint residuals share a
///   sign
/// - [`SolveError::MaxIterations`]       : no convergence within the cap
/// - [`SolveError::NonFiniteEvaluation`] : `func` produced NaN or an
///   infinity
///
/// # Behavior
/// Convergence is certain for any continuous function: the width
/// halves every iteration, so the default cap is hit only when `tol`
/// asks for more precision than `f64` can represent on the interval.
pub fn bisection<F>(mut func: F, lo: f64, hi: f64, cfg: SolverCfg) -> Result<SolveReport, SolveError>
where
    F: FnMut(f64) -> f64,
{
    let algorithm = Algorithm::Bracket(BracketFamily::Bisection);
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

    let (f_lo, f_hi) = match check_bracket(&mut eval, lo, hi, tol)? {
        BracketEntry::AtEndpoint { root, f_root } => {
            return Ok(SolveReport::new(
                algorithm,
                root,
                f_root,
                0,
                evals,
                Criterion::Residual,
            ));
        }
        BracketEntry::Valid { f_lo, f_hi } => (f_lo, f_hi),
    };

    // track the negative side; dx points toward the positive side
    let (mut x, mut dx, mut f_x) = if f_lo < 0.0 {
        (lo, hi - lo, f_lo)
    } else {
        (hi, lo - hi, f_hi)
    };

    // main loop
    for iter in 1..=num_iter {
        dx *= 0.5;
        if dx.abs() < tol {
            return Ok(SolveReport::new(
                algorithm,
                x,
                f_x,
                iter,
                evals,
                Criterion::BracketWidth,
            ));
        }

        let x2 = x + dx;
        let f2 = eval(x2)?;
        if f2.abs() <= f64::EPSILON {
            return Ok(SolveReport::new(
                algorithm,
                x2,
                f2,
                iter,
                evals,
                Criterion::Residual,
            ));
        }
        if f2 <= 0.0 {
            x = x2;
            f_x = f2;
        }
    }

    Err(SolveError::MaxIterations { last: x, iterations: num_iter })
}
