//! Ridder's method: bisection refined by exponential rescaling.

use super::algorithms::{Algorithm, BracketFamily};
use super::bracket::{check_bracket, BracketEntry};
use super::config::SolverCfg;
use super::errors::SolveError;
use super::report::{Criterion, SolveReport};
use super::signs::sign_transfer;

/// Ridder's method on a bracket `[lo, hi]`. Either argument order is
/// accepted.
///
/// Each iteration evaluates the midpoint, then places a superlinear
/// estimate at `xm + (xm - xl) * fm / sqrt(fm^2 - f_lo * f_hi)` and
/// rebrackets around it, so the interval shrinks at least as fast as
/// bisection while the estimates converge roughly quadratically.
///
/// # Arguments
/// - `func`     : objective, `x -> f(x)`
/// - `lo`, `hi` : bracket endpoints with `f(lo) * f(hi) < 0`
/// - `cfg`      : shared solver configuration
///
/// # Returns
/// [`SolveReport`] with [`Criterion::StepSize`] when consecutive
/// estimates agree within `cfg.tol()`, [`Criterion::BracketWidth`] when
/// the interval itself shrinks below it, or [`Criterion::Residual`] on
/// an exact zero.
///
/// # Errors
/// - [`SolveError::NotBracketed`]        : endpoint residuals share a
///   sign
/// - [`SolveError::MaxIterations`]       : no convergence within the cap
/// - [`SolveError::NonFiniteEvaluation`] : `func` produced NaN or an
///   infinity
pub fn ridder<F>(mut func: F, lo: f64, hi: f64, cfg: SolverCfg) -> Result<SolveReport, SolveError>
where
    F: FnMut(f64) -> f64,
{
    let algorithm = Algorithm::Bracket(BracketFamily::Ridder);
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

    let (mut f_lo, mut f_hi) = match check_bracket(&mut eval, lo, hi, tol)? {
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

    let (mut xl, mut xh) = (lo, hi);

    // previous estimate, seeded with a value no real problem produces
    let mut x_prev = -1.11e30;

    // main loop
    for iter in 1..=num_iter {
        let xm = 0.5 * (xl + xh);
        let fm = eval(xm)?;

        // opposite endpoint signs keep the radicand positive
        let s = (fm * fm - f_lo * f_hi).sqrt();
        if s == 0.0 {
            return Ok(SolveReport::new(
                algorithm,
                xm,
                fm,
                iter,
                evals,
                Criterion::Residual,
            ));
        }

        let x_new = if f_lo >= f_hi {
            xm + (xm - xl) * fm / s
        } else {
            xm + (xl - xm) * fm / s
        };

        if (x_new - x_prev).abs() <= tol {
            let f_new = eval(x_new)?;
            return Ok(SolveReport::new(
                algorithm,
                x_new,
                f_new,
                iter,
                evals,
                Criterion::StepSize,
            ));
        }
        x_prev = x_new;

        let fx = eval(x_new)?;
        if fx == 0.0 {
            return Ok(SolveReport::new(
                algorithm,
                x_new,
                fx,
                iter,
                evals,
                Criterion::Residual,
            ));
        }

        // rebracket with whichever older point disagrees in sign
        if sign_transfer(fm, fx) != fm {
            xl = xm;
            f_lo = fm;
            xh = x_new;
            f_hi = fx;
        } else if sign_transfer(f_lo, fx) != f_lo {
            xh = x_new;
            f_hi = fx;
        } else {
            xl = x_new;
            f_lo = fx;
        }

        if (xh - xl).abs() <= tol {
            return Ok(SolveReport::new(
                algorithm,
                x_new,
                fx,
                iter,
                evals,
                Criterion::BracketWidth,
            ));
        }
    }

    Err(SolveError::MaxIterations { last: x_prev, iterations: num_iter })
}
