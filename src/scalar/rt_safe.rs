//! Bisection-safeguarded Newton iteration with a numeric slope.

use log::trace;

use super::algorithms::{Algorithm, BracketFamily};
use super::bracket::{check_bracket, BracketEntry};
use super::config::SolverCfg;
use super::derivative::value_and_slope;
use super::errors::SolveError;
use super::report::{Criterion, SolveReport};

/// Newton iteration kept inside a bracket `[lo, hi]`. Either argument
/// order is accepted.
///
/// The slope comes from a forward-difference probe, so the method is
/// derivative free. A Newton step is taken only while it lands inside
/// the current bracket and shrinks faster than the last two steps;
/// otherwise the iteration bisects. Either way the bracket is updated
/// from the sign of the new residual, so the root cannot escape.
///
/// # Arguments
/// - `func`     : objective, `x -> f(x)`
/// - `lo`, `hi` : bracket endpoints with `f(lo) * f(hi) < 0`
/// - `cfg`      : shared solver configuration
///
/// # Returns
/// [`SolveReport`] with [`Criterion::StepSize`] once the accepted step
/// drops inside `cfg.tol()`, or when a bisection step can no longer
/// move the estimate.
///
/// # Errors
/// - [`SolveError::NotBracketed`]        : endpoint residuals share a
///   sign
/// - [`SolveError::MaxIterations`]       : no convergence within the cap
/// - [`SolveError::NonFiniteEvaluation`] : `func` produced NaN or an
///   infinity
///
/// # Behavior
/// Two evaluations per iteration for the probe, plus one more to
/// report the residual at the accepted root. Rejected Newton steps are
/// logged at trace level.
pub fn rt_safe<F>(mut func: F, lo: f64, hi: f64, cfg: SolverCfg) -> Result<SolveReport, SolveError>
where
    F: FnMut(f64) -> f64,
{
    let algorithm = Algorithm::Bracket(BracketFamily::RtSafe);
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

    let f_lo = match check_bracket(&mut eval, lo, hi, tol)? {
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
        BracketEntry::Valid { f_lo, .. } => f_lo,
    };

    // orient so xl carries the negative side
    let (mut xl, mut xh) = if f_lo < 0.0 { (lo, hi) } else { (hi, lo) };

    let mut x = 0.5 * (lo + hi);
    let mut dx_old = (hi - lo).abs();
    let mut dx = dx_old;
    let (mut fx, mut df) = value_and_slope(&mut eval, x)?;

    // main loop
    for iter in 1..=num_iter {
        // reject the Newton step when it exits the bracket or shrinks
        // more slowly than the step before last
        let out_of_bounds = ((x - xh) * df - fx) * ((x - xl) * df - fx) > 0.0;
        let too_slow = (2.0 * fx).abs() > (dx_old * df).abs();

        let x_prev = x;
        if out_of_bounds || too_slow {
            trace!("newton step rejected at iter {}: bisecting [{}, {}]", iter, xl, xh);
            dx_old = dx;
            dx = 0.5 * (xh - xl);
            x = xl + dx;
            if xl == x {
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
        } else {
            dx_old = dx;
            dx = fx / df;
            x -= dx;
        }

        if (x - x_prev).abs() <= tol || dx.abs() < tol {
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

        let (fx_new, df_new) = value_and_slope(&mut eval, x)?;
        fx = fx_new;
        df = df_new;

        if fx < 0.0 {
            xl = x;
        } else {
            xh = x;
        }
    }

    Err(SolveError::MaxIterations { last: x, iterations: num_iter })
}
