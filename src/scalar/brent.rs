//! Brent's method: bisection, secant, and inverse quadratic
//! interpolation under one acceptance test.

use super::algorithms::{Algorithm, BracketFamily};
use super::bracket::{check_bracket, BracketEntry};
use super::config::SolverCfg;
use super::errors::SolveError;
use super::report::{Criterion, SolveReport};
use super::signs::sign_transfer;

/// Brent's method on a bracket `[lo, hi]`. Either argument order is
/// accepted.
///
/// Tracks three points: `b` the best estimate, `a` its predecessor,
/// and `c` an older point keeping `b` bracketed. Inverse quadratic
/// interpolation (or secant when only two points are distinct)
/// proposes a step, which is taken only when it stays well inside the
/// bracket and shrinks faster than the previous two steps; otherwise
/// the iteration falls back to bisection.
///
/// # Arguments
/// - `func`     : objective, `x -> f(x)`
/// - `lo`, `hi` : bracket endpoints with `f(lo) * f(hi) < 0`
/// - `cfg`      : shared solver configuration
///
/// # Returns
/// [`SolveReport`] with [`Criterion::BracketWidth`] once the distance
/// from `b` to the bracket midpoint drops inside
/// `2 eps |b| + tol / 2`, or [`Criterion::Residual`] on an exact zero.
///
/// # Errors
/// - [`SolveError::NotBracketed`]        : endpoint residuals share a
///   sign
/// - [`SolveError::MaxIterations`]       : no convergence within the cap
/// - [`SolveError::NonFiniteEvaluation`] : `func` produced NaN or an
///   infinity
///
/// # Notes
/// The effective tolerance floors at `2 eps |b|`, so a `tol` far below
/// the representable spacing near the root converges instead of
/// spinning until the cap.
pub fn brent<F>(mut func: F, lo: f64, hi: f64, cfg: SolverCfg) -> Result<SolveReport, SolveError>
where
    F: FnMut(f64) -> f64,
{
    let algorithm = Algorithm::Bracket(BracketFamily::Brent);
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

    let (mut a, mut b, mut c) = (lo, hi, hi);
    let (mut fa, mut fb, mut fc) = (f_lo, f_hi, f_hi);

    // step memory: d is the pending step, e the one before it
    let mut d = b - a;
    let mut e = d;

    // main loop
    for iter in 1..=num_iter {
        // c no longer brackets b: rewind it to a and restart the memory
        if fb * fc > 0.0 {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }

        // keep b the best of the three
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol1 = 2.0 * f64::EPSILON * b.abs() + 0.5 * tol;
        let xm = 0.5 * (c - b);

        if xm.abs() <= tol1 || fb == 0.0 {
            let criterion = if fb == 0.0 {
                Criterion::Residual
            } else {
                Criterion::BracketWidth
            };
            return Ok(SolveReport::new(algorithm, b, fb, iter, evals, criterion));
        }

        if e.abs() >= tol1 && fa.abs() > fb.abs() {
            // interpolate: secant for two points, inverse quadratic
            // for three
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                (2.0 * xm * s, 1.0 - s)
            } else {
                let q = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * xm * q * (q - r) - (b - a) * (r - 1.0)),
                    (q - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };
            if p > 0.0 {
                q = -q;
            }
            p = p.abs();

            // accept only a step well inside the bracket that beats
            // the previous shrink rate
            if 2.0 * p < (3.0 * xm * q - (tol1 * q).abs()).min((e * q).abs()) {
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }

        a = b;
        fa = fb;
        if d.abs() > tol1 {
            b += d;
        } else {
            b += sign_transfer(tol1, xm);
        }
        fb = eval(b)?;
    }

    Err(SolveError::MaxIterations { last: b, iterations: num_iter })
}
