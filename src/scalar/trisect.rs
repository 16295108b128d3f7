//! Trisection: each level keeps whichever third of the bracket still
//! straddles the sign change.

use super::algorithms::{Algorithm, BracketFamily};
use super::bracket::{check_bracket, BracketEntry};
use super::config::SolverCfg;
use super::errors::SolveError;
use super::report::{Criterion, SolveReport};
use super::signs::opposite_sign;

/// Trisection on a bracket `[lo, hi]`. Either argument order is
/// accepted; the pair is sorted internally.
///
/// The interval splits at the one-third and two-thirds points; the
/// sub-interval whose ends disagree in sign survives. Every pass cuts
/// the width to a third, and the second probe is skipped when the
/// first third already brackets, so an iteration costs one or two
/// evaluations.
///
/// # Returns
/// [`SolveReport`] with [`Criterion::BracketWidth`] once a third of
/// the width drops to `cfg.tol()` or below (returning the one-third
/// point), or [`Criterion::Residual`] when an endpoint or probe
/// residual is already inside tolerance.
///
/// # Errors
/// - [`SolveError::NotBracketed`]        : endpoint residuals share a
///   sign
/// - [`SolveError::MaxIterations`]       : no convergence within the cap
/// - [`SolveError::NonFiniteEvaluation`] : `func` produced NaN or an
///   infinity
pub fn trisect<F>(mut func: F, lo: f64, hi: f64, cfg: SolverCfg) -> Result<SolveReport, SolveError>
where
    F: FnMut(f64) -> f64,
{
    let algorithm = Algorithm::Bracket(BracketFamily::Trisect);
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

    let (mut a, mut b, mut fa, mut fb) = if lo > hi {
        (hi, lo, f_hi, f_lo)
    } else {
        (lo, hi, f_lo, f_hi)
    };

    // main loop
    for iter in 1..=num_iter {
        let d = (b - a) / 3.0;
        if d <= tol {
            let root = a + d;
            let f_root = eval(root)?;
            return Ok(SolveReport::new(
                algorithm,
                root,
                f_root,
                iter,
                evals,
                Criterion::BracketWidth,
            ));
        }

        // narrowed endpoints may have landed on the root
        if fa.abs() <= tol {
            return Ok(SolveReport::new(
                algorithm,
                a,
                fa,
                iter,
                evals,
                Criterion::Residual,
            ));
        }
        if fb.abs() <= tol {
            return Ok(SolveReport::new(
                algorithm,
                b,
                fb,
                iter,
                evals,
                Criterion::Residual,
            ));
        }

        let c1 = a + d;
        let f1 = eval(c1)?;
        if opposite_sign(fa, f1) {
            // sign change in the first third
            b = c1;
            fb = f1;
            continue;
        }

        let c2 = b - d;
        let f2 = eval(c2)?;
        if opposite_sign(f1, f2) {
            // middle third
            a = c1;
            fa = f1;
            b = c2;
            fb = f2;
        } else {
            // last third
            a = c2;
            fa = f2;
        }
    }

    Err(SolveError::MaxIterations { last: 0.5 * (a + b), iterations: num_iter })
}
