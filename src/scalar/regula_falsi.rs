//! False position: the classic damped form and the Conte-de Boor
//! modified form.

use super::algorithms::{Algorithm, BracketFamily};
use super::bracket::{check_bracket, BracketEntry};
use super::config::SolverCfg;
use super::errors::SolveError;
use super::report::{Criterion, SolveReport};

/// Endpoint replaced by the previous interpolant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Side {
    Lo,
    Hi,
}

/// Classic regula falsi on a bracket `[lo, hi]`, damped against
/// endpoint stagnation. Either argument order is accepted.
///
/// Each iteration places the secant intercept
/// `c = (fa * b - fb * a) / (fa - fb)` and replaces the endpoint that
/// shares its sign. When the same endpoint moves twice running, the
/// residual at the stagnant endpoint is halved, which tilts later
/// intercepts toward it. Without that damping one endpoint can stick
/// forever on convex functions.
///
/// # Arguments
/// - `func`     : objective, `x -> f(x)`
/// - `lo`, `hi` : bracket endpoints with `f(lo) * f(hi) < 0`
/// - `cfg`      : shared solver configuration
///
/// # Returns
/// [`SolveReport`] with [`Criterion::BracketWidth`] once
/// `|b - a| < tol * |b + a|`, or [`Criterion::Residual`] when an
/// intercept residual is exactly zero.
///
/// # Errors
/// - [`SolveError::NotBracketed`]        : endpoint residuals share a
///   sign
/// - [`SolveError::DegenerateSlope`]     : endpoint residuals agree to
///   machine epsilon, the intercept is not defined
/// - [`SolveError::MaxIterations`]       : no convergence within the cap
/// - [`SolveError::NonFiniteEvaluation`] : `func` produced NaN or an
///   infinity
///
/// # Notes
/// The width test is relative to `|b + a|`, so brackets centered near
/// zero converge on the residual exit instead.
pub fn regula_falsi<F>(
    mut func: F,
    lo: f64,
    hi: f64,
    cfg: SolverCfg,
) -> Result<SolveReport, SolveError>
where
    F: FnMut(f64) -> f64,
{
    let algorithm = Algorithm::Bracket(BracketFamily::RegulaFalsi);
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

    let (mut fa, mut fb) = match check_bracket(&mut eval, lo, hi, tol)? {
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

    let (mut a, mut b) = (lo, hi);
    let mut last_side: Option<Side> = None;
    let mut last_estimate = 0.5 * (a + b);

    // main loop
    for iter in 1..=num_iter {
        let df = fa - fb;
        if df.abs() <= f64::EPSILON {
            return Err(SolveError::DegenerateSlope {
                x          : last_estimate,
                slope      : df,
                iterations : iter,
            });
        }

        let c = (fa * b - fb * a) / df;
        last_estimate = c;

        if (b - a).abs() < tol * (b + a).abs() {
            let f_c = eval(c)?;
            return Ok(SolveReport::new(
                algorithm,
                c,
                f_c,
                iter,
                evals,
                Criterion::BracketWidth,
            ));
        }

        let fc = eval(c)?;
        if fc * fb > 0.0 {
            b = c;
            fb = fc;
            if last_side == Some(Side::Hi) {
                fa *= 0.5;
            }
            last_side = Some(Side::Hi);
        } else if fa * fc > 0.0 {
            a = c;
            fa = fc;
            if last_side == Some(Side::Lo) {
                fb *= 0.5;
            }
            last_side = Some(Side::Lo);
        } else {
            // fc is exactly zero
            return Ok(SolveReport::new(
                algorithm,
                c,
                fc,
                iter,
                evals,
                Criterion::Residual,
            ));
        }
    }

    Err(SolveError::MaxIterations { last: last_estimate, iterations: num_iter })
}

/// Modified regula falsi on a bracket `[lo, hi]`, after Conte and
/// de Boor. Either argument order is accepted.
///
/// The bracket is oriented so `f(a) <= 0 <= f(b)`, then each secant
/// intercept replaces its own side. When two consecutive intercepts
/// land on the same side, the opposite endpoint's residual is halved,
/// forcing the secant line back across the root.
///
/// # Returns
/// [`SolveReport`] with [`Criterion::Residual`] once an intercept
/// residual drops to `cfg.tol()` or below.
///
/// # Errors
/// Same as [`regula_falsi`].
pub fn modified_regula_falsi<F>(
    mut func: F,
    lo: f64,
    hi: f64,
    cfg: SolverCfg,
) -> Result<SolveReport, SolveError>
where
    F: FnMut(f64) -> f64,
{
    let algorithm = Algorithm::Bracket(BracketFamily::ModifiedRegulaFalsi);
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

    let (mut fa, mut fb) = match check_bracket(&mut eval, lo, hi, tol)? {
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

    let (mut a, mut b) = (lo, hi);

    // orient so fa <= 0 <= fb
    if fb < 0.0 {
        std::mem::swap(&mut a, &mut b);
        std::mem::swap(&mut fa, &mut fb);
    }

    let mut c = a;
    let mut fc = fa;

    // main loop
    for iter in 1..=num_iter {
        let df = fa - fb;
        if df.abs() <= f64::EPSILON {
            return Err(SolveError::DegenerateSlope { x: c, slope: df, iterations: iter });
        }

        c = (b * fa - a * fb) / df;
        let fco = fc;
        fc = eval(c)?;

        if fc > 0.0 {
            b = c;
            fb = fc;
            // second high-side intercept in a row: damp the low end
            if fc * fco > 0.0 {
                fa *= 0.5;
            }
        } else {
            a = c;
            fa = fc;
            if fc * fco > 0.0 {
                fb *= 0.5;
            }
        }

        if fc.abs() <= tol {
            return Ok(SolveReport::new(
                algorithm,
                c,
                fc,
                iter,
                evals,
                Criterion::Residual,
            ));
        }
    }

    Err(SolveError::MaxIterations { last: c, iterations: num_iter })
}
