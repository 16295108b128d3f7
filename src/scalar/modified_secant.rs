//! Bracket-preserving secant variants: Illinois, Pegasus, and
//! Anderson-Bjorck.
//!
//! All three run the same loop. A secant step replaces one endpoint;
//! when the new point lands on the same side as the endpoint it
//! replaced, the residual at the retained endpoint is scaled down so
//! the next secant line tilts back across the root. The variants
//! differ only in that scale factor.

use super::algorithms::{Algorithm, BracketFamily};
use super::bracket::{check_bracket, BracketEntry};
use super::config::SolverCfg;
use super::errors::SolveError;
use super::report::{Criterion, SolveReport};

/// Scale applied to the retained endpoint after a same-side step.
#[derive(Debug, Copy, Clone)]
pub enum ModifiedSecantVariant {
    /// Fixed halving.
    Illinois,
    /// `f2 / (f2 + f3)`, adapting to the local residual ratio.
    Pegasus,
    /// `1 - f3 / f2`, falling back to halving when that is not a
    /// contraction.
    AndersonBjorck,
}

impl ModifiedSecantVariant {
    const fn algorithm(self) -> Algorithm {
        match self {
            ModifiedSecantVariant::Illinois => Algorithm::Bracket(BracketFamily::Illinois),
            ModifiedSecantVariant::Pegasus => Algorithm::Bracket(BracketFamily::Pegasus),
            ModifiedSecantVariant::AndersonBjorck => {
                Algorithm::Bracket(BracketFamily::AndersonBjorck)
            }
        }
    }

    /// Factor for the retained residual, from the replaced endpoint's
    /// residual `f2` and the incoming `f3`.
    fn shrink_factor(self, f2: f64, f3: f64) -> f64 {
        match self {
            ModifiedSecantVariant::Illinois => 0.5,
            ModifiedSecantVariant::Pegasus => f2 / (f2 + f3),
            ModifiedSecantVariant::AndersonBjorck => {
                let m = 1.0 - f3 / f2;
                if m <= 0.0 { 0.5 } else { m }
            }
        }
    }
}

/// Illinois variant: see [`modified_secant`].
pub fn illinois<F>(func: F, lo: f64, hi: f64, cfg: SolverCfg) -> Result<SolveReport, SolveError>
where
    F: FnMut(f64) -> f64,
{
    modified_secant(func, lo, hi, ModifiedSecantVariant::Illinois, cfg)
}

/// Pegasus variant: see [`modified_secant`].
pub fn pegasus<F>(func: F, lo: f64, hi: f64, cfg: SolverCfg) -> Result<SolveReport, SolveError>
where
    F: FnMut(f64) -> f64,
{
    modified_secant(func, lo, hi, ModifiedSecantVariant::Pegasus, cfg)
}

/// Anderson-Bjorck variant: see [`modified_secant`].
pub fn anderson_bjorck<F>(
    func: F,
    lo: f64,
    hi: f64,
    cfg: SolverCfg,
) -> Result<SolveReport, SolveError>
where
    F: FnMut(f64) -> f64,
{
    modified_secant(func, lo, hi, ModifiedSecantVariant::AndersonBjorck, cfg)
}

/// Damped secant iteration on a bracket `[lo, hi]`, parameterized by
/// the damping rule. Either argument order is accepted.
///
/// # Arguments
/// - `func`     : objective, `x -> f(x)`
/// - `lo`, `hi` : bracket endpoints with `f(lo) * f(hi) < 0`
/// - `variant`  : which damping rule tilts the secant after a
///   same-side step
/// - `cfg`      : shared solver configuration
///
/// # Returns
/// [`SolveReport`] with [`Criterion::Residual`] once a secant
/// intercept's residual drops to `cfg.tol()` or below.
///
/// # Errors
/// - [`SolveError::NotBracketed`]        : endpoint residuals share a
///   sign
/// - [`SolveError::DegenerateSlope`]     : the working residuals agree
///   to machine epsilon, the intercept is not defined
/// - [`SolveError::MaxIterations`]       : no convergence within the cap
/// - [`SolveError::NonFiniteEvaluation`] : `func` produced NaN or an
///   infinity
pub fn modified_secant<F>(
    mut func: F,
    lo: f64,
    hi: f64,
    variant: ModifiedSecantVariant,
    cfg: SolverCfg,
) -> Result<SolveReport, SolveError>
where
    F: FnMut(f64) -> f64,
{
    let algorithm = variant.algorithm();
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

    let (mut f1, mut f2) = match check_bracket(&mut eval, lo, hi, tol)? {
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

    let (mut x1, mut x2) = (lo, hi);
    let mut x = 0.5 * (x1 + x2);

    // main loop
    for iter in 1..=num_iter {
        let dx = x2 - x1;
        let dy = f2 - f1;
        if dy.abs() <= f64::EPSILON {
            return Err(SolveError::DegenerateSlope { x, slope: dy, iterations: iter });
        }

        let x3 = x1 - f1 * dx / dy;
        let f3 = eval(x3)?;
        x = x3;

        if f3.abs() <= tol {
            return Ok(SolveReport::new(
                algorithm,
                x3,
                f3,
                iter,
                evals,
                Criterion::Residual,
            ));
        }

        if f2 * f3 <= 0.0 {
            // x2 and x3 straddle the root: shift the bracket
            x1 = x2;
            f1 = f2;
        } else {
            // same side as the endpoint just replaced: damp the
            // retained residual
            f1 *= variant.shrink_factor(f2, f3);
        }
        x2 = x3;
        f2 = f3;
    }

    Err(SolveError::MaxIterations { last: x, iterations: num_iter })
}
