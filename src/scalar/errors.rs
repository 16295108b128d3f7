//! Defines the [`SolveError`] type shared by all scalar solvers.

use thiserror::Error;

/// Errors for the one-dimensional solvers.
///
/// Every solver in [`crate::scalar`] fails through this enum, so callers
/// can match on one type regardless of which method they picked.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The supplied interval does not straddle a sign change.
    #[error("no sign change on [{lo}, {hi}]: f(lo) = {f_lo:e}, f(hi) = {f_hi:e}")]
    NotBracketed { lo: f64, hi: f64, f_lo: f64, f_hi: f64 },

    /// A slope (or slope-like difference) the update divides by has
    /// collapsed below machine epsilon.
    #[error("degenerate slope {slope:e} near x = {x} after {iterations} iteration(s)")]
    DegenerateSlope { x: f64, slope: f64, iterations: usize },

    /// A quasi-Newton update denominator has collapsed, so the local
    /// model can no longer be corrected.
    #[error("singular update denominator {denom:e} at x = {x} after {iterations} iteration(s)")]
    UpdateSingular { x: f64, denom: f64, iterations: usize },

    /// The iteration cap was reached without convergence.
    #[error("no convergence after {iterations} iterations. last estimate x = {last}")]
    MaxIterations { last: f64, iterations: usize },

    /// The function returned NaN or an infinity.
    #[error("function not finite at x = {x}: f(x) = {fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    /// Rejected tolerance passed to [`super::config::SolverCfg::set_tol`].
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    /// Rejected cap passed to [`super::config::SolverCfg::set_max_iter`].
    #[error("invalid max_iter: must be >= 1. got {got}")]
    InvalidMaxIter { got: usize },
}
