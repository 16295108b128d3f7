//! Defines the [`SolveError`] type shared by the planar solvers.

use thiserror::Error;

/// Errors for the planar solvers.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The estimated Jacobian determinant collapsed below machine
    /// epsilon, so no step direction is defined.
    #[error("degenerate jacobian at ({x}, {y}): det = {det:e} after {iterations} iteration(s)")]
    DegenerateJacobian { x: f64, y: f64, det: f64, iterations: usize },

    /// The Broyden rank-one correction denominator collapsed, so the
    /// inverse Jacobian can no longer be updated.
    #[error("singular update denominator {denom:e} at ({x}, {y}) after {iterations} iteration(s)")]
    UpdateSingular { x: f64, y: f64, denom: f64, iterations: usize },

    /// The iteration cap was reached without convergence.
    #[error("no convergence after {iterations} iterations. last estimate ({x}, {y})")]
    MaxIterations { x: f64, y: f64, iterations: usize },

    /// Either residual came back NaN or infinite.
    #[error("system not finite at ({x}, {y}): f = {f}, g = {g}")]
    NonFiniteEvaluation { x: f64, y: f64, f: f64, g: f64 },

    /// Rejected tolerance passed to [`super::config::SolverCfg::set_tol`].
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    /// Rejected cap passed to [`super::config::SolverCfg::set_max_iter`].
    #[error("invalid max_iter: must be >= 1. got {got}")]
    InvalidMaxIter { got: usize },
}
