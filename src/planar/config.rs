//! Defines the [`SolverCfg`] struct shared by the planar solvers.

use super::errors::SolveError;

/// Convergence tolerance used when none is set.
pub const DEFAULT_TOL: f64 = 1e-6;

/// Iteration cap used when none is set.
pub const DEFAULT_MAX_ITER: usize = 96;

/// Shared solver configuration.
///
/// [`SolverCfg`]
/// - `tol`      : step-size tolerance; both components of the update
///                must come inside it
/// - `max_iter` : iteration cap
#[derive(Debug, Copy, Clone)]
pub struct SolverCfg {
    tol      : f64,
    max_iter : usize,
}

impl SolverCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { tol: DEFAULT_TOL, max_iter: DEFAULT_MAX_ITER }
    }

    /// Sets the convergence tolerance.
    ///
    /// # Errors
    /// [`SolveError::InvalidTolerance`] unless `tol` is finite and > 0.
    pub fn set_tol(mut self, tol: f64) -> Result<Self, SolveError> {
        if !tol.is_finite() || tol <= 0.0 {
            return Err(SolveError::InvalidTolerance { got: tol });
        }
        self.tol = tol;
        Ok(self)
    }

    /// Sets the iteration cap.
    ///
    /// # Errors
    /// [`SolveError::InvalidMaxIter`] if `max_iter` is zero.
    pub fn set_max_iter(mut self, max_iter: usize) -> Result<Self, SolveError> {
        if max_iter == 0 {
            return Err(SolveError::InvalidMaxIter { got: max_iter });
        }
        self.max_iter = max_iter;
        Ok(self)
    }

    pub fn tol(&self) -> f64 {
        self.tol
    }

    pub fn max_iter(&self) -> usize {
        self.max_iter
    }
}

impl Default for SolverCfg {
    fn default() -> Self {
        Self::new()
    }
}
