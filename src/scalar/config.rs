//! Defines the [`SolverCfg`] struct shared by all scalar solvers.

use super::algorithms::Algorithm;
use super::errors::SolveError;

/// Convergence tolerance used when none is set.
pub const DEFAULT_TOL: f64 = 1e-6;

/// Shared solver configuration.
///
/// [`SolverCfg`]
/// - `tol`      : convergence tolerance, interpreted per method
///                (residual, step size, or bracket width)
/// - `max_iter` : iteration cap; `None` defers to the algorithm
///                family default
///
/// Setters validate their input and return `Err` instead of storing a
/// value the solvers cannot work with.
#[derive(Debug, Copy, Clone)]
pub struct SolverCfg {
    tol      : f64,
    max_iter : Option<usize>,
}

impl SolverCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { tol: DEFAULT_TOL, max_iter: None }
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
        self.max_iter = Some(max_iter);
        Ok(self)
    }

    pub fn tol(&self) -> f64 {
        self.tol
    }

    pub fn max_iter(&self) -> Option<usize> {
        self.max_iter
    }

    /// Cap actually used by a solver: the configured value, or the
    /// family default for `algorithm`.
    pub(crate) fn resolve_max_iter(&self, algorithm: Algorithm) -> usize {
        match self.max_iter {
            Some(n) => n,
            None => algorithm.default_max_iter(),
        }
    }
}

impl Default for SolverCfg {
    fn default() -> Self {
        Self::new()
    }
}
