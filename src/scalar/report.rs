//! Defines the [`SolveReport`] struct returned by all scalar solvers.

use super::algorithms::Algorithm;

/// Convergence test that accepted the root.
///
/// - [`Criterion::Residual`]     : |f(root)| within tolerance
/// - [`Criterion::StepSize`]     : last update step within tolerance
/// - [`Criterion::BracketWidth`] : enclosing interval within tolerance
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Criterion {
    Residual,
    StepSize,
    BracketWidth,
}

/// Successful solve, with enough bookkeeping to judge how hard the
/// function was worked.
///
/// [`SolveReport`]
/// - `root`           : converged root estimate
/// - `f_root`         : function value at `root`
/// - `iterations`     : iterations performed; `0` when an endpoint or
///                      the starting guess already satisfied `tol`
/// - `evaluations`    : total function evaluations, including the one
///                      made for `f_root` when the converging exit had
///                      not already evaluated it
/// - `criterion`      : which convergence test accepted `root`
/// - `algorithm_name` : name of the method that produced this report
#[derive(Debug, Copy, Clone)]
pub struct SolveReport {
    pub root           : f64,
    pub f_root         : f64,
    pub iterations     : usize,
    pub evaluations    : usize,
    pub criterion      : Criterion,
    pub algorithm_name : &'static str,
}

impl SolveReport {
    pub(crate) fn new(
        algorithm: Algorithm,
        root: f64,
        f_root: f64,
        iterations: usize,
        evaluations: usize,
        criterion: Criterion,
    ) -> Self {
        Self {
            root,
            f_root,
            iterations,
            evaluations,
            criterion,
            algorithm_name: algorithm.algorithm_name(),
        }
    }
}
