//! Defines the [`SolveReport`] struct returned by the planar solvers.

use super::algorithms::Algorithm;

/// Successful planar solve.
///
/// [`SolveReport`]
/// - `x`, `y`         : converged root estimate
/// - `f`, `g`         : residuals at the estimate
/// - `iterations`     : iterations performed
/// - `evaluations`    : total system evaluations, Jacobian probes
///                      included
/// - `algorithm_name` : name of the method that produced this report
#[derive(Debug, Copy, Clone)]
pub struct SolveReport {
    pub x              : f64,
    pub y              : f64,
    pub f              : f64,
    pub g              : f64,
    pub iterations     : usize,
    pub evaluations    : usize,
    pub algorithm_name : &'static str,
}

impl SolveReport {
    pub(crate) fn new(
        algorithm: Algorithm,
        x: f64,
        y: f64,
        f: f64,
        g: f64,
        iterations: usize,
        evaluations: usize,
    ) -> Self {
        Self {
            x,
            y,
            f,
            g,
            iterations,
            evaluations,
            algorithm_name: algorithm.algorithm_name(),
        }
    }
}
