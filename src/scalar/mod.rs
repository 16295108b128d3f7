//! One-dimensional root finding.
//!
//! Open methods iterate from a starting guess; bracketed methods narrow
//! an interval whose endpoints straddle a sign change. All solvers share
//! [`config::SolverCfg`] and report through [`report::SolveReport`].

// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub(crate) mod bracket;
pub(crate) mod derivative;
pub(crate) mod signs;

// open methods
pub mod broyden;
pub mod halley;
pub mod newton;
pub mod schroeder;
pub mod secant;

// bracketed methods
pub mod bisection;
pub mod brent;
pub mod inverse_quadratic;
pub mod modified_secant;
pub mod regula_falsi;
pub mod ridder;
pub mod rt_safe;
pub mod trisect;
