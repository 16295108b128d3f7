//! Root finding for two simultaneous equations f(x, y) = 0,
//! g(x, y) = 0.
//!
//! Both solvers estimate derivatives numerically by forward differences
//! (see [`jacobian`]), so the objective only ever returns the residual
//! pair.

// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod jacobian;
pub mod report;

// solvers
pub mod broyden;
pub mod newton;
