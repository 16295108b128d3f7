//! Iterative root finding for nonlinear equations.
//!
//! Two independent solver families:
//! - [`scalar`] : sixteen interchangeable one-dimensional methods, open
//!   (single starting guess) and bracketed (sign-change interval)
//! - [`planar`] : Newton and Broyden for two simultaneous equations
//!   f(x, y) = 0, g(x, y) = 0, with a shared finite-difference
//!   Jacobian estimator

pub mod planar;
pub mod scalar;
