//! Sign utilities for the scalar solvers.

/// Returns `true` if `a` and `b` have opposite signs.
///
/// Zero is classified by its IEEE sign bit: `+0.0` counts as positive
/// and `-0.0` as negative, so an exact zero endpoint still pairs with
/// one side of the bracket.
#[inline]
pub(crate) fn opposite_sign(a: f64, b: f64) -> bool {
    a.is_sign_positive() != b.is_sign_positive()
}

/// Returns `true` if `a` and `b` have the same sign.
#[inline]
pub(crate) fn same_sign(a: f64, b: f64) -> bool {
    a.is_sign_positive() == b.is_sign_positive()
}

/// Magnitude of `a` carrying the sign of `b`, with `b >= 0.0` treated
/// as positive.
#[inline]
pub(crate) fn sign_transfer(a: f64, b: f64) -> f64 {
    if b >= 0.0 { a.abs() } else { -a.abs() }
}
