//! Forward-difference Jacobian estimation for a planar system.

use super::errors::SolveError;

/// Relative probe step. Roughly the cube root of machine epsilon
/// scaled for forward differences, trading truncation against
/// cancellation.
pub const DEFAULT_STEP: f64 = 3.44e-4;

/// Finite-difference Jacobian of `(f, g)` at a base point, together
/// with the residuals there.
///
/// [`Jacobian`]
/// - `f`, `g`   : residuals at the base point
/// - `fx`, `fy` : partials of f with respect to x and y
/// - `gx`, `gy` : partials of g
/// - `det`      : `fx * gy - gx * fy`
#[derive(Debug, Copy, Clone)]
pub struct Jacobian {
    pub f   : f64,
    pub g   : f64,
    pub fx  : f64,
    pub fy  : f64,
    pub gx  : f64,
    pub gy  : f64,
    pub det : f64,
}

/// Estimates the Jacobian of `func` at `(x, y)`.
///
/// Probes one step along each axis with a relative step of
/// [`DEFAULT_STEP`], floored to the absolute step at a zero
/// coordinate. Three evaluations.
///
/// # Errors
/// [`SolveError::NonFiniteEvaluation`] when any probe returns NaN or
/// an infinity.
pub fn estimate<F>(mut func: F, x: f64, y: f64) -> Result<Jacobian, SolveError>
where
    F: FnMut(f64, f64) -> (f64, f64),
{
    let mut eval = |x: f64, y: f64| -> Result<(f64, f64), SolveError> {
        let (f, g) = func(x, y);
        if !f.is_finite() || !g.is_finite() {
            return Err(SolveError::NonFiniteEvaluation { x, y, f, g });
        }
        Ok((f, g))
    };
    estimate_with(&mut eval, x, y)
}

/// [`estimate`] against a solver's own checked evaluation closure, so
/// probe evaluations land in the solver's count.
pub(crate) fn estimate_with<E>(eval: &mut E, x: f64, y: f64) -> Result<Jacobian, SolveError>
where
    E: FnMut(f64, f64) -> Result<(f64, f64), SolveError>,
{
    let mut dx = DEFAULT_STEP * x.abs();
    if dx == 0.0 {
        dx = DEFAULT_STEP;
    }
    let mut dy = DEFAULT_STEP * y.abs();
    if dy == 0.0 {
        dy = DEFAULT_STEP;
    }

    let xp = x + dx;
    let yp = y + dy;
    // steps as actually representable next to the base point
    let dx = xp - x;
    let dy = yp - y;

    let (f0, g0) = eval(x, y)?;
    let (f_xp, g_xp) = eval(xp, y)?;
    let (f_yp, g_yp) = eval(x, yp)?;

    let fx = (f_xp - f0) / dx;
    let fy = (f_yp - f0) / dy;
    let gx = (g_xp - g0) / dx;
    let gy = (g_yp - g0) / dy;

    Ok(Jacobian { f: f0, g: g0, fx, fy, gx, gy, det: fx * gy - gx * fy })
}
