//! Finite-difference probes for solvers that estimate their own
//! derivatives from function values.

use super::errors::SolveError;

/// Smallest step magnitude the probes will work with.
pub(crate) const TINY: f64 = 2.0 * f64::EPSILON;

/// Relative step for one-sided slope probes.
const SLOPE_STEP: f64 = 0.1;

/// Relative step for the central slope and curvature probe.
const CURVATURE_STEP: f64 = 0.01;

/// Forward probe at `x`: returns `(f(x), f(x + h) - f(x), h)` with `h`
/// the step as actually representable next to `x`.
///
/// The step is `0.1 * |x|`, floored to `0.1` near zero. Costs two
/// evaluations.
pub(crate) fn forward_probe<E>(eval: &mut E, x: f64) -> Result<(f64, f64, f64), SolveError>
where
    E: FnMut(f64) -> Result<f64, SolveError>,
{
    let mut h = SLOPE_STEP * x.abs();
    if h <= TINY {
        h = SLOPE_STEP;
    }
    let xh = x + h;
    let fo = eval(x)?;
    let fh = eval(xh)?;
    Ok((fo, fh - fo, xh - x))
}

/// Value and forward-difference slope at `x`.
pub(crate) fn value_and_slope<E>(eval: &mut E, x: f64) -> Result<(f64, f64), SolveError>
where
    E: FnMut(f64) -> Result<f64, SolveError>,
{
    let (fo, df, h) = forward_probe(eval, x)?;
    Ok((fo, df / h))
}

/// Value, slope, and curvature at `x` from central differences with a
/// relative step of `0.01 * |x|`, floored to `0.01` near zero. Costs
/// three evaluations.
pub(crate) fn value_slope_curvature<E>(eval: &mut E, x: f64) -> Result<(f64, f64, f64), SolveError>
where
    E: FnMut(f64) -> Result<f64, SolveError>,
{
    let mut h = CURVATURE_STEP * x.abs();
    if h <= TINY {
        h = CURVATURE_STEP;
    }
    let fo = eval(x)?;
    let fp = eval(x + h)?;
    let fm = eval(x - h)?;
    let df = (fp - fm) / (2.0 * h);
    let d2f = (fp - 2.0 * fo + fm) / (h * h);
    Ok((fo, df, d2f))
}
