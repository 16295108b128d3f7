//! Planar Broyden iteration: one Jacobian estimate, then rank-one
//! corrections of its inverse.

use log::debug;

use super::algorithms::Algorithm;
use super::config::SolverCfg;
use super::errors::SolveError;
use super::jacobian::estimate_with;
use super::report::SolveReport;

/// Broyden's method for `f(x, y) = 0`, `g(x, y) = 0` from a starting
/// guess.
///
/// The Jacobian is estimated once at the guess and inverted in closed
/// form; afterwards each iteration corrects the inverse directly from
/// the step and residual change (Sherman-Morrison on the "good"
/// Broyden update), so the system is evaluated just once per
/// iteration.
///
/// # Arguments
/// - `func`  : system, `(x, y) -> (f(x, y), g(x, y))`
/// - `guess` : starting point
/// - `cfg`   : shared solver configuration
///
/// # Returns
/// [`SolveReport`] once both step components come inside `cfg.tol()`.
///
/// # Errors
/// - [`SolveError::DegenerateJacobian`]  : the initial estimate is
///   singular to machine epsilon
/// - [`SolveError::UpdateSingular`]      : the correction denominator
///   collapsed, the inverse can no longer track the system
/// - [`SolveError::MaxIterations`]       : no convergence within the
///   cap
/// - [`SolveError::NonFiniteEvaluation`] : the system produced NaN or
///   an infinity
///
/// # Notes
/// Cheaper than [`super::newton::newton`] per iteration but usually
/// needs a few more of them; it pays off when the system itself is
/// expensive.
pub fn broyden<F>(
    mut func: F,
    guess: (f64, f64),
    cfg: SolverCfg,
) -> Result<SolveReport, SolveError>
where
    F: FnMut(f64, f64) -> (f64, f64),
{
    let algorithm = Algorithm::Broyden;
    let tol = cfg.tol();
    let num_iter = cfg.max_iter();

    let mut evals: usize = 0;

    // wraps func, increments evals, enforces finiteness of both parts
    let mut eval = |x: f64, y: f64| -> Result<(f64, f64), SolveError> {
        evals += 1;
        let (f, g) = func(x, y);
        if !f.is_finite() || !g.is_finite() {
            return Err(SolveError::NonFiniteEvaluation { x, y, f, g });
        }
        Ok((f, g))
    };

    let (mut x, mut y) = guess;

    let jac = estimate_with(&mut eval, x, y)?;
    if jac.det.abs() < f64::EPSILON {
        return Err(SolveError::DegenerateJacobian {
            x,
            y,
            det        : jac.det,
            iterations : 0,
        });
    }

    // inverse jacobian, row major
    let mut b0 = jac.gy / jac.det;
    let mut b1 = -jac.fy / jac.det;
    let mut b2 = -jac.gx / jac.det;
    let mut b3 = jac.fx / jac.det;

    // first full step comes straight off the estimate
    let (mut f0, mut g0) = (jac.f, jac.g);
    let mut dx = -(b0 * f0 + b1 * g0);
    let mut dy = -(b2 * f0 + b3 * g0);
    x += dx;
    y += dy;

    let (mut f, mut g) = eval(x, y)?;
    let mut df = f - f0;
    let mut dg = g - g0;

    // main loop
    for iter in 1..=num_iter {
        let bdf0 = b0 * df + b1 * dg;
        let bdf1 = b2 * df + b3 * dg;

        let e = dx * bdf0 + dy * bdf1;
        if e.abs() < f64::EPSILON {
            return Err(SolveError::UpdateSingular { x, y, denom: e, iterations: iter });
        }

        // rank-one correction: B += (s - B df) (s^T B) / e
        let u0 = dx - bdf0;
        let u1 = dy - bdf1;
        let v0 = b0 * dx + b2 * dy;
        let v1 = b1 * dx + b3 * dy;
        b0 += u0 * v0 / e;
        b1 += u0 * v1 / e;
        b2 += u1 * v0 / e;
        b3 += u1 * v1 / e;

        dx = -(b0 * f + b1 * g);
        dy = -(b2 * f + b3 * g);
        x += dx;
        y += dy;
        debug!("broyden step at iter {}: dx = {:e}, dy = {:e}", iter, dx, dy);

        if dx.abs() <= tol && dy.abs() <= tol {
            let (fr, gr) = eval(x, y)?;
            return Ok(SolveReport::new(algorithm, x, y, fr, gr, iter, evals));
        }

        f0 = f;
        g0 = g;
        let (f_new, g_new) = eval(x, y)?;
        f = f_new;
        g = g_new;
        df = f - f0;
        dg = g - g0;
    }

    Err(SolveError::MaxIterations { x, y, iterations: num_iter })
}
