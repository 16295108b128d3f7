//! Entry validation shared by the bracketed solvers.

use super::errors::SolveError;
use super::signs::same_sign;

/// Outcome of validating a candidate bracket.
pub(crate) enum BracketEntry {
    /// An endpoint already satisfies the residual tolerance.
    AtEndpoint { root: f64, f_root: f64 },
    /// The endpoints straddle a sign change.
    Valid { f_lo: f64, f_hi: f64 },
}

/// Evaluates both endpoints of `[lo, hi]` and classifies the pair.
///
/// Checked in order: `lo` as a root, `hi` as a root, then the sign
/// change. Either argument order is accepted; callers that need an
/// ordered interval sort afterwards.
///
/// # Errors
/// [`SolveError::NotBracketed`] when the endpoint residuals share a
/// sign, [`SolveError::NonFiniteEvaluation`] propagated from `eval`.
pub(crate) fn check_bracket<E>(
    eval: &mut E,
    lo: f64,
    hi: f64,
    tol: f64,
) -> Result<BracketEntry, SolveError>
where
    E: FnMut(f64) -> Result<f64, SolveError>,
{
    let f_lo = eval(lo)?;
    if f_lo.abs() <= tol {
        return Ok(BracketEntry::AtEndpoint { root: lo, f_root: f_lo });
    }

    let f_hi = eval(hi)?;
    if f_hi.abs() <= tol {
        return Ok(BracketEntry::AtEndpoint { root: hi, f_root: f_hi });
    }

    if same_sign(f_lo, f_hi) {
        return Err(SolveError::NotBracketed { lo, hi, f_lo, f_hi });
    }

    Ok(BracketEntry::Valid { f_lo, f_hi })
}
