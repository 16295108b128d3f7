//! Defines the [`Algorithm`] enum naming every scalar solver, grouped by
//! how each method approaches the root.

/// Iteration cap for open methods when [`super::config::SolverCfg`]
/// does not set one.
pub const DEFAULT_OPEN_MAX_ITER: usize = 128;

/// Iteration cap for bracketed methods when
/// [`super::config::SolverCfg`] does not set one.
pub const DEFAULT_BRACKET_MAX_ITER: usize = 96;

/// Open methods: iterate from a starting guess, no bracket required.
#[derive(Debug, Copy, Clone)]
pub enum OpenFamily {
    Newton,
    Broyden,
    Halley,
    Schroeder,
    Secant,
}

/// Bracketed methods: narrow an interval whose endpoints straddle a
/// sign change. The root never escapes the interval.
#[derive(Debug, Copy, Clone)]
pub enum BracketFamily {
    Bisection,
    Ridder,
    Brent,
    InverseQuadratic,
    Illinois,
    Pegasus,
    AndersonBjorck,
    RegulaFalsi,
    ModifiedRegulaFalsi,
    RtSafe,
    Trisect,
}

/// Every scalar algorithm in this crate, grouped by family.
#[derive(Debug, Copy, Clone)]
pub enum Algorithm {
    Open(OpenFamily),
    Bracket(BracketFamily),
}

impl Algorithm {
    /// Iteration cap used when the configuration leaves `max_iter`
    /// unset. Open methods default higher: no interval confines them,
    /// so more steps may pass before the step test bites.
    pub const fn default_max_iter(self) -> usize {
        match self {
            Algorithm::Open(_) => DEFAULT_OPEN_MAX_ITER,
            Algorithm::Bracket(_) => DEFAULT_BRACKET_MAX_ITER,
        }
    }

    /// Lowercase name carried into reports and log lines.
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Open(OpenFamily::Newton) => "newton",
            Algorithm::Open(OpenFamily::Broyden) => "broyden",
            Algorithm::Open(OpenFamily::Halley) => "halley",
            Algorithm::Open(OpenFamily::Schroeder) => "schroeder",
            Algorithm::Open(OpenFamily::Secant) => "secant",
            Algorithm::Bracket(BracketFamily::Bisection) => "bisection",
            Algorithm::Bracket(BracketFamily::Ridder) => "ridder",
            Algorithm::Bracket(BracketFamily::Brent) => "brent",
            Algorithm::Bracket(BracketFamily::InverseQuadratic) => "inverse_quadratic",
            Algorithm::Bracket(BracketFamily::Illinois) => "illinois",
            Algorithm::Bracket(BracketFamily::Pegasus) => "pegasus",
            Algorithm::Bracket(BracketFamily::AndersonBjorck) => "anderson_bjorck",
            Algorithm::Bracket(BracketFamily::RegulaFalsi) => "regula_falsi",
            Algorithm::Bracket(BracketFamily::ModifiedRegulaFalsi) => "modified_regula_falsi",
            Algorithm::Bracket(BracketFamily::RtSafe) => "rt_safe",
            Algorithm::Bracket(BracketFamily::Trisect) => "trisect",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
