//! Defines the [`Algorithm`] enum naming the planar solvers.

/// The planar methods. Both are open: they iterate from a starting
/// guess with no bracketing analog in two dimensions.
#[derive(Debug, Copy, Clone)]
pub enum Algorithm {
    Newton,
    Broyden,
}

impl Algorithm {
    /// Lowercase name carried into reports and log lines.
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Newton => "planar_newton",
            Algorithm::Broyden => "planar_broyden",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
