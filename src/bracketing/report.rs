//! Defines the [`BracketReport`] struct returned by all bracketing
//! algorithms.

/// Which terminal flag ended the run.
/// - [`Convergence::XConverged`] : bracket width within tolerance, or no
///   representable point remains strictly inside the bracket
/// - [`Convergence::FConverged`] : an exactly-zero function value was found
/// - [`Convergence::Stopped`]    : budget exhausted or NaN/Inf encountered;
///   the report carries the best candidate and a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convergence {
    XConverged,
    FConverged,
    Stopped,
}

/// Final report returned by all bracketing algorithms.
///
/// - `root`        : best root estimate
/// - `f_root`      : function value recorded at `root`. The bisection
///   variants retain only signs, so for them this is `-1.0`/`0.0`/`1.0`
/// - `steps`       : iterations performed
/// - `fnevals`     : function evaluations performed
/// - `left`, `right` : final bracket endpoints (by role)
/// - `convergence` : which terminal flag ended the run ([`Convergence`])
/// - `message`     : accumulated diagnostics, empty on clean convergence
/// - `algorithm`   : algorithm name (e.g. `"bisection"`, `"a42"`)
#[derive(Debug, Clone)]
pub struct BracketReport {
    pub root:        f64,
    pub f_root:      f64,
    pub steps:       usize,
    pub fnevals:     usize,
    pub left:        f64,
    pub right:       f64,
    pub convergence: Convergence,
    pub message:     String,
    pub algorithm:   &'static str,
}
