//! Bracketing error types.
//!
//! ┌ [`BracketingError`] : interval validation failures
//! │   ├ no sign change across the supplied interval
//! │   ├ degenerate interval (fewer than two distinct points)
//! │   └ NaN endpoints
//! │
//! └ [`ToleranceError`]  : configuration validation failures
//!     ├ non-finite or negative tolerances
//!     └ zero iteration/evaluation budgets
//!
//! Only these validation failures are fail-fast. Anomalies encountered
//! mid-iteration (NaN/Inf evaluations, exhausted budgets) never surface as
//! errors: the run stops, the current best candidate is returned, and a
//! diagnostic message is appended to the state.

use thiserror::Error;

/// Invalid initial interval. Raised before any iteration, never retried.
#[derive(Debug, Error)]
pub enum BracketingError {
    #[error("no sign change on [{a}, {b}]: f(a) and f(b) share a sign")]
    NoSignChange { a: f64, b: f64 },

    #[error("degenerate interval: at least two distinct points required. got [{a}, {b}]")]
    DegenerateInterval { a: f64, b: f64 },

    #[error("invalid bounds: endpoints must not be NaN. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),
}

/// Tolerance and budget configuration errors.
///
/// ┌ Invalid x-space tolerances (`xatol`, `xrtol`)
/// ├ Invalid f-space tolerances (`atol`, `rtol`)
/// └ Zero budgets (`maxevals`, `maxfnevals`)
#[derive(Debug, Error)]
pub enum ToleranceError {
    #[error("invalid `xatol`: must be finite and >= 0. got {got}")]
    InvalidXAbsTol { got: f64 },

    #[error("invalid `xrtol`: must be finite and >= 0. got {got}")]
    InvalidXRelTol { got: f64 },

    #[error("invalid `atol`: must be finite and >= 0. got {got}")]
    InvalidAbsTol { got: f64 },

    #[error("invalid `rtol`: must be finite and >= 0. got {got}")]
    InvalidRelTol { got: f64 },

    #[error("invalid `maxevals`: must be >= 1")]
    InvalidMaxEvals,

    #[error("invalid `maxfnevals`: must be >= 1")]
    InvalidMaxFnEvals,
}
