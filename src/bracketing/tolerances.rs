//! Tolerance utilities for bracketing algorithms.

use super::config::BracketOptions;

/// Combined bracket-width tolerance for the current endpoints.
///
/// `max(xatol, max(|x0|, |x1|) * xrtol)`
///
/// Zero when both tolerances are zero, in which case only bit-adjacent
/// termination stops a bisection-family run.
#[inline]
pub(crate) fn bracket_tolerance(x0: f64, x1: f64, options: &BracketOptions) -> f64 {
    options
        .xatol()
        .max(x0.abs().max(x1.abs()) * options.xrtol())
}
