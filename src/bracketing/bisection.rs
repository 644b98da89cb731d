//! Generic bisection state machine, tolerant and bit-exact.
//!
//! Only the *sign* of each function value is retained in state — never
//! the magnitude. Sign comparisons drive every decision, which keeps the
//! update logic robust regardless of the function's scale.

use super::algorithms::BracketAlgorithm;
use super::config::BracketOptions;
use super::errors::BracketingError;
use super::midpoint::midpoint;
use super::report::BracketReport;
use super::signs::sign;
use super::solve::{check_budgets, solve, validate_bracket};
use super::state::BracketState;
use super::tolerances::bracket_tolerance;

/// Builds the initial state: sorted, clamped, sign-validated bracket plus
/// its midpoint.
///
/// An endpoint with an exactly-zero function value short-cuts to an
/// f-converged state before the bracket check, since a zero sign can
/// never pass the opposite-sign test.
///
/// # Errors
/// - [`BracketingError::InvalidBounds`]      : NaN endpoint
/// - [`BracketingError::DegenerateInterval`] : fewer than two distinct points
/// - [`BracketingError::NoSignChange`]       : `f(a)` and `f(b)` do not have
///   strictly opposite signs
pub(crate) fn init<F>(f: &mut F, a: f64, b: f64) -> Result<BracketState, BracketingError>
where
    F: FnMut(f64) -> f64,
{
    let (a, b) = validate_bracket(a, b)?;

    let fa = sign(f(a));
    let fb = sign(f(b));

    if fa == 0.0 {
        let mut state = BracketState::new(a, b, fa, fb, a, 0.0);
        state.fnevals = 2;
        state.f_converged = true;
        return Ok(state);
    }
    if fb == 0.0 {
        let mut state = BracketState::new(a, b, fa, fb, b, 0.0);
        state.fnevals = 2;
        state.f_converged = true;
        return Ok(state);
    }
    if !(fa * fb < 0.0) {
        return Err(BracketingError::NoSignChange { a, b });
    }

    let m = midpoint(a, b);
    let fm = sign(f(m));
    let mut state = BracketState::new(a, b, fa, fb, m, fm);
    state.fnevals = 3;
    Ok(state)
}

/// One bisection step.
///
/// Consumes the sign recorded at the current midpoint: exact zero
/// converges immediately, NaN stops the run with the midpoint as the
/// best-effort candidate, otherwise the endpoint sharing the midpoint's
/// sign is discarded and the next midpoint is evaluated.
pub(crate) fn update<F>(f: &mut F, state: &mut BracketState, _options: &BracketOptions)
where
    F: FnMut(f64) -> f64,
{
    let m = state.m;
    let fm = state.fm;

    if fm.is_nan() {
        state.stopped = true;
        state.log_message("NaN encountered at the midpoint");
        return;
    }
    if fm == 0.0 {
        state.x0 = m;
        state.x1 = m;
        state.fx0 = 0.0;
        state.fx1 = 0.0;
        state.f_converged = true;
        return;
    }

    if state.fx0 * fm < 0.0 {
        state.x1 = m;
        state.fx1 = fm;
    } else {
        state.x0 = m;
        state.fx0 = fm;
    }

    let next = midpoint(state.x0, state.x1);
    state.fm = sign(state.eval(f, next));
    state.m = next;
}

/// Convergence assessment shared by the tolerant and exact variants.
///
/// ┌ tolerant (`exact = false`) : converged when the midpoint is no
/// │   longer strictly interior to `(x0, x1)`, or when
/// │   `x1 - x0 <= max(xatol, max(|x0|, |x1|) * xrtol)`
/// └ exact (`exact = true`)     : converged only on bit-adjacent
///     termination; tolerances are ignored
pub(crate) fn assess_convergence(
    state: &mut BracketState,
    options: &BracketOptions,
    exact: bool,
) -> bool {
    if state.converged() {
        return true;
    }
    if check_budgets(state, options) {
        return true;
    }

    // endpoints are ordered by bracket role; false position rotates them
    let (lo, hi) = if state.x0 <= state.x1 {
        (state.x0, state.x1)
    } else {
        (state.x1, state.x0)
    };
    let m = state.m;
    if !(lo < m && m < hi) {
        state.x_converged = true;
        return true;
    }
    if !exact && hi - lo <= bracket_tolerance(lo, hi, options) {
        state.x_converged = true;
        return true;
    }
    false
}

/// Finds a root of `func` on `[a, b]` with tolerance-driven bisection.
///
/// Halves the bracket (in bit space, via [`midpoint`]) until the width
/// tolerance is met or no representable point remains strictly inside.
/// With the default all-zero tolerances this drives to maximal precision.
///
/// # Arguments
/// - `func`    : function whose root is sought; only signs are consulted
/// - `a`, `b`  : bracket endpoints, in either order; `f(a)` and `f(b)`
///   must have opposite signs
/// - `options` : tolerances and budgets, see [`BracketOptions`]
///
/// # Errors
/// Initial-validation failures only ([`BracketingError`]); anything that
/// goes wrong mid-iteration is reported through
/// [`BracketReport::convergence`] and [`BracketReport::message`].
pub fn bisection<F>(
    func: F,
    a: f64,
    b: f64,
    options: BracketOptions,
) -> Result<BracketReport, BracketingError>
where
    F: FnMut(f64) -> f64,
{
    solve(BracketAlgorithm::Bisection, func, a, b, options)
}

/// [`bisection`], but termination is bit-adjacent only: tolerances in
/// `options` are ignored and the bracket is driven to the maximal
/// achievable precision.
pub fn bisection_exact<F>(
    func: F,
    a: f64,
    b: f64,
    options: BracketOptions,
) -> Result<BracketReport, BracketingError>
where
    F: FnMut(f64) -> f64,
{
    solve(BracketAlgorithm::BisectionExact, func, a, b, options)
}
