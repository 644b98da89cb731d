//! Accelerated false-position engine.
//!
//! Secant-style bracket update with an anti-stagnation guard and a
//! Galdino reduction factor applied to the retained endpoint, selected at
//! construction and fixed for the whole call.

use super::algorithms::BracketAlgorithm;
use super::config::BracketOptions;
use super::errors::BracketingError;
use super::midpoint::midpoint;
use super::reduction::ReductionFactor;
use super::report::BracketReport;
use super::signs::opposite_sign;
use super::solve::{solve, validate_bracket};
use super::state::BracketState;

/// Interpolation weights this close to an endpoint degrade to a plain
/// bisection step.
const TAU: f64 = 1e-10;

/// Builds the initial state: sorted, clamped, sign-validated bracket.
///
/// Unlike the bisection variants, full function values are retained —
/// the reduction formulas need the magnitudes.
///
/// # Errors
/// - [`BracketingError::InvalidBounds`]      : NaN endpoint
/// - [`BracketingError::DegenerateInterval`] : fewer than two distinct points
/// - [`BracketingError::NoSignChange`]       : `f(a)` and `f(b)` share a sign
pub(crate) fn init<F>(f: &mut F, a: f64, b: f64) -> Result<BracketState, BracketingError>
where
    F: FnMut(f64) -> f64,
{
    let (a, b) = validate_bracket(a, b)?;

    let fa = f(a);
    let fb = f(b);

    if fa == 0.0 {
        // current-iterate role is x1; rotate the zero endpoint into it
        let mut state = BracketState::new(b, a, fb, 0.0, midpoint(a, b), f64::NAN);
        state.fnevals = 2;
        state.f_converged = true;
        return Ok(state);
    }
    if fb == 0.0 {
        let mut state = BracketState::new(a, b, fa, 0.0, midpoint(a, b), f64::NAN);
        state.fnevals = 2;
        state.f_converged = true;
        return Ok(state);
    }
    if !opposite_sign(fa, fb) {
        return Err(BracketingError::NoSignChange { a, b });
    }

    let mut state = BracketState::new(a, b, fa, fb, midpoint(a, b), f64::NAN);
    state.fnevals = 2;
    Ok(state)
}

/// One false-position step.
///
/// ┌ `λ = f(b) / (f(b) - f(a))`, replaced by `0.5` unless safely inside
/// │   `(τ, 1 - τ)` — a nearly-endpoint weight means the secant has
/// │   stalled and the step degrades to bisection
/// ├ trial point `x = b - λ(b - a)`, evaluated once
/// ├ `f(x)` exactly zero : accepted as the root immediately
/// ├ `sign(f(x)) != sign(f(b))` : the new bracket is `(b, x)` — the
/// │   former `b` becomes the new `a` and the previous `a` is discarded
/// └ otherwise : the new bracket is `(a, x)` with `f(a)` rescaled by the
///     selected reduction formula to break endpoint stagnation
pub(crate) fn update<F>(
    f: &mut F,
    state: &mut BracketState,
    _options: &BracketOptions,
    factor: ReductionFactor,
) where
    F: FnMut(f64) -> f64,
{
    let (a, b, fa, fb) = (state.x0, state.x1, state.fx0, state.fx1);

    let mut lambda = fb / (fb - fa);
    if !(TAU < lambda.abs() && lambda.abs() < 1.0 - TAU) {
        lambda = 0.5;
    }

    let x = b - lambda * (b - a);
    let fx = state.eval(f, x);

    if fx == 0.0 {
        state.x1 = x;
        state.fx1 = 0.0;
        state.f_converged = true;
        return;
    }
    if !fx.is_finite() {
        state.x1 = x;
        state.fx1 = fx;
        state.stopped = true;
        state.log_message("NaN or Inf encountered during iteration");
        return;
    }

    if opposite_sign(fx, fb) {
        state.x0 = b;
        state.fx0 = fb;
    } else {
        state.fx0 = factor.apply(fa, fb, fx);
    }
    state.x1 = x;
    state.fx1 = fx;
    state.m = midpoint(state.x0, state.x1);
}

/// Finds a root of `func` on `[a, b]` with accelerated false position.
///
/// This method assumes `func` is continuous on the interval and that
/// `func(a)` and `func(b)` have opposite signs.
///
/// # Arguments
/// ┌ `factor`  : Galdino reduction factor, fixed for the whole call.
/// │             [`ReductionFactor::ANDERSON_BJORCK`] is the default
/// │             choice; [`ReductionFactor::ILLINOIS`] and
/// │             [`ReductionFactor::PEGASUS`] name the classical methods
/// ├ `func`    : function whose root is sought
/// ├ `a`, `b`  : bracket endpoints, in either order
/// └ `options` : tolerances and budgets; the default step budget for this
///               method is 100 (see [`BracketOptions::for_algorithm`])
///
/// # Returns
/// [`BracketReport`] whose `root` is the last accepted trial point.
///
/// # Errors
/// Initial-validation failures only ([`BracketingError`]).
///
/// # Notes
/// └ Convergence reuses the tolerant bisection rule: bracket width within
///   tolerance, or no representable point strictly inside the bracket.
pub fn false_position<F>(
    factor: ReductionFactor,
    func: F,
    a: f64,
    b: f64,
    options: BracketOptions,
) -> Result<BracketReport, BracketingError>
where
    F: FnMut(f64) -> f64,
{
    solve(BracketAlgorithm::FalsePosition(factor), func, a, b, options)
}

/// Convergence for false position defers to the tolerant bisection rule.
pub(crate) fn assess_convergence(state: &mut BracketState, options: &BracketOptions) -> bool {
    super::bisection::assess_convergence(state, options, false)
}
