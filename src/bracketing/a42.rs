//! Alefeld–Potra–Shi enclosing iteration ("A42").
//!
//! Maintains a 3-point bracket `(a, b, d)`: `f(a)` and `f(b)` have
//! opposite signs, `d` is an auxiliary point carried from the previous
//! round (not necessarily inside the current bracket). Each step runs a
//! bounded ladder — Newton-refined quadratic interpolation with 2 then 3
//! corrections, a double-length secant step, and a forced bisection
//! whenever the bracket failed to halve — giving superlinear practical
//! convergence while never doing worse than bisection.
//!
//! The state mapping onto [`BracketState`] is `x0 = a`, `x1 = b`,
//! `m = d`.

use super::algorithms::BracketAlgorithm;
use super::config::BracketOptions;
use super::errors::BracketingError;
use super::midpoint::midpoint;
use super::report::BracketReport;
use super::signs::opposite_sign;
use super::solve::{check_budgets, solve, validate_bracket};
use super::state::BracketState;
use super::tolerances::bracket_tolerance;

/// Linear interpolation between `(a, fa)` and `(b, fb)` intersecting the
/// x-axis.
#[inline]
fn secant_step(a: f64, b: f64, fa: f64, fb: f64) -> f64 {
    a - fa * (b - a) / (fb - fa)
}

/// Redistribute the triple after evaluating an interior point `c`:
/// whichever of `(a, c)` / `(c, b)` brackets the sign change becomes the
/// new `(a, b)`, the leftover endpoint becomes `d`.
///
/// Assumes `a < c < b` and `fc` nonzero finite.
#[inline]
fn rebracket(
    a: f64,
    b: f64,
    c: f64,
    fa: f64,
    fb: f64,
    fc: f64,
) -> (f64, f64, f64, f64, f64, f64) {
    if opposite_sign(fa, fc) {
        (a, c, b, fa, fc, fb)
    } else {
        (c, b, a, fc, fb, fa)
    }
}

/// Root of the quadratic interpolant through `(a, fa)`, `(b, fb)`,
/// `(d, fd)`, refined with `k` fixed Newton corrections.
///
/// The result is accepted only strictly inside `(a + 2delta, b - 2delta)`;
/// otherwise a plain secant step is tried against the same window, and
/// bisection is the final fallback.
#[must_use]
fn newton_quadratic(
    a: f64,
    b: f64,
    d: f64,
    fa: f64,
    fb: f64,
    fd: f64,
    k: usize,
    delta: f64,
) -> f64 {
    let fab = (fa - fb) / (a - b);
    let fbd = (fb - fd) / (b - d);
    let fabd = (fab - fbd) / (a - d);

    let mut r = if opposite_sign(fabd, fa) { b } else { a };

    if !(fabd.is_nan() || fabd.is_infinite()) || fabd != 0.0 {
        for _ in 0..k {
            let pr = fa + fab * (r - a) + fabd * (r - a) * (r - b);
            let prp = fab + fabd * (2.0 * r - a - b);
            r -= pr / prp;
        }
        if a + 2.0 * delta < r && r < b - 2.0 * delta {
            return r;
        }
    }

    let r = secant_step(a, b, fa, fb);
    if a + 2.0 * delta < r && r < b - 2.0 * delta {
        return r;
    }
    midpoint(a, b)
}

/// Handles the terminal outcomes of one ladder evaluation.
///
/// Returns `true` (and records the terminal state) when `fc` is exactly
/// zero or non-finite; the remaining rungs of the iteration are skipped.
fn note_terminal(
    state: &mut BracketState,
    c: f64,
    fc: f64,
    bracket: (f64, f64, f64, f64, f64, f64),
) -> bool {
    let (a, b, d, fa, fb, fd) = bracket;
    if fc == 0.0 {
        state.x0 = a;
        state.x1 = c;
        state.fx0 = fa;
        state.fx1 = 0.0;
        state.m = d;
        state.fm = fd;
        state.f_converged = true;
        return true;
    }
    if !fc.is_finite() {
        state.x0 = a;
        state.x1 = b;
        state.fx0 = fa;
        state.fx1 = fb;
        state.m = c;
        state.fm = fc;
        state.stopped = true;
        state.log_message("NaN or Inf encountered during iteration");
        return true;
    }
    false
}

/// Builds the initial 3-point bracket from one secant step.
///
/// # Errors
/// - [`BracketingError::InvalidBounds`]      : NaN endpoint
/// - [`BracketingError::DegenerateInterval`] : fewer than two distinct points
/// - [`BracketingError::NoSignChange`]       : `f(a) * f(b)` not sign-opposite
pub(crate) fn init<F>(f: &mut F, a: f64, b: f64) -> Result<BracketState, BracketingError>
where
    F: FnMut(f64) -> f64,
{
    let (a, b) = validate_bracket(a, b)?;

    let fa = f(a);
    let fb = f(b);

    if fa == 0.0 {
        let mut state = BracketState::new(a, b, fa, fb, a, fa);
        state.fnevals = 2;
        state.f_converged = true;
        return Ok(state);
    }
    if fb == 0.0 {
        let mut state = BracketState::new(a, b, fa, fb, b, fb);
        state.fnevals = 2;
        state.f_converged = true;
        return Ok(state);
    }
    if !opposite_sign(fa, fb) {
        return Err(BracketingError::NoSignChange { a, b });
    }

    let mut c = secant_step(a, b, fa, fb);
    if !(a < c && c < b) {
        c = midpoint(a, b);
    }
    let fc = f(c);

    let mut state = BracketState::new(a, b, fa, fb, c, fc);
    state.fnevals = 3;
    if note_terminal(&mut state, c, fc, (a, b, c, fa, fb, fc)) {
        return Ok(state);
    }

    let (a, b, d, fa, fb, fd) = rebracket(a, b, c, fa, fb, fc);
    state.x0 = a;
    state.x1 = b;
    state.fx0 = fa;
    state.fx1 = fb;
    state.m = d;
    state.fm = fd;
    Ok(state)
}

/// One A42 iteration: 3–4 evaluations of bounded work.
///
/// Ladder:
/// 1. Newton-quadratic candidate, 2 corrections; re-bracket.
/// 2. Newton-quadratic candidate, 3 corrections; re-bracket.
/// 3. Double secant from the endpoint with smaller `|f|`, demoted to the
///    midpoint when it would travel more than half the bracket;
///    re-bracket.
/// 4. If the bracket has not at least halved, one forced bisection.
///
/// Every evaluation is followed by a zero/NaN/Inf check that
/// short-circuits the remaining rungs.
pub(crate) fn update<F>(f: &mut F, state: &mut BracketState, options: &BracketOptions)
where
    F: FnMut(f64) -> f64,
{
    let (mut a, mut b, mut d) = (state.x0, state.x1, state.m);
    let (mut fa, mut fb, mut fd) = (state.fx0, state.fx1, state.fm);

    let width0 = b - a;
    let delta = 0.7 * bracket_tolerance(a, b, options);

    for k in [2usize, 3] {
        let c = newton_quadratic(a, b, d, fa, fb, fd, k, delta);
        let fc = state.eval(f, c);
        if note_terminal(state, c, fc, (a, b, d, fa, fb, fd)) {
            return;
        }
        (a, b, d, fa, fb, fd) = rebracket(a, b, c, fa, fb, fc);
    }

    let (u, fu) = if fa.abs() < fb.abs() { (a, fa) } else { (b, fb) };
    let mut c = u - 2.0 * fu * (b - a) / (fb - fa);
    if !((c - u).abs() <= 0.5 * (b - a)) {
        c = midpoint(a, b);
    }
    let fc = state.eval(f, c);
    if note_terminal(state, c, fc, (a, b, d, fa, fb, fd)) {
        return;
    }
    (a, b, d, fa, fb, fd) = rebracket(a, b, c, fa, fb, fc);

    if b - a >= 0.5 * width0 {
        let c = midpoint(a, b);
        let fc = state.eval(f, c);
        if note_terminal(state, c, fc, (a, b, d, fa, fb, fd)) {
            return;
        }
        (a, b, d, fa, fb, fd) = rebracket(a, b, c, fa, fb, fc);
    }

    state.x0 = a;
    state.x1 = b;
    state.fx0 = fa;
    state.fx1 = fb;
    state.m = d;
    state.fm = fd;
}

/// A42 convergence assessment.
///
/// - f-converged the moment any tracked point has an exactly-zero value
/// - x-converged once `|b - a| <= 2 * max(xatol, max(|a|,|b|) * xrtol)`
/// - stopped once `steps > maxevals` or `fnevals > maxfnevals`
pub(crate) fn assess_convergence(state: &mut BracketState, options: &BracketOptions) -> bool {
    if state.converged() {
        return true;
    }
    if check_budgets(state, options) {
        return true;
    }

    if state.fx0 == 0.0 || state.fx1 == 0.0 || state.fm == 0.0 {
        state.f_converged = true;
        return true;
    }

    let tol = bracket_tolerance(state.x0, state.x1, options);
    if (state.x1 - state.x0).abs() <= 2.0 * tol {
        state.x_converged = true;
        return true;
    }
    false
}

/// Reported candidate: the tracked point of smallest `|f|`, or the
/// offending point after a numerical stall.
pub(crate) fn candidate(state: &BracketState) -> (f64, f64) {
    if state.stopped && !state.fm.is_finite() {
        return (state.m, state.fm);
    }
    let mut best = (state.x0, state.fx0);
    for (x, fx) in [(state.x1, state.fx1), (state.m, state.fm)] {
        if fx.abs() < best.1.abs() {
            best = (x, fx);
        }
    }
    best
}

/// Finds a root of `func` on `[a, b]` with the Alefeld–Potra–Shi
/// enclosing algorithm (Algorithm 748 family).
///
/// This method assumes `func` is continuous on `[a, b]` and that
/// `func(a)` and `func(b)` have opposite signs. For a discontinuous
/// function it still localizes the sign change.
///
/// # Arguments
/// - `func`    : function whose root is sought
/// - `a`, `b`  : bracket endpoints, in either order
/// - `options` : tolerances and budgets; defaults for this method are
///   `xrtol = f64::EPSILON` and `maxevals = 15`
///   (see [`BracketOptions::for_algorithm`])
///
/// # Returns
/// [`BracketReport`] whose `root` is the tracked point with the smallest
/// residual.
///
/// # Errors
/// Initial-validation failures only ([`BracketingError`]); mid-iteration
/// anomalies degrade to a returned candidate plus a diagnostic message.
///
/// # Notes
/// - Typically converges in well under the 15-step default budget for
///   smooth functions; the forced-bisection guard bounds the worst case
///   at bisection rate.
pub fn a42<F>(
    func: F,
    a: f64,
    b: f64,
    options: BracketOptions,
) -> Result<BracketReport, BracketingError>
where
    F: FnMut(f64) -> f64,
{
    solve(BracketAlgorithm::A42, func, a, b, options)
}
