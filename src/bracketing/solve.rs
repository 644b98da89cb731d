//! Driver loop and automatic method selection.
//!
//! All state-machine variants share one protocol: `init` builds a
//! validated [`BracketState`], then the loop alternates
//! `assess_convergence` (budget checks first) and `update` until a
//! terminal flag is set. One state record serves one call; it is never
//! aliased across calls.

use super::a42;
use super::algorithms::BracketAlgorithm;
use super::bisection;
use super::bitwise::bitwise_bisection;
use super::config::BracketOptions;
use super::errors::BracketingError;
use super::false_position;
use super::report::{BracketReport, Convergence};
use super::state::BracketState;
use super::tracks::Tracks;

/// Sort, clamp, and sanity-check a candidate bracket.
///
/// Infinite endpoints are clamped to the nearest finite value; ordering
/// is normalized to `a < b`.
///
/// # Errors
/// - [`BracketingError::InvalidBounds`]      : an endpoint is NaN
/// - [`BracketingError::DegenerateInterval`] : endpoints equal after
///   clamping
pub(crate) fn validate_bracket(a: f64, b: f64) -> Result<(f64, f64), BracketingError> {
    if a.is_nan() || b.is_nan() {
        return Err(BracketingError::InvalidBounds { a, b });
    }
    let (a, b) = if a <= b { (a, b) } else { (b, a) };
    let a = if a == f64::NEG_INFINITY { f64::MIN } else { a };
    let b = if b == f64::INFINITY { f64::MAX } else { b };
    if !(a < b) {
        return Err(BracketingError::DegenerateInterval { a, b });
    }
    Ok((a, b))
}

/// Reduce an ordered collection of points to a bracket `(min, max)`.
///
/// # Errors
/// - [`BracketingError::InvalidBounds`]      : a point is NaN
/// - [`BracketingError::DegenerateInterval`] : fewer than two distinct
///   points
pub fn initial_bracket(points: &[f64]) -> Result<(f64, f64), BracketingError> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &x in points {
        if x.is_nan() {
            return Err(BracketingError::InvalidBounds { a: x, b: x });
        }
        lo = lo.min(x);
        hi = hi.max(x);
    }
    if points.len() < 2 || !(lo < hi) {
        return Err(BracketingError::DegenerateInterval { a: lo, b: hi });
    }
    validate_bracket(lo, hi)
}

/// Budget enforcement, run at the start of each convergence assessment.
///
/// Exhausting a budget is not an error: the run stops with the current
/// best candidate and a diagnostic message.
pub(crate) fn check_budgets(state: &mut BracketState, options: &BracketOptions) -> bool {
    if let Some(maxevals) = options.maxevals() {
        if state.steps > maxevals {
            state.stopped = true;
            state.log_message("maximum number of iterations exceeded");
            return true;
        }
    }
    if let Some(maxfnevals) = options.maxfnevals() {
        if state.fnevals > maxfnevals {
            state.stopped = true;
            state.log_message("maximum number of function evaluations exceeded");
            return true;
        }
    }
    false
}

fn init_state<F>(
    algorithm: BracketAlgorithm,
    f: &mut F,
    a: f64,
    b: f64,
) -> Result<BracketState, BracketingError>
where
    F: FnMut(f64) -> f64,
{
    match algorithm {
        BracketAlgorithm::Bisection | BracketAlgorithm::BisectionExact => {
            bisection::init(f, a, b)
        }
        BracketAlgorithm::A42 => a42::init(f, a, b),
        BracketAlgorithm::FalsePosition(_) => false_position::init(f, a, b),
    }
}

fn update_state<F>(
    algorithm: BracketAlgorithm,
    f: &mut F,
    state: &mut BracketState,
    options: &BracketOptions,
) where
    F: FnMut(f64) -> f64,
{
    match algorithm {
        BracketAlgorithm::Bisection | BracketAlgorithm::BisectionExact => {
            bisection::update(f, state, options);
        }
        BracketAlgorithm::A42 => a42::update(f, state, options),
        BracketAlgorithm::FalsePosition(factor) => {
            false_position::update(f, state, options, factor);
        }
    }
}

fn assess_convergence(
    algorithm: BracketAlgorithm,
    state: &mut BracketState,
    options: &BracketOptions,
) -> bool {
    match algorithm {
        BracketAlgorithm::Bisection => bisection::assess_convergence(state, options, false),
        BracketAlgorithm::BisectionExact => bisection::assess_convergence(state, options, true),
        BracketAlgorithm::A42 => a42::assess_convergence(state, options),
        BracketAlgorithm::FalsePosition(_) => {
            false_position::assess_convergence(state, options)
        }
    }
}

fn record(algorithm: BracketAlgorithm, state: &BracketState, tracks: &mut Option<&mut Tracks>) {
    if let Some(sink) = tracks.as_deref_mut() {
        if algorithm.is_bisection_family() {
            sink.record_bracket(state.x0, state.x1);
        } else {
            sink.record_point(state.x1, state.fx1);
        }
    }
}

fn final_report(algorithm: BracketAlgorithm, state: BracketState) -> BracketReport {
    let convergence = if state.f_converged {
        Convergence::FConverged
    } else if state.x_converged {
        Convergence::XConverged
    } else {
        Convergence::Stopped
    };

    let (root, f_root) = match algorithm {
        BracketAlgorithm::Bisection | BracketAlgorithm::BisectionExact => (state.m, state.fm),
        BracketAlgorithm::A42 => a42::candidate(&state),
        BracketAlgorithm::FalsePosition(_) => (state.x1, state.fx1),
    };

    BracketReport {
        root,
        f_root,
        steps: state.steps,
        fnevals: state.fnevals,
        left: state.x0,
        right: state.x1,
        convergence,
        message: state.message,
        algorithm: algorithm.algorithm_name(),
    }
}

fn run<F>(
    algorithm: BracketAlgorithm,
    mut f: F,
    a: f64,
    b: f64,
    options: BracketOptions,
    mut tracks: Option<&mut Tracks>,
) -> Result<BracketReport, BracketingError>
where
    F: FnMut(f64) -> f64,
{
    let options = options.validate()?;
    let mut state = init_state(algorithm, &mut f, a, b)?;
    record(algorithm, &state, &mut tracks);

    while !assess_convergence(algorithm, &mut state, &options) {
        update_state(algorithm, &mut f, &mut state, &options);
        state.steps += 1;
        if !state.converged() {
            record(algorithm, &state, &mut tracks);
        }
    }

    Ok(final_report(algorithm, state))
}

/// Run one bracketing algorithm to completion.
///
/// # Arguments
/// - `algorithm` : which variant drives the update/convergence behavior
/// - `func`      : function whose root is sought
/// - `a`, `b`    : bracket endpoints, in either order; `func(a)` and
///   `func(b)` must have opposite signs
/// - `options`   : tolerances and budgets
///
/// # Errors
/// Only initial validation fails fast ([`BracketingError`]). Mid-run
/// anomalies (NaN/Inf evaluations, exhausted budgets) stop the iteration
/// and surface through [`BracketReport::convergence`] and
/// [`BracketReport::message`].
pub fn solve<F>(
    algorithm: BracketAlgorithm,
    func: F,
    a: f64,
    b: f64,
    options: BracketOptions,
) -> Result<BracketReport, BracketingError>
where
    F: FnMut(f64) -> f64,
{
    run(algorithm, func, a, b, options, None)
}

/// [`solve`] with an attached trace sink.
///
/// The bisection family records `(x0, x1)` bracket pairs per accepted
/// step; the other methods record `(x, f(x))` pairs.
pub fn solve_with_tracks<F>(
    algorithm: BracketAlgorithm,
    func: F,
    a: f64,
    b: f64,
    options: BracketOptions,
    tracks: &mut Tracks,
) -> Result<BracketReport, BracketingError>
where
    F: FnMut(f64) -> f64,
{
    run(algorithm, func, a, b, options, Some(tracks))
}

/// Finds a zero of `func` on the bracket `[a, b]` at maximal precision.
///
/// Native-width input at zero tolerance takes the bit-bisection fast
/// path: the result is either an exact zero of `func` or an endpoint of
/// the final bit-adjacent pair straddling the sign change.
///
/// # Errors
/// - [`BracketingError`] when the interval is degenerate or not a true
///   bracket
pub fn find_zero<T, F>(func: F, a: T, b: T) -> Result<T, BracketingError>
where
    T: super::bits::BitFloat,
    F: FnMut(T) -> T,
{
    bitwise_bisection(func, a, b)
}

/// [`find_zero`] with explicit tolerances.
///
/// All-zero tolerances dispatch to the bit-bisection fast path; any
/// nonzero tolerance routes through the tolerant bisection state
/// machine. Other methods are selected explicitly via [`solve`].
pub fn find_zero_with<F>(
    func: F,
    a: f64,
    b: f64,
    options: BracketOptions,
) -> Result<f64, BracketingError>
where
    F: FnMut(f64) -> f64,
{
    let options = options.validate()?;
    if options.is_exact() {
        return bitwise_bisection(func, a, b);
    }
    solve(BracketAlgorithm::Bisection, func, a, b, options).map(|report| report.root)
}
