//! Bit-code bisection fast path.
//!
//! Standalone, allocation-free bisection for native float widths at zero
//! tolerance. The bracket is narrowed in the unsigned-integer code space
//! of the endpoint magnitudes, so every step discards half of the
//! *representable values* remaining in the interval rather than half of
//! its real-number width. Termination within [`BitFloat::MAX_BISECTIONS`]
//! midpoint evaluations is structural: the code distance halves each
//! step.
//!
//! This path never allocates a state record and is strictly faster than
//! the generic state machine when maximal precision is requested for
//! `f32`/`f64` input.

use super::bits::BitFloat;
use super::errors::BracketingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sgn {
    Neg,
    Zero,
    Pos,
    Nan,
}

#[inline]
fn sgn<T: BitFloat>(v: T) -> Sgn {
    if v.is_nan() {
        Sgn::Nan
    } else if v < T::ZERO {
        Sgn::Neg
    } else if v > T::ZERO {
        Sgn::Pos
    } else {
        Sgn::Zero
    }
}

/// Locates a sign change of `f` on `[a, b]` by bisecting float bit codes.
///
/// # Arguments
/// - `f`    : function to evaluate; only the sign of its values is used
/// - `a`, `b` : bracket endpoints of one float width, in either order.
///   Infinite endpoints are clamped to the nearest finite value.
///
/// # Returns
/// - `Ok(x)` where `x` is an endpoint of the final bit-adjacent pair, a
///   point with `f(x)` exactly zero, or a point where `f` evaluated to
///   NaN (best-effort localization, see below)
/// - `Ok(NaN)` in the degenerate case where the endpoint magnitudes share
///   one bit code while their signs still differ
///
/// # Errors
/// - [`BracketingError::InvalidBounds`]       : an endpoint is NaN
/// - [`BracketingError::DegenerateInterval`]  : endpoints equal after
///   clamping
/// - [`BracketingError::NoSignChange`]        : `f(a)` and `f(b)` share a
///   strict sign
///
/// # Notes
/// - When the interval straddles zero, `f(0)` is probed first and the
///   half agreeing in sign with it is discarded, so the code loop always
///   runs over a one-signed interval.
/// - For a discontinuous `f` (e.g. a pole), the returned point localizes
///   the sign change: one of its bit-adjacent neighbors still has the
///   opposite sign. It is not necessarily near a true zero.
pub fn bitwise_bisection<T, F>(mut f: F, a: T, b: T) -> Result<T, BracketingError>
where
    T: BitFloat,
    F: FnMut(T) -> T,
{
    if a.is_nan() || b.is_nan() {
        return Err(BracketingError::InvalidBounds { a: a.as_f64(), b: b.as_f64() });
    }

    let (a, b) = if a <= b { (a, b) } else { (b, a) };
    let (mut a, mut b) = (a.clamp_finite(), b.clamp_finite());
    if !(a < b) {
        return Err(BracketingError::DegenerateInterval { a: a.as_f64(), b: b.as_f64() });
    }

    let mut fa = sgn(f(a));
    if matches!(fa, Sgn::Zero | Sgn::Nan) {
        return Ok(a);
    }
    let mut fb = sgn(f(b));
    if matches!(fb, Sgn::Zero | Sgn::Nan) {
        return Ok(b);
    }
    if fa == fb {
        return Err(BracketingError::NoSignChange { a: a.as_f64(), b: b.as_f64() });
    }

    // collapse a sign-straddling interval to a one-signed one
    if a < T::ZERO && b > T::ZERO {
        let f0 = sgn(f(T::ZERO));
        if matches!(f0, Sgn::Zero | Sgn::Nan) {
            return Ok(T::ZERO);
        }
        if f0 == fa {
            a = T::ZERO;
            fa = f0;
        } else {
            b = T::ZERO;
            fb = f0;
        }
    }

    let negate = b <= T::ZERO;
    let decode = |code: u64| {
        let mag = T::from_magnitude_code(code);
        if negate { -mag } else { mag }
    };

    let code_a = a.abs().magnitude_code();
    let code_b = b.abs().magnitude_code();
    let (mut lo, mut hi, flo) = if code_a <= code_b {
        (code_a, code_b, fa)
    } else {
        (code_b, code_a, fb)
    };
    if lo == hi {
        return Ok(T::NAN);
    }

    while hi - lo > 1 {
        let mid = (lo + hi) >> 1;
        let m = decode(mid);
        let fm = sgn(f(m));
        if matches!(fm, Sgn::Zero | Sgn::Nan) {
            return Ok(m);
        }
        if fm == flo {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Ok(decode(lo))
}
