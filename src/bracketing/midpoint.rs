//! Bit-interpolating midpoint operator, shared by every bisection-family
//! algorithm.

use super::bits::BitFloat;

/// "Mean" of two floats of the same width, taken in bit space.
///
/// # Contract
/// - either input non-finite : returns `x + y` (standard float
///   combination rules, so NaN and opposing infinities propagate)
/// - strictly opposite nonzero signs : returns exactly `0`, centering the
///   search on the sign change regardless of magnitude asymmetry
/// - otherwise : the unsigned-integer mean of the two magnitudes' bit
///   patterns (a single right shift, exact), with the negative sign
///   restored when either input is strictly negative
///
/// # Notes
/// - For same-sign finite inputs the result is a representable value with
///   magnitude strictly between the two (or equal to one endpoint when
///   they are bit-adjacent), because IEEE754 orders non-negative floats
///   exactly as their bit patterns order as unsigned integers.
/// - `midpoint(x, x) == x` for every finite `x`.
#[must_use]
pub fn midpoint<T: BitFloat>(x: T, y: T) -> T {
    if !x.is_finite() || !y.is_finite() {
        return x + y;
    }

    let x_neg = x < T::ZERO;
    let y_neg = y < T::ZERO;
    if (x_neg && y > T::ZERO) || (y_neg && x > T::ZERO) {
        return T::ZERO;
    }

    let mid = T::from_magnitude_code(
        (x.abs().magnitude_code() + y.abs().magnitude_code()) >> 1,
    );
    if x_neg || y_neg { -mid } else { mid }
}
