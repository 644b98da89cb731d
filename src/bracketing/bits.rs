//! Bit-level access to IEEE754 floats.
//!
//! For a non-negative IEEE754 float, the ordering of values is
//! order-isomorphic to the unsigned-integer ordering of their bit
//! patterns. [`BitFloat`] exposes that correspondence for every supported
//! width so the midpoint operator and the bit-bisection fast path can do
//! exact integer arithmetic on float magnitudes.
//!
//! Codes are widened losslessly to `u64`: the reinterpretation itself is
//! always same-width (`f32` ↔ `u32`, `f64` ↔ `u64`), and widening the
//! resulting integer changes no arithmetic.

use std::ops::{Add, Neg};

/// A float width with a native unsigned bit representation.
pub trait BitFloat: Copy + PartialOrd + Neg<Output = Self> + Add<Output = Self> {
    const ZERO: Self;
    const NAN: Self;

    /// Upper bound on bit-bisection iterations: one per bit of width.
    const MAX_BISECTIONS: u32;

    fn is_finite(self) -> bool;
    fn is_nan(self) -> bool;
    fn abs(self) -> Self;

    /// Maps `+inf`/`-inf` to the nearest finite value, leaves everything
    /// else untouched.
    fn clamp_finite(self) -> Self;

    /// Bit pattern of a non-negative value as an unsigned code.
    ///
    /// Callers must pass `self.abs()`; a negative input would smuggle the
    /// sign bit into the code space.
    fn magnitude_code(self) -> u64;

    /// Inverse of [`BitFloat::magnitude_code`]: the non-negative float
    /// with the given bit pattern.
    fn from_magnitude_code(code: u64) -> Self;

    /// Lossless widening, for diagnostics and error payloads.
    fn as_f64(self) -> f64;
}

macro_rules! impl_bit_float {
    ($f:ty, $u:ty, $width:expr) => {
        impl BitFloat for $f {
            const ZERO: Self = 0.0;
            const NAN: Self = <$f>::NAN;
            const MAX_BISECTIONS: u32 = $width;

            #[inline]
            fn is_finite(self) -> bool {
                <$f>::is_finite(self)
            }

            #[inline]
            fn is_nan(self) -> bool {
                <$f>::is_nan(self)
            }

            #[inline]
            fn abs(self) -> Self {
                <$f>::abs(self)
            }

            #[inline]
            fn clamp_finite(self) -> Self {
                if self == <$f>::INFINITY {
                    <$f>::MAX
                } else if self == <$f>::NEG_INFINITY {
                    <$f>::MIN
                } else {
                    self
                }
            }

            #[inline]
            fn magnitude_code(self) -> u64 {
                <$f>::to_bits(self) as u64
            }

            #[inline]
            fn from_magnitude_code(code: u64) -> Self {
                <$f>::from_bits(code as $u)
            }

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_bit_float!(f32, u32, 32);
impl_bit_float!(f64, u64, 64);
