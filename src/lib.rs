//! # rhiza
//!
//! Scalar root finding on a bracketing interval: an interval `[a, b]`
//! where the function values at the endpoints have opposite signs.
//!
//! Provides
//! - a bit-interpolating [`midpoint`](bracketing::midpoint) operator shared
//!   by every bisection-family method,
//! - an allocation-free [`bitwise`](bracketing::bitwise) bisection fast path
//!   for native float widths at zero tolerance,
//! - a tolerance-driven bisection state machine (tolerant and bit-exact),
//! - an Algorithm-748-style enclosing engine
//!   ([`a42`](bracketing::a42)),
//! - an accelerated [`false_position`](bracketing::false_position) family
//!   with twelve empirical reduction factors.
//!
//! Entry points live in [`bracketing::solve`]: `find_zero` for automatic
//! method selection, `solve` for an explicit
//! [`BracketAlgorithm`](bracketing::algorithms::BracketAlgorithm).

pub mod bracketing;
