//! Shared configuration for bracketing algorithms.
//!
//! Provides [`BracketOptions`], immutable after construction and owned
//! exclusively by the call that created it.
//!
//! [`BracketOptions`] — universal fields
//! ├ `xatol`      : absolute x-space (bracket width) tolerance
//! ├ `xrtol`      : relative x-space tolerance
//! ├ `atol`       : absolute f-space tolerance (unused by pure bracketing
//! │                variants, carried for the shared surface)
//! ├ `rtol`       : relative f-space tolerance (likewise)
//! ├ `maxevals`   : iteration (step) budget, `None` = unbounded
//! ├ `maxfnevals` : function-evaluation budget, `None` = unbounded
//! └ `strict`     : always `true` for this family
//!
//! [`BracketOptions::for_algorithm`] applies per-variant defaults; the
//! `with_*` builders override individual fields. [`BracketOptions::validate`]
//! is called once by the driver before any state is constructed.

use super::algorithms::BracketAlgorithm;
use super::errors::ToleranceError;

#[derive(Debug, Copy, Clone)]
pub struct BracketOptions {
    xatol:      f64,
    xrtol:      f64,
    atol:       f64,
    rtol:       f64,
    maxevals:   Option<usize>,
    maxfnevals: Option<usize>,
    strict:     bool,
}

impl BracketOptions {
    /// All tolerances zero, budgets unbounded.
    #[must_use]
    pub fn new() -> Self {
        Self {
            xatol:      0.0,
            xrtol:      0.0,
            atol:       0.0,
            rtol:       0.0,
            maxevals:   None,
            maxfnevals: None,
            strict:     true,
        }
    }

    /// Defaults for one algorithm variant: zero tolerances and unbounded
    /// budgets, except A42 (`xrtol = f64::EPSILON`, `maxevals = 15`) and
    /// false position (`maxevals = 100`).
    #[must_use]
    pub fn for_algorithm(algorithm: BracketAlgorithm) -> Self {
        let mut opts = Self::new();
        opts.xrtol = algorithm.default_xrtol();
        opts.maxevals = algorithm.default_maxevals();
        opts
    }

    pub fn with_xatol(mut self, v: f64) -> Self { self.xatol = v; self }
    pub fn with_xrtol(mut self, v: f64) -> Self { self.xrtol = v; self }
    pub fn with_atol (mut self, v: f64) -> Self { self.atol  = v; self }
    pub fn with_rtol (mut self, v: f64) -> Self { self.rtol  = v; self }
    pub fn with_maxevals(mut self, v: usize) -> Self { self.maxevals = Some(v); self }
    pub fn with_maxfnevals(mut self, v: usize) -> Self { self.maxfnevals = Some(v); self }

    #[inline] #[must_use] pub fn xatol(&self) -> f64 { self.xatol }
    #[inline] #[must_use] pub fn xrtol(&self) -> f64 { self.xrtol }
    #[inline] #[must_use] pub fn atol (&self) -> f64 { self.atol }
    #[inline] #[must_use] pub fn rtol (&self) -> f64 { self.rtol }
    #[inline] #[must_use] pub fn maxevals(&self) -> Option<usize> { self.maxevals }
    #[inline] #[must_use] pub fn maxfnevals(&self) -> Option<usize> { self.maxfnevals }
    #[inline] #[must_use] pub fn strict(&self) -> bool { self.strict }

    /// `true` when every tolerance is exactly zero, i.e. the caller wants
    /// the maximal achievable precision.
    #[inline]
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.xatol == 0.0 && self.xrtol == 0.0 && self.atol == 0.0 && self.rtol == 0.0
    }

    /// Validation performed once per call, before any state mutation.
    ///
    /// # Errors
    /// ┌ [`ToleranceError::InvalidXAbsTol`] - `xatol` < 0 or not finite
    /// ├ [`ToleranceError::InvalidXRelTol`] - `xrtol` < 0 or not finite
    /// ├ [`ToleranceError::InvalidAbsTol`]  - `atol`  < 0 or not finite
    /// ├ [`ToleranceError::InvalidRelTol`]  - `rtol`  < 0 or not finite
    /// ├ [`ToleranceError::InvalidMaxEvals`]   - `maxevals` == Some(0)
    /// └ [`ToleranceError::InvalidMaxFnEvals`] - `maxfnevals` == Some(0)
    pub fn validate(&self) -> Result<BracketOptions, ToleranceError> {
        if !(self.xatol.is_finite() && self.xatol >= 0.0) {
            return Err(ToleranceError::InvalidXAbsTol { got: self.xatol });
        }
        if !(self.xrtol.is_finite() && self.xrtol >= 0.0) {
            return Err(ToleranceError::InvalidXRelTol { got: self.xrtol });
        }
        if !(self.atol.is_finite() && self.atol >= 0.0) {
            return Err(ToleranceError::InvalidAbsTol { got: self.atol });
        }
        if !(self.rtol.is_finite() && self.rtol >= 0.0) {
            return Err(ToleranceError::InvalidRelTol { got: self.rtol });
        }
        if let Some(0) = self.maxevals {
            return Err(ToleranceError::InvalidMaxEvals);
        }
        if let Some(0) = self.maxfnevals {
            return Err(ToleranceError::InvalidMaxFnEvals);
        }
        Ok(*self)
    }
}

impl Default for BracketOptions {
    fn default() -> Self {
        Self::new()
    }
}
