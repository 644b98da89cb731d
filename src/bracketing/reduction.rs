//! Galdino reduction factors for the false-position family.
//!
//! Classical false position stalls when one endpoint's function value
//! stagnates: the secant keeps hinging on the same point and convergence
//! degrades to linear. Each of the twelve factors here rescales the
//! retained endpoint's function value `fa` from the triple
//! `(fa, fb, fx)` to restore superlinear behavior.
//!
//! The table is resolved once at variant construction and never mutated;
//! three entries carry their traditional method names:
//!
//! ┌ 1  : pegasus
//! ├ 8  : illinois
//! └ 12 : anderson_bjork (default)

type ReductionFn = fn(f64, f64, f64) -> f64;

fn galdino_1(fa: f64, fb: f64, fx: f64) -> f64 {
    fa * fb / (fb + fx)
}
fn galdino_2(fa: f64, fb: f64, _fx: f64) -> f64 {
    (fa - fb) / 2.0
}
fn galdino_3(fa: f64, fb: f64, fx: f64) -> f64 {
    (fa - fx) / (2.0 + fx / fb)
}
fn galdino_4(fa: f64, fb: f64, fx: f64) -> f64 {
    (fa - fx) / (1.0 + fx / fb).powi(2)
}
fn galdino_5(fa: f64, fb: f64, fx: f64) -> f64 {
    (fa - fx) / (1.5 + fx / fb).powi(2)
}
fn galdino_6(fa: f64, fb: f64, fx: f64) -> f64 {
    (fa - fx) / (2.0 + fx / fb).powi(2)
}
fn galdino_7(fa: f64, fb: f64, fx: f64) -> f64 {
    (fa + fx) / (2.0 + fx / fb).powi(2)
}
fn galdino_8(fa: f64, _fb: f64, _fx: f64) -> f64 {
    fa / 2.0
}
fn galdino_9(fa: f64, fb: f64, fx: f64) -> f64 {
    fa / (1.0 + fx / fb).powi(2)
}
fn galdino_10(fa: f64, _fb: f64, fx: f64) -> f64 {
    (fa - fx) / 4.0
}
fn galdino_11(fa: f64, fb: f64, fx: f64) -> f64 {
    fx * fa / (fb + fx)
}
fn galdino_12(fa: f64, fb: f64, fx: f64) -> f64 {
    let ratio = 1.0 - fx / fb;
    fa * if ratio > 0.0 { ratio } else { 0.5 }
}

static GALDINO: [ReductionFn; 12] = [
    galdino_1, galdino_2, galdino_3, galdino_4, galdino_5, galdino_6,
    galdino_7, galdino_8, galdino_9, galdino_10, galdino_11, galdino_12,
];

/// One of the twelve Galdino reduction formulas, keyed `1..=12`.
///
/// # Construction
/// ├ [`ReductionFactor::from_id`] for a numeric key
/// └ the named aliases [`ReductionFactor::PEGASUS`] (1),
///   [`ReductionFactor::ILLINOIS`] (8), [`ReductionFactor::ANDERSON_BJORCK`] (12)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReductionFactor(u8);

impl ReductionFactor {
    pub const PEGASUS: ReductionFactor = ReductionFactor(1);
    pub const ILLINOIS: ReductionFactor = ReductionFactor(8);
    pub const ANDERSON_BJORCK: ReductionFactor = ReductionFactor(12);

    /// Resolve a numeric key. Returns `None` outside `1..=12`.
    #[must_use]
    pub fn from_id(id: u8) -> Option<ReductionFactor> {
        (1..=12).contains(&id).then_some(ReductionFactor(id))
    }

    #[inline]
    #[must_use]
    pub fn id(self) -> u8 {
        self.0
    }

    /// Rescaled function value for the retained endpoint.
    #[inline]
    pub(crate) fn apply(self, fa: f64, fb: f64, fx: f64) -> f64 {
        GALDINO[(self.0 - 1) as usize](fa, fb, fx)
    }
}

impl Default for ReductionFactor {
    fn default() -> Self {
        ReductionFactor::ANDERSON_BJORCK
    }
}
