//! Append-only trace sink for diagnostics.
//!
//! Never consulted for control flow: recording is a side channel for
//! inspecting how a bracket evolved. The bisection family records
//! `(x0, x1)` bracket pairs per accepted step; the other methods record
//! `(x, f(x))` pairs.

#[derive(Debug, Clone, Default)]
pub struct Tracks {
    brackets: Vec<(f64, f64)>,
    points: Vec<(f64, f64)>,
}

impl Tracks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_bracket(&mut self, x0: f64, x1: f64) {
        self.brackets.push((x0, x1));
    }

    pub(crate) fn record_point(&mut self, x: f64, fx: f64) {
        self.points.push((x, fx));
    }

    /// Recorded `(x0, x1)` bracket pairs, in acceptance order.
    #[must_use]
    pub fn brackets(&self) -> &[(f64, f64)] {
        &self.brackets
    }

    /// Recorded `(x, f(x))` pairs, in acceptance order.
    #[must_use]
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }
}
