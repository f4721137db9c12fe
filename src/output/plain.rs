//! Plain renderer: exactly one numeric line.
//!
//! This is the contract the original scripts had — scripted callers read
//! the final line of stdout and compare it against an expected value.

use crate::models::Calculation;
use crate::output::OutputRenderer;

/// Plain output renderer.
pub struct PlainRenderer {
    pub decimal_places: usize,
}

impl OutputRenderer for PlainRenderer {
    fn render(&self, calc: &Calculation) -> String {
        format!("{}\n", calc.value.format(self.decimal_places))
    }
}
