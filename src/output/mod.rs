//! Output renderers: plain (one numeric line), terminal, JSON.

pub mod json;
pub mod plain;
pub mod terminal;

use crate::models::{Calculation, Format};

/// Trait for rendering a calculation result to an output format.
pub trait OutputRenderer {
    /// Render the calculation to a string.
    fn render(&self, calc: &Calculation) -> String;
}

/// Render using the renderer for the given format.
pub fn render(format: Format, calc: &Calculation, decimal_places: usize) -> String {
    match format {
        Format::Plain => plain::PlainRenderer { decimal_places }.render(calc),
        Format::Terminal => terminal::TerminalRenderer { decimal_places }.render(calc),
        Format::Json => json::JsonRenderer.render(calc),
    }
}
