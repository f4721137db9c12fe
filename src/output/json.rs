//! JSON output renderer.
//!
//! Outputs a single `{"operation": ..., "principal": ..., "value": ...}`
//! object for machine consumers.

use crate::models::Calculation;
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, calc: &Calculation) -> String {
        let mut rendered =
            serde_json::to_string_pretty(calc).unwrap_or_else(|_| "{}".to_string());
        rendered.push('\n');
        rendered
    }
}
