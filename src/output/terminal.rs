//! Terminal renderer: colored breakdown of inputs and result.

use colored::Colorize;

use crate::models::{Calculation, Operation};
use crate::output::OutputRenderer;

/// Terminal output renderer with colored, flowing text.
pub struct TerminalRenderer {
    pub decimal_places: usize,
}

/// Echo an input value without trailing `.0` noise for whole numbers.
fn fmt_input(x: f64) -> String {
    if x.fract() == 0.0 && x.abs() < 1e15 {
        format!("{x:.0}")
    } else {
        format!("{x}")
    }
}

impl OutputRenderer for TerminalRenderer {
    fn render(&self, calc: &Calculation) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "  {}  {}\n",
            "principal:".dimmed(),
            fmt_input(calc.principal)
        ));
        match calc.operation {
            Operation::SimpleInterest => {
                output.push_str(&format!(
                    "  {}       {}%\n",
                    "rate:".dimmed(),
                    fmt_input(calc.rate)
                ));
                output.push_str(&format!(
                    "  {}       {} year(s)\n",
                    "time:".dimmed(),
                    fmt_input(calc.time)
                ));
            }
            Operation::CompoundAmount => {
                // Mirrors the input order: time before rate
                output.push_str(&format!(
                    "  {}       {} year(s)\n",
                    "time:".dimmed(),
                    fmt_input(calc.time)
                ));
                output.push_str(&format!(
                    "  {}       {}%\n",
                    "rate:".dimmed(),
                    fmt_input(calc.rate)
                ));
            }
        }

        output.push_str(&format!(
            "  {} {}: {}\n",
            "✔".green().bold(),
            calc.operation.label().bold(),
            calc.value.format(self.decimal_places).green().bold(),
        ));

        output
    }
}
