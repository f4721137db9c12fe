//! Core value types shared by the calculators, config, and renderers.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which calculation a result came from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Operation {
    /// Interest component only: `p * r * t / 100`.
    SimpleInterest,
    /// Principal plus accrued interest: `p * (1 + r/100)^t`.
    CompoundAmount,
}

impl Operation {
    /// Human-readable label for terminal output.
    pub fn label(&self) -> &'static str {
        match self {
            Operation::SimpleInterest => "simple interest",
            Operation::CompoundAmount => "compound amount",
        }
    }
}

/// A parsed numeric input or computed result.
///
/// Integer-ness is tracked explicitly because the simple interest
/// calculator reproduces the reference behavior of C-style truncating
/// division when every input is an integer. Serializes untagged, so JSON
/// output carries `100` or `1102.5` rather than an enum wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i128),
    Real(f64),
}

impl Number {
    /// Widen to f64, losing integer-ness.
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(n) => *n as f64,
            Number::Real(x) => *x,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Render with a fixed number of decimal places for real values.
    /// Integer values print without a decimal point.
    pub fn format(&self, decimal_places: usize) -> String {
        match self {
            Number::Integer(n) => n.to_string(),
            Number::Real(x) => format!("{x:.decimal_places$}"),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{n}"),
            Number::Real(x) => write!(f, "{x}"),
        }
    }
}

/// Arithmetic mode for the simple interest calculator.
///
/// `Integer` reproduces the reference truncating behavior when all inputs
/// are integers; `Float` always computes in f64. The two modes produce
/// different output for fractional results (e.g. 999, 5, 1 yields 49 vs
/// 49.95), so the choice is an explicit config knob rather than a silent
/// unification.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ValueEnum,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Arithmetic {
    Integer,
    Float,
}

/// Output format options.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ValueEnum,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Format {
    /// One numeric line on stdout (the original scripts' contract).
    Plain,
    /// Colored breakdown of inputs and result.
    Terminal,
    /// A single JSON object for machine consumers.
    Json,
}

/// A completed calculation: the inputs that went in and the value that
/// came out. This is what renderers consume.
#[derive(Debug, Clone, Serialize)]
pub struct Calculation {
    pub operation: Operation,
    pub principal: f64,
    pub rate: f64,
    pub time: f64,
    pub value: Number,
}
