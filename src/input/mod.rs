//! Reading and parsing the three numeric inputs.
//!
//! Each calculator reads its values in a fixed order, either from CLI
//! flags or line by line from stdin. Prompts go to stderr so stdout
//! carries nothing but the result, which keeps the output parseable by
//! scripted callers.

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::models::Number;

/// Errors while acquiring input, before any arithmetic happens.
#[derive(Error, Debug)]
pub enum InputError {
    /// The supplied value is not parseable as a number.
    #[error("invalid input for {field}: {value:?} is not a number")]
    InvalidInput { field: &'static str, value: String },

    /// Negative principal is rejected outright; a loan of less than
    /// nothing has no sensible interest.
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: String },

    /// Stdin closed before all three values were read.
    #[error("ran out of input while reading {field}")]
    UnexpectedEof { field: &'static str },

    #[error("failed to read {field}")]
    Io {
        field: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Parse one numeric value, preserving integer-ness.
///
/// Integers stay integers so the simple interest calculator can take its
/// truncating path; everything else parses as f64. Non-finite literals
/// (`inf`, `nan`) are rejected: they parse as f64 but are never valid
/// money amounts.
pub fn parse_number(field: &'static str, raw: &str) -> Result<Number, InputError> {
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<i128>() {
        return Ok(Number::Integer(n));
    }
    match trimmed.parse::<f64>() {
        Ok(x) if x.is_finite() => Ok(Number::Real(x)),
        _ => Err(InputError::InvalidInput {
            field,
            value: trimmed.to_string(),
        }),
    }
}

/// Reject a negative principal.
pub fn check_principal(value: Number) -> Result<(), InputError> {
    if value.as_f64() < 0.0 {
        return Err(InputError::Negative {
            field: "principal",
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Read one prompted value from the reader. The prompt goes to stderr.
pub fn read_value(
    reader: &mut impl BufRead,
    field: &'static str,
    prompt: &str,
) -> Result<Number, InputError> {
    let mut stderr = std::io::stderr();
    let _ = write!(stderr, "{prompt}");
    let _ = stderr.flush();

    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|e| InputError::Io { field, source: e })?;
    if read == 0 {
        return Err(InputError::UnexpectedEof { field });
    }
    parse_number(field, &line)
}

/// Read the simple interest inputs: principal, rate, time — in that order.
pub fn read_simple_inputs(
    reader: &mut impl BufRead,
) -> Result<(Number, Number, Number), InputError> {
    let principal = read_value(reader, "principal", "Enter the principal amount: ")?;
    check_principal(principal)?;
    let rate = read_value(reader, "rate", "Enter the annual interest rate (%): ")?;
    let time = read_value(reader, "time", "Enter the time period in years: ")?;
    Ok((principal, rate, time))
}

/// Read the compound interest inputs: principal, time, rate.
///
/// The order differs from simple interest on purpose; it matches the
/// reference scripts and any piped fixtures written against them.
pub fn read_compound_inputs(
    reader: &mut impl BufRead,
) -> Result<(Number, Number, Number), InputError> {
    let principal = read_value(reader, "principal", "Enter the principal amount: ")?;
    check_principal(principal)?;
    let time = read_value(reader, "time", "Enter the time period in years: ")?;
    let rate = read_value(reader, "rate", "Enter the annual interest rate (%): ")?;
    Ok((principal, time, rate))
}
