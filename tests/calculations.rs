//! End-to-end calculation scenarios.
//!
//! These mirror the piped-input fixtures the original scripts were tested
//! with: newline-separated numbers in, one numeric line out.

use std::io::Cursor;

use accrue::input;
use accrue::interest;
use accrue::models::{Arithmetic, Calculation, Format, Number, Operation};
use accrue::output;

/// Pipe `feed` through the simple interest calculator and render plain.
fn simple_pipeline(feed: &str, mode: Arithmetic) -> String {
    let mut reader = Cursor::new(feed);
    let (p, r, t) = input::read_simple_inputs(&mut reader).unwrap();
    let value = interest::simple_interest(p, r, t, mode).unwrap();
    let calc = Calculation {
        operation: Operation::SimpleInterest,
        principal: p.as_f64(),
        rate: r.as_f64(),
        time: t.as_f64(),
        value,
    };
    output::render(Format::Plain, &calc, 2)
}

/// Pipe `feed` through the compound calculator and render plain.
fn compound_pipeline(feed: &str) -> String {
    let mut reader = Cursor::new(feed);
    let (p, t, r) = input::read_compound_inputs(&mut reader).unwrap();
    let amount = interest::compound_amount(p.as_f64(), t.as_f64(), r.as_f64()).unwrap();
    let calc = Calculation {
        operation: Operation::CompoundAmount,
        principal: p.as_f64(),
        rate: r.as_f64(),
        time: t.as_f64(),
        value: Number::Real(amount),
    };
    output::render(Format::Plain, &calc, 2)
}

// ---------------------------------------------------------------------------
// simple interest
// ---------------------------------------------------------------------------

#[test]
fn simple_reference_scenario() {
    assert_eq!(simple_pipeline("1000\n5\n2\n", Arithmetic::Integer), "100\n");
}

#[test]
fn simple_zero_principal() {
    assert_eq!(simple_pipeline("0\n5\n2\n", Arithmetic::Integer), "0\n");
}

#[test]
fn simple_zero_rate() {
    assert_eq!(simple_pipeline("1000\n0\n2\n", Arithmetic::Integer), "0\n");
}

#[test]
fn simple_zero_time() {
    assert_eq!(simple_pipeline("1000\n5\n0\n", Arithmetic::Integer), "0\n");
}

#[test]
fn simple_exact_division() {
    // 1500 * 7 * 3 / 100 = 315 exactly, no truncation ambiguity
    assert_eq!(simple_pipeline("1500\n7\n3\n", Arithmetic::Integer), "315\n");
}

#[test]
fn simple_truncating_vs_float_divergence() {
    // 999 * 5 * 1 / 100: the two arithmetic modes observably differ
    assert_eq!(simple_pipeline("999\n5\n1\n", Arithmetic::Integer), "49\n");
    assert_eq!(simple_pipeline("999\n5\n1\n", Arithmetic::Float), "49.95\n");
}

#[test]
fn simple_fractional_rate_uses_float_even_in_integer_mode() {
    assert_eq!(simple_pipeline("1000\n2.5\n2\n", Arithmetic::Integer), "50.00\n");
}

// ---------------------------------------------------------------------------
// compound interest
// ---------------------------------------------------------------------------

#[test]
fn compound_reference_scenario() {
    // 1000 * 1.05^2 = 1102.5, printed with two decimal places
    assert_eq!(compound_pipeline("1000\n2\n5\n"), "1102.50\n");
}

#[test]
fn compound_zero_time_returns_principal() {
    assert_eq!(compound_pipeline("1000\n0\n5\n"), "1000.00\n");
}

#[test]
fn compound_zero_rate_returns_principal() {
    assert_eq!(compound_pipeline("1000\n2\n0\n"), "1000.00\n");
}

#[test]
fn compound_returns_total_not_just_interest() {
    // The asymmetry between the calculators: compound includes principal
    let mut reader = Cursor::new("1000\n1\n5\n");
    let (p, t, r) = input::read_compound_inputs(&mut reader).unwrap();
    let amount = interest::compound_amount(p.as_f64(), t.as_f64(), r.as_f64()).unwrap();

    let simple = interest::simple_interest_integer(1000, 5, 1).unwrap() as f64;
    assert!(amount >= 1000.0 + simple);
}

#[test]
fn compound_monotonic_in_rate_and_time() {
    let mut previous = interest::compound_amount(1000.0, 2.0, 0.0).unwrap();
    for rate in 1..=20 {
        let amount = interest::compound_amount(1000.0, 2.0, rate as f64).unwrap();
        assert!(amount > previous, "rate {rate} should grow the amount");
        previous = amount;
    }

    let mut previous = interest::compound_amount(1000.0, 0.0, 5.0).unwrap();
    for time in 1..=20 {
        let amount = interest::compound_amount(1000.0, time as f64, 5.0).unwrap();
        assert!(amount > previous, "time {time} should grow the amount");
        previous = amount;
    }
}

#[test]
fn compound_domain_error_instead_of_nan() {
    let err = interest::compound_amount(1000.0, 2.5, -150.0).unwrap_err();
    assert!(matches!(err, interest::MathError::ComplexResult { .. }));
}

// ---------------------------------------------------------------------------
// failure modes
// ---------------------------------------------------------------------------

#[test]
fn non_numeric_input_fails_fast() {
    let mut reader = Cursor::new("not-a-number\n5\n2\n");
    let err = input::read_simple_inputs(&mut reader).unwrap_err();
    assert!(matches!(
        err,
        input::InputError::InvalidInput {
            field: "principal",
            ..
        }
    ));
}

#[test]
fn truncated_input_fails_fast() {
    let mut reader = Cursor::new("1000\n");
    let err = input::read_compound_inputs(&mut reader).unwrap_err();
    assert!(matches!(err, input::InputError::UnexpectedEof { field: "time" }));
}

#[test]
fn negative_principal_is_rejected() {
    let mut reader = Cursor::new("-1000\n2\n5\n");
    let err = input::read_compound_inputs(&mut reader).unwrap_err();
    assert!(matches!(err, input::InputError::Negative { .. }));
}
