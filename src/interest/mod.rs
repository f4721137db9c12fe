//! Interest calculations.
//!
//! Two independent formulas with deliberately different conventions,
//! inherited from the reference scripts:
//!
//! - simple interest returns the interest component only and, in integer
//!   mode, truncates toward zero like C integer division;
//! - compound interest returns the total accrued amount (principal plus
//!   interest) in real-valued arithmetic.

use thiserror::Error;

use crate::models::{Arithmetic, Number};

/// Errors from the arithmetic itself, as opposed to input parsing.
#[derive(Error, Debug, PartialEq)]
pub enum MathError {
    /// A negative growth base raised to a fractional power has no
    /// real-valued result. Failing beats silently printing NaN.
    #[error(
        "rate {rate}% with fractional time {time} has no real-valued result \
         (1 + rate/100 is negative)"
    )]
    ComplexResult { rate: f64, time: f64 },

    /// The result overflowed or is otherwise not representable.
    #[error("result is not a finite number; inputs exceed the representable range")]
    NonFinite,

    /// 128-bit integer arithmetic overflowed.
    #[error("integer arithmetic overflowed; rerun with arithmetic = \"float\"")]
    Overflow,
}

/// Simple interest on integer inputs with truncating division.
///
/// `p * r * t / 100`, truncated toward zero. This reproduces the
/// reference behavior bit-exactly for integer inputs: 999, 5, 1 yields
/// 49, not 49.95 or 50.
pub fn simple_interest_integer(principal: i128, rate: i128, time: i128) -> Result<i128, MathError> {
    principal
        .checked_mul(rate)
        .and_then(|x| x.checked_mul(time))
        .map(|x| x / 100)
        .ok_or(MathError::Overflow)
}

/// Simple interest in floating point: `p * r * t / 100.0`.
pub fn simple_interest_real(principal: f64, rate: f64, time: f64) -> Result<f64, MathError> {
    let interest = principal * rate * time / 100.0;
    if interest.is_finite() {
        Ok(interest)
    } else {
        Err(MathError::NonFinite)
    }
}

/// Simple interest dispatcher honoring the configured arithmetic mode.
///
/// Integer mode applies only when every input parsed as an integer;
/// a single fractional input falls back to floating point.
pub fn simple_interest(
    principal: Number,
    rate: Number,
    time: Number,
    mode: Arithmetic,
) -> Result<Number, MathError> {
    match (mode, principal, rate, time) {
        (Arithmetic::Integer, Number::Integer(p), Number::Integer(r), Number::Integer(t)) => {
            simple_interest_integer(p, r, t).map(Number::Integer)
        }
        _ => simple_interest_real(principal.as_f64(), rate.as_f64(), time.as_f64())
            .map(Number::Real),
    }
}

/// Total compound amount: `p * (1 + r/100)^t` with a real-valued exponent.
///
/// Note the return convention: principal plus interest, not the interest
/// component alone.
pub fn compound_amount(principal: f64, time: f64, rate: f64) -> Result<f64, MathError> {
    let base = 1.0 + rate / 100.0;
    if base < 0.0 && time.fract() != 0.0 {
        return Err(MathError::ComplexResult { rate, time });
    }
    let amount = principal * base.powf(time);
    if amount.is_finite() {
        Ok(amount)
    } else {
        Err(MathError::NonFinite)
    }
}
