//! Pure arithmetic operations over `f64` operands.
//!
//! Each function is total over the float domain except `divide` and
//! `modulus`, which reject a zero divisor. No shared state; safe to
//! call from any thread.

use crate::error::CalcError;

/// Sum of two operands.
#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Difference of two operands.
#[must_use]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Product of two operands.
#[must_use]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Quotient of two operands.
///
/// # Errors
///
/// Returns [`CalcError::DivideByZero`] when `b` is zero.
pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    if b == 0.0 {
        return Err(CalcError::DivideByZero);
    }
    Ok(a / b)
}

/// `a` raised to the power of `b`, with native floating-point
/// semantics for fractional and negative exponents.
#[must_use]
pub fn power(a: f64, b: f64) -> f64 {
    a.powf(b)
}

/// Remainder of `a` divided by `b`, sign following the divisor.
///
/// `f64::rem` keeps the sign of the dividend; the adjustment below
/// moves the result into the divisor's sign range.
///
/// # Errors
///
/// Returns [`CalcError::ModulusByZero`] when `b` is zero.
pub fn modulus(a: f64, b: f64) -> Result<f64, CalcError> {
    if b == 0.0 {
        return Err(CalcError::ModulusByZero);
    }
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        Ok(r + b)
    } else {
        Ok(r)
    }
}
