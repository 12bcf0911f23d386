//! # replcalc-core
//!
//! Core library for the ReplCalc-rs interactive calculator.
//! Implements the arithmetic operation library, the calculation
//! variants, and the operator registry.

pub mod calculation;
pub mod error;
pub mod operation;
pub mod registry;

// Re-exports
pub use calculation::{CalcOp, Calculation};
pub use error::CalcError;
pub use registry::{CalcConstructor, CalculationRegistry};

/// Evaluate a single expression with the built-in operators.
///
/// This is a convenience function for simple use cases. For a
/// long-lived registry (custom operators, session history), use
/// [`CalculationRegistry`] directly.
///
/// # Errors
///
/// Returns [`CalcError::UnsupportedOperator`] for an unknown token and
/// the matching zero-divisor error for `/` or `%` with a zero divisor.
///
/// # Example
/// ```
/// assert_eq!(replcalc_core::evaluate(8.0, "+", 2.0).unwrap(), 10.0);
/// assert_eq!(replcalc_core::evaluate(2.0, "**", 3.0).unwrap(), 8.0);
/// ```
pub fn evaluate(a: f64, token: &str, b: f64) -> Result<f64, CalcError> {
    CalculationRegistry::with_builtins()
        .create(a, token, b)?
        .execute()
}
