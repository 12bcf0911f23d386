//! Calculation variants and their textual renderings.
//!
//! A [`Calculation`] pairs two operands with one operator variant. The
//! variant set is a closed enum; dispatch is a `match` in [`Calculation::execute`]
//! rather than open-ended subclassing, so totality is compiler-checked.

use std::fmt;

use crate::error::CalcError;
use crate::operation;

/// Operator variant of a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcOp {
    /// `a + b`
    Add,
    /// `a - b`
    Subtract,
    /// `a * b`
    Multiply,
    /// `a / b`
    Divide,
    /// `a ** b`
    Power,
    /// `a % b`
    Modulus,
}

impl CalcOp {
    /// Variant name used in rendered output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "AddCalculation",
            Self::Subtract => "SubtractCalculation",
            Self::Multiply => "MultiplyCalculation",
            Self::Divide => "DivideCalculation",
            Self::Power => "PowerCalculation",
            Self::Modulus => "ModulusCalculation",
        }
    }

    /// Display symbol, identical to the registry token for all
    /// built-in variants.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "**",
            Self::Modulus => "%",
        }
    }
}

/// An immutable pairing of two operands with one operator variant.
///
/// Constructed by the registry on successful token lookup; never
/// mutated afterwards. Execution is pure, so repeated calls yield the
/// same result.
#[derive(Clone, Copy, PartialEq)]
pub struct Calculation {
    a: f64,
    op: CalcOp,
    b: f64,
}

impl Calculation {
    /// Create a calculation from two operands and an operator variant.
    #[must_use]
    pub fn new(a: f64, op: CalcOp, b: f64) -> Self {
        Self { a, op, b }
    }

    /// Addition variant constructor.
    #[must_use]
    pub fn add(a: f64, b: f64) -> Self {
        Self::new(a, CalcOp::Add, b)
    }

    /// Subtraction variant constructor.
    #[must_use]
    pub fn subtract(a: f64, b: f64) -> Self {
        Self::new(a, CalcOp::Subtract, b)
    }

    /// Multiplication variant constructor.
    #[must_use]
    pub fn multiply(a: f64, b: f64) -> Self {
        Self::new(a, CalcOp::Multiply, b)
    }

    /// Division variant constructor.
    #[must_use]
    pub fn divide(a: f64, b: f64) -> Self {
        Self::new(a, CalcOp::Divide, b)
    }

    /// Power variant constructor.
    #[must_use]
    pub fn power(a: f64, b: f64) -> Self {
        Self::new(a, CalcOp::Power, b)
    }

    /// Modulus variant constructor.
    #[must_use]
    pub fn modulus(a: f64, b: f64) -> Self {
        Self::new(a, CalcOp::Modulus, b)
    }

    /// The operator variant of this calculation.
    #[must_use]
    pub fn op(&self) -> CalcOp {
        self.op
    }

    /// Execute the operation on the stored operands.
    ///
    /// # Errors
    ///
    /// Propagates the operation library's zero-divisor errors
    /// unchanged.
    pub fn execute(&self) -> Result<f64, CalcError> {
        match self.op {
            CalcOp::Add => Ok(operation::add(self.a, self.b)),
            CalcOp::Subtract => Ok(operation::subtract(self.a, self.b)),
            CalcOp::Multiply => Ok(operation::multiply(self.a, self.b)),
            CalcOp::Divide => operation::divide(self.a, self.b),
            CalcOp::Power => Ok(operation::power(self.a, self.b)),
            CalcOp::Modulus => operation::modulus(self.a, self.b),
        }
    }

    /// Human-readable rendering: `"<Name>: <a> <op> <b> = <result>"`.
    ///
    /// The result is obtained by calling [`Calculation::execute`] at render
    /// time, never cached, so rendering fails exactly when execution
    /// fails.
    ///
    /// # Errors
    ///
    /// Propagates the execution error unchanged.
    pub fn render(&self) -> Result<String, CalcError> {
        let result = self.execute()?;
        Ok(format!(
            "{}: {:?} {} {:?} = {result:?}",
            self.op.name(),
            self.a,
            self.op.symbol(),
            self.b
        ))
    }
}

/// Developer rendering: `"<Name>(a=<a>, b=<b>)"`. Never executes, so
/// it always succeeds.
impl fmt::Debug for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(a={:?}, b={:?})", self.op.name(), self.a, self.b)
    }
}
