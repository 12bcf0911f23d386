//! Error taxonomy for registration, lookup, and execution.

/// Error type for calculator operations.
///
/// Display text is part of the console contract and must stay stable;
/// the session loop prints these messages verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// Division with a zero divisor.
    #[error("Cannot divide by zero.")]
    DivideByZero,

    /// Modulus with a zero divisor.
    #[error("Modulus: Cannot divide by zero.")]
    ModulusByZero,

    /// Operator token not present in the registry.
    #[error("Unsupported calculation type: '{token}'. Available calculation types: '{available}'")]
    UnsupportedOperator {
        /// The token that failed to resolve.
        token: String,
        /// Comma-joined list of registered tokens.
        available: String,
    },

    /// Operator token registered more than once.
    #[error("Calculation type '{token}' is already registered.")]
    DuplicateRegistration {
        /// The token that was already present.
        token: String,
    },
}

impl CalcError {
    /// Whether this is one of the two zero-divisor domain errors.
    ///
    /// The session loop prints a divisor-specific hint for these and a
    /// generic diagnostic for everything else.
    #[must_use]
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivideByZero | Self::ModulusByZero)
    }
}
