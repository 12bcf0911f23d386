//! Operator registry: token to calculation-variant constructor.

use parking_lot::RwLock;
use tracing::debug;

use crate::calculation::Calculation;
use crate::error::CalcError;

/// Constructor producing a calculation variant from two operands.
pub type CalcConstructor = fn(f64, f64) -> Calculation;

/// Registry mapping operator tokens to calculation constructors.
///
/// New operators are added through [`CalculationRegistry::register`] without touching
/// the session loop. Tokens are case-sensitive and never normalized.
/// Entries keep registration order, so diagnostics list tokens in the
/// order they were added.
///
/// The table is lock-guarded; the registry is only mutated before the
/// session loop starts, but stays safe under multi-threaded hosts.
pub struct CalculationRegistry {
    entries: RwLock<Vec<(String, CalcConstructor)>>,
}

impl CalculationRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Create a registry populated with the six built-in operators in
    /// order: `+ - * / ** %`.
    #[must_use]
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        let builtins: [(&str, CalcConstructor); 6] = [
            ("+", Calculation::add),
            ("-", Calculation::subtract),
            ("*", Calculation::multiply),
            ("/", Calculation::divide),
            ("**", Calculation::power),
            ("%", Calculation::modulus),
        ];
        for (token, constructor) in builtins {
            registry
                .register(token, constructor)
                .expect("built-in operator tokens are unique");
        }
        registry
    }

    /// Register a constructor under an operator token.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::DuplicateRegistration`] if the token is
    /// already present; the existing mapping is left untouched.
    pub fn register(&self, token: &str, constructor: CalcConstructor) -> Result<(), CalcError> {
        let mut entries = self.entries.write();
        if entries.iter().any(|(t, _)| t == token) {
            return Err(CalcError::DuplicateRegistration {
                token: token.to_string(),
            });
        }
        entries.push((token.to_string(), constructor));
        Ok(())
    }

    /// Look up a token and construct a calculation bound to the two
    /// operands.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::UnsupportedOperator`] carrying the invalid
    /// token and the current token list if the token is not
    /// registered.
    pub fn create(&self, a: f64, token: &str, b: f64) -> Result<Calculation, CalcError> {
        let entries = self.entries.read();
        match entries.iter().find(|(t, _)| t == token) {
            Some((_, constructor)) => Ok(constructor(a, b)),
            None => {
                debug!(token, "operator lookup failed");
                Err(CalcError::UnsupportedOperator {
                    token: token.to_string(),
                    available: entries
                        .iter()
                        .map(|(t, _)| t.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                })
            }
        }
    }

    /// Registered tokens, in registration order.
    #[must_use]
    pub fn tokens(&self) -> Vec<String> {
        self.entries.read().iter().map(|(t, _)| t.clone()).collect()
    }
}

impl Default for CalculationRegistry {
    fn default() -> Self {
        Self::new()
    }
}
