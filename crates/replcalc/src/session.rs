//! Interactive session loop: classify, parse, dispatch, record.

use std::io::{self, BufRead, Write};

use tracing::debug;

use replcalc_cli::help::HELP_TEXT;
use replcalc_cli::output::render_history;
use replcalc_core::{Calculation, CalculationRegistry};

/// Why the session loop stopped.
///
/// Termination is not an error; every variant exits the process with
/// status 0. Keeping it out of the error channel means "stop the loop"
/// and "report a problem and continue" never share a propagation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The user typed `exit`.
    Exit,
    /// The input stream ended.
    EndOfInput,
}

/// One interactive session over a registry and a pair of streams.
///
/// The registry is read-only for the lifetime of the session; the
/// history is append-only and holds only calculations that rendered
/// successfully.
pub struct Session<'a, R, W> {
    registry: &'a CalculationRegistry,
    input: R,
    output: W,
    history: Vec<Calculation>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Create a session over the given registry and streams.
    pub fn new(registry: &'a CalculationRegistry, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
            history: Vec::new(),
        }
    }

    /// Calculations executed so far, in submission order.
    #[must_use]
    pub fn history(&self) -> &[Calculation] {
        &self.history
    }

    /// Run until the user exits or the input stream ends.
    ///
    /// # Errors
    ///
    /// Returns an I/O error only if a stream fails; every
    /// calculator-level problem is printed as a diagnostic and the
    /// loop continues.
    pub fn run(&mut self) -> io::Result<Termination> {
        loop {
            write!(self.output, ">> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(Termination::EndOfInput);
            }

            // Lower-casing the whole line keeps command matching
            // case-insensitive; numeric operands are unaffected.
            let line = line.trim().to_lowercase();

            match line.as_str() {
                "" => {}
                "help" => writeln!(self.output, "{HELP_TEXT}")?,
                "history" => writeln!(self.output, "{}", render_history(&self.history))?,
                "exit" => return Ok(Termination::Exit),
                expression => self.dispatch(expression)?,
            }
        }
    }

    /// Parse one expression, resolve it through the registry, execute
    /// via rendering, and record it on success.
    fn dispatch(&mut self, expression: &str) -> io::Result<()> {
        let Some((a, token, b)) = parse_expression(expression) else {
            debug!(expression, "malformed expression");
            writeln!(
                self.output,
                "Invalid input. Please use the format: <number1> <operator> <number2>"
            )?;
            writeln!(self.output, "Type 'help' for more information.")?;
            return Ok(());
        };

        let calculation = match self.registry.create(a, token, b) {
            Ok(calculation) => calculation,
            Err(err) => {
                writeln!(self.output, "{err}")?;
                writeln!(self.output, "Type 'help' for a list of supported operations.")?;
                return Ok(());
            }
        };

        // Rendering executes the calculation, so domain errors surface
        // here.
        match calculation.render() {
            Ok(rendered) => {
                writeln!(self.output, "Result: {rendered}")?;
                self.history.push(calculation);
            }
            Err(err) if err.is_division_by_zero() => {
                writeln!(self.output, "{err}")?;
                writeln!(self.output, "Please enter a non-zero divisor.")?;
            }
            Err(err) => {
                writeln!(self.output, "An error occurred during calculation: {err}")?;
                writeln!(self.output, "Please try again.")?;
            }
        }
        Ok(())
    }
}

/// Split an expression into `(operand, operator token, operand)`.
///
/// Returns `None` unless the input has exactly three
/// whitespace-separated tokens and both operands parse as floats.
fn parse_expression(expression: &str) -> Option<(f64, &str, f64)> {
    let mut tokens = expression.split_whitespace();
    let (Some(a), Some(token), Some(b), None) =
        (tokens.next(), tokens.next(), tokens.next(), tokens.next())
    else {
        return None;
    };
    Some((a.parse().ok()?, token, b.parse().ok()?))
}
