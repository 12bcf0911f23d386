//! Fixed console strings and history rendering.

use std::fmt::Write as _;

use replcalc_core::Calculation;

/// Startup banner, one line per entry.
pub const BANNER: [&str; 2] = [
    "Welcome to the REPL calculator!",
    "Type 'help' for instructions or 'exit' to quit",
];

/// Goodbye line for the `exit` command.
pub const GOODBYE_EXIT: &str = "Exiting REPL calculator. Goodbye!";

/// Goodbye line for Ctrl+C. The misspelling is part of the console
/// contract.
pub const GOODBYE_INTERRUPT: &str = "Keyboard interupt detected. Exiting calculator. Goodbye!";

/// Goodbye line for end of input.
pub const GOODBYE_EOF: &str = "EOF detected. Exiting calculator. Goodbye!";

/// Render the session history, 1-indexed, in submission order.
///
/// Each entry is re-rendered at display time. History only ever holds
/// calculations that already rendered successfully, so the debug form
/// is a fallback, not an expected path.
#[must_use]
pub fn render_history(history: &[Calculation]) -> String {
    if history.is_empty() {
        return "No calculations performed yet.".to_string();
    }

    let mut out = String::from("Calculation History:");
    for (idx, calculation) in history.iter().enumerate() {
        let line = calculation
            .render()
            .unwrap_or_else(|_| format!("{calculation:?}"));
        let _ = write!(out, "\n{}. {line}", idx + 1);
    }
    out
}
