//! # replcalc-cli
//!
//! Console presentation for the REPL calculator: help text, banner and
//! goodbye lines, and history rendering.

pub mod help;
pub mod output;

pub use help::HELP_TEXT;
pub use output::render_history;
