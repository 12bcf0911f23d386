//! Application configuration from CLI flags and environment.

use clap::Parser;

/// ReplCalc-rs — interactive REPL calculator.
#[derive(Parser, Debug)]
#[command(name = "replcalc", version, about)]
pub struct AppConfig {
    /// Verbose logging (DEBUG-level session events on stderr).
    #[arg(short, long, env = "REPLCALC_VERBOSE")]
    pub verbose: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Log level for the tracing subscriber.
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}
