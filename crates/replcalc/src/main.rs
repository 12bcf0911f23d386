//! ReplCalc-rs — interactive REPL calculator.

use anyhow::Result;
use replcalc_lib::{app, config};

fn main() -> Result<()> {
    let config = config::AppConfig::parse();

    // Initialize tracing on stderr so the console contract on stdout
    // stays byte-exact.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    app::run(&config)
}
