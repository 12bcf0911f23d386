//! Application entry point and session wiring.

use anyhow::Result;
use tracing::debug;

use replcalc_cli::output::{BANNER, GOODBYE_EOF, GOODBYE_EXIT, GOODBYE_INTERRUPT};
use replcalc_core::CalculationRegistry;

use crate::config::AppConfig;
use crate::errors::exit_codes;
use crate::session::{Session, Termination};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    debug!(?config, "starting REPL session");
    install_interrupt_handler();

    let registry = CalculationRegistry::with_builtins();

    for line in BANNER {
        println!("{line}");
    }

    // The interrupt handler prints on its own thread, so the session
    // writes through an unlocked handle that locks per call.
    let stdin = std::io::stdin();
    let termination = {
        let mut session = Session::new(&registry, stdin.lock(), std::io::stdout());
        session.run()?
    };

    match termination {
        Termination::Exit => println!("{GOODBYE_EXIT}"),
        Termination::EndOfInput => println!("{GOODBYE_EOF}"),
    }

    Ok(())
}

/// Print the interrupt goodbye and stop with success status.
///
/// The session loop blocks in `read_line`, so Ctrl+C is handled out of
/// band rather than surfaced as a loop result.
fn install_interrupt_handler() {
    ctrlc::set_handler(|| {
        println!("{GOODBYE_INTERRUPT}");
        std::process::exit(exit_codes::SUCCESS);
    })
    .expect("Error setting Ctrl+C handler");
}
