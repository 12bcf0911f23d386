//! Termination handling and exit codes.

use crate::session::Termination;

/// Process exit codes.
pub mod exit_codes {
    /// Successful termination. The session loop defines no failure
    /// code; exit, interrupt, and end-of-input all stop with success.
    pub const SUCCESS: i32 = 0;
}

/// Map a session termination to its process exit code.
#[allow(dead_code)]
#[must_use]
pub fn termination_code(termination: Termination) -> i32 {
    match termination {
        Termination::Exit | Termination::EndOfInput => exit_codes::SUCCESS,
    }
}
