//! End-to-end CLI integration tests.
//!
//! Drives the real binary with piped stdin and asserts on the exact
//! console contract. Every termination path exits with status 0.

use assert_cmd::Command;
use predicates::prelude::*;

fn replcalc() -> Command {
    Command::cargo_bin("replcalc").expect("binary not found")
}

#[test]
fn banner_and_exit() {
    replcalc()
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the REPL calculator!"))
        .stdout(predicate::str::contains(
            "Type 'help' for instructions or 'exit' to quit",
        ))
        .stdout(predicate::str::contains("Exiting REPL calculator. Goodbye!"));
}

#[test]
fn addition_scenario() {
    replcalc()
        .write_stdin("8.0 + 2.0\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Result: AddCalculation: 8.0 + 2.0 = 10.0",
        ))
        .stdout(predicate::str::contains("Exiting REPL calculator. Goodbye!"));
}

#[test]
fn division_by_zero_scenario() {
    replcalc()
        .write_stdin("8.0 / 0.0\nhistory\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cannot divide by zero."))
        .stdout(predicate::str::contains("Please enter a non-zero divisor."))
        .stdout(predicate::str::contains("No calculations performed yet."));
}

#[test]
fn unsupported_operator_scenario() {
    replcalc()
        .write_stdin("2 // 3\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unsupported calculation type: '//'."))
        .stdout(predicate::str::contains("'+, -, *, /, **, %'"))
        .stdout(predicate::str::contains(
            "Type 'help' for a list of supported operations.",
        ));
}

#[test]
fn format_error_scenario() {
    replcalc()
        .write_stdin("1 +\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid input. Please use the format: <number1> <operator> <number2>",
        ))
        .stdout(predicate::str::contains("Type 'help' for more information."));
}

#[test]
fn help_command() {
    replcalc()
        .write_stdin("help\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("REPL Calculator Help"))
        .stdout(predicate::str::contains("history : Shows the history of calculations."));
}

#[test]
fn history_flow() {
    replcalc()
        .write_stdin("8.0 + 2.0\n8.0 % 3.0\nhistory\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Calculation History:"))
        .stdout(predicate::str::contains("1. AddCalculation: 8.0 + 2.0 = 10.0"))
        .stdout(predicate::str::contains("2. ModulusCalculation: 8.0 % 3.0 = 2.0"));
}

#[test]
fn eof_terminates_with_success() {
    replcalc()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "EOF detected. Exiting calculator. Goodbye!",
        ));
}

#[test]
fn eof_after_calculation() {
    replcalc()
        .write_stdin("8.0 + 2.0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Result: AddCalculation: 8.0 + 2.0 = 10.0",
        ))
        .stdout(predicate::str::contains(
            "EOF detected. Exiting calculator. Goodbye!",
        ));
}

#[test]
fn commands_are_case_insensitive() {
    replcalc()
        .write_stdin("HELP\nEXIT\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("REPL Calculator Help"))
        .stdout(predicate::str::contains("Exiting REPL calculator. Goodbye!"));
}

#[test]
fn help_flag() {
    replcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("calculator"));
}

#[test]
fn version_flag() {
    replcalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("replcalc"));
}
