//! txm - Command-line tool for composing CSS/SVG transform strings

use std::process::ExitCode;

use transformatrix::cli;

fn main() -> ExitCode {
    cli::run()
}
