//! Check command implementation

use std::process::ExitCode;

use crate::transforms::validate_css_transform;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Validate a transform string, listing recognised operations and problems.
pub fn run_check(transform: &str) -> ExitCode {
    let (operations, errors) = validate_css_transform(transform);

    for operation in &operations {
        println!("{}", operation);
    }

    if errors.is_empty() {
        eprintln!("OK: {} operation(s)", operations.len());
        return ExitCode::from(EXIT_SUCCESS);
    }

    eprintln!("Found {} problem(s):", errors.len());
    for error in &errors {
        eprintln!("  - {}", error);
    }
    ExitCode::from(EXIT_ERROR)
}
