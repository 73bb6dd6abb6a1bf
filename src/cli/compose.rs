//! Compose command implementation

use std::process::ExitCode;

use serde::Serialize;

use crate::config::{OutputConfig, OutputFormat, TxmConfig};
use crate::transforms::{Matrix, Transformer};

use super::{compose_one, EXIT_ERROR, EXIT_SUCCESS};

/// Serialize to JSON, optionally pretty-printed.
pub(crate) fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Render a matrix in the configured output format.
pub(crate) fn render_matrix(matrix: &Matrix, output: &OutputConfig) -> Result<String, serde_json::Error> {
    match output.format {
        OutputFormat::String => Ok(matrix.to_string()),
        OutputFormat::Json => to_json(matrix, output.pretty),
        OutputFormat::Css | OutputFormat::TwoD | OutputFormat::Flat => {
            let order = output.format.order().unwrap_or_default();
            to_json(&matrix.to_layout(order), output.pretty)
        }
    }
}

/// Compose every transform string in order and print the result.
pub fn run_compose(transforms: &[String], config: &TxmConfig) -> ExitCode {
    let mut transformer = Transformer::new();

    for css in transforms {
        if let Err(e) = compose_one(&mut transformer, css, config.parse.strict) {
            eprintln!("Error: {}: {}", css, e);
            return ExitCode::from(EXIT_ERROR);
        }
    }

    match render_matrix(&transformer.matrix(), &config.output) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
