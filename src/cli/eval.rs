//! Eval command implementation

use std::process::ExitCode;

use crate::config::{OutputFormat, TxmConfig};
use crate::transforms::{format_number, Transformer};

use super::compose::to_json;
use super::{compose_one, EXIT_ERROR, EXIT_SUCCESS};

/// Map each point through `transform` and print one result per line.
///
/// With `--format json` the mapped points are printed as a JSON array of
/// `[x, y]` pairs instead.
pub fn run_eval(transform: &str, points: &[(f64, f64)], config: &TxmConfig) -> ExitCode {
    let mut transformer = Transformer::new();
    if let Err(e) = compose_one(&mut transformer, transform, config.parse.strict) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }

    let mapped: Vec<(f64, f64)> = points.iter().map(|&(x, y)| transformer.eval(x, y)).collect();

    if config.output.format == OutputFormat::Json {
        let pairs: Vec<[f64; 2]> = mapped.iter().map(|&(x, y)| [x, y]).collect();
        return match to_json(&pairs, config.output.pretty) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::from(EXIT_SUCCESS)
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(EXIT_ERROR)
            }
        };
    }

    for (x, y) in mapped {
        println!("{}", format_point(x, y));
    }
    ExitCode::from(EXIT_SUCCESS)
}

fn format_point(x: f64, y: f64) -> String {
    format!("{}, {}", format_number(x), format_number(y))
}
