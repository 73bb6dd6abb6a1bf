//! Configuration schema types for `txm.toml`

use serde::{Deserialize, Serialize};

use crate::transforms::MatrixOrder;

/// How the CLI prints a composed matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `matrix(a, b, c, d, tx, ty)`
    #[default]
    String,
    /// `[a, b, c, d, tx, ty]`
    Css,
    /// Nested 3x3 rows
    #[serde(rename = "2d")]
    #[value(name = "2d")]
    TwoD,
    /// Row-major 9 values
    Flat,
    /// `{"a": .., "b": .., "c": .., "d": .., "tx": .., "ty": ..}`
    Json,
}

impl OutputFormat {
    /// The matrix layout this format prints, if it is a layout format.
    pub fn order(&self) -> Option<MatrixOrder> {
        match self {
            OutputFormat::Css => Some(MatrixOrder::Css),
            OutputFormat::TwoD => Some(MatrixOrder::TwoD),
            OutputFormat::Flat => Some(MatrixOrder::Flat),
            OutputFormat::String | OutputFormat::Json => None,
        }
    }
}

/// `[output]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output format for `compose`
    #[serde(default)]
    pub format: OutputFormat,
    /// Pretty-print JSON and layout output
    #[serde(default)]
    pub pretty: bool,
}

/// `[parse]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParseConfig {
    /// Reject malformed transform strings instead of degrading to defaults
    #[serde(default)]
    pub strict: bool,
}

/// Root of `txm.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TxmConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub parse: ParseConfig,
}
