//! transformatrix - Collapse 2D CSS/SVG transforms into one affine matrix
//!
//! This library provides functionality to:
//! - Compose translate, scale, rotate, skew and raw-matrix operations
//! - Parse CSS/SVG `transform` strings into those operations
//! - Export the result as a `matrix(...)` string, a layout array, or map points through it
//!
//! Malformed input degrades to identity defaults; strict parsing is opt-in.
//!
//! ```
//! use transformatrix::Transformer;
//!
//! let mut t = Transformer::new();
//! t.transform("translate(10px, 0) scale(2)");
//! assert_eq!(t.eval(1.0, 0.0), (12.0, 0.0));
//! assert_eq!(t.to_transform_string(), "matrix(2, 0, 0, 2, 10, 0)");
//! ```

pub mod cli;
pub mod config;
pub mod transforms;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use transforms::{
    parse_css_transform, parse_css_transform_strict, Arg, Matrix, MatrixLayout, MatrixOrder,
    MatrixValues, Operation, TransformError, TransformFunction, Transformer,
};
