//! 2D transform composition
//!
//! Collapses CSS/SVG transform functions into one affine matrix.
//!
//! # Module Structure
//!
//! - [`types`] - Argument values and error definitions
//! - [`parsing`] - Numeric coercion with the offset and factor defaulting policies
//! - [`matrix`] - The 6-number matrix state and its CSS, 2D and flat layouts
//! - [`rotation`] - Pure-rotation predicate
//! - [`engine`] - The `Transformer` composition engine
//! - [`css`] - CSS transform string parsing and dispatch

pub mod css;
pub mod engine;
pub mod matrix;
pub mod parsing;
pub mod rotation;
pub mod types;

// Re-export main types at the module level for convenience
pub use css::{
    parse_css_transform, parse_css_transform_strict, validate_css_transform, Operation,
    TransformFunction,
};
pub use engine::Transformer;
pub use matrix::{format_number, Matrix, MatrixLayout, MatrixOrder, MatrixValues};
pub use parsing::{parse_angle, parse_factor, parse_offset};
pub use rotation::is_rotation_matrix;
pub use types::{Arg, TransformError};

/// Result type alias for strict transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;
