//! Core argument types and error definitions
//!
//! Contains the `Arg` value accepted by every composition primitive and
//! `TransformError`, which is only produced by the strict parsing path.

use std::fmt;

/// Errors reported by strict transform parsing.
///
/// The lenient engine never produces these; malformed input there degrades
/// to identity defaults instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TransformError {
    /// Function name outside the supported set
    #[error("unknown transform function: {0}")]
    UnknownFunction(String),

    /// Argument count not accepted by this function
    #[error("{func}() does not accept {count} argument(s) (expected {expected})")]
    InvalidArity { func: String, count: usize, expected: String },

    /// Argument that does not coerce to a finite number
    #[error("invalid parameter for {func}(): {message}")]
    InvalidParameter { func: String, message: String },

    /// Text outside of any function call, or unbalanced parentheses
    #[error("transform syntax error: {0}")]
    SyntaxError(String),
}

/// A raw argument to a composition primitive.
///
/// Arguments arrive either as numbers from direct API calls or as unparsed
/// text from the CSS parser (possibly carrying a unit suffix such as `px` or
/// `deg`). `Missing` marks an omitted optional argument.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Arg {
    /// Already-numeric value
    Number(f64),
    /// Unparsed text, coerced on use
    Text(String),
    /// Omitted argument
    #[default]
    Missing,
}

impl Arg {
    /// Returns true for an omitted argument.
    pub fn is_missing(&self) -> bool {
        matches!(self, Arg::Missing)
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Number(n) => write!(f, "{}", n),
            Arg::Text(s) => f.write_str(s),
            Arg::Missing => f.write_str("<missing>"),
        }
    }
}

macro_rules! arg_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg::Number(value as f64)
                }
            }
        )*
    };
}

arg_from_number!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Text(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Text(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg::Text(value.clone())
    }
}

impl From<&Arg> for Arg {
    fn from(value: &Arg) -> Self {
        value.clone()
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Arg::Missing, Into::into)
    }
}
