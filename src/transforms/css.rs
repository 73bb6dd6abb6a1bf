//! CSS/SVG transform string parsing
//!
//! Parses strings like `translate(15px, 400px) scale(0.3) rotate(85deg)` into
//! an ordered list of [`Operation`]s. Arguments stay raw strings; numeric
//! coercion happens in the engine.
//!
//! Two entry points:
//! - [`parse_css_transform`] is lenient: unknown functions and stray text are
//!   ignored, and arity is checked only at dispatch time.
//! - [`parse_css_transform_strict`] reports every problem as a
//!   [`TransformError`] and is meant for callers that want validation.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::engine::Transformer;
use super::matrix::MatrixValues;
use super::parsing::{try_parse_angle, try_parse_factor, try_parse_offset};
use super::types::{Arg, TransformError};

/// Calls to one of the supported functions, anywhere in the input.
static SUPPORTED_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(matrix|translateX|translateY|translate|scale|rotate|skewX|skewY)\s*\(([^)]*)\)")
        .expect("supported-call pattern is valid")
});

/// Any `name(args)` call, used by the strict scanner.
static ANY_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z_-][A-Za-z0-9_-]*)\s*\(([^()]*)\)").expect("call pattern is valid")
});

/// Argument separators: any run of whitespace and/or commas.
static ARG_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s,]+").expect("separator pattern is valid"));

/// The closed set of transform functions understood by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformFunction {
    Matrix,
    Translate,
    TranslateX,
    TranslateY,
    Scale,
    Rotate,
    SkewX,
    SkewY,
}

impl TransformFunction {
    pub const ALL: [TransformFunction; 8] = [
        TransformFunction::Matrix,
        TransformFunction::Translate,
        TransformFunction::TranslateX,
        TransformFunction::TranslateY,
        TransformFunction::Scale,
        TransformFunction::Rotate,
        TransformFunction::SkewX,
        TransformFunction::SkewY,
    ];

    /// The CSS function name.
    pub fn name(&self) -> &'static str {
        match self {
            TransformFunction::Matrix => "matrix",
            TransformFunction::Translate => "translate",
            TransformFunction::TranslateX => "translateX",
            TransformFunction::TranslateY => "translateY",
            TransformFunction::Scale => "scale",
            TransformFunction::Rotate => "rotate",
            TransformFunction::SkewX => "skewX",
            TransformFunction::SkewY => "skewY",
        }
    }

    /// Look up a function by its exact (case-sensitive) name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Whether a call with `count` arguments is dispatched.
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            TransformFunction::Matrix => count == 6,
            TransformFunction::Translate | TransformFunction::Scale => count == 1 || count == 2,
            TransformFunction::Rotate => count == 1 || count == 3,
            TransformFunction::TranslateX
            | TransformFunction::TranslateY
            | TransformFunction::SkewX
            | TransformFunction::SkewY => count == 1,
        }
    }

    /// Human-readable list of accepted argument counts.
    pub fn expected_arity(&self) -> &'static str {
        match self {
            TransformFunction::Matrix => "6",
            TransformFunction::Translate | TransformFunction::Scale => "1 or 2",
            TransformFunction::Rotate => "1 or 3",
            _ => "1",
        }
    }
}

impl fmt::Display for TransformFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One parsed function call with its raw arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub function: TransformFunction,
    pub args: Vec<String>,
}

impl Operation {
    pub fn new(function: TransformFunction, args: Vec<String>) -> Self {
        Self { function, args }
    }

    /// Whether this call has an argument count its function accepts.
    pub fn is_supported(&self) -> bool {
        self.function.accepts(self.args.len())
    }

    fn arg(&self, i: usize) -> Arg {
        Arg::from(self.args.get(i))
    }

    /// Compose this operation onto `transformer`.
    ///
    /// Returns `false` (and leaves `transformer` untouched) when the argument
    /// count is not supported for this function.
    pub fn apply_to(&self, transformer: &mut Transformer) -> bool {
        use TransformFunction as F;

        match (self.function, self.args.len()) {
            (F::Matrix, 6) => {
                transformer.apply_matrix(MatrixValues::css(&self.args));
            }
            (F::Translate, 1) | (F::TranslateX, 1) => {
                transformer.translate(self.arg(0), 0);
            }
            (F::Translate, 2) => {
                transformer.translate(self.arg(0), self.arg(1));
            }
            (F::TranslateY, 1) => {
                transformer.translate(0, self.arg(0));
            }
            (F::Scale, 1) => {
                transformer.scale(self.arg(0));
            }
            (F::Scale, 2) => {
                transformer.scale_xy(self.arg(0), self.arg(1));
            }
            (F::Rotate, 1) => {
                transformer.rotate(self.arg(0));
            }
            (F::Rotate, 3) => {
                transformer.rotate_about(self.arg(0), self.arg(1), self.arg(2));
            }
            (F::SkewX, 1) => {
                transformer.skew_x(self.arg(0));
            }
            (F::SkewY, 1) => {
                transformer.skew_y(self.arg(0));
            }
            (function, count) => {
                tracing::debug!(%function, count, "skipping call with unsupported argument count");
                return false;
            }
        }

        tracing::trace!(operation = %self, "applied");
        true
    }

    /// Check that every argument coerces cleanly for this function.
    fn validate_args(&self) -> Result<(), TransformError> {
        use TransformFunction as F;

        for (i, raw) in self.args.iter().enumerate() {
            let (parsed, kind) = match (self.function, i) {
                (F::Matrix, _) | (F::Scale, _) => (try_parse_factor(raw), "a number"),
                (F::Rotate, 0) | (F::SkewX, _) | (F::SkewY, _) => (try_parse_angle(raw), "an angle"),
                _ => (try_parse_offset(raw), "a length"),
            };
            if parsed.is_none() {
                return Err(TransformError::InvalidParameter {
                    func: self.function.name().to_string(),
                    message: format!("cannot parse '{}' as {}", raw, kind),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.function, self.args.join(", "))
    }
}

/// Split an argument list on whitespace and/or commas.
fn split_args(args: &str) -> Vec<String> {
    ARG_SEPARATOR
        .split(args)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Scan `css` for supported function calls, left to right.
///
/// Unknown functions and text between calls are ignored. The returned
/// operations are not arity-checked; see [`Operation::apply_to`].
///
/// # Example
///
/// ```
/// use transformatrix::transforms::{parse_css_transform, TransformFunction};
///
/// let ops = parse_css_transform("translate(15px, 400px) blur(2px) scale(0.3)");
/// assert_eq!(ops.len(), 2);
/// assert_eq!(ops[0].function, TransformFunction::Translate);
/// assert_eq!(ops[0].args, vec!["15px", "400px"]);
/// assert_eq!(ops[1].function, TransformFunction::Scale);
/// ```
pub fn parse_css_transform(css: &str) -> Vec<Operation> {
    SUPPORTED_CALL
        .captures_iter(css)
        .filter_map(|caps| {
            let function = TransformFunction::from_name(&caps[1])?;
            Some(Operation::new(function, split_args(&caps[2])))
        })
        .collect()
}

/// Check text lying between two calls.
fn check_gap(gap: &str) -> Result<(), TransformError> {
    if gap.contains(['(', ')']) {
        return Err(TransformError::SyntaxError("unmatched parenthesis".to_string()));
    }
    let stray = gap.trim_matches(|c: char| c.is_whitespace() || c == ',');
    if stray.is_empty() {
        Ok(())
    } else {
        Err(TransformError::SyntaxError(format!("unexpected '{}'", stray)))
    }
}

/// Validate `css` and collect every problem found.
///
/// Returns the operations that passed validation alongside the errors; an
/// empty error list means the whole string is well-formed.
pub fn validate_css_transform(css: &str) -> (Vec<Operation>, Vec<TransformError>) {
    let mut operations = Vec::new();
    let mut errors = Vec::new();
    let mut last_end = 0;

    for caps in ANY_CALL.captures_iter(css) {
        let whole = caps.get(0).map_or(0..0, |m| m.range());
        if let Err(e) = check_gap(&css[last_end..whole.start]) {
            errors.push(e);
        }
        last_end = whole.end;

        let name = &caps[1];
        let Some(function) = TransformFunction::from_name(name) else {
            errors.push(TransformError::UnknownFunction(name.to_string()));
            continue;
        };

        let operation = Operation::new(function, split_args(&caps[2]));
        if !operation.is_supported() {
            errors.push(TransformError::InvalidArity {
                func: function.name().to_string(),
                count: operation.args.len(),
                expected: function.expected_arity().to_string(),
            });
            continue;
        }
        match operation.validate_args() {
            Ok(()) => operations.push(operation),
            Err(e) => errors.push(e),
        }
    }

    if let Err(e) = check_gap(&css[last_end..]) {
        errors.push(e);
    }

    (operations, errors)
}

/// Parse `css`, rejecting anything the lenient parser would silently absorb.
///
/// Returns the first problem found.
pub fn parse_css_transform_strict(css: &str) -> Result<Vec<Operation>, TransformError> {
    let (operations, mut errors) = validate_css_transform(css);
    if errors.is_empty() {
        Ok(operations)
    } else {
        Err(errors.remove(0))
    }
}
