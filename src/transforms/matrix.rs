//! 2D affine matrix state and its three exchange layouts
//!
//! The state is the 6-tuple `(a, b, c, d, tx, ty)` of the homogeneous matrix:
//! ```text
//! | a  c  tx |
//! | b  d  ty |
//! | 0  0  1  |
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::parsing::parse_matrix_entry;
use super::types::Arg;

/// A 2D affine transform in CSS `matrix()` argument order.
///
/// # Example
///
/// ```
/// use transformatrix::transforms::Matrix;
///
/// let m = Matrix::translation(10.0, 0.0).then(&Matrix::scaling(2.0, 2.0));
/// assert_eq!(m.apply_point(1.0, 0.0), (12.0, 0.0));
/// assert_eq!(m.to_string(), "matrix(2, 0, 0, 2, 10, 0)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix {
    /// The identity transform.
    pub const IDENTITY: Matrix = Matrix { a: 1.0, b: 0.0, c: 0.0, d: 1.0, tx: 0.0, ty: 0.0 };

    #[inline]
    pub fn new(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    /// Build from `[a, b, c, d, tx, ty]`.
    #[inline]
    pub fn from_css(v: [f64; 6]) -> Self {
        Self::new(v[0], v[1], v[2], v[3], v[4], v[5])
    }

    /// The state as `[a, b, c, d, tx, ty]`.
    #[inline]
    pub fn to_css(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.tx, self.ty]
    }

    /// Elementary translation.
    #[inline]
    pub fn translation(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// Elementary scale.
    #[inline]
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Elementary rotation about the origin. Angle in radians.
    #[inline]
    pub fn rotation(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Elementary horizontal skew. Angle in radians.
    #[inline]
    pub fn skewing_x(radians: f64) -> Self {
        Self::new(1.0, 0.0, radians.tan(), 1.0, 0.0, 0.0)
    }

    /// Elementary vertical skew. Angle in radians.
    #[inline]
    pub fn skewing_y(radians: f64) -> Self {
        Self::new(1.0, radians.tan(), 0.0, 1.0, 0.0, 0.0)
    }

    /// Post-compose `next` onto `self`, returning `self × next`.
    ///
    /// `next` acts in the coordinate frame already transformed by `self`,
    /// which is how successive CSS transform functions combine.
    pub fn then(&self, next: &Matrix) -> Matrix {
        let (a, b) = (self, next);
        Matrix {
            a: a.a * b.a + a.c * b.b,
            b: a.b * b.a + a.d * b.b,
            c: a.a * b.c + a.c * b.d,
            d: a.b * b.c + a.d * b.d,
            tx: a.a * b.tx + a.c * b.ty + a.tx,
            ty: a.b * b.tx + a.d * b.ty + a.ty,
        }
    }

    /// True when all six entries are finite.
    pub fn is_finite(&self) -> bool {
        self.to_css().iter().all(|n| n.is_finite())
    }

    /// Map a point through this transform.
    #[inline]
    pub fn apply_point(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.a + y * self.c + self.tx, x * self.b + y * self.d + self.ty)
    }

    /// Determinant of the linear part.
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Reshape into the requested layout.
    pub fn to_layout(&self, order: MatrixOrder) -> MatrixLayout {
        let Matrix { a, b, c, d, tx, ty } = *self;
        match order {
            MatrixOrder::Css => MatrixLayout::Css([a, b, c, d, tx, ty]),
            MatrixOrder::TwoD => {
                MatrixLayout::TwoD([[a, c, tx], [b, d, ty], [0.0, 0.0, 1.0]])
            }
            MatrixOrder::Flat => MatrixLayout::Flat([a, c, tx, b, d, ty, 0.0, 0.0, 1.0]),
        }
    }
}

impl fmt::Display for Matrix {
    /// Renders `matrix(a, b, c, d, tx, ty)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.to_css().iter().map(|n| format_number(*n)).collect();
        write!(f, "matrix({})", parts.join(", "))
    }
}

/// Serialize a number the way CSS tooling conventionally prints it.
///
/// Shortest round-trip digits, exponential notation outside
/// `[1e-6, 1e21)`, and no negative zero.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return n.to_string();
    }

    let s = format!("{:e}", n);
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => s,
    }
}

/// The three layouts a matrix can be exchanged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MatrixOrder {
    /// `[a, b, c, d, tx, ty]`
    #[default]
    #[serde(rename = "css")]
    Css,
    /// `[[a, c, tx], [b, d, ty], [0, 0, 1]]`
    #[serde(rename = "2d")]
    TwoD,
    /// `[a, c, tx, b, d, ty, 0, 0, 1]`
    #[serde(rename = "flat")]
    Flat,
}

impl FromStr for MatrixOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "css" => Ok(MatrixOrder::Css),
            "2d" => Ok(MatrixOrder::TwoD),
            "flat" => Ok(MatrixOrder::Flat),
            other => Err(format!("unknown matrix order '{}', expected css, 2d or flat", other)),
        }
    }
}

impl fmt::Display for MatrixOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MatrixOrder::Css => "css",
            MatrixOrder::TwoD => "2d",
            MatrixOrder::Flat => "flat",
        })
    }
}

/// A numeric matrix in one of the exchange layouts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatrixLayout {
    Css([f64; 6]),
    TwoD([[f64; 3]; 3]),
    Flat([f64; 9]),
}

impl MatrixLayout {
    pub fn order(&self) -> MatrixOrder {
        match self {
            MatrixLayout::Css(_) => MatrixOrder::Css,
            MatrixLayout::TwoD(_) => MatrixOrder::TwoD,
            MatrixLayout::Flat(_) => MatrixOrder::Flat,
        }
    }

    /// Read the affine part back out. The fixed bottom row is ignored.
    pub fn to_matrix(&self) -> Matrix {
        match self {
            MatrixLayout::Css(v) => Matrix::from_css(*v),
            MatrixLayout::TwoD(r) => Matrix::new(r[0][0], r[1][0], r[0][1], r[1][1], r[0][2], r[1][2]),
            MatrixLayout::Flat(v) => Matrix::new(v[0], v[3], v[1], v[4], v[2], v[5]),
        }
    }

    /// Flatten into one row-major list of the stored numbers.
    pub fn values(&self) -> Vec<f64> {
        match self {
            MatrixLayout::Css(v) => v.to_vec(),
            MatrixLayout::TwoD(rows) => rows.iter().flatten().copied().collect(),
            MatrixLayout::Flat(v) => v.to_vec(),
        }
    }
}

/// Stand-in for entries beyond the end of a short input.
static MISSING_ARG: Arg = Arg::Missing;

/// Raw, uncoerced matrix input for [`Transformer::apply_matrix`].
///
/// The variant names the layout explicitly; the shape of the data is never
/// used to guess it. Entries that fail to coerce fall back to the matching
/// identity entry.
///
/// [`Transformer::apply_matrix`]: super::engine::Transformer::apply_matrix
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixValues {
    Css(Vec<Arg>),
    TwoD(Vec<Vec<Arg>>),
    Flat(Vec<Arg>),
}

impl MatrixValues {
    pub fn css<I, A>(values: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Arg>,
    {
        MatrixValues::Css(values.into_iter().map(Into::into).collect())
    }

    pub fn flat<I, A>(values: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Arg>,
    {
        MatrixValues::Flat(values.into_iter().map(Into::into).collect())
    }

    pub fn two_d<R, I, A>(rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = A>,
        A: Into<Arg>,
    {
        MatrixValues::TwoD(
            rows.into_iter().map(|row| row.into_iter().map(Into::into).collect()).collect(),
        )
    }

    /// Interpret a flat argument list in the given order.
    ///
    /// For [`MatrixOrder::TwoD`] the list is read as consecutive rows of three.
    pub fn from_args(order: MatrixOrder, args: Vec<Arg>) -> Self {
        match order {
            MatrixOrder::Css => MatrixValues::Css(args),
            MatrixOrder::Flat => MatrixValues::Flat(args),
            MatrixOrder::TwoD => MatrixValues::TwoD(args.chunks(3).map(<[Arg]>::to_vec).collect()),
        }
    }

    pub fn order(&self) -> MatrixOrder {
        match self {
            MatrixValues::Css(_) => MatrixOrder::Css,
            MatrixValues::TwoD(_) => MatrixOrder::TwoD,
            MatrixValues::Flat(_) => MatrixOrder::Flat,
        }
    }

    /// Coerce into a matrix.
    pub fn to_matrix(&self) -> Matrix {
        let identity = Matrix::IDENTITY;

        match self {
            MatrixValues::Css(v) => {
                let at = |i: usize, default: f64| parse_matrix_entry(v.get(i).unwrap_or(&MISSING_ARG), default);
                Matrix::new(
                    at(0, identity.a),
                    at(1, identity.b),
                    at(2, identity.c),
                    at(3, identity.d),
                    at(4, identity.tx),
                    at(5, identity.ty),
                )
            }
            MatrixValues::TwoD(rows) => {
                let at = |r: usize, c: usize, default: f64| {
                    let arg = rows.get(r).and_then(|row| row.get(c)).unwrap_or(&MISSING_ARG);
                    parse_matrix_entry(arg, default)
                };
                Matrix::new(
                    at(0, 0, identity.a),
                    at(1, 0, identity.b),
                    at(0, 1, identity.c),
                    at(1, 1, identity.d),
                    at(0, 2, identity.tx),
                    at(1, 2, identity.ty),
                )
            }
            MatrixValues::Flat(v) => {
                let at = |i: usize, default: f64| parse_matrix_entry(v.get(i).unwrap_or(&MISSING_ARG), default);
                Matrix::new(
                    at(0, identity.a),
                    at(3, identity.b),
                    at(1, identity.c),
                    at(4, identity.d),
                    at(2, identity.tx),
                    at(5, identity.ty),
                )
            }
        }
    }
}

impl From<MatrixLayout> for MatrixValues {
    fn from(layout: MatrixLayout) -> Self {
        match layout {
            MatrixLayout::Css(v) => MatrixValues::css(v),
            MatrixLayout::TwoD(rows) => MatrixValues::two_d(rows),
            MatrixLayout::Flat(v) => MatrixValues::flat(v),
        }
    }
}

impl From<Matrix> for MatrixValues {
    fn from(m: Matrix) -> Self {
        MatrixValues::css(m.to_css())
    }
}

impl From<[f64; 6]> for MatrixValues {
    fn from(v: [f64; 6]) -> Self {
        MatrixValues::css(v)
    }
}
