//! The composition engine
//!
//! [`Transformer`] owns a single [`Matrix`] and post-composes elementary
//! matrices onto it. Each call replaces the stored value; snapshots taken with
//! [`Transformer::matrix`] are unaffected by later calls.

use super::css::{parse_css_transform, parse_css_transform_strict};
use super::matrix::{Matrix, MatrixLayout, MatrixOrder, MatrixValues};
use super::parsing::{parse_angle, parse_factor, parse_offset};
use super::types::{Arg, TransformError};

/// Accumulates 2D transform operations into one affine matrix.
///
/// Arguments accept numbers or unit-suffixed strings. Malformed input never
/// fails; it falls back to `0` for offsets and angles and `1` for scale
/// factors.
///
/// # Example
///
/// ```
/// use transformatrix::transforms::Transformer;
///
/// let mut t = Transformer::new();
/// t.translate("15px", "400px").scale(0.3).rotate("85deg");
///
/// let mut parsed = Transformer::new();
/// parsed.transform("translate(15px, 400px) scale(0.3) rotate(85deg)");
///
/// assert_eq!(t.to_transform_string(), parsed.to_transform_string());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transformer {
    matrix: Matrix,
}

impl Transformer {
    /// Create an engine holding the identity transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine starting from an existing matrix.
    pub fn from_matrix(matrix: Matrix) -> Self {
        Self { matrix }
    }

    /// Snapshot of the current state.
    pub fn matrix(&self) -> Matrix {
        self.matrix
    }

    /// Return to the identity transform.
    pub fn reset(&mut self) -> &mut Self {
        self.matrix = Matrix::IDENTITY;
        self
    }

    /// Post-compose `next`. A product that leaves the finite range is
    /// dropped and the state is kept as it was.
    fn compose(&mut self, next: Matrix) -> &mut Self {
        let product = self.matrix.then(&next);
        if product.is_finite() {
            self.matrix = product;
        } else {
            tracing::debug!(current = %self.matrix, next = %next, "skipping non-finite composition");
        }
        self
    }

    /// Post-compose a raw matrix given in any [`MatrixOrder`].
    pub fn apply_matrix(&mut self, values: impl Into<MatrixValues>) -> &mut Self {
        let next = values.into().to_matrix();
        self.compose(next)
    }

    /// Translate by `(tx, ty)`. A trailing `px` is accepted.
    pub fn translate(&mut self, tx: impl Into<Arg>, ty: impl Into<Arg>) -> &mut Self {
        let tx = parse_offset(&tx.into());
        let ty = parse_offset(&ty.into());
        self.compose(Matrix::translation(tx, ty))
    }

    /// Uniform scale.
    pub fn scale(&mut self, factor: impl Into<Arg>) -> &mut Self {
        self.scale_xy(factor, Arg::Missing)
    }

    /// Scale by `(sx, sy)`. A missing `sy` repeats `sx`.
    pub fn scale_xy(&mut self, sx: impl Into<Arg>, sy: impl Into<Arg>) -> &mut Self {
        let sx = sx.into();
        let sy = sy.into();
        let sy = if sy.is_missing() { &sx } else { &sy };
        let next = Matrix::scaling(parse_factor(&sx), parse_factor(sy));
        self.compose(next)
    }

    /// Rotate about the origin. Bare numbers are degrees; strings may end in
    /// `deg` or `rad`.
    pub fn rotate(&mut self, angle: impl Into<Arg>) -> &mut Self {
        let radians = parse_angle(&angle.into());
        self.compose(Matrix::rotation(radians))
    }

    /// Rotate about `(x, y)`.
    ///
    /// A missing `x` rotates about the origin; a missing `y` is taken as `0`.
    pub fn rotate_about(
        &mut self,
        angle: impl Into<Arg>,
        x: impl Into<Arg>,
        y: impl Into<Arg>,
    ) -> &mut Self {
        let x = x.into();
        if x.is_missing() {
            return self.rotate(angle);
        }
        let cx = parse_offset(&x);
        let cy = parse_offset(&y.into());
        let radians = parse_angle(&angle.into());

        let about = Matrix::translation(cx, cy)
            .then(&Matrix::rotation(radians))
            .then(&Matrix::translation(-cx, -cy));
        self.compose(about)
    }

    /// Horizontal skew.
    pub fn skew_x(&mut self, angle: impl Into<Arg>) -> &mut Self {
        let radians = parse_angle(&angle.into());
        self.compose(Matrix::skewing_x(radians))
    }

    /// Vertical skew.
    pub fn skew_y(&mut self, angle: impl Into<Arg>) -> &mut Self {
        let radians = parse_angle(&angle.into());
        self.compose(Matrix::skewing_y(radians))
    }

    /// Compose every supported call found in a CSS/SVG transform string.
    ///
    /// Unknown functions and calls with an unsupported argument count are
    /// skipped.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn transform(&mut self, css: &str) -> &mut Self {
        for operation in parse_css_transform(css) {
            operation.apply_to(self);
        }
        self
    }

    /// Like [`transform`](Self::transform), but composes nothing unless the
    /// whole string validates.
    pub fn try_transform(&mut self, css: &str) -> Result<&mut Self, TransformError> {
        let operations = parse_css_transform_strict(css)?;
        for operation in &operations {
            operation.apply_to(self);
        }
        Ok(self)
    }

    /// Map a point through the current transform.
    pub fn eval(&self, x: f64, y: f64) -> (f64, f64) {
        self.matrix.apply_point(x, y)
    }

    /// Export the current state in the given layout.
    pub fn to_matrix(&self, order: MatrixOrder) -> MatrixLayout {
        self.matrix.to_layout(order)
    }

    /// Render the current state as `matrix(a, b, c, d, tx, ty)`.
    pub fn to_transform_string(&self) -> String {
        self.matrix.to_string()
    }
}

impl From<Matrix> for Transformer {
    fn from(matrix: Matrix) -> Self {
        Self::from_matrix(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_point(actual: (f64, f64), expected: (f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < EPS && (actual.1 - expected.1).abs() < EPS,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    fn assert_matrix(actual: Matrix, expected: Matrix) {
        for (a, e) in actual.to_css().iter().zip(expected.to_css()) {
            assert!((a - e).abs() < EPS, "expected {}, got {}", expected, actual);
        }
    }

    #[test]
    fn test_new_is_identity() {
        let t = Transformer::new();
        assert_eq!(t.matrix(), Matrix::IDENTITY);
        assert_eq!(t.eval(3.0, -4.0), (3.0, -4.0));
        assert_eq!(t.to_transform_string(), "matrix(1, 0, 0, 1, 0, 0)");
    }

    #[test]
    fn test_translate_then_scale() {
        let mut t = Transformer::new();
        t.translate(10, 0).scale_xy(2, 2);
        assert_eq!(t.matrix(), Matrix::new(2.0, 0.0, 0.0, 2.0, 10.0, 0.0));
        assert_eq!(t.eval(1.0, 0.0), (12.0, 0.0));
    }

    #[test]
    fn test_translate_strips_px() {
        let mut t = Transformer::new();
        t.translate("15px", "400px");
        assert_eq!(t.matrix(), Matrix::translation(15.0, 400.0));
    }

    #[test]
    fn test_translate_garbage_is_identity() {
        let mut t = Transformer::new();
        t.translate("abc", "xyz");
        assert_eq!(t.matrix(), Matrix::IDENTITY);
    }

    #[test]
    fn test_scale_uniform() {
        let mut a = Transformer::new();
        a.scale(3);
        let mut b = Transformer::new();
        b.scale_xy(3, 3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_scale_missing_y_repeats_x() {
        let mut t = Transformer::new();
        t.scale_xy("2", None::<f64>);
        assert_eq!(t.matrix(), Matrix::scaling(2.0, 2.0));
    }

    #[test]
    fn test_scale_garbage_is_identity() {
        let mut t = Transformer::new();
        t.scale("abc");
        assert_eq!(t.matrix(), Matrix::IDENTITY);
    }

    #[test]
    fn test_rotate_degrees_and_radians_agree() {
        let mut deg = Transformer::new();
        deg.rotate(90);
        let mut rad = Transformer::new();
        rad.rotate(format!("{}rad", std::f64::consts::FRAC_PI_2));
        assert_matrix(deg.matrix(), rad.matrix());
        assert_point(deg.eval(1.0, 0.0), (0.0, 1.0));
    }

    #[test]
    fn test_rotate_about_fixed_point() {
        let mut t = Transformer::new();
        t.rotate_about(180, 5, 5);
        assert_point(t.eval(5.0, 5.0), (5.0, 5.0));
        assert_point(t.eval(0.0, 0.0), (10.0, 10.0));
    }

    #[test]
    fn test_rotate_about_missing_y_is_zero() {
        let mut a = Transformer::new();
        a.rotate_about(90, 4, None::<f64>);
        let mut b = Transformer::new();
        b.rotate_about(90, 4, 0);
        assert_eq!(a, b);
        assert_point(a.eval(4.0, 0.0), (4.0, 0.0));
    }

    #[test]
    fn test_rotate_about_missing_center_is_plain_rotate() {
        let mut a = Transformer::new();
        a.rotate_about(30, None::<f64>, None::<f64>);
        let mut b = Transformer::new();
        b.rotate(30);
        assert_eq!(a, b);
    }

    #[test]
    fn test_overflowing_scale_is_skipped() {
        let mut t = Transformer::new();
        t.transform("scale(1e200) scale(1e200)");
        assert!(t.matrix().is_finite());
        assert_eq!(t.matrix(), Matrix::scaling(1e200, 1e200));
    }

    #[test]
    fn test_overflowing_translate_is_skipped() {
        let mut t = Transformer::new();
        t.translate(f64::MAX, 0).translate(f64::MAX, 0);
        assert_eq!(t.matrix(), Matrix::translation(f64::MAX, 0.0));
        assert!(!t.to_transform_string().contains("Infinity"));
    }

    #[test]
    fn test_composition_continues_after_skipped_overflow() {
        let mut t = Transformer::new();
        t.scale(1e200).scale(1e200).scale(1e-200);
        assert_matrix(t.matrix(), Matrix::IDENTITY);
    }

    #[test]
    fn test_rotate_about_huge_center_stays_finite() {
        let mut t = Transformer::new();
        t.translate(1, 2).rotate_about(90, f64::MAX, f64::MAX);
        assert!(t.matrix().is_finite());
    }

    #[test]
    fn test_unknown_units_take_defaults() {
        let mut t = Transformer::new();
        t.translate("10em", "5vh").rotate("45turn").scale("2pt");
        assert_eq!(t.matrix(), Matrix::IDENTITY);
    }

    #[test]
    fn test_skew_x() {
        let mut t = Transformer::new();
        t.skew_x(45);
        assert_point(t.eval(0.0, 1.0), (1.0, 1.0));
    }

    #[test]
    fn test_skew_y() {
        let mut t = Transformer::new();
        t.skew_y("45deg");
        assert_point(t.eval(1.0, 0.0), (1.0, 1.0));
    }

    #[test]
    fn test_skew_garbage_is_identity() {
        let mut t = Transformer::new();
        t.skew_x("steep").skew_y(None::<f64>);
        assert_eq!(t.matrix(), Matrix::IDENTITY);
    }

    #[test]
    fn test_apply_matrix_round_trip_all_orders() {
        let m = Matrix::new(0.5, 1.5, -2.0, 3.0, 7.0, -8.0);
        for order in [MatrixOrder::Css, MatrixOrder::TwoD, MatrixOrder::Flat] {
            let mut t = Transformer::new();
            t.apply_matrix(m.to_layout(order));
            assert_eq!(t.to_matrix(order), m.to_layout(order));
        }
    }

    #[test]
    fn test_apply_matrix_composes_on_right() {
        let mut t = Transformer::new();
        t.translate(10, 0).apply_matrix([2.0, 0.0, 0.0, 2.0, 0.0, 0.0]);
        assert_eq!(t.eval(1.0, 0.0), (12.0, 0.0));
    }

    #[test]
    fn test_snapshot_survives_later_composition() {
        let mut t = Transformer::new();
        t.translate(1, 2);
        let before = t.matrix();
        t.scale(5);
        assert_eq!(before, Matrix::translation(1.0, 2.0));
        assert_ne!(t.matrix(), before);
    }

    #[test]
    fn test_transform_string_equivalence() {
        let mut parsed = Transformer::new();
        parsed.transform("translate(15px, 400px) scale(0.3)").transform("rotate(85deg)");

        let mut direct = Transformer::new();
        direct.translate(15, 400).scale(0.3).rotate(85);

        assert_matrix(parsed.matrix(), direct.matrix());
    }

    #[test]
    fn test_transform_unsupported_arity_is_noop() {
        let mut t = Transformer::new();
        t.transform("translate(1,2,3)");
        assert_eq!(t.matrix(), Matrix::IDENTITY);
    }

    #[test]
    fn test_transform_skips_only_bad_call() {
        let mut t = Transformer::new();
        t.transform("translate(1,2,3) translate(4, 5)");
        assert_eq!(t.matrix(), Matrix::translation(4.0, 5.0));
    }

    #[test]
    fn test_transform_rotate_with_center() {
        let mut t = Transformer::new();
        t.transform("rotate(180, 5, 5)");
        assert_point(t.eval(0.0, 0.0), (10.0, 10.0));
    }

    #[test]
    fn test_transform_matrix_function() {
        let mut t = Transformer::new();
        t.transform("matrix(1, 2, 3, 4, 5, 6)");
        assert_eq!(t.matrix(), Matrix::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0));
    }

    #[test]
    fn test_try_transform_leaves_state_on_error() {
        let mut t = Transformer::new();
        t.translate(3, 3);
        let before = t.matrix();
        assert!(t.try_transform("scale(2) nonsense(1)").is_err());
        assert_eq!(t.matrix(), before);
    }

    #[test]
    fn test_try_transform_composes_when_valid() {
        let mut t = Transformer::new();
        t.try_transform("translate(10px) scale(2)").unwrap();
        assert_eq!(t.matrix(), Matrix::new(2.0, 0.0, 0.0, 2.0, 10.0, 0.0));
    }

    #[test]
    fn test_reset() {
        let mut t = Transformer::new();
        t.rotate(33).translate(1, 1).reset();
        assert_eq!(t.matrix(), Matrix::IDENTITY);
    }

    #[test]
    fn test_from_matrix() {
        let m = Matrix::scaling(2.0, 4.0);
        assert_eq!(Transformer::from(m).matrix(), m);
    }
}
