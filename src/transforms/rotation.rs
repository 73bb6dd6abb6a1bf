//! Pure-rotation detection
//!
//! `Transformer::to_transform_string` could emit `rotate(θ)` for a pure rotation, but that
//! shortcut stays off: recovering θ with `acos(a)` loses the sign of the
//! angle. Only the predicate is kept.

use super::matrix::Matrix;

/// Absolute tolerance applied to each check.
pub const ROTATION_TOLERANCE: f64 = 1e-8;

/// True when `m` is a rotation about the origin: orthonormal columns,
/// determinant 1 and no translation.
pub fn is_rotation_matrix(m: &Matrix) -> bool {
    let near = |value: f64, target: f64| (value - target).abs() <= ROTATION_TOLERANCE;

    let checks = [
        // translation orthogonal to both basis vectors
        near(m.a * m.tx + m.b * m.ty, 0.0),
        near(m.c * m.tx + m.d * m.ty, 0.0),
        near(m.determinant(), 1.0),
        near(m.tx * m.tx + m.ty * m.ty, 0.0),
        // RᵗR = I
        near(m.a * m.a + m.b * m.b, 1.0),
        near(m.c * m.c + m.d * m.d, 1.0),
        near(m.a * m.c + m.b * m.d, 0.0),
    ];

    checks.iter().all(|ok| *ok)
}
