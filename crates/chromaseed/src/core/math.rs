//! Numeric helpers shared by the color science modules.

/// The sign of the number, as `-1.0`, `0.0`, or `1.0`.
#[inline]
pub(crate) fn signum(n: f64) -> f64 {
    if n < 0.0 {
        -1.0
    } else if n == 0.0 {
        0.0
    } else {
        1.0
    }
}

/// Linearly interpolate between `start` and `stop` by `amount`.
#[inline]
pub(crate) fn lerp(start: f64, stop: f64, amount: f64) -> f64 {
    (1.0 - amount) * start + amount * stop
}

/// Normalize an angle in degrees to `0..360`.
#[inline]
pub fn sanitize_degrees(degrees: f64) -> f64 {
    let degrees = degrees % 360.0;
    if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    }
}

/// Normalize an integral angle in degrees to `0..360`.
#[inline]
pub(crate) fn sanitize_degrees_int(degrees: i32) -> i32 {
    degrees.rem_euclid(360)
}

/// The direction, `1.0` for increasing and `-1.0` for decreasing, that takes
/// the shorter way around the hue circle from `from` to `to`.
#[inline]
pub(crate) fn rotation_direction(from: f64, to: f64) -> f64 {
    let increasing = sanitize_degrees(to - from);
    if increasing <= 180.0 {
        1.0
    } else {
        -1.0
    }
}

/// The distance between two angles in degrees, which is at most 180.
#[inline]
pub fn difference_degrees(a: f64, b: f64) -> f64 {
    180.0 - ((a - b).abs() - 180.0).abs()
}

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
pub(crate) fn multiply(matrix: &[[f64; 3]; 3], vector: &[f64; 3]) -> [f64; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

/// Round half up, which is how the published reference values for this color
/// science were produced. Rust's `round` rounds half away from zero instead.
#[inline]
pub(crate) fn round_half_up(n: f64) -> f64 {
    (n + 0.5).floor()
}

// ====================================================================================================================
