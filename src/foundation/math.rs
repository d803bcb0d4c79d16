use crate::foundation::core::Vec2;

/// Rounding applied to resolved pixel values.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Nearest integer, halves toward positive infinity.
    #[default]
    Round,
    /// Toward negative infinity.
    Floor,
    /// Toward positive infinity.
    Ceil,
}

/// Clamp `v` into `[min, max]` without panicking on inverted bounds or NaN.
#[inline]
pub fn clamp(v: f64, min: f64, max: f64) -> f64 {
    min.max(max.min(v))
}

/// `v` when finite, otherwise `fallback`.
#[inline]
pub fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}

/// Normalize an angle into `[0, 360)`. Non-finite input maps to 0.
pub fn norm360(deg: f64) -> f64 {
    if !deg.is_finite() {
        return 0.0;
    }
    let d = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if d >= 360.0 { 0.0 } else { d }
}

/// Normalize an angle into `(-180, 180]`.
pub fn norm180(deg: f64) -> f64 {
    let d = norm360(deg);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Smallest signed difference `a - b` in `(-180, 180]`.
pub fn angle_diff_deg(a: f64, b: f64) -> f64 {
    norm180(a - b)
}

/// Polar to Cartesian, angle in degrees measured in screen space (0° = right, 90° = down).
pub fn polar_to_cartesian(r: f64, theta_deg: f64) -> Vec2 {
    Vec2::from_angle(theta_deg.to_radians()) * r
}

/// Cartesian to polar, returning `(r, theta_deg)` with `theta_deg` in `[0, 360)`.
pub fn cartesian_to_polar(v: Vec2) -> (f64, f64) {
    (v.hypot(), norm360(v.atan2().to_degrees()))
}

/// Round `v` using `mode`.
pub fn round_by(mode: Rounding, v: f64) -> f64 {
    match mode {
        Rounding::Floor => v.floor(),
        Rounding::Ceil => v.ceil(),
        Rounding::Round => (v + 0.5).floor(),
    }
}

/// `|a - b| <= eps`.
#[inline]
pub fn almost_equal(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
