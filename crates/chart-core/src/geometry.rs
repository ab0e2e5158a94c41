// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for unit-circle and interpolation math.

use std::fmt;

/// A point in chart space (unit-circle space for pies, viewbox space for radars).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at unit distance from the origin at `angle` radians: `(cos θ, sin θ)`.
    #[inline]
    pub fn from_angle(angle: f64) -> Self {
        Self { x: angle.cos(), y: angle.sin() }
    }

    /// Per-coordinate [`lerp`] from `self` towards `target`.
    #[inline]
    pub fn lerp(self, target: Point, bias: f64) -> Self {
        Self { x: lerp(self.x, target.x, bias), y: lerp(self.y, target.y, bias) }
    }

    /// Point at `radius` from `center` along `angle` radians.
    #[inline]
    pub fn on_circle(center: Point, radius: f64, angle: f64) -> Self {
        let unit = Self::from_angle(angle);
        Self { x: center.x + radius * unit.x, y: center.y + radius * unit.y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// SVG path coordinate pair, `"x y"`.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// `origin + (target - origin) * bias`. Bias is not range-checked.
#[inline]
pub fn lerp(origin: f64, target: f64, bias: f64) -> f64 {
    origin + (target - origin) * bias
}

/// Divide, resolving a zero or non-finite result to `0.0` so NaN never reaches an attribute.
#[inline]
pub fn ratio_or_zero(num: f64, den: f64) -> f64 {
    if den == 0.0 {
        return 0.0;
    }
    let r = num / den;
    if r.is_finite() { r } else { 0.0 }
}

#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}
