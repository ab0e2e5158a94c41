// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (durations, viewboxes, default geometry).

/// Pie sweep animation length in milliseconds.
pub const PIE_DURATION_MS: f64 = 1000.0;
/// Bar growth animation length in milliseconds.
pub const BAR_DURATION_MS: f64 = 750.0;

/// Default donut-hole radius ratio (nearly a full disk with a pinhole).
pub const DEFAULT_DONUT: f64 = 0.005;
/// Default boundary-line width between wedges.
pub const DEFAULT_GAP: f64 = 0.015;

/// Radar viewbox edge length; geometry always uses this square.
pub const RADAR_VIEWBOX: f64 = 200.0;
/// Radar frame radius inside the viewbox.
pub const RADAR_RADIUS: f64 = 80.0;
/// Number of interactive rings per radar axis.
pub const RADAR_RINGS: usize = 5;
/// Ring radius at rest and while hovered.
pub const RING_RADIUS_IDLE: f64 = 1.5;
pub const RING_RADIUS_HOVER: f64 = 7.5;
/// Radar text size for axis labels and ring tooltips.
pub const RADAR_FONT_SIZE: f64 = 8.0;

/// Maximum bar label width in pixels before ellipsis.
pub const BAR_LABEL_MAX_WIDTH: f64 = 150.0;
/// Bar label offset below the container, in pixels.
pub const BAR_LABEL_OFFSET: f64 = 25.0;

/// A timestamp in milliseconds, as delivered by a host frame callback.
pub type Millis = f64;

/// A length relative to the container width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Percent(pub f64);

impl Percent {
    /// Resolve against a container extent in pixels.
    pub fn resolve(&self, extent: f64) -> f64 {
        extent * self.0 / 100.0
    }
}

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// SVG viewBox rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub const fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self { min_x, min_y, width, height }
    }

    /// Unit-circle box used by pie charts.
    pub const fn unit() -> Self {
        Self::new(-1.0, -1.0, 2.0, 2.0)
    }
}

impl std::fmt::Display for ViewBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.min_x, self.min_y, self.width, self.height)
    }
}
