// File: crates/chart-core/src/widget.rs
// Summary: Widget trait shared by pie/bar/radar charts, hover state, events and viewport measurement.

use crate::animation::Animation;
use crate::config::ChartKind;
use crate::scene::Scene;
use crate::theme::Theme;

/// Identifies an interactive primitive inside one chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HitTarget {
    Wedge(usize),
    Bar(usize),
    /// Ring `step` (1..=5) on radar axis `axis`.
    Ring { axis: usize, step: usize },
}

/// Transient per-primitive hover state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovered,
}

impl HoverState {
    pub fn is_hovered(&self) -> bool { matches!(self, HoverState::Hovered) }
}

/// Notifications emitted to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChartEvent {
    /// A pie wedge was hovered.
    SectionHover { index: usize },
}

impl ChartEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ChartEvent::SectionHover { .. } => "section-hover",
        }
    }
}

/// Live measurement of the display container.
pub trait Viewport {
    fn client_width(&self) -> f64;
    fn client_height(&self) -> f64;
}

/// A container of known, unchanging size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedViewport {
    pub width: f64,
    pub height: f64,
}

impl FixedViewport {
    pub const fn new(width: f64, height: f64) -> Self { Self { width, height } }
}

impl Viewport for FixedViewport {
    fn client_width(&self) -> f64 { self.width }
    fn client_height(&self) -> f64 { self.height }
}

/// A chart that draws itself at a given animation progress and reacts to hover.
pub trait Widget {
    fn kind(&self) -> ChartKind;

    /// `None` for widgets that render their final state immediately.
    fn animation(&self) -> Option<Animation>;

    /// Recompute geometry at `progress` in `[0, 1]`.
    fn draw(&mut self, progress: f64, viewport: &dyn Viewport);

    /// Snapshot of the current state.
    fn scene(&self, theme: &Theme) -> Scene;

    /// Pointer entered `target`. Unknown targets are ignored.
    fn pointer_enter(&mut self, target: HitTarget) -> Option<ChartEvent>;

    /// Pointer left `target`.
    fn pointer_leave(&mut self, target: HitTarget);
}
