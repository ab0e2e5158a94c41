// File: crates/chart-core/src/bar.rs
// Summary: Bar chart widget: equal-width bars scaled to the measured container height.

use crate::animation::{Animation, Easing};
use crate::config::{BarConfig, ChartKind};
use crate::geometry::ratio_or_zero;
use crate::scene::{Label, LabelPlacement, Primitive, Scene, Shape, Style};
use crate::theme::Theme;
use crate::types::{Percent, BAR_DURATION_MS, BAR_LABEL_MAX_WIDTH, BAR_LABEL_OFFSET};
use crate::widget::{ChartEvent, HitTarget, HoverState, Viewport, Widget};

/// One bar at the last drawn progress, in container pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarGeom {
    pub y: f64,
    pub height: f64,
    pub hover: HoverState,
}

pub struct BarChart {
    config: BarConfig,
    bars: Vec<BarGeom>,
    /// Largest value in the series; heights are relative to it.
    max: f64,
    measured: (f64, f64),
    progress: f64,
}

impl BarChart {
    pub fn new(config: BarConfig) -> Self {
        // A non-positive max leaves every bar at zero height.
        let max = config.data.iter().copied().fold(0.0, f64::max);
        let bars = vec![BarGeom { y: 0.0, height: 0.0, hover: HoverState::Idle }; config.data.len()];
        tracing::debug!(bars = bars.len(), max, "bar chart constructed");
        Self { config, bars, max, measured: (0.0, 0.0), progress: 0.0 }
    }

    pub fn config(&self) -> &BarConfig { &self.config }

    pub fn bars(&self) -> &[BarGeom] { &self.bars }

    pub fn heights(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.height).collect()
    }

    pub fn progress(&self) -> f64 { self.progress }

    /// Width of each bar as a percentage of the container.
    pub fn bar_width_percent(&self) -> f64 {
        ratio_or_zero(100.0, self.bars.len() as f64)
    }
}

impl Widget for BarChart {
    fn kind(&self) -> ChartKind { ChartKind::Bar }

    fn animation(&self) -> Option<Animation> {
        Some(Animation::new(BAR_DURATION_MS, Easing::Linear))
    }

    fn draw(&mut self, progress: f64, viewport: &dyn Viewport) {
        // Measured every frame so late layout changes are picked up.
        let container = viewport.client_height();
        self.measured = (viewport.client_width(), container);
        self.progress = progress;
        for (bar, &value) in self.bars.iter_mut().zip(&self.config.data) {
            let height = (ratio_or_zero(value, self.max) * container * progress).max(0.0);
            bar.height = height;
            bar.y = container - height;
        }
    }

    fn scene(&self, theme: &Theme) -> Scene {
        let mut scene = Scene::new(ChartKind::Bar);
        scene.size = Some(self.measured);
        let w = self.bar_width_percent();

        scene.primitives = self
            .bars
            .iter()
            .enumerate()
            .map(|(i, bar)| {
                let fill = if bar.hover.is_hovered() {
                    theme.bar_hover
                } else {
                    self.config.palette.color_at(i)
                };
                Primitive::new(
                    Shape::Rect {
                        x: Percent(i as f64 * w),
                        y: bar.y,
                        width: Percent(w),
                        height: bar.height,
                    },
                    Style::fill(fill),
                )
                .with_hit(HitTarget::Bar(i))
            })
            .collect();

        scene.labels = self
            .bars
            .iter()
            .enumerate()
            .map(|(i, bar)| Label {
                text: self.config.labels.get(i).cloned().unwrap_or_default(),
                placement: LabelPlacement::Below {
                    left: i as f64 * w + w / 2.0,
                    offset_px: BAR_LABEL_OFFSET,
                },
                active: bar.hover.is_hovered(),
                max_width: Some(BAR_LABEL_MAX_WIDTH),
            })
            .collect();
        scene
    }

    fn pointer_enter(&mut self, target: HitTarget) -> Option<ChartEvent> {
        if let HitTarget::Bar(i) = target {
            if let Some(bar) = self.bars.get_mut(i) {
                bar.hover = HoverState::Hovered;
            }
        }
        None
    }

    fn pointer_leave(&mut self, target: HitTarget) {
        if let HitTarget::Bar(i) = target {
            if let Some(bar) = self.bars.get_mut(i) {
                bar.hover = HoverState::Idle;
            }
        }
    }
}
