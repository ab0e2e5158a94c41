// File: crates/chart-core/src/pie.rs
// Summary: Pie chart widget: proportional wedges, donut mask with boundary gaps, midpoint labels.

use std::f64::consts::PI;

use crate::animation::{Animation, Easing};
use crate::config::{ChartKind, PieConfig};
use crate::geometry::{ratio_or_zero, Point};
use crate::scene::{Label, LabelPlacement, Mask, PathData, Primitive, Scene, Shape, Style};
use crate::theme::Theme;
use crate::types::{ViewBox, PIE_DURATION_MS};
use crate::widget::{ChartEvent, HitTarget, HoverState, Viewport, Widget};

/// Ratios this close to 1 are drawn as a full disk.
const FULL_CIRCLE_EPS: f64 = 1e-12;
/// Opacity of a hovered wedge.
const HOVER_OPACITY: f64 = 0.5;

/// Geometry of one wedge at the last drawn progress.
#[derive(Clone, Debug, PartialEq)]
pub struct Wedge {
    pub start_angle: f64,
    /// Swept angle in radians.
    pub sweep: f64,
    /// Boundary point on the unit circle where the wedge starts.
    pub start: Point,
    pub end: Point,
    pub path: PathData,
    pub hover: HoverState,
}

pub struct PieChart {
    config: PieConfig,
    mask_id: String,
    wedges: Vec<Wedge>,
    /// Per-label position, set once the animation reaches progress 1.
    placements: Vec<LabelPlacement>,
    active: Vec<bool>,
    progress: f64,
}

impl PieChart {
    pub fn new(config: PieConfig) -> Self {
        let n = config.data.len();
        let labels = config.labels.len();
        let mut chart = Self {
            mask_id: "pie-mask".to_string(),
            wedges: Vec::with_capacity(n),
            placements: vec![LabelPlacement::Unplaced; labels],
            active: vec![false; labels],
            progress: 0.0,
            config,
        };
        chart.layout(0.0);
        tracing::debug!(wedges = n, labels, "pie chart constructed");
        chart
    }

    /// Use a distinct mask id when several pies share one document.
    pub fn with_mask_id(mut self, id: impl Into<String>) -> Self {
        self.mask_id = id.into();
        self
    }

    pub fn config(&self) -> &PieConfig { &self.config }

    pub fn wedges(&self) -> &[Wedge] { &self.wedges }

    pub fn progress(&self) -> f64 { self.progress }

    /// Swept angle of every wedge, in order.
    pub fn sweeps(&self) -> Vec<f64> {
        self.wedges.iter().map(|w| w.sweep).collect()
    }

    pub fn label_placement(&self, k: usize) -> Option<LabelPlacement> {
        self.placements.get(k).copied()
    }

    pub fn is_label_active(&self, k: usize) -> bool {
        self.active.get(k).copied().unwrap_or(false)
    }

    fn layout(&mut self, progress: f64) {
        // Normalize by the largest magnitude so the sum stays finite.
        let scale = self.config.data.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
        let total: f64 = self.config.data.iter().map(|v| ratio_or_zero(*v, scale)).sum();
        let hovers: Vec<HoverState> = self.wedges.iter().map(|w| w.hover).collect();
        self.wedges.clear();
        self.progress = progress;

        let mut angle = -PI / 2.0;
        let mut start = Point::new(0.0, -1.0);
        for (k, &value) in self.config.data.iter().enumerate() {
            let share = ratio_or_zero(ratio_or_zero(value, scale), total);
            let ratio = share * progress;
            let sweep = ratio * 2.0 * PI;
            if progress >= 1.0 {
                if let Some(slot) = self.placements.get_mut(k) {
                    // Zero-sweep wedges get no label.
                    if share != 0.0 {
                        *slot = label_position(angle + ratio * PI);
                    }
                }
            }
            let start_angle = angle;
            angle += sweep;
            let end = Point::from_angle(angle);
            let path = wedge_path(start, end, start_angle, ratio);
            self.wedges.push(Wedge {
                start_angle,
                sweep,
                start,
                end,
                path,
                hover: hovers.get(k).copied().unwrap_or_default(),
            });
            start = end;
        }
    }
}

/// `M 0 0 L start A 1 1 0 large 1 end L 0 0`; a full turn is split into two half arcs.
fn wedge_path(start: Point, end: Point, start_angle: f64, ratio: f64) -> PathData {
    let path = PathData::new().move_to(Point::ORIGIN).line_to(start);
    let path = if ratio >= 1.0 - FULL_CIRCLE_EPS {
        let mid = Point::from_angle(start_angle + ratio * PI);
        path.arc_to(1.0, true, true, mid).arc_to(1.0, true, true, end)
    } else {
        path.arc_to(1.0, ratio > 0.5, true, end)
    };
    path.line_to(Point::ORIGIN)
}

/// Percent offsets inside the container for a label at `angle`.
fn label_position(angle: f64) -> LabelPlacement {
    let p = Point::from_angle(angle);
    LabelPlacement::Center {
        left: (p.x * 0.5 + 0.5) * 100.0,
        top: (p.y * 0.5 + 0.5) * 100.0,
    }
}

impl Widget for PieChart {
    fn kind(&self) -> ChartKind { ChartKind::Pie }

    fn animation(&self) -> Option<Animation> {
        Some(Animation::new(PIE_DURATION_MS, Easing::ExpoOut))
    }

    fn draw(&mut self, progress: f64, _viewport: &dyn Viewport) {
        self.layout(progress);
    }

    fn scene(&self, _theme: &Theme) -> Scene {
        let mut scene = Scene::new(ChartKind::Pie);
        scene.view_box = Some(ViewBox::unit());

        // Mask semantics: black hides, independent of theme.
        let mut hide = vec![Primitive::new(
            Shape::Circle { center: Point::ORIGIN, r: self.config.donut },
            Style::fill("black"),
        )];
        hide.extend(self.wedges.iter().map(|w| {
            Primitive::new(
                Shape::Line { from: Point::ORIGIN, to: w.start },
                Style::stroke("#000", self.config.gap),
            )
        }));
        scene.mask = Some(Mask { id: self.mask_id.clone(), hide });

        scene.masked = self
            .wedges
            .iter()
            .enumerate()
            .map(|(k, w)| {
                let mut style = Style::fill(self.config.palette.color_at(k));
                if w.hover.is_hovered() {
                    style = style.with_opacity(HOVER_OPACITY);
                }
                Primitive::new(Shape::Path(w.path.clone()), style).with_hit(HitTarget::Wedge(k))
            })
            .collect();

        scene.labels = self
            .config
            .labels
            .iter()
            .zip(self.placements.iter().zip(&self.active))
            .map(|(text, (placement, active))| Label {
                text: text.clone(),
                placement: *placement,
                active: *active,
                max_width: None,
            })
            .collect();
        scene
    }

    fn pointer_enter(&mut self, target: HitTarget) -> Option<ChartEvent> {
        let HitTarget::Wedge(k) = target else { return None };
        let wedge = self.wedges.get_mut(k)?;
        wedge.hover = HoverState::Hovered;
        if let Some(a) = self.active.get_mut(k) {
            *a = true;
        }
        Some(ChartEvent::SectionHover { index: k })
    }

    fn pointer_leave(&mut self, target: HitTarget) {
        let HitTarget::Wedge(k) = target else { return };
        if let Some(w) = self.wedges.get_mut(k) {
            w.hover = HoverState::Idle;
        }
        if let Some(a) = self.active.get_mut(k) {
            *a = false;
        }
    }
}
