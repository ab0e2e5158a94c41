// File: crates/chart-core/src/radar.rs
// Summary: Radar chart widget: evenly spaced axes, normalized data polygon, interactive rings.
// Notes:
// - Geometry lives in a fixed 200x200 viewbox with radius 80; `width`/`height`
//   only set the display size.
// - No animation: the final state is built at construction.

use crate::animation::Animation;
use crate::config::{ChartKind, RadarConfig};
use crate::geometry::{deg_to_rad, ratio_or_zero, Point};
use crate::scene::{PathData, Primitive, Scene, Shape, Style};
use crate::theme::Theme;
use crate::types::{
    ViewBox, RADAR_FONT_SIZE, RADAR_RADIUS, RADAR_RINGS, RADAR_VIEWBOX, RING_RADIUS_HOVER,
    RING_RADIUS_IDLE,
};
use crate::widget::{ChartEvent, HitTarget, HoverState, Viewport, Widget};

/// Axis labels sit slightly past the endpoint.
const LABEL_BIAS: f64 = 1.1;

/// One interactive ring on an axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    pub axis: usize,
    /// 1..=5
    pub step: usize,
    pub center: Point,
    /// Fraction of the radius this ring marks (0.2 .. 1.0).
    pub score: f64,
    pub related_id: String,
    pub hover: HoverState,
}

pub struct RadarChart {
    config: RadarConfig,
    center: Point,
    /// Axis angles in degrees, clockwise from the top.
    angles: Vec<f64>,
    endpoints: Vec<Point>,
    normalized: Vec<f64>,
    rings: Vec<Ring>,
}

impl RadarChart {
    pub fn new(config: RadarConfig) -> Self {
        let center = Point::new(RADAR_VIEWBOX / 2.0, RADAR_VIEWBOX / 2.0);
        let sides = config.scores.len();

        let mut angles = Vec::with_capacity(sides);
        let mut endpoints = Vec::with_capacity(sides);
        let mut angle = 360.0;
        for _ in 0..sides {
            angle -= 360.0 / sides as f64;
            angles.push(angle);
            endpoints.push(Point::on_circle(center, RADAR_RADIUS, deg_to_rad(angle)));
        }

        // A zero max is a caller error; it normalizes to zero rather than NaN.
        let normalized = config.scores.iter().map(|s| ratio_or_zero(*s, config.max)).collect();

        let rings = match &config.ids {
            Some(ids) => endpoints
                .iter()
                .enumerate()
                .flat_map(|(axis, end)| {
                    let related_id = ids.get(axis).cloned().unwrap_or_default();
                    (1..=RADAR_RINGS).map(move |step| Ring {
                        axis,
                        step,
                        center: center.lerp(*end, step as f64 * 0.2),
                        score: step as f64 / RADAR_RINGS as f64,
                        related_id: related_id.clone(),
                        hover: HoverState::Idle,
                    })
                })
                .collect(),
            None => Vec::new(),
        };

        tracing::debug!(axes = sides, rings = rings.len(), max = config.max, "radar chart constructed");
        Self { config, center, angles, endpoints, normalized, rings }
    }

    pub fn config(&self) -> &RadarConfig { &self.config }

    pub fn center(&self) -> Point { self.center }

    pub fn axis_angles(&self) -> &[f64] { &self.angles }

    pub fn endpoints(&self) -> &[Point] { &self.endpoints }

    pub fn normalized_scores(&self) -> &[f64] { &self.normalized }

    pub fn rings(&self) -> &[Ring] { &self.rings }

    /// Vertices of the data polygon, one per axis.
    pub fn data_points(&self) -> Vec<Point> {
        self.endpoints
            .iter()
            .zip(&self.normalized)
            .map(|(end, score)| self.center.lerp(*end, *score))
            .collect()
    }

    fn ring_mut(&mut self, axis: usize, step: usize) -> Option<&mut Ring> {
        self.rings.iter_mut().find(|r| r.axis == axis && r.step == step)
    }
}

impl Widget for RadarChart {
    fn kind(&self) -> ChartKind { ChartKind::Radar }

    fn animation(&self) -> Option<Animation> { None }

    fn draw(&mut self, _progress: f64, _viewport: &dyn Viewport) {}

    fn scene(&self, theme: &Theme) -> Scene {
        let mut scene = Scene::new(ChartKind::Radar);
        scene.view_box = Some(ViewBox::new(0.0, 0.0, RADAR_VIEWBOX, RADAR_VIEWBOX));
        scene.size = Some((self.config.width, self.config.height));
        let prims = &mut scene.primitives;

        for end in &self.endpoints {
            prims.push(Primitive::new(
                Shape::Line { from: self.center, to: *end },
                Style::stroke(theme.line, 0.5),
            ));
        }

        prims.push(Primitive::new(
            Shape::Path(PathData::polygon(&self.endpoints)),
            Style::fill(theme.radar_frame_fill).with_stroke(theme.radar_frame_stroke, 2.0),
        ));

        prims.push(Primitive::new(
            Shape::Path(PathData::polygon(&self.data_points())),
            Style::fill(theme.radar_data_fill).with_stroke(theme.radar_data_stroke, 0.5),
        ));

        for (i, end) in self.endpoints.iter().enumerate() {
            let Some(text) = self.config.labels.get(i) else { continue };
            prims.push(Primitive::new(
                Shape::Text { at: self.center.lerp(*end, LABEL_BIAS), content: text.clone() },
                Style::fill(theme.text).with_font_size(RADAR_FONT_SIZE),
            ));
        }

        for ring in &self.rings {
            let r = if ring.hover.is_hovered() { RING_RADIUS_HOVER } else { RING_RADIUS_IDLE };
            let mut style = Style::fill(self.config.palette.color_at(ring.axis));
            style.stroke_width = Some(0.0);
            prims.push(
                Primitive::new(Shape::Circle { center: ring.center, r }, style)
                    .with_hit(HitTarget::Ring { axis: ring.axis, step: ring.step })
                    .with_data("axis", ring.axis.to_string())
                    .with_data("score", ring.score.to_string())
                    .with_data("related-id", ring.related_id.clone()),
            );
        }
        // Tooltips after every ring so they paint on top.
        for ring in &self.rings {
            let (size, opacity) = if ring.hover.is_hovered() { (RADAR_FONT_SIZE, 1.0) } else { (0.0, 0.0) };
            prims.push(Primitive::new(
                Shape::Text { at: ring.center, content: ring.score.to_string() },
                Style::fill(theme.text).with_font_size(size).with_opacity(opacity),
            ));
        }
        scene
    }

    fn pointer_enter(&mut self, target: HitTarget) -> Option<ChartEvent> {
        if let HitTarget::Ring { axis, step } = target {
            if let Some(ring) = self.ring_mut(axis, step) {
                ring.hover = HoverState::Hovered;
            }
        }
        None
    }

    fn pointer_leave(&mut self, target: HitTarget) {
        if let HitTarget::Ring { axis, step } = target {
            if let Some(ring) = self.ring_mut(axis, step) {
                ring.hover = HoverState::Idle;
            }
        }
    }
}
