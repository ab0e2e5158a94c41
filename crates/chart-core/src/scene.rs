// File: crates/chart-core/src/scene.rs
// Summary: Backend-agnostic visual primitives produced by chart widgets.
// Notes:
// - A scene is a snapshot; widgets rebuild it after every frame or hover change.
// - Serializers (SVG/HTML here, Skia raster elsewhere) only read scenes.

use std::fmt;

use crate::config::ChartKind;
use crate::geometry::Point;
use crate::types::{Percent, ViewBox};
use crate::widget::HitTarget;

/// One SVG path command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc of `radius` ending at `to`; `sweep` is the clockwise flag.
    Arc { radius: f64, large: bool, sweep: bool, to: Point },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    cmds: Vec<PathCmd>,
}

impl PathData {
    pub fn new() -> Self { Self::default() }

    pub fn move_to(mut self, p: Point) -> Self { self.cmds.push(PathCmd::MoveTo(p)); self }
    pub fn line_to(mut self, p: Point) -> Self { self.cmds.push(PathCmd::LineTo(p)); self }
    pub fn arc_to(mut self, radius: f64, large: bool, sweep: bool, to: Point) -> Self {
        self.cmds.push(PathCmd::Arc { radius, large, sweep, to });
        self
    }

    /// Closed polyline `M p0 L p1 ... L p0`. Empty input yields an empty path.
    pub fn polygon(points: &[Point]) -> Self {
        let Some(first) = points.first() else { return Self::new() };
        let mut path = Self::new().move_to(*first);
        for p in &points[1..] {
            path = path.line_to(*p);
        }
        path.line_to(*first)
    }

    pub fn cmds(&self) -> &[PathCmd] { &self.cmds }

    /// Vertices visited by move/line/arc commands, in order.
    pub fn vertices(&self) -> Vec<Point> {
        self.cmds
            .iter()
            .map(|c| match *c {
                PathCmd::MoveTo(p) | PathCmd::LineTo(p) => p,
                PathCmd::Arc { to, .. } => to,
            })
            .collect()
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.cmds.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match cmd {
                PathCmd::MoveTo(p) => write!(f, "M {p}")?,
                PathCmd::LineTo(p) => write!(f, "L {p}")?,
                PathCmd::Arc { radius, large, sweep, to } => write!(
                    f,
                    "A {radius} {radius} 0 {} {} {to}",
                    u8::from(*large),
                    u8::from(*sweep)
                )?,
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Path(PathData),
    Rect { x: Percent, y: f64, width: Percent, height: f64 },
    Line { from: Point, to: Point },
    Circle { center: Point, r: f64 },
    /// Centered text (`text-anchor: middle`, `dominant-baseline: middle`).
    Text { at: Point, content: String },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub opacity: Option<f64>,
    pub font_size: Option<f64>,
}

impl Style {
    pub fn fill(color: impl Into<String>) -> Self {
        Self { fill: Some(color.into()), ..Self::default() }
    }

    pub fn stroke(color: impl Into<String>, width: f64) -> Self {
        Self { stroke: Some(color.into()), stroke_width: Some(width), ..Self::default() }
    }

    pub fn with_stroke(mut self, color: impl Into<String>, width: f64) -> Self {
        self.stroke = Some(color.into());
        self.stroke_width = Some(width);
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }
}

/// A drawable element, optionally tagged as a hover target.
#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    pub shape: Shape,
    pub style: Style,
    pub hit: Option<HitTarget>,
    /// `data-*` attributes, in insertion order.
    pub data: Vec<(&'static str, String)>,
}

impl Primitive {
    pub fn new(shape: Shape, style: Style) -> Self {
        Self { shape, style, hit: None, data: Vec::new() }
    }

    pub fn with_hit(mut self, hit: HitTarget) -> Self {
        self.hit = Some(hit);
        self
    }

    pub fn with_data(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.data.push((key, value.into()));
        self
    }

    pub fn data(&self, key: &str) -> Option<&str> {
        self.data.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }
}

/// Luminance mask: the view box is revealed, `hide` shapes are cut out.
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
    pub id: String,
    pub hide: Vec<Primitive>,
}

/// Where an HTML label overlay sits inside the chart container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LabelPlacement {
    /// Not positioned yet; rests at the container's top-left corner.
    Unplaced,
    /// Centered on a point given in percent of the container.
    Center { left: f64, top: f64 },
    /// Centered horizontally at `left` percent, `offset_px` below the container.
    Below { left: f64, offset_px: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub placement: LabelPlacement,
    /// Highlighted labels are fully opaque; idle ones are transparent.
    pub active: bool,
    /// Truncate with an ellipsis past this width in pixels.
    pub max_width: Option<f64>,
}

/// Everything a backend needs to draw one chart state.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub kind: ChartKind,
    pub view_box: Option<ViewBox>,
    /// Display size in pixels, when the chart knows it.
    pub size: Option<(f64, f64)>,
    pub mask: Option<Mask>,
    /// Drawn under `mask`.
    pub masked: Vec<Primitive>,
    pub primitives: Vec<Primitive>,
    pub labels: Vec<Label>,
}

impl Scene {
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            view_box: None,
            size: None,
            mask: None,
            masked: Vec::new(),
            primitives: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Masked layer first, then the unmasked primitives.
    pub fn all_primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.masked.iter().chain(self.primitives.iter())
    }

    pub fn find(&self, hit: HitTarget) -> Option<&Primitive> {
        self.all_primitives().find(|p| p.hit == Some(hit))
    }

    pub fn hit_targets(&self) -> Vec<HitTarget> {
        self.all_primitives().filter_map(|p| p.hit).collect()
    }
}
