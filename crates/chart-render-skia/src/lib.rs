// File: crates/chart-render-skia/src/lib.rs
// Summary: Headless rendering of chart scenes with Skia CPU raster surfaces.
// Notes:
// - View boxes are fitted like SVG `xMidYMid meet`; scenes without one are stretched
//   from their display size to the output size.
// - The pie mask is a save-layer with the hidden shapes cut out (`DstOut`).
// - Labels are drawn in output pixels on top, only when active, anchored through the
//   same fit as the geometry.

pub mod color;
pub mod text;

use anyhow::{bail, Result};
use skia_safe as skia;

use chart_core::geometry::Point;
use chart_core::scene::{PathCmd, PathData, Primitive, Scene, Shape};
use chart_core::{ChartKind, Label, LabelPlacement, Theme};

pub use color::{color_or_black, parse_color};
pub use text::TextShaper;

/// Pixel size of overlay label text.
const LABEL_FONT_PX: f32 = 14.0;
/// Padding around a label's background box.
const LABEL_PAD_PX: f32 = 3.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Overrides the theme background when set.
    pub background: Option<skia::Color>,
    pub draw_labels: bool,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            background: None,
            draw_labels: true,
            theme: Theme::light(),
        }
    }
}

impl RenderOptions {
    pub fn sized(width: i32, height: i32) -> Self {
        Self { width, height, ..Self::default() }
    }

    fn background_color(&self) -> skia::Color {
        self.background.unwrap_or_else(|| color_or_black(self.theme.background))
    }
}

/// Scene-to-output mapping: `out = scene * scale + translate`.
#[derive(Clone, Copy, Debug)]
struct Fit {
    scale: (f32, f32),
    translate: (f32, f32),
    /// Scene-space top-left corner and extent that percent lengths resolve against.
    origin: (f64, f64),
    extent: (f64, f64),
}

impl Fit {
    /// Output pixel for a point given in percent of the scene extent.
    fn project_percent(&self, left: f64, top: f64) -> (f32, f32) {
        let x = self.origin.0 + self.extent.0 * left / 100.0;
        let y = self.origin.1 + self.extent.1 * top / 100.0;
        (
            x as f32 * self.scale.0 + self.translate.0,
            y as f32 * self.scale.1 + self.translate.1,
        )
    }
}

fn fit(scene: &Scene, width: i32, height: i32) -> Fit {
    let (w, h) = (width as f64, height as f64);
    if let Some(vb) = scene.view_box.filter(|vb| vb.width > 0.0 && vb.height > 0.0) {
        let s = (w / vb.width).min(h / vb.height);
        return Fit {
            scale: (s as f32, s as f32),
            translate: (
                ((w - vb.width * s) / 2.0 - vb.min_x * s) as f32,
                ((h - vb.height * s) / 2.0 - vb.min_y * s) as f32,
            ),
            origin: (vb.min_x, vb.min_y),
            extent: (vb.width, vb.height),
        };
    }
    match scene.size {
        Some((sw, sh)) if sw > 0.0 && sh > 0.0 => Fit {
            scale: ((w / sw) as f32, (h / sh) as f32),
            translate: (0.0, 0.0),
            origin: (0.0, 0.0),
            extent: (sw, sh),
        },
        _ => Fit { scale: (1.0, 1.0), translate: (0.0, 0.0), origin: (0.0, 0.0), extent: (w, h) },
    }
}

/// Output pixel a label is centered on, or `None` while it is unplaced.
/// Placements follow the same view-box fit as the chart geometry.
pub fn label_anchor(scene: &Scene, label: &Label, width: i32, height: i32) -> Option<(f32, f32)> {
    let f = fit(scene, width, height);
    match label.placement {
        LabelPlacement::Unplaced => None,
        LabelPlacement::Center { left, top } => Some(f.project_percent(left, top)),
        // No room below the raster; sit on the bottom edge instead.
        LabelPlacement::Below { left, .. } => {
            Some((f.project_percent(left, 100.0).0, height as f32 - LABEL_FONT_PX))
        }
    }
}

fn pt(p: Point) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

/// Convert scene path commands into a Skia path.
pub fn to_skia_path(d: &PathData) -> skia::Path {
    let mut path = skia::Path::new();
    for cmd in d.cmds() {
        match *cmd {
            PathCmd::MoveTo(p) => {
                path.move_to(pt(p));
            }
            PathCmd::LineTo(p) => {
                path.line_to(pt(p));
            }
            PathCmd::Arc { radius, large, sweep, to } => {
                let size = if large { skia::path::ArcSize::Large } else { skia::path::ArcSize::Small };
                let dir = if sweep { skia::PathDirection::CW } else { skia::PathDirection::CCW };
                path.arc_to_rotated((radius as f32, radius as f32), 0.0, size, dir, pt(to));
            }
        }
    }
    path
}

pub struct SkiaRenderer {
    shaper: TextShaper,
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new() }
}

impl SkiaRenderer {
    pub fn new() -> Self { Self { shaper: TextShaper::new() } }

    /// Render into RGBA8 (unpremultiplied). Returns (pixels, width, height, row_bytes).
    pub fn render_rgba8(&self, scene: &Scene, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.paint_surface(scene, opts)?;
        let (w, h) = (opts.width as u32, opts.height as u32);
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            bail!("failed to read back raster pixels");
        }
        Ok((pixels, w, h, row_bytes))
    }

    /// Render and encode as PNG in memory.
    pub fn render_png_bytes(&self, scene: &Scene, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.paint_surface(scene, opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the scene to a PNG at `output_png_path`, creating parent directories.
    pub fn render_png(
        &self,
        scene: &Scene,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_png_bytes(scene, opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        tracing::info!(path = %path.display(), kind = ?scene.kind, "wrote png");
        Ok(())
    }

    fn paint_surface(&self, scene: &Scene, opts: &RenderOptions) -> Result<skia::Surface> {
        if opts.width <= 0 || opts.height <= 0 {
            bail!("invalid output size {}x{}", opts.width, opts.height);
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(opts.background_color());

        let f = fit(scene, opts.width, opts.height);
        canvas.save();
        canvas.translate(f.translate);
        canvas.scale(f.scale);

        if let Some(mask) = &scene.mask {
            canvas.save_layer(&skia::canvas::SaveLayerRec::default());
            for p in &scene.masked {
                self.draw_primitive(canvas, p, f.extent, &opts.theme, None);
            }
            for p in &mask.hide {
                self.draw_primitive(canvas, p, f.extent, &opts.theme, Some(skia::BlendMode::DstOut));
            }
            canvas.restore();
        } else {
            for p in &scene.masked {
                self.draw_primitive(canvas, p, f.extent, &opts.theme, None);
            }
        }
        for p in &scene.primitives {
            self.draw_primitive(canvas, p, f.extent, &opts.theme, None);
        }
        canvas.restore();

        if opts.draw_labels {
            self.draw_labels(canvas, scene, opts);
        }
        tracing::debug!(kind = ?scene.kind, width = opts.width, height = opts.height, "scene rasterized");
        Ok(surface)
    }

    fn draw_primitive(
        &self,
        canvas: &skia::Canvas,
        p: &Primitive,
        extent: (f64, f64),
        theme: &Theme,
        blend: Option<skia::BlendMode>,
    ) {
        let opacity = p.style.opacity.unwrap_or(1.0).clamp(0.0, 1.0) as f32;
        if opacity <= 0.0 {
            return;
        }
        let paint_for = |token: &str, style: skia::paint::Style| {
            let mut paint = skia::Paint::default();
            paint.set_anti_alias(true);
            paint.set_color(color_or_black(token));
            paint.set_alpha_f(paint.alpha_f() * opacity);
            paint.set_style(style);
            if let Some(mode) = blend {
                paint.set_blend_mode(mode);
            }
            paint
        };
        let fill = p.style.fill.as_deref().map(|c| paint_for(c, skia::paint::Style::Fill));
        let stroke = match (p.style.stroke.as_deref(), p.style.stroke_width) {
            (Some(c), Some(w)) if w > 0.0 => {
                let mut paint = paint_for(c, skia::paint::Style::Stroke);
                paint.set_stroke_width(w as f32);
                Some(paint)
            }
            _ => None,
        };

        match &p.shape {
            Shape::Path(d) => {
                let path = to_skia_path(d);
                if let Some(paint) = &fill {
                    canvas.draw_path(&path, paint);
                }
                if let Some(paint) = &stroke {
                    canvas.draw_path(&path, paint);
                }
            }
            Shape::Rect { x, y, width, height } => {
                let rect = skia::Rect::from_xywh(
                    x.resolve(extent.0) as f32,
                    *y as f32,
                    width.resolve(extent.0) as f32,
                    *height as f32,
                );
                if let Some(paint) = &fill {
                    canvas.draw_rect(rect, paint);
                }
                if let Some(paint) = &stroke {
                    canvas.draw_rect(rect, paint);
                }
            }
            Shape::Line { from, to } => {
                if let Some(paint) = &stroke {
                    canvas.draw_line(pt(*from), pt(*to), paint);
                }
            }
            Shape::Circle { center, r } => {
                if let Some(paint) = &fill {
                    canvas.draw_circle(pt(*center), *r as f32, paint);
                }
                if let Some(paint) = &stroke {
                    canvas.draw_circle(pt(*center), *r as f32, paint);
                }
            }
            Shape::Text { at, content } => {
                let size = p.style.font_size.unwrap_or(0.0) as f32;
                if size <= 0.0 || content.is_empty() {
                    return;
                }
                let mut color = color_or_black(p.style.fill.as_deref().unwrap_or(theme.text));
                color = color.with_a((color.a() as f32 * opacity) as u8);
                self.shaper.draw_centered(canvas, content, at.x as f32, at.y as f32, size, color, None);
            }
        }
    }

    fn draw_labels(&self, canvas: &skia::Canvas, scene: &Scene, opts: &RenderOptions) {
        let (bg, fg) = match scene.kind {
            ChartKind::Pie => (opts.theme.pie_tooltip_bg, opts.theme.pie_tooltip_text),
            _ => (opts.theme.bar_tooltip_bg, opts.theme.text),
        };
        let mut bg_paint = skia::Paint::default();
        bg_paint.set_anti_alias(true);
        bg_paint.set_color(color_or_black(bg));
        let fg = color_or_black(fg);

        for label in scene.labels.iter().filter(|l| l.active && !l.text.is_empty()) {
            let Some((cx, cy)) = label_anchor(scene, label, opts.width, opts.height) else { continue };
            let max_width = label.max_width.map(|m| m as f32);
            let bounds = self.shaper.bounds_centered(&label.text, cx, cy, LABEL_FONT_PX, max_width);
            let rrect = skia::RRect::new_rect_xy(bounds.with_outset((LABEL_PAD_PX, LABEL_PAD_PX)), 4.0, 4.0);
            canvas.draw_rrect(rrect, &bg_paint);
            self.shaper.draw_centered(canvas, &label.text, cx, cy, LABEL_FONT_PX, fg, max_width);
        }
    }
}

/// One-shot helpers with a fresh renderer.
pub fn render_png_bytes(scene: &Scene, opts: &RenderOptions) -> Result<Vec<u8>> {
    SkiaRenderer::new().render_png_bytes(scene, opts)
}

pub fn render_rgba8(scene: &Scene, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    SkiaRenderer::new().render_rgba8(scene, opts)
}

pub fn render_png(scene: &Scene, opts: &RenderOptions, path: impl AsRef<std::path::Path>) -> Result<()> {
    SkiaRenderer::new().render_png(scene, opts, path)
}
