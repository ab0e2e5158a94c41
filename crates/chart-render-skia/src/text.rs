// File: crates/chart-render-skia/src/text.rs
// Summary: Text shaper using Skia textlayout; centered labels with single-line ellipsis.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

const ELLIPSIS: &str = "\u{2026}";
/// Layout width when no clamp is requested.
const UNBOUNDED: f32 = 10_000.0;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    /// Single-line paragraph. With `max_width`, overflow is cut and ends in an ellipsis.
    pub fn layout(&self, text: &str, size: f32, color: skia::Color, max_width: Option<f32>) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        if max_width.is_some() {
            pstyle.set_max_lines(1);
            pstyle.set_ellipsis(ELLIPSIS);
        }
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(max_width.unwrap_or(UNBOUNDED).max(1.0));
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        self.layout(text, size, skia::Color::TRANSPARENT, None).longest_line()
    }

    /// Draw `text` centered on (`cx`, `cy`) both ways; returns the drawn box.
    pub fn draw_centered(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        cx: f32,
        cy: f32,
        size: f32,
        color: skia::Color,
        max_width: Option<f32>,
    ) -> skia::Rect {
        let p = self.layout(text, size, color, max_width);
        let w = p.longest_line().min(max_width.unwrap_or(f32::MAX));
        let h = p.height();
        let (x, y) = (cx - w / 2.0, cy - h / 2.0);
        p.paint(canvas, (x, y));
        skia::Rect::from_xywh(x, y, w, h)
    }

    /// Box `draw_centered` would cover, without drawing.
    pub fn bounds_centered(&self, text: &str, cx: f32, cy: f32, size: f32, max_width: Option<f32>) -> skia::Rect {
        let p = self.layout(text, size, skia::Color::TRANSPARENT, max_width);
        let w = p.longest_line().min(max_width.unwrap_or(f32::MAX));
        let h = p.height();
        skia::Rect::from_xywh(cx - w / 2.0, cy - h / 2.0, w, h)
    }
}
