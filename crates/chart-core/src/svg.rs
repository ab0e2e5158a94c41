// File: crates/chart-core/src/svg.rs
// Summary: Serialize scenes to standalone SVG documents and browser HTML fragments.

use std::fmt::Write;

use crate::config::ChartKind;
use crate::scene::{Label, LabelPlacement, Primitive, Scene, Shape};
use crate::theme::Theme;
use crate::types::ViewBox;
use crate::widget::HitTarget;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
/// Font size for labels when flattened into SVG text.
const LABEL_FONT_SIZE: f64 = 12.0;

/// Escape text for element content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Stable `data-hit` token for a hover target.
pub fn hit_token(hit: HitTarget) -> String {
    match hit {
        HitTarget::Wedge(k) => format!("wedge-{k}"),
        HitTarget::Bar(i) => format!("bar-{i}"),
        HitTarget::Ring { axis, step } => format!("ring-{axis}-{step}"),
    }
}

/// Inverse of [`hit_token`].
pub fn parse_hit_token(token: &str) -> Option<HitTarget> {
    let mut parts = token.split('-');
    let kind = parts.next()?;
    let a = parts.next()?.parse().ok()?;
    match (kind, parts.next()) {
        ("wedge", None) => Some(HitTarget::Wedge(a)),
        ("bar", None) => Some(HitTarget::Bar(a)),
        ("ring", Some(step)) => Some(HitTarget::Ring { axis: a, step: step.parse().ok()? }),
        _ => None,
    }
}

fn view_box_for(scene: &Scene) -> Option<ViewBox> {
    scene
        .view_box
        .or_else(|| scene.size.map(|(w, h)| ViewBox::new(0.0, 0.0, w, h)))
}

fn write_attrs(out: &mut String, p: &Primitive) {
    let s = &p.style;
    if let Some(fill) = &s.fill {
        let _ = write!(out, r#" fill="{}""#, escape(fill));
    }
    if let Some(stroke) = &s.stroke {
        let _ = write!(out, r#" stroke="{}""#, escape(stroke));
    }
    if let Some(w) = s.stroke_width {
        let _ = write!(out, r#" stroke-width="{w}""#);
    }
    if let Some(o) = s.opacity {
        let _ = write!(out, r#" opacity="{o}""#);
    }
    if let Some(hit) = p.hit {
        let _ = write!(out, r#" data-hit="{}""#, hit_token(hit));
    }
    for (k, v) in &p.data {
        let _ = write!(out, r#" data-{k}="{}""#, escape(v));
    }
}

fn write_primitive(out: &mut String, p: &Primitive, indent: &str) {
    out.push_str(indent);
    match &p.shape {
        Shape::Path(d) => {
            let _ = write!(out, r#"<path d="{d}""#);
            write_attrs(out, p);
            out.push_str("/>");
        }
        Shape::Rect { x, y, width, height } => {
            let _ = write!(out, r#"<rect x="{x}" y="{y}" width="{width}" height="{height}""#);
            write_attrs(out, p);
            out.push_str("/>");
        }
        Shape::Line { from, to } => {
            let _ = write!(out, r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#, from.x, from.y, to.x, to.y);
            write_attrs(out, p);
            out.push_str("/>");
        }
        Shape::Circle { center, r } => {
            let _ = write!(out, r#"<circle cx="{}" cy="{}" r="{r}""#, center.x, center.y);
            write_attrs(out, p);
            out.push_str("/>");
        }
        Shape::Text { at, content } => {
            let _ = write!(
                out,
                r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle""#,
                at.x, at.y
            );
            if let Some(size) = p.style.font_size {
                let _ = write!(out, r#" font-size="{size}""#);
            }
            write_attrs(out, p);
            let _ = write!(out, ">{}</text>", escape(content));
        }
    }
    out.push('\n');
}

fn write_body(out: &mut String, scene: &Scene) {
    if let Some(mask) = &scene.mask {
        let vb = scene.view_box.unwrap_or_else(ViewBox::unit);
        let _ = writeln!(out, r#"  <g mask="url(#{})">"#, escape(&mask.id));
        for p in &scene.masked {
            write_primitive(out, p, "    ");
        }
        out.push_str("  </g>\n");
        let _ = writeln!(out, r#"  <mask id="{}">"#, escape(&mask.id));
        let _ = writeln!(
            out,
            r#"    <rect fill="white" x="{}" y="{}" width="{}" height="{}"/>"#,
            vb.min_x, vb.min_y, vb.width, vb.height
        );
        for p in &mask.hide {
            write_primitive(out, p, "    ");
        }
        out.push_str("  </mask>\n");
    } else {
        for p in &scene.masked {
            write_primitive(out, p, "  ");
        }
    }
    for p in &scene.primitives {
        write_primitive(out, p, "  ");
    }
}

impl Scene {
    /// Standalone SVG document. Active labels become `<text>` elements.
    pub fn to_svg(&self, theme: &Theme) -> String {
        let mut out = String::new();
        let vb = view_box_for(self);
        let _ = write!(out, r#"<svg xmlns="{SVG_NS}""#);
        if let Some(vb) = vb {
            let _ = write!(out, r#" viewBox="{vb}""#);
        }
        if let Some((w, h)) = self.size {
            let _ = write!(out, r#" width="{w}" height="{h}""#);
        }
        out.push_str(">\n");
        write_body(&mut out, self);
        if let Some(vb) = vb {
            for label in self.labels.iter().filter(|l| l.active) {
                write_label_text(&mut out, label, vb, self.kind, theme);
            }
        }
        out.push_str("</svg>\n");
        out
    }

    /// Browser fragment: container, scoped style, inline SVG and label overlays.
    pub fn to_html(&self, theme: &Theme) -> String {
        let mut out = String::new();
        let class = self.kind.tag();
        let _ = writeln!(out, r#"<div class="{class}">"#);
        let _ = writeln!(out, "<style>{}</style>", stylesheet(self.kind, theme));
        let _ = write!(out, r#"<svg xmlns="{SVG_NS}""#);
        if let Some(vb) = self.view_box {
            let _ = write!(out, r#" viewBox="{vb}""#);
        }
        out.push_str(">\n");
        write_body(&mut out, self);
        out.push_str("</svg>\n");
        for label in &self.labels {
            write_label_div(&mut out, label);
        }
        out.push_str("</div>\n");
        out
    }
}

fn write_label_text(out: &mut String, label: &Label, vb: ViewBox, kind: ChartKind, theme: &Theme) {
    let (x, y) = match label.placement {
        LabelPlacement::Unplaced => return,
        LabelPlacement::Center { left, top } => (
            vb.min_x + vb.width * left / 100.0,
            vb.min_y + vb.height * top / 100.0,
        ),
        // Keep below-container labels inside the document, along the bottom edge.
        LabelPlacement::Below { left, .. } => (
            vb.min_x + vb.width * left / 100.0,
            vb.min_y + vb.height - LABEL_FONT_SIZE,
        ),
    };
    let size = match kind {
        ChartKind::Pie => vb.width * 0.08,
        _ => LABEL_FONT_SIZE,
    };
    let _ = writeln!(
        out,
        r#"  <text x="{x}" y="{y}" text-anchor="middle" dominant-baseline="middle" font-size="{size}" fill="{}">{}</text>"#,
        escape(theme.text),
        escape(&label.text)
    );
}

/// Inline CSS positioning a label overlay inside its container.
pub fn label_style(label: &Label) -> String {
    let mut style = String::new();
    match label.placement {
        LabelPlacement::Unplaced => {}
        LabelPlacement::Center { left, top } => {
            let _ = write!(style, "top:{top}%;left:{left}%;");
        }
        LabelPlacement::Below { left, offset_px } => {
            let _ = write!(style, "bottom:-{offset_px}px;left:{left}%;");
        }
    }
    if let Some(w) = label.max_width {
        let _ = write!(style, "max-width:{w}px;");
    }
    style
}

fn write_label_div(out: &mut String, label: &Label) {
    let class = if label.active { r#" class="is-active""# } else { "" };
    let _ = writeln!(out, r#"<div{class} style="{}">{}</div>"#, label_style(label), escape(&label.text));
}

/// Scoped CSS for a chart container of `kind`.
pub fn stylesheet(kind: ChartKind, theme: &Theme) -> String {
    let tag = kind.tag();
    match kind {
        ChartKind::Pie => format!(
            ".{tag}{{display:block;position:relative}}\
             .{tag} svg{{width:100%;height:100%}}\
             .{tag} path{{cursor:pointer;transition:opacity .3s}}\
             .{tag} path:hover{{opacity:.5}}\
             .{tag} div{{position:absolute;top:0;left:0;padding:.1em .2em;transform:translate(-50%,-50%);\
             background-color:var(--tooltip-bg,{bg});color:{fg};border-radius:.25rem;white-space:nowrap;\
             opacity:0;transition:opacity .3s}}\
             .{tag} .is-active{{opacity:1}}",
            bg = theme.pie_tooltip_bg,
            fg = theme.pie_tooltip_text,
        ),
        ChartKind::Bar => format!(
            ".{tag}{{display:block;position:relative;width:100%;height:100%}}\
             .{tag} svg{{width:100%;height:100%}}\
             .{tag} rect{{cursor:pointer;transition:height .3s,y .3s}}\
             .{tag} rect:hover{{fill:{hover}}}\
             .{tag} div{{position:absolute;transform:translateX(-50%);padding:.1em .2em;\
             background-color:var(--tooltip-bg,{bg});z-index:3;overflow:hidden;text-overflow:ellipsis;\
             white-space:nowrap;opacity:0;transition:opacity .3s}}\
             .{tag} .is-active{{opacity:1}}",
            hover = theme.bar_hover,
            bg = theme.bar_tooltip_bg,
        ),
        ChartKind::Radar => format!(
            ".{tag}{{display:block}}\
             .{tag} svg{{width:100%;height:100%;overflow:visible}}\
             .{tag} svg text{{pointer-events:none;text-anchor:middle;dominant-baseline:middle}}"
        ),
    }
}
