// File: crates/chart-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG for each chart kind.

use chart_core::{Attributes, Chart, ChartKind, FixedViewport, Theme};
use chart_render_skia::{RenderOptions, SkiaRenderer};

fn settled(kind: ChartKind, attrs: &Attributes) -> chart_core::Scene {
    let mut chart = Chart::from_attrs(kind, attrs).expect("chart");
    chart.settled_scene(&FixedViewport::new(320.0, 200.0), &Theme::light())
}

#[test]
fn render_smoke_png() {
    let renderer = SkiaRenderer::new();
    let opts = RenderOptions::sized(320, 200);
    let cases = [
        (ChartKind::Pie, Attributes::new().with("data", "3;2;1").with("labels", "a;b;c")),
        (ChartKind::Bar, Attributes::new().with("data", "0;10;5")),
        (
            ChartKind::Radar,
            Attributes::new().with("scores", "1;2;3").with("labels", "x;y;z").with("ids", "i;j;k").with("max", "4"),
        ),
    ];
    for (kind, attrs) in cases {
        let scene = settled(kind, &attrs);
        let out = std::path::PathBuf::from(format!("target/test_out/smoke_{}.png", kind.tag()));
        renderer.render_png(&scene, &opts, &out).expect("render should succeed");
        let meta = std::fs::metadata(&out).expect("output exists");
        assert!(meta.len() > 0, "png should be non-empty");

        // Also verify in-memory API works
        let bytes = renderer.render_png_bytes(&scene, &opts).expect("render bytes");
        assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    }
}

#[test]
fn rejects_empty_surface() {
    let scene = settled(ChartKind::Bar, &Attributes::new().with("data", "1"));
    let opts = RenderOptions::sized(0, 10);
    assert!(SkiaRenderer::new().render_png_bytes(&scene, &opts).is_err());
}
