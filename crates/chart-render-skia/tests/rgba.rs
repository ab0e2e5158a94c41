// File: crates/chart-render-skia/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels per chart kind.

use chart_core::{Attributes, Chart, ChartKind, FixedViewport, Theme};
use chart_render_skia::{label_anchor, render_rgba8, RenderOptions};

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

fn opts(w: i32, h: i32) -> RenderOptions {
    let mut opts = RenderOptions::sized(w, h);
    opts.draw_labels = false; // avoid font variance
    opts
}

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::from_attrs(ChartKind::Pie, &Attributes::new().with("data", "1")).expect("pie");
    let scene = chart.settled_scene(&FixedViewport::new(100.0, 100.0), &Theme::light());
    let (px, w, h, stride) = render_rgba8(&scene, &opts(120, 80)).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Check background alpha in top-left pixel (RGBA)
    assert_eq!(px[3], 255);
}

#[test]
fn pie_halves_and_donut_hole() {
    let attrs = Attributes::new().with("data", "50;50").with("donut", "0.3");
    let mut chart = Chart::from_attrs(ChartKind::Pie, &attrs).expect("pie");
    let scene = chart.settled_scene(&FixedViewport::new(200.0, 200.0), &Theme::light());
    let (px, _, _, stride) = render_rgba8(&scene, &opts(200, 200)).expect("rgba render");

    // First wedge sweeps clockwise from the top: the right half.
    assert_eq!(pixel(&px, stride, 160, 100), [0xFA, 0xAA, 0x32, 255]);
    assert_eq!(pixel(&px, stride, 40, 100), [0x3E, 0xFA, 0x7D, 255]);
    // Donut hole and corners show the background.
    assert_eq!(pixel(&px, stride, 100, 100), [255, 255, 255, 255]);
    assert_eq!(pixel(&px, stride, 2, 2), [255, 255, 255, 255]);
}

#[test]
fn bar_heights_fill_from_bottom() {
    let attrs = Attributes::new().with("data", "0;10;5").with("colors", "#FF0000");
    let mut chart = Chart::from_attrs(ChartKind::Bar, &attrs).expect("bar");
    let scene = chart.settled_scene(&FixedViewport::new(300.0, 100.0), &Theme::light());
    let (px, _, _, stride) = render_rgba8(&scene, &opts(300, 100)).expect("rgba render");

    let red = [255, 0, 0, 255];
    let white = [255, 255, 255, 255];
    // Bar 0 has zero height.
    assert_eq!(pixel(&px, stride, 50, 95), white);
    // Bar 1 spans the full height.
    assert_eq!(pixel(&px, stride, 150, 5), red);
    // Bar 2 spans the lower half only.
    assert_eq!(pixel(&px, stride, 250, 75), red);
    assert_eq!(pixel(&px, stride, 250, 25), white);
}

#[test]
fn radar_frame_is_drawn() {
    let attrs = Attributes::new().with("scores", "0;0;0;0").with("max", "1");
    let mut chart = Chart::from_attrs(ChartKind::Radar, &attrs).expect("radar");
    let scene = chart.settled_scene(&FixedViewport::new(200.0, 200.0), &Theme::light());
    let (px, _, _, stride) = render_rgba8(&scene, &opts(200, 200)).expect("rgba render");

    // Frame fill is white on a white background; its stroke is the theme blue.
    // The rightmost vertex sits at (180, 100); sample the stroke just inside it.
    let edge = pixel(&px, stride, 140, 140);
    assert_eq!(edge[3], 255);
    assert_ne!(edge, [255, 255, 255, 255], "frame stroke should cover the square's edge");
}

fn near(a: (f32, f32), b: (f32, f32)) -> bool {
    (a.0 - b.0).abs() < 1e-3 && (a.1 - b.1).abs() < 1e-3
}

#[test]
fn pie_labels_follow_fitted_geometry_in_wide_output() {
    let attrs = Attributes::new().with("data", "50;50").with("labels", "a;b");
    let mut chart = Chart::from_attrs(ChartKind::Pie, &attrs).expect("pie");
    let scene = chart.settled_scene(&FixedViewport::new(400.0, 200.0), &Theme::light());

    // The pie occupies the centered 200px square, x in [100, 300].
    let right = label_anchor(&scene, &scene.labels[0], 400, 200).expect("placed");
    let left = label_anchor(&scene, &scene.labels[1], 400, 200).expect("placed");
    assert!(near(right, (300.0, 100.0)), "{right:?}");
    assert!(near(left, (100.0, 100.0)), "{left:?}");

    let (px, _, _, stride) = render_rgba8(&scene, &opts(400, 200)).expect("rgba render");
    // Just inside the anchors the wedges are painted; beyond them is background.
    assert_eq!(pixel(&px, stride, 290, 100), [0xFA, 0xAA, 0x32, 255]);
    assert_eq!(pixel(&px, stride, 110, 100), [0x3E, 0xFA, 0x7D, 255]);
    assert_eq!(pixel(&px, stride, 350, 100), [255, 255, 255, 255]);
}

#[test]
fn bar_labels_anchor_on_bottom_edge() {
    let attrs = Attributes::new().with("data", "1;2;3;4").with("labels", "a;b;c;d");
    let mut chart = Chart::from_attrs(ChartKind::Bar, &attrs).expect("bar");
    let scene = chart.settled_scene(&FixedViewport::new(400.0, 100.0), &Theme::light());
    let anchor = label_anchor(&scene, &scene.labels[0], 400, 100).expect("placed");
    assert!((anchor.0 - 50.0).abs() < 1e-3, "{anchor:?}");
    assert!(anchor.1 < 100.0);
}
