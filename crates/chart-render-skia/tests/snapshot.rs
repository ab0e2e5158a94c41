// File: crates/chart-render-skia/tests/snapshot.rs
// Purpose: Golden PNG snapshots with bless flow, anchored by sampled pixels.
// Behavior:
// - Renders deterministic charts (labels off) to PNG bytes and checks known pixels.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, decodes both and compares pixels with a small tolerance.
// - Else, logs a note; rasters vary across Skia builds, so goldens are blessed per platform.

use chart_core::{Attributes, Chart, ChartKind, FixedViewport, Theme};
use chart_render_skia::{RenderOptions, SkiaRenderer};
use image::RgbaImage;

/// Per-channel slack for antialiasing differences across Skia builds.
const TOLERANCE: u8 = 2;

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn render(kind: ChartKind, attrs: &Attributes) -> Vec<u8> {
    let mut chart = Chart::from_attrs(kind, attrs).expect("chart");
    let scene = chart.settled_scene(&FixedViewport::new(240.0, 160.0), &Theme::light());
    let mut opts = RenderOptions::sized(240, 160);
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    SkiaRenderer::new().render_png_bytes(&scene, &opts).expect("render png")
}

const WHITE: [u8; 4] = [255, 255, 255, 255];

fn decode(bytes: &[u8]) -> RgbaImage {
    image::load_from_memory(bytes).expect("decode render").to_rgba8()
}

fn assert_pixel(img: &RgbaImage, x: u32, y: u32, want: [u8; 4]) {
    assert_eq!(img.get_pixel(x, y).0, want, "pixel ({x}, {y})");
}

fn check(name: &str, bytes: &[u8]) {
    let snap_path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = snap_path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&snap_path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }
    if !snap_path.exists() {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
        return;
    }
    let want = image::open(&snap_path).expect("decode snapshot").to_rgba8();
    let got = image::load_from_memory(bytes).expect("decode render").to_rgba8();
    assert_eq!(want.dimensions(), got.dimensions(), "size differs from {}", snap_path.display());
    let worst = want
        .as_raw()
        .iter()
        .zip(got.as_raw())
        .map(|(a, b)| a.abs_diff(*b))
        .max()
        .unwrap_or(0);
    assert!(worst <= TOLERANCE, "pixels differ by up to {worst} from {}", snap_path.display());
}

#[test]
fn golden_pie_png() {
    let attrs = Attributes::new().with("data", "30;50;20").with("donut", "0.2").with("gap", "0.06");
    let bytes = render(ChartKind::Pie, &attrs);
    // Unit circle fitted into the centered 160px square: center (120, 80), radius 80.
    let img = decode(&bytes);
    assert_pixel(&img, 159, 52, [0xFA, 0xAA, 0x32, 255]);
    assert_pixel(&img, 105, 126, [0x3E, 0xFA, 0x7D, 255]);
    assert_pixel(&img, 92, 41, [0xFA, 0x6A, 0x25, 255]);
    assert_pixel(&img, 120, 80, WHITE);
    assert_pixel(&img, 20, 80, WHITE);
    check("pie.png", &bytes);
}

#[test]
fn golden_bar_png() {
    let bytes = render(ChartKind::Bar, &Attributes::new().with("data", "4;8;2;6"));
    let img = decode(&bytes);
    // 60px columns; heights 80, 160, 40 and 120 from the bottom.
    assert_pixel(&img, 30, 150, [0xFA, 0xAA, 0x32, 255]);
    assert_pixel(&img, 30, 40, WHITE);
    assert_pixel(&img, 90, 5, [0x3E, 0xFA, 0x7D, 255]);
    assert_pixel(&img, 150, 140, [0xFA, 0x6A, 0x25, 255]);
    assert_pixel(&img, 150, 100, WHITE);
    assert_pixel(&img, 210, 60, [0x0C, 0x94, 0xFA, 255]);
    check("bar.png", &bytes);
}

#[test]
fn golden_radar_png() {
    let attrs = Attributes::new().with("scores", "3;1;4;1;5").with("max", "6");
    let bytes = render(ChartKind::Radar, &attrs);
    let img = decode(&bytes);
    // 200 viewbox scaled by 0.8 and shifted 40px right; (130, 104) lies inside the data polygon.
    assert_pixel(&img, 144, 83, [0x99, 0x99, 0x99, 255]);
    assert_pixel(&img, 5, 5, WHITE);
    check("radar.png", &bytes);
}

#[test]
fn decoded_size_matches_options() {
    let bytes = render(ChartKind::Bar, &Attributes::new().with("data", "1;2"));
    let img = decode(&bytes);
    assert_eq!(img.dimensions(), (240, 160));
}
