// File: crates/chart-core/tests/pie.rs
// Purpose: Pie wedge geometry, labels, mask and hover behavior.

use std::f64::consts::PI;

use chart_core::scene::{PathCmd, Shape};
use chart_core::{
    Attributes, Chart, ChartEvent, FixedViewport, HitTarget, LabelPlacement, PieChart, PieConfig, Theme,
    Widget,
};

const VP: FixedViewport = FixedViewport::new(200.0, 200.0);

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn pie(data: &[f64]) -> PieChart {
    PieChart::new(PieConfig { data: data.to_vec(), ..PieConfig::default() })
}

#[test]
fn sweeps_sum_to_full_turn() {
    let cases = [
        vec![1.0],
        vec![50.0, 50.0],
        vec![3.0, 1.0, 7.5, 0.25],
        vec![0.0, 2.0, 0.0],
        vec![1e-6, 1e6],
        // Magnitudes whose plain sum overflows.
        vec![1e308, 1e308],
        vec![f64::MAX, 1.0, f64::MAX],
    ];
    for data in cases {
        let mut p = pie(&data);
        p.draw(1.0, &VP);
        let sum: f64 = p.sweeps().iter().sum();
        assert!(approx(sum, 2.0 * PI), "data {data:?} summed to {sum}");
    }
}

#[test]
fn two_halves_split_top_and_bottom() {
    let attrs = Attributes::new().with("data", "50;50").with("donut", "0");
    let mut chart = Chart::from_attrs(chart_core::ChartKind::Pie, &attrs).expect("pie");
    let scene = chart.settled_scene(&VP, &Theme::light());
    let Chart::Pie(p) = &chart else { panic!("expected pie") };

    let sweeps = p.sweeps();
    assert_eq!(sweeps.len(), 2);
    assert!(approx(sweeps[0], PI) && approx(sweeps[1], PI));

    let mask = scene.mask.expect("pie has a mask");
    match &mask.hide[0].shape {
        Shape::Circle { r, .. } => assert_eq!(*r, 0.0),
        other => panic!("unexpected donut shape {other:?}"),
    }
    let ends: Vec<_> = mask.hide[1..]
        .iter()
        .map(|prim| match &prim.shape {
            Shape::Line { to, .. } => *to,
            other => panic!("unexpected boundary shape {other:?}"),
        })
        .collect();
    assert!(approx(ends[0].x, 0.0) && approx(ends[0].y, -1.0));
    assert!(approx(ends[1].x, 0.0) && approx(ends[1].y, 1.0));
}

#[test]
fn large_arc_flag_follows_ratio() {
    let mut p = pie(&[3.0, 1.0]);
    p.draw(1.0, &VP);
    let flags: Vec<bool> = p
        .wedges()
        .iter()
        .map(|w| {
            w.path
                .cmds()
                .iter()
                .find_map(|c| match c {
                    PathCmd::Arc { large, .. } => Some(*large),
                    _ => None,
                })
                .expect("wedge has an arc")
        })
        .collect();
    assert_eq!(flags, vec![true, false]);
}

#[test]
fn full_circle_uses_two_arcs() {
    let mut p = pie(&[42.0]);
    p.draw(1.0, &VP);
    let w = &p.wedges()[0];
    let arcs: Vec<_> = w.path.cmds().iter().filter(|c| matches!(c, PathCmd::Arc { .. })).collect();
    assert_eq!(arcs.len(), 2);
    // The intermediate point is opposite the start, so neither arc is degenerate.
    let PathCmd::Arc { to: mid, .. } = arcs[0] else { unreachable!() };
    assert!(approx(mid.x, 0.0) && approx(mid.y, 1.0));
}

#[test]
fn zero_entries_render_without_nan() {
    let mut p = pie(&[0.0, 5.0, 0.0]);
    p.draw(1.0, &VP);
    let sweeps = p.sweeps();
    assert_eq!(sweeps[0], 0.0);
    assert_eq!(sweeps[2], 0.0);
    let svg = p.scene(&Theme::light()).to_svg(&Theme::light());
    assert!(!svg.contains("NaN"), "{svg}");
}

#[test]
fn zero_total_yields_zero_sweeps() {
    let mut p = pie(&[0.0, 0.0]);
    p.draw(1.0, &VP);
    assert!(p.sweeps().iter().all(|s| *s == 0.0));
    let svg = p.scene(&Theme::light()).to_svg(&Theme::light());
    assert!(!svg.contains("NaN") && !svg.contains("inf"), "{svg}");
}

#[test]
fn labels_placed_only_at_full_progress() {
    let mut p = PieChart::new(PieConfig {
        data: vec![50.0, 50.0],
        labels: vec!["Down".into(), "Up".into()],
        ..PieConfig::default()
    });
    p.draw(0.5, &VP);
    assert_eq!(p.label_placement(0), Some(LabelPlacement::Unplaced));

    p.draw(1.0, &VP);
    // First wedge midpoint is at angle 0 (3 o'clock), second at angle PI.
    match p.label_placement(0) {
        Some(LabelPlacement::Center { left, top }) => assert!(approx(left, 100.0) && approx(top, 50.0)),
        other => panic!("label 0 not placed: {other:?}"),
    }
    match p.label_placement(1) {
        Some(LabelPlacement::Center { left, top }) => assert!(approx(left, 0.0) && approx(top, 50.0)),
        other => panic!("label 1 not placed: {other:?}"),
    }
}

#[test]
fn zero_sweep_wedge_gets_no_label() {
    let mut p = PieChart::new(PieConfig {
        data: vec![0.0, 1.0],
        labels: vec!["empty".into(), "all".into()],
        ..PieConfig::default()
    });
    p.draw(1.0, &VP);
    assert_eq!(p.label_placement(0), Some(LabelPlacement::Unplaced));
    assert!(matches!(p.label_placement(1), Some(LabelPlacement::Center { .. })));
}

#[test]
fn hover_emits_section_event_and_highlights_label() {
    let mut p = PieChart::new(PieConfig {
        data: vec![1.0, 2.0],
        labels: vec!["a".into(), "b".into()],
        ..PieConfig::default()
    });
    p.draw(1.0, &VP);

    assert_eq!(p.pointer_enter(HitTarget::Wedge(1)), Some(ChartEvent::SectionHover { index: 1 }));
    assert!(p.is_label_active(1));
    assert!(!p.is_label_active(0));
    let scene = p.scene(&Theme::light());
    assert_eq!(scene.find(HitTarget::Wedge(1)).and_then(|w| w.style.opacity), Some(0.5));
    assert!(scene.labels[1].active);

    p.pointer_leave(HitTarget::Wedge(1));
    assert!(!p.is_label_active(1));
    let scene = p.scene(&Theme::light());
    assert_eq!(scene.find(HitTarget::Wedge(1)).and_then(|w| w.style.opacity), None);

    // Out-of-range and foreign targets are ignored.
    assert_eq!(p.pointer_enter(HitTarget::Wedge(7)), None);
    assert_eq!(p.pointer_enter(HitTarget::Bar(0)), None);
}

#[test]
fn hover_survives_animation_frames() {
    let mut p = pie(&[1.0, 1.0]);
    p.draw(0.3, &VP);
    p.pointer_enter(HitTarget::Wedge(0));
    p.draw(0.6, &VP);
    assert!(p.wedges()[0].hover.is_hovered());
}

#[test]
fn colors_cycle_by_index() {
    let mut p = PieChart::new(PieConfig {
        data: vec![1.0; 8],
        palette: chart_core::Palette::new(vec!["#111".into(), "#222".into(), "#333".into()]),
        ..PieConfig::default()
    });
    p.draw(1.0, &VP);
    let scene = p.scene(&Theme::light());
    for (i, w) in scene.masked.iter().enumerate() {
        let want = ["#111", "#222", "#333"][i % 3];
        assert_eq!(w.style.fill.as_deref(), Some(want));
    }
}
