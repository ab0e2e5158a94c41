// File: crates/chart-dioxus/src/lib.rs
// Summary: Dioxus desktop host for chart widgets (ChartView component) plus toolkit-agnostic glue.
// Notes:
// - This crate keeps UI deps behind the `desktop` feature, so the workspace builds
//   without fetching Dioxus unless explicitly enabled.
// - The scene is rendered as native SVG elements so pointer events reach
//   the hit-tagged primitives directly.

pub mod host;

pub use host::{ChartHost, FRAME_INTERVAL_MS};

#[cfg(feature = "desktop")]
pub mod ui {
    use super::*;
    use chart_core::scene::{Primitive, Shape};
    use chart_core::svg::{label_style, stylesheet};
    use chart_core::types::ViewBox;
    use chart_core::{Attributes, ChartEvent, ChartKind, FrameRequest, HitTarget, Theme};
    use dioxus::prelude::*;
    use std::time::{Duration, Instant};

    #[derive(Props, Clone)]
    pub struct ChartViewProps {
        pub kind: ChartKind,
        pub attrs: Attributes,
        #[props(default = Theme::light())]
        pub theme: Theme,
        /// Container width in pixels
        #[props(default = 400)]
        pub width_px: u32,
        /// Container height in pixels
        #[props(default = 400)]
        pub height_px: u32,
        /// Fired with the wedge index when a pie section is hovered.
        #[props(default)]
        pub on_section_hover: Option<EventHandler<usize>>,
    }

    impl PartialEq for ChartViewProps {
        fn eq(&self, other: &Self) -> bool {
            self.kind == other.kind
                && self.attrs == other.attrs
                && self.theme == other.theme
                && self.width_px == other.width_px
                && self.height_px == other.height_px
        }
    }

    /// Builds the chart once, drives its animation on a frame timer and forwards hover.
    #[component]
    pub fn ChartView(props: ChartViewProps) -> Element {
        let (w, h) = (props.width_px, props.height_px);
        let mut host = use_signal(|| {
            ChartHost::new(props.kind, &props.attrs, w as f64, h as f64, props.theme)
                .map_err(|e| e.to_string())
        });

        use_future(move || async move {
            let started = Instant::now();
            loop {
                tokio::time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)).await;
                let now = started.elapsed().as_secs_f64() * 1000.0;
                let request = match host.write().as_mut() {
                    Ok(chart) => chart.tick(now),
                    Err(_) => FrameRequest::Idle,
                };
                if request == FrameRequest::Idle {
                    break;
                }
            }
        });

        use_drop(move || {
            if let Ok(mut guard) = host.try_write() {
                if let Ok(chart) = guard.as_mut() {
                    chart.dispose();
                }
            }
        });

        let on_section_hover = props.on_section_hover;
        let hover = move |target: HitTarget, entered: bool| {
            let events = match host.write().as_mut() {
                Ok(chart) => chart.hover(target, entered),
                Err(_) => Vec::new(),
            };
            for event in events {
                let ChartEvent::SectionHover { index } = event;
                if let Some(handler) = on_section_hover {
                    handler.call(index);
                }
            }
        };

        let guard = host.read();
        let chart = match guard.as_ref() {
            Ok(chart) => chart,
            Err(msg) => return rsx! { div { class: "chart-error", "{msg}" } },
        };
        let scene = chart.scene().clone();
        let theme = chart.theme();
        drop(guard);

        let tag = scene.kind.tag();
        let css = stylesheet(scene.kind, &theme);
        let view_box = scene.view_box.map(|vb| vb.to_string());
        let bounds = scene.view_box.unwrap_or_else(ViewBox::unit);

        rsx! {
            div {
                class: tag,
                style: "position:relative; width:{w}px; height:{h}px;",
                style { "{css}" }
                svg {
                    view_box: view_box,
                    width: "100%",
                    height: "100%",
                    if let Some(mask) = scene.mask.clone() {
                        g { mask: "url(#{mask.id})",
                            for (i, p) in scene.masked.iter().enumerate() {
                                {primitive(p, i, hover)}
                            }
                        }
                        mask { id: "{mask.id}",
                            rect { fill: "white", x: bounds.min_x, y: bounds.min_y, width: bounds.width, height: bounds.height }
                            for (i, p) in mask.hide.iter().enumerate() {
                                {primitive(p, i, hover)}
                            }
                        }
                    } else {
                        for (i, p) in scene.masked.iter().enumerate() {
                            {primitive(p, i, hover)}
                        }
                    }
                    for (i, p) in scene.primitives.iter().enumerate() {
                        {primitive(p, i, hover)}
                    }
                }
                for (i, label) in scene.labels.iter().enumerate() {
                    div {
                        key: "{i}",
                        class: if label.active { "is-active" } else { "" },
                        style: label_style(label),
                        "{label.text}"
                    }
                }
            }
        }
    }

    fn primitive(p: &Primitive, key: usize, mut hover: impl FnMut(HitTarget, bool) + Copy + 'static) -> Element {
        let hit = p.hit;
        let s = p.style.clone();
        let enter = move |_| if let Some(t) = hit { hover(t, true) };
        let leave = move |_| if let Some(t) = hit { hover(t, false) };
        match &p.shape {
            Shape::Path(d) => rsx! {
                path {
                    key: "{key}", d: d.to_string(),
                    fill: s.fill, stroke: s.stroke, stroke_width: s.stroke_width, opacity: s.opacity,
                    onmouseenter: enter, onmouseleave: leave,
                }
            },
            Shape::Rect { x, y, width, height } => rsx! {
                rect {
                    key: "{key}", x: x.to_string(), y: *y, width: width.to_string(), height: *height,
                    fill: s.fill, stroke: s.stroke, stroke_width: s.stroke_width, opacity: s.opacity,
                    onmouseenter: enter, onmouseleave: leave,
                }
            },
            Shape::Line { from, to } => rsx! {
                line {
                    key: "{key}", x1: from.x, y1: from.y, x2: to.x, y2: to.y,
                    stroke: s.stroke, stroke_width: s.stroke_width, opacity: s.opacity,
                }
            },
            Shape::Circle { center, r } => rsx! {
                circle {
                    key: "{key}", cx: center.x, cy: center.y, r: *r,
                    fill: s.fill, stroke_width: s.stroke_width, opacity: s.opacity,
                    onmouseenter: enter, onmouseleave: leave,
                }
            },
            Shape::Text { at, content } => rsx! {
                text {
                    key: "{key}", x: at.x, y: at.y,
                    text_anchor: "middle", dominant_baseline: "middle", pointer_events: "none",
                    font_size: s.font_size, fill: s.fill, opacity: s.opacity,
                    "{content}"
                }
            },
        }
    }

    /// Tiny demo launcher: one chart of each kind, with the last hovered pie section shown.
    pub fn run_demo_ui() -> Result<(), String> {
        #[component]
        fn App() -> Element {
            let mut hovered = use_signal(|| Option::<usize>::None);
            let pie = Attributes::new()
                .with("data", "30;50;20")
                .with("labels", "alpha;beta;gamma")
                .with("donut", "0.2")
                .with("gap", "0.06");
            let bar = Attributes::new().with("data", "4;8;2;6").with("labels", "go;js;rust;sql");
            let radar = Attributes::new()
                .with("scores", "3;1;4;1;5")
                .with("labels", "ann;bob;cid;dee;eve")
                .with("ids", "input_ann;input_bob;input_cid;input_dee;input_eve")
                .with("max", "6");
            rsx! {
                div { style: "display:flex; gap:48px; padding:32px; font-family:sans-serif;",
                    ChartView { kind: ChartKind::Pie, attrs: pie, width_px: 240, height_px: 240,
                        on_section_hover: move |i| hovered.set(Some(i)) }
                    ChartView { kind: ChartKind::Bar, attrs: bar, width_px: 320, height_px: 240 }
                    ChartView { kind: ChartKind::Radar, attrs: radar, width_px: 240, height_px: 240 }
                }
                p { style: "padding:0 32px;",
                    match *hovered.read() {
                        Some(i) => rsx! { "section-hover: {i}" },
                        None => rsx! { "hover a pie section" },
                    }
                }
            }
        }

        let window = dioxus_desktop::WindowBuilder::new().with_title("Profile charts");
        dioxus::LaunchBuilder::desktop()
            .with_cfg(dioxus_desktop::Config::new().with_window(window))
            .launch(App);
        Ok(())
    }
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_demo_ui() -> Result<(), &'static str> {
    Err("chart-dioxus built without `desktop` feature; enable features to run UI demo")
}
