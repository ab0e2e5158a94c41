// File: crates/chart-core/src/theme.rs
// Summary: Color palettes for series and light/dark chrome colors for chart rendering.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seven default hues, cycled when a chart has no `colors` attribute.
pub const DEFAULT_HUES: [&str; 7] = [
    "#FAAA32", "#3EFA7D", "#FA6A25", "#0C94FA", "#FA1F19", "#0CFAE2", "#AB6D23",
];

/// Ordered color tokens, cycled by index.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub fn new(colors: Vec<String>) -> Self {
        if colors.is_empty() {
            return Self::default();
        }
        Self { colors }
    }

    /// `n` random `#RRGGBB` colors; the same seed always yields the same palette.
    pub fn random(n: usize, seed: u64) -> Self {
        const HEX: &[u8; 16] = b"0123456789ABCDEF";
        let mut rng = StdRng::seed_from_u64(seed);
        let colors = (0..n.max(1))
            .map(|_| {
                let mut c = String::with_capacity(7);
                c.push('#');
                for _ in 0..6 {
                    c.push(HEX[rng.gen_range(0..16)] as char);
                }
                c
            })
            .collect();
        Self { colors }
    }

    /// Color for series index `i`: entry `i mod len`.
    pub fn color_at(&self, i: usize) -> &str {
        &self.colors[i % self.colors.len()]
    }

    pub fn len(&self) -> usize { self.colors.len() }

    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    pub fn colors(&self) -> &[String] { &self.colors }

    /// `;`-joined form, as accepted by the `colors` attribute.
    pub fn to_attr(&self) -> String {
        self.colors.join(";")
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self { colors: DEFAULT_HUES.iter().map(|c| c.to_string()).collect() }
    }
}

/// Non-series colors: chrome, hover and tooltip styling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    /// Pie boundary lines and radar spokes.
    pub line: &'static str,
    pub radar_frame_stroke: &'static str,
    pub radar_frame_fill: &'static str,
    pub radar_data_fill: &'static str,
    pub radar_data_stroke: &'static str,
    pub bar_hover: &'static str,
    pub pie_tooltip_bg: &'static str,
    pub pie_tooltip_text: &'static str,
    pub bar_tooltip_bg: &'static str,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: "#FFFFFF",
            text: "black",
            line: "black",
            radar_frame_stroke: "#3498db",
            radar_frame_fill: "white",
            radar_data_fill: "#999",
            radar_data_stroke: "white",
            bar_hover: "#2980b9",
            pie_tooltip_bg: "#000",
            pie_tooltip_text: "#FFF",
            bar_tooltip_bg: "#FFF",
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#121214",
            text: "#EBEBF5",
            line: "#B4B4BE",
            radar_frame_stroke: "#40A0FF",
            radar_frame_fill: "#1E1E24",
            radar_data_fill: "#5A5A66",
            radar_data_stroke: "#121214",
            bar_hover: "#40A0FF",
            pie_tooltip_bg: "#EBEBF5",
            pie_tooltip_text: "#121214",
            bar_tooltip_bg: "#28282D",
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
