// File: crates/chart-render-skia/src/color.rs
// Summary: CSS color tokens (`#rgb`, `#rrggbb`, `#rrggbbaa`, a few names) to Skia colors.

use skia_safe as skia;

/// Parse a CSS color token. Unknown tokens yield `None`.
pub fn parse_color(token: &str) -> Option<skia::Color> {
    let t = token.trim();
    if let Some(hex) = t.strip_prefix('#') {
        return parse_hex(hex);
    }
    let named = match t.to_ascii_lowercase().as_str() {
        "black" => skia::Color::BLACK,
        "white" => skia::Color::WHITE,
        "red" => skia::Color::from_rgb(255, 0, 0),
        "green" => skia::Color::from_rgb(0, 128, 0),
        "blue" => skia::Color::from_rgb(0, 0, 255),
        "gray" | "grey" => skia::Color::from_rgb(128, 128, 128),
        "transparent" => skia::Color::TRANSPARENT,
        _ => return None,
    };
    Some(named)
}

/// Like [`parse_color`], but falls back to black with a warning.
pub fn color_or_black(token: &str) -> skia::Color {
    parse_color(token).unwrap_or_else(|| {
        tracing::warn!(token, "unrecognized color; using black");
        skia::Color::BLACK
    })
}

fn parse_hex(hex: &str) -> Option<skia::Color> {
    if !hex.is_ascii() {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => Some(skia::Color::from_rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        6 => Some(skia::Color::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(skia::Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}
