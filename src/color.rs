use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::SeriesSpec;

/// Series colours used when the settings do not provide any.
pub const DEFAULT_CHART_COLORS: [&str; 5] = [
    "hsl(243, 75%, 59%)",
    "hsl(173, 80%, 40%)",
    "hsl(38, 92%, 50%)",
    "hsl(280, 65%, 60%)",
    "hsl(0, 84%, 60%)",
];

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| hsl_to_color32((i as f32 / n as f32) * 360.0, 0.75, 0.55))
        .collect()
}

fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0).round() as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}

// ---------------------------------------------------------------------------
// Colour tokens: "hsl(h, s%, l%)" or "#rrggbb" → Color32
// ---------------------------------------------------------------------------

/// Parse a colour token. Accepts `hsl(243, 75%, 59%)`, the space-separated
/// `hsl(243 75% 59%)` and `#rrggbb`.
pub fn parse_color_token(token: &str) -> Option<Color32> {
    let token = token.trim();
    if token.starts_with('#') {
        return Color32::from_hex(token).ok();
    }

    let inner = token.strip_prefix("hsl(")?.strip_suffix(')')?;
    let parts: Vec<&str> = inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    let [h, s, l] = parts.as_slice() else {
        return None;
    };

    let hue: f32 = h.parse().ok()?;
    let saturation: f32 = s.strip_suffix('%')?.parse().ok()?;
    let lightness: f32 = l.strip_suffix('%')?.parse().ok()?;
    Some(hsl_to_color32(hue, saturation / 100.0, lightness / 100.0))
}

/// Resolve each series' token to a colour. Unparseable tokens fall back to
/// an evenly spaced palette entry so every series stays distinguishable.
pub fn series_colors(series: &[SeriesSpec]) -> Vec<Color32> {
    let fallback = generate_palette(series.len());
    series
        .iter()
        .zip(fallback)
        .map(|(spec, fb)| {
            parse_color_token(&spec.color_token).unwrap_or_else(|| {
                log::warn!("invalid colour token '{}' for {}", spec.color_token, spec.column_name);
                fb
            })
        })
        .collect()
}
