// Color conversion and built-in palettes

/// Sequential blues, darkest first.
pub const DEFAULT_COLOR_PALETTE: [&str; 9] = [
    "#004c6d", "#055e80", "#0e7194", "#1685a7", "#2099ba", "#2baecc", "#38c3de", "#46d9ef",
    "#56efff",
];

/// Diverging blue-to-yellow palette.
pub const ALT_COLOR_PALETTE: [&str; 9] = [
    "#003f5c", "#2f4b7c", "#665191", "#a05195", "#d45087", "#f95d6a", "#ff7c43", "#ffa600",
    "#ffd800",
];

pub const RETRO_COLOR_PALETTE: [&str; 9] = [
    "#ea5545", "#f46a9b", "#ef9b20", "#edbf33", "#ede15b", "#bdcf32", "#87bc45", "#27aeef",
    "#b33dc6",
];

pub const PASTEL_COLOR_PALETTE: [&str; 10] = [
    "#fd7f6f", "#7eb0d5", "#b2e061", "#bd7ebe", "#ffb55a", "#ffee65", "#beb9db", "#fdcce5",
    "#8bd3c7", "#8bd3c7",
];

/// Look up a built-in palette by its config name.
pub fn palette_by_name(name: &str) -> Option<Vec<String>> {
    let colors: &[&str] = match name {
        "default" => &DEFAULT_COLOR_PALETTE,
        "alt" => &ALT_COLOR_PALETTE,
        "retro" => &RETRO_COLOR_PALETTE,
        "pastel" => &PASTEL_COLOR_PALETTE,
        _ => return None,
    };
    Some(colors.iter().map(|c| c.to_string()).collect())
}

pub fn default_color_palette() -> Vec<String> {
    DEFAULT_COLOR_PALETTE.iter().map(|c| c.to_string()).collect()
}

/// Convert a `#RRGGBB` hex color into a CSS color string with the given alpha.
///
/// Known quirk, kept on purpose: an alpha of exactly 0 returns an opaque
/// `rgb(r, g, b)` rather than a fully transparent color. Downstream visuals
/// depend on this.
///
/// Input is expected to be palette-sourced; malformed hex pairs parse as 0.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> String {
    let r = hex_pair(hex, 1);
    let g = hex_pair(hex, 3);
    let b = hex_pair(hex, 5);

    if alpha != 0.0 {
        format!("rgba({}, {}, {}, {})", r, g, b, alpha)
    } else {
        format!("rgb({}, {}, {})", r, g, b)
    }
}

fn hex_pair(hex: &str, start: usize) -> u8 {
    hex.get(start..start + 2)
        .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        .unwrap_or(0)
}
