//! Diverging color scale for signed order sizes.
//!
//! Buy-side (positive) cells shade toward warm red, sell-side (negative)
//! cells toward cool blue, with a neutral midpoint at zero so both sides
//! read at equal intensity for equal size.

use ratatui::style::Color;

/// Cool endpoint (largest sell-side size).
const COOL: (u8, u8, u8) = (59, 76, 192);
/// Warm endpoint (largest buy-side size).
const WARM: (u8, u8, u8) = (180, 4, 38);
/// Neutral midpoint (zero).
const NEUTRAL: (u8, u8, u8) = (221, 221, 221);

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}

/// Map a signed order size to a color on the diverging scale.
///
/// `max_abs` is the scale's saturation point; values at or beyond it get the
/// full endpoint color. Zero (and a zero scale) map to the neutral midpoint.
pub fn diverging_color(value: i64, max_abs: i64) -> Color {
    if value == 0 || max_abs <= 0 {
        return Color::Rgb(NEUTRAL.0, NEUTRAL.1, NEUTRAL.2);
    }

    let t = (value.abs() as f64 / max_abs as f64).min(1.0);
    let end = if value > 0 { WARM } else { COOL };

    Color::Rgb(
        lerp(NEUTRAL.0, end.0, t),
        lerp(NEUTRAL.1, end.1, t),
        lerp(NEUTRAL.2, end.2, t),
    )
}
