//! Shared color constants for the UI.

use bodega_business::Tone;
use egui::{Color32, Visuals};

/// Forest green for prices and other positive figures.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Blue for informational values.
pub const COLOR_BLUE: Color32 = Color32::from_rgb(37, 99, 235);

/// Red for destructive or failed states.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Amber for warnings.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);

/// Subtle gray for the table border.
pub const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Foreground color of a tone. `Default` follows the current theme.
pub fn tone_color(tone: Tone, visuals: &Visuals) -> Color32 {
    match tone {
        Tone::Default => visuals.text_color(),
        Tone::Muted => visuals.weak_text_color(),
        Tone::Success => COLOR_GREEN,
        Tone::Info => COLOR_BLUE,
        Tone::Warning => COLOR_AMBER,
        Tone::Danger => COLOR_RED,
    }
}

/// Background of a badge: the tone color, faded so the text stays readable.
pub fn badge_fill(tone: Tone, visuals: &Visuals) -> Color32 {
    tone_color(tone, visuals).gamma_multiply(0.2)
}
