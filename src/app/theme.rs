//! Screen colours

use ratatui::style::Color;

pub const BACKGROUND: (u8, u8, u8) = (28, 27, 31);
pub const ON_BACKGROUND: Color = Color::Rgb(230, 225, 229);
pub const PRIMARY: Color = Color::Rgb(208, 188, 255);
pub const MUTED: Color = Color::Rgb(147, 143, 153);
pub const TOP_BAR: Color = Color::Rgb(28, 27, 31);
pub const TOP_BAR_SCROLLED: Color = Color::Rgb(49, 45, 58);
pub const HEADER_ART: (u8, u8, u8) = (204, 194, 220);
pub const HELP_KEY: Color = Color::Cyan;

/// Blend `fg` over the background at `alpha`
pub fn fade(fg: (u8, u8, u8), alpha: f32) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    let mix = |f: u8, b: u8| (b as f32 + (f as f32 - b as f32) * alpha).round() as u8;
    Color::Rgb(
        mix(fg.0, BACKGROUND.0),
        mix(fg.1, BACKGROUND.1),
        mix(fg.2, BACKGROUND.2),
    )
}

pub fn background() -> Color {
    Color::Rgb(BACKGROUND.0, BACKGROUND.1, BACKGROUND.2)
}
