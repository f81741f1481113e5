use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x2a, 0x9d, 0x8f);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

/// Terminal glyph for a catalog icon reference.
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "restaurante" => "🍴",
        "parque" => "🌳",
        "hotel" => "🏨",
        "supermercado" => "🛒",
        "gasolinera" => "⛽",
        _ => "•",
    }
}
