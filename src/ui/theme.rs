use ratatui::style::Color;

// Palette lifted from the classic bootstrap-ish button colors.
pub const ACCENT: Color = Color::Rgb(0x28, 0xa7, 0x45);
pub const SIGNIN_BLUE: Color = Color::Rgb(0x00, 0x7b, 0xff);
pub const DANGER: Color = Color::Rgb(0xdc, 0x35, 0x45);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
