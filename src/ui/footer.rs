use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::router::Page;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Key hints for the current page, plus the version on the right.
    pub fn widget(&self, page: Page, area_width: u16) -> Paragraph<'static> {
        let hints = match page {
            Page::Login => " Enter: Sign In │ Tab: Next Field │ Ctrl+S: Sign Up │ Ctrl+Q: Quit",
            Page::Signup => " Enter: Register │ Tab: Next Field │ Ctrl+S: Sign In │ Ctrl+Q: Quit",
            Page::Welcome => " h: Home │ m: My Posts │ n: New Post │ Ctrl+O: Sign Out │ Ctrl+Q: Quit",
            Page::Home | Page::MyPosts => {
                " ↑/↓: Select │ e: Edit │ d: Delete │ n: New │ h: Home │ m: Mine │ Ctrl+O: Sign Out"
            }
            Page::Create => " Ctrl+S: Publish │ Tab: Switch Field │ Esc: Back │ Ctrl+Q: Quit",
        };
        let version = format!("v{} ", VERSION);

        // Padding by char count, not byte count (the hints contain │ and arrows).
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area_width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(format!("{hints}{}{version}", " ".repeat(padding)));

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
