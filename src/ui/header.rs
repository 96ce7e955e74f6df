use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Title bar: app name, current page, and who is signed in.
    pub fn widget(&self, page_title: &str, user: Option<&str>) -> Paragraph<'static> {
        let session_span = match user {
            Some(user) => Span::styled(
                format!("Welcome, {user}!"),
                Style::default().fg(ACCENT),
            ),
            None => Span::styled("signed out", Style::default().fg(MUTED_TEXT)),
        };

        let line = Line::from(vec![
            Span::styled(
                " quill ",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("│ ", Style::default().fg(MUTED_TEXT)),
            Span::styled(page_title.to_string(), Style::default().fg(HEADER_TEXT)),
            Span::styled(" │ ", Style::default().fg(MUTED_TEXT)),
            session_span,
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
