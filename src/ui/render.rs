//! Drawing: maps app state to widgets, one body per page.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::store::Post;
use crate::ui::app::{App, NoticeLevel};
use crate::ui::editor::DraftField;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::login::CredentialField;
use crate::ui::router::Page;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DANGER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER,
    SIGNIN_BLUE,
};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new();
    frame.render_widget(
        header_widget.widget(app.page().title(), app.current_user()),
        header,
    );

    frame.render_widget(Clear, body);
    match app.page() {
        Page::Login | Page::Signup => draw_credentials(frame, app, body),
        Page::Welcome => draw_welcome(frame, app, body),
        Page::Home | Page::MyPosts => draw_posts(frame, app, body),
        Page::Create => draw_compose(frame, app, body),
    }

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(app.page(), footer.width), footer);

    if let Some(notice) = app.notice() {
        draw_notice(frame, body, &notice.text, notice.level);
    }

    if app.confirming_delete() {
        draw_confirm_delete(frame, area);
    }
}

fn draw_credentials(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let form = app.credentials_form();
    let area = centered_rect(50, 50, body);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    let field_block = |label: &'static str, focused: bool| {
        let color = if focused { SIGNIN_BLUE } else { GLOBAL_BORDER };
        Block::default()
            .borders(Borders::ALL)
            .title(label)
            .border_style(Style::default().fg(color))
    };

    frame.render_widget(
        Paragraph::new(form.username.clone())
            .block(field_block("Username", form.focused == CredentialField::Username)),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new("•".repeat(form.password.chars().count()))
            .block(field_block("Password", form.focused == CredentialField::Password)),
        rows[1],
    );

    let status = if form.in_flight {
        Line::from(Span::styled("Contacting the server...", Style::default().fg(MUTED_TEXT)))
    } else if app.page() == Page::Signup {
        Line::from(Span::styled(
            "Pick a username and password, then press Enter",
            Style::default().fg(MUTED_TEXT),
        ))
    } else {
        Line::from(Span::styled(
            "Press Enter to sign in",
            Style::default().fg(MUTED_TEXT),
        ))
    };
    frame.render_widget(Paragraph::new(status).alignment(Alignment::Center), rows[2]);
}

fn draw_welcome(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let user = app.current_user().unwrap_or("stranger");
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Welcome, {user}!"),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Browse recent posts, or start writing your own.",
            Style::default().fg(HEADER_TEXT),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        body,
    );
}

fn draw_posts(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let posts = app.visible_posts();

    if posts.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No posts yet. Start writing!",
                Style::default()
                    .fg(MUTED_TEXT)
                    .add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center),
            body,
        );
        return;
    }

    let items: Vec<ListItem> = posts.iter().map(|post| post_item(post)).collect();
    let mut state = ListState::default();
    state.select(Some(app.selected().min(posts.len() - 1)));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));

    frame.render_stateful_widget(list, body, &mut state);
}

fn post_item(post: &Post) -> ListItem<'static> {
    let mut meta = format!(
        "by {} · {}",
        post.author,
        post.created_at.format("%Y-%m-%d %H:%M")
    );
    if post.updated_at > post.created_at {
        meta.push_str(&format!(
            " · edited {}",
            post.updated_at.format("%Y-%m-%d %H:%M")
        ));
    }

    // First line of the body as a preview; the full text lives in the editor.
    let preview = post.content.lines().next().unwrap_or("").to_string();

    ListItem::new(vec![
        Line::from(vec![
            Span::styled(
                post.title.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(meta, Style::default().fg(MUTED_TEXT)),
        ]),
        Line::from(Span::raw(preview)),
        Line::from(""),
    ])
}

fn draw_compose(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let draft = app.draft();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(body);

    let heading = if draft.is_editing() {
        "Edit Post"
    } else {
        "Create a New Post"
    };

    let border = |focused: bool| {
        Style::default().fg(if focused { ACCENT } else { GLOBAL_BORDER })
    };

    frame.render_widget(
        Paragraph::new(draft.title.clone()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{heading}: Title"))
                .border_style(border(draft.focused == DraftField::Title)),
        ),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(draft.content.clone())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Content")
                    .border_style(border(draft.focused == DraftField::Content)),
            ),
        rows[1],
    );
}

fn draw_notice(frame: &mut Frame<'_>, body: Rect, text: &str, level: NoticeLevel) {
    if body.height == 0 {
        return;
    }
    let line = Rect {
        x: body.x,
        y: body.y + body.height - 1,
        width: body.width,
        height: 1,
    };
    let color = match level {
        NoticeLevel::Info => ACCENT,
        NoticeLevel::Error => DANGER,
    };
    frame.render_widget(Clear, line);
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {text} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        line,
    );
}

fn draw_confirm_delete(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_rect(40, 20, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Delete this post?",
                Style::default().fg(HEADER_TEXT),
            )),
            Line::from(Span::styled(
                "y: delete   n: keep",
                Style::default().fg(MUTED_TEXT),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Confirm")
                .border_style(Style::default().fg(POPUP_BORDER)),
        ),
        popup,
    );
}
