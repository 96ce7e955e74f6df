//! Keyboard dispatch: maps key events to app actions per page.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::editor::{DraftField, DraftIntent};
use crate::ui::login::CredentialsIntent;
use crate::ui::router::Page;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    // A pending delete confirmation swallows everything but its answer.
    if app.confirming_delete() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.resolve_delete(true),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.resolve_delete(false),
            _ => {}
        }
        return;
    }

    if app.current_user().is_some() && is_ctrl_char(key, 'o') {
        app.sign_out();
        return;
    }

    match app.page() {
        Page::Login | Page::Signup => handle_credentials_key(app, key),
        Page::Create => handle_compose_key(app, key),
        Page::Home | Page::MyPosts => handle_list_key(app, key),
        Page::Welcome => handle_nav_key(app, key),
    }
}

fn handle_credentials_key(app: &mut App, key: KeyEvent) {
    // Switch between sign-in and sign-up.
    if is_ctrl_char(key, 's') {
        let other = match app.page() {
            Page::Signup => Page::Login,
            _ => Page::Signup,
        };
        app.navigate_to(other);
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
            app.credentials_input(CredentialsIntent::FocusNext)
        }
        KeyCode::Backspace => app.credentials_input(CredentialsIntent::Backspace),
        KeyCode::Enter => app.submit_credentials(),
        KeyCode::Char(ch) if is_text(key) => app.credentials_input(CredentialsIntent::Input(ch)),
        _ => {}
    }
}

fn handle_compose_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 's') {
        app.publish_draft();
        return;
    }

    match key.code {
        KeyCode::Esc => app.navigate_to(Page::Home),
        KeyCode::Tab => app.draft_input(DraftIntent::FocusNext),
        KeyCode::Backspace => app.draft_input(DraftIntent::Backspace),
        KeyCode::Enter => {
            // Enter leaves the single-line title; it's a line break in
            // the content body.
            if app.draft().focused == DraftField::Title {
                app.draft_input(DraftIntent::FocusNext);
            } else {
                app.draft_input(DraftIntent::Newline);
            }
        }
        KeyCode::Char(ch) if is_text(key) => app.draft_input(DraftIntent::Input(ch)),
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Char('e') => app.begin_edit(),
        KeyCode::Char('d') => app.request_delete(),
        _ => handle_nav_key(app, key),
    }
}

/// Plain-letter navigation, shared by the pages without text entry.
fn handle_nav_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('h') => app.navigate_to(Page::Home),
        KeyCode::Char('m') => app.navigate_to(Page::MyPosts),
        KeyCode::Char('n') => app.compose_new(),
        KeyCode::Char('w') => app.navigate_to(Page::Welcome),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}

/// Printable input: no control modifier (shift is fine for capitals).
fn is_text(key: KeyEvent) -> bool {
    !key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT)
}
