//! Page routing with a central authentication guard.

use crate::session::Session;

/// The fixed set of pages the client can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Login,
    Signup,
    Welcome,
    Home,
    MyPosts,
    Create,
}

impl Page {
    /// Pages reachable without a session.
    pub fn is_public(self) -> bool {
        matches!(self, Page::Login | Page::Signup)
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Login => "Sign In",
            Page::Signup => "Sign Up",
            Page::Welcome => "Welcome",
            Page::Home => "Recent Posts",
            Page::MyPosts => "My Posts",
            Page::Create => "Compose",
        }
    }
}

/// The landing page for a freshly started app.
pub fn initial_page(session: &Session) -> Page {
    if session.is_authenticated() {
        Page::Home
    } else {
        Page::Login
    }
}

/// The one choke point for navigation: signed-out sessions are confined
/// to the public pages, and any other destination is rewritten to Login.
pub fn navigate(target: Page, session: &Session) -> Page {
    if target.is_public() || session.is_authenticated() {
        target
    } else {
        tracing::debug!(?target, "navigation blocked while signed out");
        Page::Login
    }
}
