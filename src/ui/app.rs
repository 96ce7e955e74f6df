//! Application state: session, posts, routing, forms, notices.
//!
//! All mutations happen here on the UI thread in response to discrete
//! events. The only background work is the auth round-trip, dispatched
//! through a command channel and fed back as an event.

use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use uuid::Uuid;

use crate::auth::Credentials;
use crate::session::Session;
use crate::storage::Storage;
use crate::store::{policy, Post, PostStore};
use crate::ui::editor::{DraftIntent, DraftReducer, DraftState};
use crate::ui::login::{CredentialsFormState, CredentialsIntent, CredentialsReducer};
use crate::ui::mvi::Reducer;
use crate::ui::router::{self, Page};

/// How long a notice stays on screen.
const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Work handed to the auth worker off the UI thread.
#[derive(Debug)]
pub enum AuthCommand {
    Login { username: String, password: String },
    Register { username: String, password: String },
}

pub type AuthCommandSender = mpsc::Sender<AuthCommand>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Transient banner shown at the bottom of the screen.
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
    shown_at: Instant,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    page: Page,
    storage: Storage,
    session: Session,
    store: PostStore,
    /// Draft form state (MVI).
    draft: DraftState,
    /// Credentials form state (MVI).
    credentials_form: CredentialsFormState,
    /// Cursor into the list shown on the current page.
    selected: usize,
    /// Post awaiting delete confirmation, if any.
    pending_delete: Option<Uuid>,
    notice: Option<Notice>,
    auth_tx: Option<AuthCommandSender>,
}

impl App {
    pub fn new(storage: Storage, session: Session, store: PostStore) -> Self {
        let page = router::initial_page(&session);
        Self {
            should_quit: false,
            page,
            storage,
            session,
            store,
            draft: DraftState::default(),
            credentials_form: CredentialsFormState::default(),
            selected: 0,
            pending_delete: None,
            notice: None,
            auth_tx: None,
        }
    }

    pub fn attach_auth(&mut self, sender: AuthCommandSender) {
        self.auth_tx = Some(sender);
    }

    // --- accessors for rendering ---

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn current_user(&self) -> Option<&str> {
        self.session.current_user()
    }

    pub fn draft(&self) -> &DraftState {
        &self.draft
    }

    pub fn credentials_form(&self) -> &CredentialsFormState {
        &self.credentials_form
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn confirming_delete(&self) -> bool {
        self.pending_delete.is_some()
    }

    /// The posts the current page lists.
    pub fn visible_posts(&self) -> Vec<&Post> {
        match self.page {
            Page::Home => self.store.all().iter().collect(),
            Page::MyPosts => match self.session.current_user() {
                Some(user) => self.store.by_author(user),
                None => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    // --- lifecycle ---

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {
        if let Some(notice) = &self.notice {
            if notice.shown_at.elapsed() >= NOTICE_TTL {
                self.notice = None;
            }
        }
    }

    // --- navigation ---

    pub fn navigate_to(&mut self, target: Page) {
        self.page = router::navigate(target, &self.session);
        self.selected = 0;
        self.pending_delete = None;
    }

    /// Start a fresh draft and go to the compose page.
    pub fn compose_new(&mut self) {
        dispatch_mvi!(self, draft, DraftReducer, DraftIntent::Clear);
        self.navigate_to(Page::Create);
    }

    // --- credentials form ---

    pub fn credentials_input(&mut self, intent: CredentialsIntent) {
        dispatch_mvi!(self, credentials_form, CredentialsReducer, intent);
    }

    /// Submit the form; the current page decides login vs. register.
    pub fn submit_credentials(&mut self) {
        if self.credentials_form.in_flight {
            return;
        }

        let username = self.credentials_form.username.trim().to_string();
        let password = self.credentials_form.password.clone();
        if username.is_empty() || password.is_empty() {
            self.show_error("Enter both username and password");
            return;
        }

        let command = match self.page {
            Page::Signup => AuthCommand::Register { username, password },
            _ => AuthCommand::Login { username, password },
        };

        let Some(tx) = &self.auth_tx else {
            self.show_error("Authentication is not available");
            return;
        };
        match tx.try_send(command) {
            Ok(()) => {
                dispatch_mvi!(
                    self,
                    credentials_form,
                    CredentialsReducer,
                    CredentialsIntent::Submitted
                );
            }
            Err(err) => {
                tracing::warn!(%err, "auth command channel unavailable");
                self.show_error("Authentication is not available");
            }
        }
    }

    /// An auth round-trip finished.
    pub fn on_auth_result(&mut self, result: Result<Credentials, String>) {
        dispatch_mvi!(
            self,
            credentials_form,
            CredentialsReducer,
            CredentialsIntent::Settled
        );
        match result {
            Ok(credentials) => {
                let username = credentials.username.clone();
                self.session.sign_in(&self.storage, credentials);
                dispatch_mvi!(
                    self,
                    credentials_form,
                    CredentialsReducer,
                    CredentialsIntent::Clear
                );
                self.navigate_to(Page::Welcome);
                self.show_info(format!("Signed in as {username}"));
            }
            Err(message) => {
                // The remote's own wording; the session stays as it was.
                self.show_error(message);
            }
        }
    }

    pub fn sign_out(&mut self) {
        self.session.sign_out(&self.storage);
        dispatch_mvi!(self, draft, DraftReducer, DraftIntent::Clear);
        dispatch_mvi!(
            self,
            credentials_form,
            CredentialsReducer,
            CredentialsIntent::Clear
        );
        self.navigate_to(Page::Login);
        self.show_info("Signed out");
    }

    // --- draft form ---

    pub fn draft_input(&mut self, intent: DraftIntent) {
        dispatch_mvi!(self, draft, DraftReducer, intent);
    }

    /// Commit the draft: update when editing, create otherwise.
    pub fn publish_draft(&mut self) {
        let title = self.draft.title.clone();
        let content = self.draft.content.clone();

        let result = match self.draft.edit_target {
            Some(id) => self.store.update(id, &title, &content, &self.session),
            None => self.store.create(&title, &content, &self.session),
        };

        match result {
            Ok(post) => {
                let verb = if self.draft.is_editing() {
                    "updated"
                } else {
                    "published"
                };
                tracing::info!(id = %post.id, verb, "draft committed");
                dispatch_mvi!(self, draft, DraftReducer, DraftIntent::Clear);
                self.navigate_to(Page::Home);
                self.show_info(format!("Post {verb}"));
            }
            Err(err) => self.show_error(err.to_string()),
        }
    }

    // --- list actions ---

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.visible_posts().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let current = self.selected.min(len - 1) as isize;
        self.selected = current.saturating_add(delta).clamp(0, len as isize - 1) as usize;
    }

    /// Load the selected post into the draft and switch to compose.
    pub fn begin_edit(&mut self) {
        let Some(post) = self.selected_post() else {
            return;
        };
        if let Err(err) = policy::require_owner(&self.session, post) {
            let message = err.to_string();
            self.show_error(message);
            return;
        }

        let (id, title, content) = (post.id, post.title.clone(), post.content.clone());
        dispatch_mvi!(
            self,
            draft,
            DraftReducer,
            DraftIntent::LoadForEdit { id, title, content }
        );
        self.navigate_to(Page::Create);
    }

    /// Ask for confirmation before deleting the selected post.
    pub fn request_delete(&mut self) {
        let Some(post) = self.selected_post() else {
            return;
        };
        if let Err(err) = policy::require_owner(&self.session, post) {
            let message = err.to_string();
            self.show_error(message);
            return;
        }
        self.pending_delete = Some(post.id);
    }

    /// Resolve the pending delete confirmation.
    pub fn resolve_delete(&mut self, confirmed: bool) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        if !confirmed {
            return;
        }
        match self.store.delete(id, &self.session) {
            Ok(()) => {
                self.show_info("Post deleted");
                self.move_selection(0); // re-clamp after removal
            }
            Err(err) => self.show_error(err.to_string()),
        }
    }

    fn selected_post(&self) -> Option<&Post> {
        let posts = self.visible_posts();
        posts.get(self.selected.min(posts.len().saturating_sub(1)))
            .copied()
    }

    // --- notices ---

    fn show_info(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            level: NoticeLevel::Info,
            shown_at: Instant::now(),
        });
    }

    fn show_error(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            level: NoticeLevel::Error,
            shown_at: Instant::now(),
        });
    }
}
