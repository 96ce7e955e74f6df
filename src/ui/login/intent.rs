use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CredentialsIntent {
    /// Type a character into the focused field.
    Input(char),
    /// Delete the last character of the focused field.
    Backspace,
    /// Move focus to the other field.
    FocusNext,
    /// A request was dispatched.
    Submitted,
    /// The outstanding request finished (either way).
    Settled,
    /// Wipe the form.
    Clear,
}

impl Intent for CredentialsIntent {}
