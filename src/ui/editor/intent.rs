use uuid::Uuid;

use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DraftIntent {
    /// Type a character into the focused field.
    Input(char),
    /// Delete the last character of the focused field.
    Backspace,
    /// Insert a line break (content field only).
    Newline,
    /// Move focus to the other field.
    FocusNext,
    /// Load an existing post into the draft for editing.
    LoadForEdit {
        id: Uuid,
        title: String,
        content: String,
    },
    /// Reset to an empty new-post draft.
    Clear,
}

impl Intent for DraftIntent {}
