use uuid::Uuid;

use crate::ui::mvi::UiState;

/// Which draft field has input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftField {
    #[default]
    Title,
    Content,
}

/// The in-progress title/content pair, plus the id of the post being
/// edited. `edit_target` absent means a new post is being composed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DraftState {
    pub title: String,
    pub content: String,
    pub focused: DraftField,
    pub edit_target: Option<Uuid>,
}

impl UiState for DraftState {}

impl DraftState {
    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }
}
