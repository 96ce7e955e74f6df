use crate::ui::editor::intent::DraftIntent;
use crate::ui::editor::state::{DraftField, DraftState};
use crate::ui::mvi::Reducer;

pub struct DraftReducer;

impl Reducer for DraftReducer {
    type State = DraftState;
    type Intent = DraftIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut state = state;
        match intent {
            DraftIntent::Input(ch) => {
                match state.focused {
                    DraftField::Title => state.title.push(ch),
                    DraftField::Content => state.content.push(ch),
                }
                state
            }
            DraftIntent::Backspace => {
                match state.focused {
                    DraftField::Title => {
                        state.title.pop();
                    }
                    DraftField::Content => {
                        state.content.pop();
                    }
                }
                state
            }
            DraftIntent::Newline => {
                // Titles stay single-line; Enter there moves focus instead
                // (handled by the input layer issuing FocusNext).
                if state.focused == DraftField::Content {
                    state.content.push('\n');
                }
                state
            }
            DraftIntent::FocusNext => {
                state.focused = match state.focused {
                    DraftField::Title => DraftField::Content,
                    DraftField::Content => DraftField::Title,
                };
                state
            }
            DraftIntent::LoadForEdit { id, title, content } => DraftState {
                title,
                content,
                focused: DraftField::Title,
                edit_target: Some(id),
            },
            DraftIntent::Clear => DraftState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn reduce(state: DraftState, intent: DraftIntent) -> DraftState {
        DraftReducer::reduce(state, intent)
    }

    #[test]
    fn typing_goes_to_the_focused_field() {
        let mut state = DraftState::default();
        for ch in "Hi".chars() {
            state = reduce(state, DraftIntent::Input(ch));
        }
        state = reduce(state, DraftIntent::FocusNext);
        state = reduce(state, DraftIntent::Input('x'));

        assert_eq!(state.title, "Hi");
        assert_eq!(state.content, "x");
    }

    #[test]
    fn backspace_trims_the_focused_field() {
        let state = DraftState {
            title: "ab".to_string(),
            ..DraftState::default()
        };
        let state = reduce(state, DraftIntent::Backspace);
        assert_eq!(state.title, "a");

        // Backspacing an empty field is a no-op.
        let state = reduce(reduce(state, DraftIntent::Backspace), DraftIntent::Backspace);
        assert_eq!(state.title, "");
    }

    #[test]
    fn newline_only_lands_in_content() {
        let state = reduce(DraftState::default(), DraftIntent::Newline);
        assert_eq!(state.title, "");
        assert_eq!(state.content, "");

        let state = reduce(state, DraftIntent::FocusNext);
        let state = reduce(state, DraftIntent::Newline);
        assert_eq!(state.content, "\n");
    }

    #[test]
    fn load_for_edit_fills_fields_and_records_target() {
        let id = Uuid::new_v4();
        let state = reduce(
            DraftState::default(),
            DraftIntent::LoadForEdit {
                id,
                title: "Hello".to_string(),
                content: "World".to_string(),
            },
        );

        assert!(state.is_editing());
        assert_eq!(state.edit_target, Some(id));
        assert_eq!(state.title, "Hello");
        assert_eq!(state.content, "World");
        assert_eq!(state.focused, DraftField::Title);
    }

    #[test]
    fn clear_resets_everything() {
        let id = Uuid::new_v4();
        let state = reduce(
            DraftState::default(),
            DraftIntent::LoadForEdit {
                id,
                title: "Hello".to_string(),
                content: "World".to_string(),
            },
        );
        let state = reduce(state, DraftIntent::Clear);
        assert_eq!(state, DraftState::default());
    }
}
