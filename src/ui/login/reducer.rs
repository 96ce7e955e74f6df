use crate::ui::login::intent::CredentialsIntent;
use crate::ui::login::state::{CredentialField, CredentialsFormState};
use crate::ui::mvi::Reducer;

pub struct CredentialsReducer;

impl Reducer for CredentialsReducer {
    type State = CredentialsFormState;
    type Intent = CredentialsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut state = state;
        match intent {
            CredentialsIntent::Input(ch) => {
                // Editing while a request is outstanding would desync the
                // form from what was submitted.
                if !state.in_flight {
                    match state.focused {
                        CredentialField::Username => state.username.push(ch),
                        CredentialField::Password => state.password.push(ch),
                    }
                }
                state
            }
            CredentialsIntent::Backspace => {
                if !state.in_flight {
                    match state.focused {
                        CredentialField::Username => {
                            state.username.pop();
                        }
                        CredentialField::Password => {
                            state.password.pop();
                        }
                    }
                }
                state
            }
            CredentialsIntent::FocusNext => {
                state.focused = match state.focused {
                    CredentialField::Username => CredentialField::Password,
                    CredentialField::Password => CredentialField::Username,
                };
                state
            }
            CredentialsIntent::Submitted => {
                state.in_flight = true;
                state
            }
            CredentialsIntent::Settled => {
                state.in_flight = false;
                // The password has served its purpose either way.
                state.password.clear();
                state
            }
            CredentialsIntent::Clear => CredentialsFormState::default(),
        }
    }
}
