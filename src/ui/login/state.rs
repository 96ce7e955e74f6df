use crate::ui::mvi::UiState;

/// Which credentials field has input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialField {
    #[default]
    Username,
    Password,
}

/// Username/password entry state. Whether submit means login or register
/// is decided by the current page, not the form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CredentialsFormState {
    pub username: String,
    pub password: String,
    pub focused: CredentialField,
    /// A request is outstanding; further submits are ignored until it
    /// settles, so a double-press cannot issue two concurrent requests.
    pub in_flight: bool,
}

impl UiState for CredentialsFormState {}
