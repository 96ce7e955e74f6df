//! Credentials form shared by the Login and Signup pages (MVI).

mod intent;
mod reducer;
mod state;

pub use intent::CredentialsIntent;
pub use reducer::CredentialsReducer;
pub use state::{CredentialField, CredentialsFormState};
