//! Draft composition form (MVI).

mod intent;
mod reducer;
mod state;

pub use intent::DraftIntent;
pub use reducer::DraftReducer;
pub use state::{DraftField, DraftState};
