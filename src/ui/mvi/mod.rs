//! Model-View-Intent (MVI) primitives.
//!
//! Each interactive surface (credentials form, post draft) is a
//! state/intent/reducer triple with unidirectional flow:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers are pure; side effects (persistence, network) happen in the
//! app layer around them.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
