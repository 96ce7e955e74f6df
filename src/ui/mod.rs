//! Terminal UI: pages, forms, rendering, and the event loop.

pub mod app;
pub mod editor;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod login;
pub mod mvi;
pub mod render;
pub mod router;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
