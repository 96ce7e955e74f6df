//! TOML configuration: auth service endpoint, storage location, UI tick.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::Config;
