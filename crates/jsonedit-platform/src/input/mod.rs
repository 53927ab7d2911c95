//! Keybind registry: maps key events in a focus scope to widget `Action`s.
//!
//! Built from [`KeybindConfig`](jsonedit_config::schema::KeybindConfig) at startup.

mod key_combo;
mod registry;

pub use key_combo::KeyCombo;
pub use registry::{KeyScope, KeybindRegistry};
