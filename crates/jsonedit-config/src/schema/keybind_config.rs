//! Keyboard shortcuts configuration types.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};

/// Keyboard shortcuts configuration.
///
/// Format: "Modifier+Key" where Modifier is one of: Cmd, Option, Control, Shift.
/// `Cmd` resolves to Ctrl outside macOS.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    /// Global: show or hide the search bar.
    pub toggle_search: String,
    /// Search input: jump to the next match.
    pub next_match: String,
    /// Search input: jump to the previous match.
    pub prev_match: String,
    /// Search input: close search and return to the editor.
    pub close_search: String,
    /// Editor: insert indentation instead of moving focus.
    pub insert_indent: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            toggle_search: "Cmd+F".into(),
            next_match: "Enter".into(),
            prev_match: "Shift+Enter".into(),
            close_search: "Escape".into(),
            insert_indent: "Tab".into(),
        }
    }
}
