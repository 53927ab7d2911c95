use std::collections::HashMap;

use jsonedit_common::Action;
use jsonedit_config::schema::KeybindConfig;
use serde::{Deserialize, Serialize};

use super::key_combo::KeyCombo;
use crate::keymap::{keybind_to_display, parse_keybind};

/// Where a key event happened.
///
/// `Global` bindings fire from any scope; scoped bindings only fire while
/// that surface has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyScope {
    Global,
    Editor,
    SearchInput,
}

/// Maps `(scope, key combination)` pairs to [`Action`]s.
pub struct KeybindRegistry {
    bindings: HashMap<(KeyScope, KeyCombo), Action>,
}

impl KeybindRegistry {
    /// Build the registry from the config keybind section.
    ///
    /// Invalid keybind strings are logged as warnings and skipped. Two
    /// bindings conflict only when they resolve to the same combo in the same
    /// scope (so `Cmd+F` and `Ctrl+F` collide off macOS); the first one in
    /// config order is kept.
    pub fn from_config(config: &KeybindConfig) -> Self {
        let mut bindings: HashMap<(KeyScope, KeyCombo), Action> = HashMap::new();

        let mappings = [
            (&config.toggle_search, KeyScope::Global, Action::ToggleSearch),
            (&config.next_match, KeyScope::SearchInput, Action::NextMatch),
            (&config.prev_match, KeyScope::SearchInput, Action::PrevMatch),
            (&config.close_search, KeyScope::SearchInput, Action::CloseSearch),
            (&config.insert_indent, KeyScope::Editor, Action::InsertIndent),
        ];

        for (binding_str, scope, action) in mappings {
            let kb = match parse_keybind(binding_str) {
                Ok(kb) => kb,
                Err(e) => {
                    tracing::warn!("invalid keybind '{binding_str}': {e}");
                    continue;
                }
            };
            let key = (scope, KeyCombo::from_keybind(&kb));
            if let Some(existing) = bindings.get(&key) {
                tracing::warn!(
                    ?scope,
                    ?action,
                    "duplicate keybind '{binding_str}': already bound to {existing:?}, ignoring"
                );
                continue;
            }
            bindings.insert(key, action);
        }

        Self { bindings }
    }

    /// Resolve a key event. Scoped bindings win over global ones.
    pub fn lookup(&self, scope: KeyScope, combo: &KeyCombo) -> Option<Action> {
        self.lookup_scoped(scope, combo)
            .or_else(|| self.lookup_scoped(KeyScope::Global, combo))
    }

    /// Resolve a key event against `scope`'s own bindings only.
    pub fn lookup_scoped(&self, scope: KeyScope, combo: &KeyCombo) -> Option<Action> {
        self.bindings.get(&(scope, combo.clone())).copied()
    }

    /// Display string for the first binding of `action`, if any.
    pub fn keybind_for_action(&self, action: Action) -> Option<String> {
        self.bindings
            .iter()
            .find(|(_, a)| **a == action)
            .map(|((_, combo), _)| keybind_to_display(&combo.to_keybind()))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
