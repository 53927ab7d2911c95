//! The `state` reply.

use serde::Serialize;

use jsonedit_common::Action;
use jsonedit_core::HeadlessSurface;

use super::Session;
use crate::ipc::{reply, IpcMessage};

/// Everything an embedder needs to redraw the widget.
#[derive(Debug, Serialize)]
pub struct StateSnapshot<'a> {
    pub text: &'a str,
    pub is_valid: bool,
    pub error: Option<&'a str>,
    pub placeholder: &'a str,
    pub buttons: Vec<ButtonHint>,
    pub shortcuts: Vec<ShortcutHint>,
    pub search_open: bool,
    pub term: &'a str,
    pub total: usize,
    pub active: Option<usize>,
    pub position: String,
    pub summary: Option<String>,
    /// Overlay markup; safe to display without escaping.
    pub highlight: String,
    pub surface: &'a HeadlessSurface,
}

/// A visible toolbar button.
#[derive(Debug, Serialize)]
pub struct ButtonHint {
    pub action: Action,
    pub label: &'static str,
}

/// Display string for the key bound to an action, for tooltips.
#[derive(Debug, Serialize)]
pub struct ShortcutHint {
    pub action: Action,
    pub keys: String,
}

const HINTED_ACTIONS: [Action; 5] = [
    Action::ToggleSearch,
    Action::NextMatch,
    Action::PrevMatch,
    Action::CloseSearch,
    Action::InsertIndent,
];

impl Session {
    pub fn snapshot(&self) -> StateSnapshot<'_> {
        let editor = &self.editor;
        StateSnapshot {
            text: editor.text(),
            is_valid: editor.is_valid(),
            error: editor.error_message(),
            placeholder: editor.placeholder(),
            buttons: self
                .buttons
                .visible_actions()
                .into_iter()
                .map(|action| ButtonHint {
                    action,
                    label: action.label(),
                })
                .collect(),
            shortcuts: HINTED_ACTIONS
                .into_iter()
                .filter_map(|action| {
                    let keys = self.registry.keybind_for_action(action)?;
                    Some(ShortcutHint { action, keys })
                })
                .collect(),
            search_open: editor.is_search_open(),
            term: editor.search_term(),
            total: editor.total_matches(),
            active: editor.active_match_index(),
            position: editor.position_label(),
            summary: editor.match_summary().map(|s| s.to_string()),
            highlight: editor.highlight().into_string(),
            surface: &self.surface,
        }
    }

    pub(super) fn state_reply(&self) -> IpcMessage {
        match serde_json::to_value(self.snapshot()) {
            Ok(value) => IpcMessage::json(reply::STATE, value),
            Err(e) => IpcMessage::error(format!("failed to encode state: {e}")),
        }
    }
}
