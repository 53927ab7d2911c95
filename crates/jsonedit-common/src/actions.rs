use serde::{Deserialize, Serialize};

/// Every user-triggerable action of the editor widget.
///
/// Toolbar buttons, keybinds, and IPC all resolve to an `Action`.
/// The widget's dispatcher matches on this enum; actions that need host
/// capabilities (clipboard, file dialogs) are handed back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // -- Buffer transforms --
    Format,
    Minify,
    SortKeys,
    Reset,
    InsertIndent,

    // -- Search --
    ToggleSearch,
    CloseSearch,
    NextMatch,
    PrevMatch,

    // -- Host I/O --
    Copy,
    Download,
    Load,

    // -- Noop --
    None,
}

impl Action {
    /// Human-readable label for toolbar buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Format => "Format",
            Action::Minify => "Minify",
            Action::SortKeys => "Sort Keys",
            Action::Reset => "Reset",
            Action::InsertIndent => "Indent",
            Action::ToggleSearch => "Search",
            Action::CloseSearch => "Close Search",
            Action::NextMatch => "Next Match",
            Action::PrevMatch => "Previous Match",
            Action::Copy => "Copy",
            Action::Download => "Download",
            Action::Load => "Load File",
            Action::None => "None",
        }
    }

    /// Actions that appear as toolbar buttons, in display order.
    pub fn toolbar_actions() -> [Action; 8] {
        [
            Action::Format,
            Action::Minify,
            Action::SortKeys,
            Action::ToggleSearch,
            Action::Copy,
            Action::Download,
            Action::Reset,
            Action::Load,
        ]
    }

    /// Whether the action needs a host capability the widget does not own.
    pub fn is_host_action(&self) -> bool {
        matches!(self, Action::Copy | Action::Download | Action::Load)
    }

    /// Parse a snake_case action name as sent over IPC.
    pub fn from_name(name: &str) -> Option<Action> {
        serde_json::from_value(serde_json::Value::String(name.to_string())).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toolbar_has_eight_buttons() {
        let actions = Action::toolbar_actions();
        assert_eq!(actions.len(), 8);
        assert!(!actions.contains(&Action::NextMatch));
        assert!(!actions.contains(&Action::None));
    }

    #[test]
    fn labels_are_not_empty() {
        for action in Action::toolbar_actions() {
            assert!(!action.label().is_empty());
        }
        assert_eq!(Action::SortKeys.label(), "Sort Keys");
    }

    #[test]
    fn host_actions() {
        assert!(Action::Copy.is_host_action());
        assert!(Action::Download.is_host_action());
        assert!(Action::Load.is_host_action());
        assert!(!Action::Format.is_host_action());
        assert!(!Action::NextMatch.is_host_action());
    }

    #[test]
    fn from_name_parses_snake_case() {
        assert_eq!(Action::from_name("sort_keys"), Some(Action::SortKeys));
        assert_eq!(Action::from_name("toggle_search"), Some(Action::ToggleSearch));
        assert_eq!(Action::from_name("format"), Some(Action::Format));
        assert_eq!(Action::from_name("explode"), None);
        assert_eq!(Action::from_name("Format"), None);
    }

    #[test]
    fn serialization_roundtrip() {
        let json = serde_json::to_string(&Action::PrevMatch).unwrap();
        assert_eq!(json, "\"prev_match\"");
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Action::PrevMatch);
    }
}
