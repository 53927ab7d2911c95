//! Toolbar button visibility.

use jsonedit_common::Action;
use serde::{Deserialize, Serialize};

/// Which toolbar buttons the widget exposes.
///
/// Every button is shown unless explicitly set to `false`; a missing key
/// means "show".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonsConfig {
    pub format: bool,
    pub minify: bool,
    pub sort: bool,
    pub search: bool,
    pub copy: bool,
    pub download: bool,
    pub reset: bool,
    pub load: bool,
}

impl Default for ButtonsConfig {
    fn default() -> Self {
        Self {
            format: true,
            minify: true,
            sort: true,
            search: true,
            copy: true,
            download: true,
            reset: true,
            load: true,
        }
    }
}

impl ButtonsConfig {
    /// Whether the toolbar exposes a button for `action`.
    ///
    /// Actions without a button (navigation, indent) are always allowed.
    pub fn allows(&self, action: Action) -> bool {
        match action {
            Action::Format => self.format,
            Action::Minify => self.minify,
            Action::SortKeys => self.sort,
            Action::ToggleSearch => self.search,
            Action::Copy => self.copy,
            Action::Download => self.download,
            Action::Reset => self.reset,
            Action::Load => self.load,
            _ => true,
        }
    }

    /// Toolbar actions that are currently visible, in display order.
    pub fn visible_actions(&self) -> Vec<Action> {
        Action::toolbar_actions()
            .into_iter()
            .filter(|a| self.allows(*a))
            .collect()
    }
}
