//! Action dispatch: routes resolved actions to widget operations.

use jsonedit_common::Action;

use super::state::JsonEditor;
use crate::surface::TextSurface;

impl JsonEditor {
    /// Dispatch a resolved [`Action`].
    ///
    /// Returns `true` when the widget handled it. Host actions (copy,
    /// download, load) and `Action::None` return `false` and are left to
    /// the caller.
    pub fn dispatch(&mut self, action: Action, surface: &mut dyn TextSurface) -> bool {
        tracing::debug!(?action, "dispatch");
        if action.is_host_action() {
            return false;
        }
        match action {
            Action::Format => {
                self.format(surface);
            }
            Action::Minify => {
                self.minify(surface);
            }
            Action::SortKeys => {
                self.sort_keys(surface);
            }
            Action::Reset => self.reset(surface),
            Action::InsertIndent => self.insert_indent(surface),

            Action::ToggleSearch => {
                self.toggle_search(surface);
            }
            Action::CloseSearch => {
                if !self.search_open {
                    return false;
                }
                self.close_search(surface);
            }
            Action::NextMatch => {
                self.next_match(surface);
            }
            Action::PrevMatch => {
                self.prev_match(surface);
            }

            _ => return false,
        }
        true
    }
}
