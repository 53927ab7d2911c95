//! Search bar: open/close, term changes, navigation, and overlay output.

use jsonedit_common::Event;

use super::state::JsonEditor;
use crate::highlight::TrustedMarkup;
use crate::scroll_sync;
use crate::search::MatchSummary;
use crate::surface::{FocusTarget, ScrollOffset, TextSurface};

impl JsonEditor {
    /// Show the search bar, focus its input, and align the overlay.
    pub fn open_search(&mut self, surface: &mut dyn TextSurface) {
        if !self.search_open {
            self.search_open = true;
            tracing::debug!("search opened");
            self.bus.publish(Event::SearchOpened);
        }
        surface.focus(FocusTarget::SearchInput);
        scroll_sync::sync_scroll(surface);
    }

    /// Hide the search bar, drop the term and matches, and hand focus back
    /// to the editor.
    pub fn close_search(&mut self, surface: &mut dyn TextSurface) {
        self.search_open = false;
        self.term.clear();
        self.navigator.clear();
        tracing::debug!("search closed");
        self.bus.publish(Event::SearchClosed);
        self.publish_matches();
        surface.focus(FocusTarget::Editor);
    }

    /// Flip search visibility. Returns whether search is now open.
    pub fn toggle_search(&mut self, surface: &mut dyn TextSurface) -> bool {
        if self.search_open {
            self.close_search(surface);
        } else {
            self.open_search(surface);
        }
        self.search_open
    }

    /// Update the search term and re-run the search.
    ///
    /// Ignored while search is closed. Never moves focus, so typing in the
    /// search input is not interrupted.
    pub fn set_search_term(&mut self, term: impl Into<String>, surface: &mut dyn TextSurface) {
        if !self.search_open {
            tracing::debug!("search term ignored: search closed");
            return;
        }
        self.term = term.into();
        self.refresh_matches(surface);
    }

    /// Move to the next match, wrapping around. `None` without matches.
    pub fn next_match(&mut self, surface: &mut dyn TextSurface) -> Option<usize> {
        let index = self.navigator.next(&self.text, surface)?;
        scroll_sync::sync_scroll(surface);
        self.publish_matches();
        Some(index)
    }

    /// Move to the previous match, wrapping around. `None` without matches.
    pub fn prev_match(&mut self, surface: &mut dyn TextSurface) -> Option<usize> {
        let index = self.navigator.prev(&self.text, surface)?;
        scroll_sync::sync_scroll(surface);
        self.publish_matches();
        Some(index)
    }

    /// Overlay markup for the current buffer, term, and active match.
    pub fn highlight(&self) -> TrustedMarkup {
        self.renderer
            .render(&self.text, &self.term, self.navigator.active_index())
    }

    /// Mirror the editor scroll position onto the overlay.
    pub fn sync_scroll(&self, surface: &mut dyn TextSurface) -> ScrollOffset {
        scroll_sync::sync_scroll(surface)
    }

    /// Match count wording for the search bar; `None` while no term is set.
    pub fn match_summary(&self) -> Option<MatchSummary> {
        if self.term.is_empty() {
            return None;
        }
        Some(MatchSummary::new(self.navigator.total()))
    }

    /// Recompute matches for the current buffer and term, selecting the
    /// first one.
    pub(super) fn refresh_matches(&mut self, surface: &mut dyn TextSurface) {
        self.navigator.recompute(&self.text, &self.term, surface);
        scroll_sync::sync_scroll(surface);
        self.publish_matches();
    }

    fn publish_matches(&self) {
        self.bus.publish(Event::MatchesChanged {
            total: self.navigator.total(),
            active: self.navigator.active_index(),
        });
    }
}
