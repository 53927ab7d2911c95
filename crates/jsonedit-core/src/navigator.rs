//! Active-match navigation.
//!
//! Tracks which match is current and moves the editing surface to it:
//! the selection covers the match and the view scrolls so the match line
//! has a few lines of context above it.

use jsonedit_config::schema::SearchConfig;

use crate::search::{MatchFinder, MatchRange};
use crate::surface::{Selection, TextSurface};

/// Navigator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    NoMatches,
    /// Index of the active match.
    HasMatches(usize),
}

/// Owns the current match list and the active index into it.
#[derive(Debug)]
pub struct MatchNavigator {
    finder: MatchFinder,
    matches: Vec<MatchRange>,
    state: NavState,
    line_height_px: u32,
    context_lines: u32,
}

impl MatchNavigator {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            finder: MatchFinder::new(),
            matches: Vec::new(),
            state: NavState::NoMatches,
            line_height_px: config.line_height_px,
            context_lines: config.context_lines,
        }
    }

    /// Re-run the search and select the first match, if any.
    ///
    /// Called whenever the buffer or the term changes. Never moves focus.
    pub fn recompute(&mut self, text: &str, term: &str, surface: &mut dyn TextSurface) -> NavState {
        self.matches = self.finder.find(text, term);
        self.state = if self.matches.is_empty() {
            NavState::NoMatches
        } else {
            self.select(text, 0, surface);
            NavState::HasMatches(0)
        };
        tracing::debug!(total = self.matches.len(), "matches recomputed");
        self.state
    }

    /// Advance to the next match, wrapping to the first after the last.
    pub fn next(&mut self, text: &str, surface: &mut dyn TextSurface) -> Option<usize> {
        let NavState::HasMatches(index) = self.state else {
            return None;
        };
        self.go_to(text, (index + 1) % self.matches.len(), surface)
    }

    /// Step back to the previous match, wrapping to the last before the first.
    pub fn prev(&mut self, text: &str, surface: &mut dyn TextSurface) -> Option<usize> {
        let NavState::HasMatches(index) = self.state else {
            return None;
        };
        let count = self.matches.len();
        self.go_to(text, (index + count - 1) % count, surface)
    }

    /// Drop all matches.
    pub fn clear(&mut self) {
        self.matches.clear();
        self.state = NavState::NoMatches;
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn matches(&self) -> &[MatchRange] {
        &self.matches
    }

    pub fn total(&self) -> usize {
        self.matches.len()
    }

    pub fn active_index(&self) -> Option<usize> {
        match self.state {
            NavState::HasMatches(i) => Some(i),
            NavState::NoMatches => None,
        }
    }

    pub fn active_match(&self) -> Option<MatchRange> {
        self.active_index().map(|i| self.matches[i])
    }

    /// 1-based "current / total" label for the search bar.
    pub fn position_label(&self) -> String {
        match self.state {
            NavState::HasMatches(i) => format!("{} / {}", i + 1, self.matches.len()),
            NavState::NoMatches => "0 / 0".to_string(),
        }
    }

    /// Vertical scroll offset that shows the line containing `offset` with
    /// `context_lines` of lead-in above it.
    pub fn scroll_top_for(&self, text: &str, offset: usize) -> u32 {
        let line = u32::try_from(line_number_at(text, offset)).unwrap_or(u32::MAX);
        line.saturating_sub(self.context_lines)
            .saturating_mul(self.line_height_px)
    }

    fn go_to(&mut self, text: &str, index: usize, surface: &mut dyn TextSurface) -> Option<usize> {
        self.state = NavState::HasMatches(index);
        self.select(text, index, surface);
        Some(index)
    }

    fn select(&self, text: &str, index: usize, surface: &mut dyn TextSurface) {
        let Some(m) = self.matches.get(index).copied() else {
            return;
        };
        surface.set_selection(Selection::from(m));

        let mut offset = surface.scroll_offset();
        offset.top = self.scroll_top_for(text, m.start);
        surface.set_scroll_offset(offset);
    }
}

/// 1-based line containing byte `offset`: one plus the newlines before it.
pub fn line_number_at(text: &str, offset: usize) -> usize {
    let end = offset.min(text.len());
    text.as_bytes()[..end].iter().filter(|b| **b == b'\n').count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{FocusTarget, HeadlessSurface, ScrollOffset};

    fn navigator() -> MatchNavigator {
        MatchNavigator::new(&SearchConfig::default())
    }

    #[test]
    fn recompute_selects_first_match() {
        let mut nav = navigator();
        let mut surface = HeadlessSurface::default();
        let state = nav.recompute("a key and a KEY", "key", &mut surface);

        assert_eq!(state, NavState::HasMatches(0));
        assert_eq!(surface.selection, Selection { start: 2, end: 5 });
        assert_eq!(nav.total(), 2);
    }

    #[test]
    fn recompute_without_matches_is_inert() {
        let mut nav = navigator();
        let mut surface = HeadlessSurface::default();
        assert_eq!(nav.recompute("abc", "zzz", &mut surface), NavState::NoMatches);
        assert_eq!(surface.selection, Selection::default());
        assert_eq!(nav.next("abc", &mut surface), None);
        assert_eq!(nav.prev("abc", &mut surface), None);
        assert_eq!(nav.position_label(), "0 / 0");
    }

    #[test]
    fn recompute_resets_to_first_match() {
        let mut nav = navigator();
        let mut surface = HeadlessSurface::default();
        nav.recompute("x x x", "x", &mut surface);
        nav.next("x x x", &mut surface);
        nav.next("x x x", &mut surface);
        assert_eq!(nav.active_index(), Some(2));

        nav.recompute("x x x x", "x", &mut surface);
        assert_eq!(nav.active_index(), Some(0));
    }

    #[test]
    fn next_wraps_after_n_steps() {
        let text = "k k k k k";
        let mut nav = navigator();
        let mut surface = HeadlessSurface::default();
        nav.recompute(text, "k", &mut surface);
        let n = nav.total();
        for _ in 0..n {
            nav.next(text, &mut surface);
        }
        assert_eq!(nav.active_index(), Some(0));
    }

    #[test]
    fn prev_from_zero_goes_to_last() {
        let text = "k k k k k";
        let mut nav = navigator();
        let mut surface = HeadlessSurface::default();
        nav.recompute(text, "k", &mut surface);
        assert_eq!(nav.prev(text, &mut surface), Some(4));
        assert_eq!(surface.selection, Selection { start: 8, end: 9 });
        assert_eq!(nav.position_label(), "5 / 5");
    }

    #[test]
    fn selecting_never_moves_focus() {
        let text = "k k";
        let mut nav = navigator();
        let mut surface = HeadlessSurface::default();
        nav.recompute(text, "k", &mut surface);
        nav.next(text, &mut surface);
        nav.prev(text, &mut surface);
        assert_eq!(surface.focus_requests, 0);
        assert_eq!(surface.focused, None::<FocusTarget>);
    }

    #[test]
    fn line_numbers_count_preceding_newlines() {
        let text = "a\nb\nc";
        assert_eq!(line_number_at(text, 0), 1);
        assert_eq!(line_number_at(text, 2), 2);
        assert_eq!(line_number_at(text, 4), 3);
        assert_eq!(line_number_at(text, 999), 3);
    }

    #[test]
    fn scroll_keeps_five_lines_of_context() {
        let text: String = (1..=40).map(|i| format!("line {i}\n")).collect();
        let mut nav = navigator();
        let mut surface = HeadlessSurface {
            scroll: ScrollOffset { top: 0, left: 33 },
            ..Default::default()
        };
        nav.recompute(&text, "line 20\n", &mut surface);
        // Line 20 with 5 lines of context: (20 - 5) * 18.
        assert_eq!(surface.scroll.top, 15 * 18);
        // Horizontal scroll is left alone.
        assert_eq!(surface.scroll.left, 33);
    }

    #[test]
    fn scroll_clamps_to_zero_near_the_top() {
        let text = "one\ntwo\nthree";
        let mut nav = navigator();
        let mut surface = HeadlessSurface {
            scroll: ScrollOffset { top: 500, left: 0 },
            ..Default::default()
        };
        nav.recompute(text, "three", &mut surface);
        assert_eq!(surface.scroll.top, 0);
    }

    #[test]
    fn scroll_uses_configured_metrics() {
        let nav = MatchNavigator::new(&SearchConfig {
            line_height_px: 20,
            context_lines: 0,
        });
        let text = "a\nb\nc\nd";
        assert_eq!(nav.scroll_top_for(text, 6), 80);
    }

    #[test]
    fn clear_drops_matches() {
        let mut nav = navigator();
        let mut surface = HeadlessSurface::default();
        nav.recompute("aa", "a", &mut surface);
        nav.clear();
        assert_eq!(nav.state(), NavState::NoMatches);
        assert!(nav.matches().is_empty());
        assert_eq!(nav.active_match(), None);
    }
}
