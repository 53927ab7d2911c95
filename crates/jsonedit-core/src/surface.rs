//! The text-surface capability the widget drives.
//!
//! Selection, scrolling, and focus live in whatever renders the editor (a
//! browser textarea, a terminal view, a test double). The widget only talks
//! to them through [`TextSurface`].

use serde::{Deserialize, Serialize};

use crate::search::MatchRange;

/// A half-open byte range selected in the editing surface.
///
/// `start == end` is a caret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }
}

impl From<MatchRange> for Selection {
    fn from(m: MatchRange) -> Self {
        Self {
            start: m.start,
            end: m.end,
        }
    }
}

/// Scroll position in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollOffset {
    pub top: u32,
    pub left: u32,
}

/// Which control should receive keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusTarget {
    Editor,
    SearchInput,
}

/// Operations the widget performs on its rendering surface.
pub trait TextSurface {
    fn selection(&self) -> Selection;
    fn set_selection(&mut self, selection: Selection);
    fn scroll_offset(&self) -> ScrollOffset;
    fn set_scroll_offset(&mut self, offset: ScrollOffset);
    fn focus(&mut self, target: FocusTarget);
    /// Scroll the highlight overlay that sits on top of the editor.
    fn set_overlay_scroll_offset(&mut self, offset: ScrollOffset);
}

/// An in-memory surface with no rendering.
///
/// Records every side effect so hosts without a display (the IPC session,
/// tests) can report or assert on them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeadlessSurface {
    pub selection: Selection,
    pub scroll: ScrollOffset,
    pub overlay_scroll: ScrollOffset,
    pub focused: Option<FocusTarget>,
    pub focus_requests: usize,
}

impl TextSurface for HeadlessSurface {
    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    fn scroll_offset(&self) -> ScrollOffset {
        self.scroll
    }

    fn set_scroll_offset(&mut self, offset: ScrollOffset) {
        self.scroll = offset;
    }

    fn focus(&mut self, target: FocusTarget) {
        self.focused = Some(target);
        self.focus_requests += 1;
    }

    fn set_overlay_scroll_offset(&mut self, offset: ScrollOffset) {
        self.overlay_scroll = offset;
    }
}
