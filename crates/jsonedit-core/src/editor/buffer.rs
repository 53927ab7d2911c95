//! Buffer mutations: edits, transforms, reset, indent, and host I/O.

use jsonedit_common::{ClipboardSink, Event, PlatformError};

use super::state::{JsonEditor, LoadTicket};
use crate::download::Download;
use crate::surface::{Selection, TextSurface};
use crate::transform::Transform;
use crate::validator::ValidationState;

impl JsonEditor {
    /// Replace the buffer with user-edited text and re-validate.
    pub fn set_text(&mut self, text: impl Into<String>, surface: &mut dyn TextSurface) {
        self.replace_buffer(text.into(), surface);
        self.revalidate();
    }

    /// Pretty-print the buffer. Returns `true` when the buffer was rewritten.
    pub fn format(&mut self, surface: &mut dyn TextSurface) -> bool {
        self.apply_transform(Transform::Format, surface)
    }

    /// Compact the buffer. Returns `true` when the buffer was rewritten.
    pub fn minify(&mut self, surface: &mut dyn TextSurface) -> bool {
        self.apply_transform(Transform::Minify, surface)
    }

    /// Sort object keys at every level. Returns `true` when the buffer was
    /// rewritten.
    pub fn sort_keys(&mut self, surface: &mut dyn TextSurface) -> bool {
        self.apply_transform(Transform::SortKeys, surface)
    }

    /// Restore the initial value and re-validate it.
    pub fn reset(&mut self, surface: &mut dyn TextSurface) {
        tracing::info!("editor reset");
        let initial = self.initial.clone();
        self.set_text(initial, surface);
    }

    /// Replace the current selection with the indent string and put the
    /// caret right after it.
    pub fn insert_indent(&mut self, surface: &mut dyn TextSurface) {
        let selection = surface.selection();
        let mut start = floor_char_boundary(&self.text, selection.start);
        let mut end = floor_char_boundary(&self.text, selection.end);
        if start > end {
            std::mem::swap(&mut start, &mut end);
        }

        let mut next = String::with_capacity(self.text.len() + self.indent.len());
        next.push_str(&self.text[..start]);
        next.push_str(&self.indent);
        next.push_str(&self.text[end..]);
        let caret = start + self.indent.len();

        self.set_text(next, surface);
        surface.set_selection(Selection::caret(caret));
    }

    /// Put the buffer, verbatim, on the clipboard.
    pub fn copy(&self, clipboard: &mut dyn ClipboardSink) -> Result<(), PlatformError> {
        clipboard.set_text(&self.text)?;
        tracing::info!(len = self.text.len(), "buffer copied to clipboard");
        Ok(())
    }

    /// Package the buffer for saving under the configured file name.
    pub fn download(&self) -> Download {
        Download {
            filename: self.download.filename.clone(),
            mime_type: self.download.mime_type.clone(),
            contents: self.text.as_bytes().to_vec(),
        }
    }

    /// Start a file load. Any ticket issued earlier becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.last_ticket += 1;
        tracing::debug!(ticket = self.last_ticket, "file load started");
        LoadTicket(self.last_ticket)
    }

    /// Whether `ticket` belongs to the most recently started load.
    pub fn is_latest_load(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.last_ticket
    }

    /// Complete a file load: the contents become the buffer verbatim.
    ///
    /// Returns `false` and leaves the buffer alone when a newer load was
    /// started after `ticket` was issued.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        contents: impl Into<String>,
        surface: &mut dyn TextSurface,
    ) -> bool {
        if !self.is_latest_load(ticket) {
            tracing::warn!(
                ticket = ticket.0,
                latest = self.last_ticket,
                "discarding stale file load"
            );
            return false;
        }
        let contents = contents.into();
        tracing::info!(len = contents.len(), "file loaded into buffer");
        self.set_text(contents, surface);
        true
    }

    fn apply_transform(&mut self, transform: Transform, surface: &mut dyn TextSurface) -> bool {
        match transform.apply(&self.text) {
            Ok(None) => {
                tracing::debug!(transform = transform.name(), "buffer blank, nothing to do");
                false
            }
            Ok(Some(out)) => {
                tracing::debug!(transform = transform.name(), len = out.len(), "buffer rewritten");
                self.replace_buffer(out, surface);
                self.set_validation(ValidationState::valid());
                true
            }
            Err(e) => {
                tracing::warn!(transform = transform.name(), "buffer left unchanged: {e}");
                self.set_validation(ValidationState::from(&e));
                false
            }
        }
    }

    /// Swap in new buffer text. Does not validate.
    fn replace_buffer(&mut self, text: String, surface: &mut dyn TextSurface) {
        self.text = text;
        self.bus.publish(Event::BufferChanged {
            len: self.text.len(),
        });
        if self.search_open {
            self.refresh_matches(surface);
        }
    }
}

/// Largest char boundary at or below `offset`, clamped to the text.
fn floor_char_boundary(text: &str, offset: usize) -> usize {
    let mut i = offset.min(text.len());
    while !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}
