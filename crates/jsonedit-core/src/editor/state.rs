//! JsonEditor struct definition and constructor.

use std::sync::Arc;

use jsonedit_common::{Event, EventBus};
use jsonedit_config::schema::{DownloadConfig, EditorConfig};

use crate::highlight::HighlightRenderer;
use crate::navigator::MatchNavigator;
use crate::search::MatchRange;
use crate::validator::{validate, ValidationState};

/// Identifies one file-load request.
///
/// Tickets increase monotonically; only the most recently issued one may
/// replace the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(pub(super) u64);

impl LoadTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// A JSON text editor widget.
pub struct JsonEditor {
    pub(super) text: String,
    pub(super) initial: String,
    pub(super) validation: ValidationState,
    pub(super) bus: Arc<EventBus>,

    // Editing
    pub(super) indent: String,
    pub(super) placeholder: String,
    pub(super) download: DownloadConfig,

    // Search
    pub(super) search_open: bool,
    pub(super) term: String,
    pub(super) navigator: MatchNavigator,
    pub(super) renderer: HighlightRenderer,

    // File loads
    pub(super) last_ticket: u64,
}

impl JsonEditor {
    /// Create the widget seeded with `initial` and run the first
    /// validation pass.
    pub fn new(initial: impl Into<String>, config: &EditorConfig, bus: Arc<EventBus>) -> Self {
        let initial = initial.into();
        tracing::info!(len = initial.len(), "json editor created");

        let mut editor = Self {
            text: initial.clone(),
            initial,
            validation: ValidationState::valid(),
            bus,
            indent: config.editor.indent(),
            placeholder: config.editor.placeholder.clone(),
            download: config.download.clone(),
            search_open: false,
            term: String::new(),
            navigator: MatchNavigator::new(&config.search),
            renderer: HighlightRenderer::new(&config.highlight),
            last_ticket: 0,
        };
        editor.revalidate();
        editor
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn validation(&self) -> &ValidationState {
        &self.validation
    }

    pub fn is_valid(&self) -> bool {
        self.validation.is_valid
    }

    pub fn error_message(&self) -> Option<&str> {
        self.validation.error_message.as_deref()
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn is_search_open(&self) -> bool {
        self.search_open
    }

    pub fn search_term(&self) -> &str {
        &self.term
    }

    pub fn matches(&self) -> &[MatchRange] {
        self.navigator.matches()
    }

    pub fn total_matches(&self) -> usize {
        self.navigator.total()
    }

    pub fn active_match_index(&self) -> Option<usize> {
        self.navigator.active_index()
    }

    pub fn position_label(&self) -> String {
        self.navigator.position_label()
    }

    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }

    /// Re-check the buffer and announce the result.
    pub(super) fn revalidate(&mut self) {
        let state = validate(&self.text);
        self.set_validation(state);
    }

    /// Store a validation result and emit exactly one `ErrorChanged`.
    pub(super) fn set_validation(&mut self, state: ValidationState) {
        if let Some(message) = &state.error_message {
            tracing::debug!(%message, "buffer invalid");
        }
        self.bus
            .publish(Event::ErrorChanged(state.error_message.clone()));
        self.validation = state;
    }
}

impl std::fmt::Debug for JsonEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonEditor")
            .field("len", &self.text.len())
            .field("validation", &self.validation)
            .field("search_open", &self.search_open)
            .field("term", &self.term)
            .field("matches", &self.navigator.total())
            .finish_non_exhaustive()
    }
}
