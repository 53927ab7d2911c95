use serde::{Deserialize, Serialize};

/// Colors for search-match spans in the highlight overlay.
///
/// Colors must be hex (`#rrggbb`) or `rgb()`/`rgba()`; anything else is
/// rejected by validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub active_background: String,
    pub active_text: String,
    pub inactive_background: String,
    pub inactive_text: String,
    /// Corner radius of match spans in pixels (valid range: 0-8).
    pub border_radius_px: u32,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            active_background: "#f97316".into(),
            active_text: "#ffffff".into(),
            inactive_background: "#fde047".into(),
            inactive_text: "#000000".into(),
            border_radius_px: 2,
        }
    }
}
