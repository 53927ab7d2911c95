use serde::{Deserialize, Serialize};

/// Search navigation scrolling.
///
/// Selecting a match scrolls the editor so the match line sits
/// `context_lines` below the top, using an approximate line height.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Approximate rendered height of one line (valid range: 8-64).
    pub line_height_px: u32,
    /// Lines of leading context above the active match (valid range: 0-50).
    pub context_lines: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            line_height_px: 18,
            context_lines: 5,
        }
    }
}
