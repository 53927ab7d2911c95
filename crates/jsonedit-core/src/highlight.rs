//! Overlay markup for search highlights.

use std::fmt;

use jsonedit_config::schema::HighlightConfig;

use crate::search::find_matches;

/// Markup the renderer vouches for.
///
/// Hosts display it without escaping: it carries generated `<span>` tags
/// around the buffer text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedMarkup(String);

impl TrustedMarkup {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TrustedMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Wraps every search match in a styled span.
#[derive(Debug, Clone)]
pub struct HighlightRenderer {
    active_style: String,
    inactive_style: String,
}

impl HighlightRenderer {
    pub fn new(config: &HighlightConfig) -> Self {
        Self {
            active_style: span_style(&config.active_background, &config.active_text, config.border_radius_px),
            inactive_style: span_style(
                &config.inactive_background,
                &config.inactive_text,
                config.border_radius_px,
            ),
        }
    }

    /// Render `text` with each occurrence of `term` highlighted.
    ///
    /// The `active`-th occurrence (0-based, in match order) gets the active
    /// style. An empty term returns the text unchanged.
    pub fn render(&self, text: &str, term: &str, active: Option<usize>) -> TrustedMarkup {
        if term.is_empty() {
            return TrustedMarkup(text.to_string());
        }

        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for (i, m) in find_matches(text, term).into_iter().enumerate() {
            let style = if Some(i) == active {
                &self.active_style
            } else {
                &self.inactive_style
            };
            out.push_str(&text[last..m.start]);
            out.push_str("<span style=\"");
            out.push_str(style);
            out.push_str("\">");
            out.push_str(&text[m.start..m.end]);
            out.push_str("</span>");
            last = m.end;
        }
        out.push_str(&text[last..]);
        TrustedMarkup(out)
    }

    pub fn active_style(&self) -> &str {
        &self.active_style
    }

    pub fn inactive_style(&self) -> &str {
        &self.inactive_style
    }
}

impl Default for HighlightRenderer {
    fn default() -> Self {
        Self::new(&HighlightConfig::default())
    }
}

fn span_style(background: &str, text: &str, radius: u32) -> String {
    format!("background-color: {background}; color: {text}; border-radius: {radius}px;")
}
