//! Search engine: literal, case-insensitive pattern matching.

use regex::{Regex, RegexBuilder};

use super::types::MatchRange;

/// Compile `term` into a case-insensitive literal pattern.
///
/// Case folding is Unicode simple folding, so a few non-ASCII letters such
/// as the Kelvin sign also match their ASCII counterparts.
///
/// Returns `None` for an empty term: an empty pattern matches at every
/// position and must never be searched.
pub fn build_pattern(term: &str) -> Option<Regex> {
    if term.is_empty() {
        return None;
    }
    match RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(term_len = term.len(), "search pattern rejected: {e}");
            None
        }
    }
}

/// Collect every non-overlapping match of `re`, left to right.
pub fn collect_matches(re: &Regex, text: &str) -> Vec<MatchRange> {
    re.find_iter(text)
        .filter(|m| !m.is_empty())
        .map(|m| MatchRange {
            start: m.start(),
            end: m.end(),
        })
        .collect()
}

/// Find every occurrence of `term` in `text`, ordered by start offset.
pub fn find_matches(text: &str, term: &str) -> Vec<MatchRange> {
    match build_pattern(term) {
        Some(re) => collect_matches(&re, text),
        None => Vec::new(),
    }
}

/// A match finder that keeps the last compiled pattern.
///
/// Buffer edits re-run the search with the same term, so the pattern is
/// only rebuilt when the term changes.
#[derive(Debug, Default)]
pub struct MatchFinder {
    cached: Option<(String, Regex)>,
}

impl MatchFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&mut self, text: &str, term: &str) -> Vec<MatchRange> {
        if term.is_empty() {
            return Vec::new();
        }

        let stale = !matches!(&self.cached, Some((cached_term, _)) if cached_term == term);
        if stale {
            self.cached = build_pattern(term).map(|re| (term.to_string(), re));
        }

        match &self.cached {
            Some((_, re)) => collect_matches(re, text),
            None => Vec::new(),
        }
    }
}
