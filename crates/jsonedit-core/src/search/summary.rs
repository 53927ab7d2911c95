use std::fmt;

/// Status line for the search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSummary {
    pub total: usize,
}

impl MatchSummary {
    pub fn new(total: usize) -> Self {
        Self { total }
    }
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.total {
            0 => write!(f, "No matches found"),
            1 => write!(f, "1 match found"),
            n => write!(f, "{n} matches found"),
        }
    }
}
