//! Buffer search: find every occurrence of a term in the text.
//!
//! Matching is literal and case-insensitive. The term is escaped before it
//! reaches the regex engine, so metacharacters like `.` or `(` only match
//! themselves.

mod engine;
mod summary;
mod types;

pub use engine::*;
pub use summary::MatchSummary;
pub use types::MatchRange;

#[cfg(test)]
mod tests {
    use super::*;

    fn ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
        find_matches(text, term)
            .into_iter()
            .map(|m| (m.start, m.end))
            .collect()
    }

    #[test]
    fn empty_term_finds_nothing() {
        assert!(find_matches("anything at all", "").is_empty());
        assert!(find_matches("", "").is_empty());
    }

    #[test]
    fn finds_all_literal_matches() {
        assert_eq!(ranges("test test test", "test"), vec![(0, 4), (5, 9), (10, 14)]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(ranges("Key KEY key kEy", "key").len(), 4);
        assert_eq!(ranges("{\"Name\": \"name\"}", "NAME"), vec![(2, 6), (10, 14)]);
    }

    #[test]
    fn metacharacters_are_literal() {
        assert_eq!(ranges("a.b axb a.b", "a.b"), vec![(0, 3), (8, 11)]);
        assert_eq!(ranges("f(x) + f(y)", "f("), vec![(0, 2), (7, 9)]);
        assert_eq!(ranges("[1] [2]", "["), vec![(0, 1), (4, 5)]);
        assert_eq!(ranges("a*b aab", "a*"), vec![(0, 2)]);
        assert_eq!(ranges("$^|?\\", "\\"), vec![(4, 5)]);
    }

    #[test]
    fn matches_do_not_overlap() {
        // "aa" in "aaaa" is found twice, left to right, not three times.
        assert_eq!(ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
        assert_eq!(ranges("aaa", "aa"), vec![(0, 2)]);
    }

    #[test]
    fn ranges_are_sorted_and_disjoint() {
        let text = "abcabcabc xabcx ABC";
        let found = find_matches(text, "abc");
        for pair in found.windows(2) {
            assert!(pair[0].start < pair[1].start);
            assert!(pair[0].end <= pair[1].start);
        }
        assert_eq!(found.len(), 5);
    }

    #[test]
    fn offsets_are_utf8_byte_offsets() {
        let text = "héllo wörld héllo";
        let found = find_matches(text, "HÉLLO");
        assert_eq!(found.len(), 2);
        assert_eq!(&text[found[1].start..found[1].end], "héllo");
    }

    #[test]
    fn folding_uses_unicode_simple_case() {
        // KELVIN SIGN folds to `k`; three bytes wide.
        assert_eq!(ranges("\u{212A}ey", "key"), vec![(0, 5)]);
    }

    #[test]
    fn counts_key_in_generated_buffer() {
        let mut text = String::new();
        for i in 0..100 {
            text.push_str(&format!("  \"key{i}\": \"value with Key and KEY\",\n"));
        }
        let expected = text.to_lowercase().matches("key").count();
        assert_eq!(find_matches(&text, "key").len(), expected);
        assert_eq!(expected, 300);
    }

    #[test]
    fn finder_reuses_compiled_pattern() {
        let mut finder = MatchFinder::new();
        assert_eq!(finder.find("one two one", "one").len(), 2);
        assert_eq!(finder.find("one one one", "one").len(), 3);
        assert_eq!(finder.find("one one one", "ONE two").len(), 0);
        assert!(finder.find("one", "").is_empty());
    }

    #[test]
    fn summary_wording() {
        assert_eq!(MatchSummary::new(0).to_string(), "No matches found");
        assert_eq!(MatchSummary::new(1).to_string(), "1 match found");
        assert_eq!(MatchSummary::new(7).to_string(), "7 matches found");
    }
}
