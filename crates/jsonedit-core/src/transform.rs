//! Whole-buffer rewrites: pretty-print, minify, and recursive key sorting.
//!
//! Every transform parses first and only produces output on success, so a
//! failed transform never yields partial text.

use serde_json::{Map, Value};

use crate::validator::{is_blank, parse, SyntaxError};

/// A buffer rewrite offered by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Pretty-print with 2-space indentation, source key order kept.
    Format,
    /// Compact serialization.
    Minify,
    /// Recursively order object keys ascending, then pretty-print.
    SortKeys,
}

impl Transform {
    /// Apply the transform to `text`.
    ///
    /// Returns `Ok(None)` for a blank buffer (nothing to do) and the
    /// rewritten text otherwise.
    pub fn apply(self, text: &str) -> Result<Option<String>, SyntaxError> {
        if is_blank(text) {
            return Ok(None);
        }
        let value = parse(text)?;
        let out = match self {
            Transform::Format => serde_json::to_string_pretty(&value)?,
            Transform::Minify => serde_json::to_string(&value)?,
            Transform::SortKeys => serde_json::to_string_pretty(&sort_keys(value))?,
        };
        Ok(Some(out))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Transform::Format => "format",
            Transform::Minify => "minify",
            Transform::SortKeys => "sort_keys",
        }
    }
}

/// Reorder object keys ascending at every nesting level.
///
/// Arrays keep their element order; scalars are returned unchanged.
pub fn sort_keys(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, sort_keys(v)))
                    .collect::<Map<String, Value>>(),
            )
        }
        scalar => scalar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys_in_order(value: &Value) -> bool {
        match value {
            Value::Object(map) => {
                let keys: Vec<&String> = map.keys().collect();
                keys.windows(2).all(|w| w[0] <= w[1]) && map.values().all(keys_in_order)
            }
            Value::Array(items) => items.iter().all(keys_in_order),
            _ => true,
        }
    }

    #[test]
    fn format_uses_two_space_indent() {
        let out = Transform::Format.apply(r#"{"a":1,"b":[1,2]}"#).unwrap().unwrap();
        assert_eq!(out, "{\n  \"a\": 1,\n  \"b\": [\n    1,\n    2\n  ]\n}");
    }

    #[test]
    fn format_keeps_source_key_order() {
        let out = Transform::Format.apply(r#"{"z":1,"a":2}"#).unwrap().unwrap();
        assert!(out.find("\"z\"").unwrap() < out.find("\"a\"").unwrap());
    }

    #[test]
    fn format_is_idempotent() {
        let once = Transform::Format
            .apply(r#" { "x" : [ {"y":null}, 3.5, "s" ], "n": {} } "#)
            .unwrap()
            .unwrap();
        let twice = Transform::Format.apply(&once).unwrap().unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn minify_of_format_round_trips() {
        let original = r#"{"name": "Ronny", "tags": ["a", "b"], "nested": {"k": false}}"#;
        let formatted = Transform::Format.apply(original).unwrap().unwrap();
        let minified = Transform::Minify.apply(&formatted).unwrap().unwrap();
        assert_eq!(parse(&minified).unwrap(), parse(original).unwrap());
        assert!(!minified.contains('\n'));
        assert!(!minified.contains(": "));
    }

    #[test]
    fn sort_keys_scenario() {
        let out = Transform::SortKeys.apply(r#"{"b":1,"a":2}"#).unwrap().unwrap();
        assert_eq!(out, "{\n  \"a\": 2,\n  \"b\": 1\n}");
    }

    #[test]
    fn sort_keys_recurses_and_preserves_arrays() {
        let input = r#"{"z":{"y":1,"x":[{"d":1,"c":2},3,{"b":0,"a":0}]},"m":null}"#;
        let out = Transform::SortKeys.apply(input).unwrap().unwrap();
        let value = parse(&out).unwrap();
        assert!(keys_in_order(&value));

        let arr = value["z"]["x"].as_array().unwrap();
        assert_eq!(arr.len(), 3);
        assert_eq!(arr[1], Value::from(3));
        assert_eq!(arr[0]["c"], Value::from(2));
    }

    #[test]
    fn sort_keys_is_idempotent() {
        let once = Transform::SortKeys
            .apply(r#"{"b":{"d":1,"c":2},"a":[{"f":1,"e":2}]}"#)
            .unwrap()
            .unwrap();
        let twice = Transform::SortKeys.apply(&once).unwrap().unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn sort_keys_leaves_scalars_alone() {
        assert_eq!(sort_keys(Value::from("x")), Value::from("x"));
        assert_eq!(sort_keys(Value::Null), Value::Null);
    }

    #[test]
    fn blank_input_is_a_noop() {
        for t in [Transform::Format, Transform::Minify, Transform::SortKeys] {
            assert_eq!(t.apply("").unwrap(), None);
            assert_eq!(t.apply("  \n ").unwrap(), None);
        }
    }

    #[test]
    fn invalid_input_fails_without_output() {
        for t in [Transform::Format, Transform::Minify, Transform::SortKeys] {
            let err = t.apply("not json").unwrap_err();
            assert!(!err.message.is_empty());
        }
    }
}
