//! One-shot subcommands: each reads a file, runs one widget operation, and
//! prints the result.

use std::fmt::Write as _;
use std::path::Path;
use std::process::ExitCode;

use jsonedit_common::{ClipboardSink, EditorError};
use jsonedit_config::schema::EditorConfig;
use jsonedit_core::navigator::line_number_at;
use jsonedit_core::{find_matches, validate, HighlightRenderer, MatchSummary, Transform, ValidationState};

use crate::cli::Command;

/// Run a one-shot subcommand. `Command::Session` is handled by the caller.
pub fn run(command: &Command, config: &EditorConfig) -> Result<ExitCode, EditorError> {
    match command {
        Command::Validate { file } => {
            let state = validate_file(file)?;
            match state.error_message {
                None => {
                    println!("valid");
                    Ok(ExitCode::SUCCESS)
                }
                Some(message) => {
                    println!("invalid: {message}");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Format { file, write } => print_transform(file, Transform::Format, *write),
        Command::Minify { file, write } => print_transform(file, Transform::Minify, *write),
        Command::Sort { file, write } => print_transform(file, Transform::SortKeys, *write),
        Command::Search {
            file,
            term,
            active,
            html,
        } => {
            let text = read_buffer(file)?;
            let renderer = HighlightRenderer::new(&config.highlight);
            print!("{}", search_report(&text, term, *active, *html, &renderer));
            Ok(ExitCode::SUCCESS)
        }
        Command::Copy { file } => {
            let mut clipboard = jsonedit_platform::Clipboard::new()?;
            let len = copy_file(file, &mut clipboard)?;
            println!("copied {len} bytes");
            Ok(ExitCode::SUCCESS)
        }
        Command::Session { .. } => Err(EditorError::Other(
            "session is not a one-shot command".into(),
        )),
    }
}

pub fn read_buffer(path: &Path) -> Result<String, EditorError> {
    Ok(std::fs::read_to_string(path)?)
}

pub fn validate_file(path: &Path) -> Result<ValidationState, EditorError> {
    let text = read_buffer(path)?;
    Ok(validate(&text))
}

/// Apply `transform` to the file and return the new text.
///
/// A blank file comes back unchanged. With `write`, the result also
/// replaces the file contents.
pub fn transform_file(path: &Path, transform: Transform, write: bool) -> Result<String, EditorError> {
    let text = read_buffer(path)?;
    let Some(out) = transform.apply(&text)? else {
        tracing::info!(path = %path.display(), "file is blank, nothing to {}", transform.name());
        return Ok(text);
    };
    if write {
        std::fs::write(path, &out)?;
        tracing::info!(path = %path.display(), transform = transform.name(), "file rewritten");
    }
    Ok(out)
}

fn print_transform(path: &Path, transform: Transform, write: bool) -> Result<ExitCode, EditorError> {
    let out = transform_file(path, transform, write)?;
    if !write {
        println!("{out}");
    }
    Ok(ExitCode::SUCCESS)
}

/// Search output: highlight markup with `html`, otherwise a summary line
/// followed by one line per match.
pub fn search_report(
    text: &str,
    term: &str,
    active: Option<usize>,
    html: bool,
    renderer: &HighlightRenderer,
) -> String {
    if html {
        let mut out = renderer.render(text, term, active).into_string();
        out.push('\n');
        return out;
    }

    let matches = find_matches(text, term);
    let mut out = format!("{}\n", MatchSummary::new(matches.len()));
    for (i, m) in matches.iter().enumerate() {
        let marker = if Some(i) == active { " *" } else { "" };
        let _ = writeln!(
            out,
            "  [{i}] {}..{} line {}{marker}",
            m.start,
            m.end,
            line_number_at(text, m.start)
        );
    }
    out
}

/// Put the file, verbatim, on `clipboard`. Returns the byte count.
pub fn copy_file(path: &Path, clipboard: &mut dyn ClipboardSink) -> Result<usize, EditorError> {
    let text = read_buffer(path)?;
    clipboard.set_text(&text)?;
    Ok(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonedit_common::MemoryClipboard;

    fn write_temp(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.json");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn validate_reports_parser_message() {
        let (_dir, path) = write_temp("{\"a\": }");
        let state = validate_file(&path).unwrap();
        assert!(!state.is_valid);
        assert!(state.error_message.is_some());
    }

    #[test]
    fn validate_blank_file_is_valid() {
        let (_dir, path) = write_temp("  \n");
        assert_eq!(validate_file(&path).unwrap(), ValidationState::valid());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = validate_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, EditorError::Io(_)));
    }

    #[test]
    fn sort_with_write_rewrites_file() {
        let (_dir, path) = write_temp(r#"{"b":1,"a":{"d":1,"c":2}}"#);
        let out = transform_file(&path, Transform::SortKeys, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), out);
        assert!(out.find("\"a\"").unwrap() < out.find("\"b\"").unwrap());
        assert!(out.find("\"c\"").unwrap() < out.find("\"d\"").unwrap());
    }

    #[test]
    fn format_without_write_leaves_file() {
        let (_dir, path) = write_temp("[1,2]");
        let out = transform_file(&path, Transform::Format, false).unwrap();
        assert_eq!(out, "[\n  1,\n  2\n]");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[1,2]");
    }

    #[test]
    fn transform_of_invalid_file_is_syntax_error() {
        let (_dir, path) = write_temp("not json");
        let err = transform_file(&path, Transform::Minify, true).unwrap_err();
        assert!(matches!(err, EditorError::Syntax(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "not json");
    }

    #[test]
    fn search_report_lists_matches() {
        let text = "{\n  \"key\": \"KEY\"\n}";
        let report = search_report(text, "key", Some(1), false, &HighlightRenderer::default());
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "2 matches found");
        assert_eq!(lines[1], "  [0] 5..8 line 2");
        assert_eq!(lines[2], "  [1] 12..15 line 2 *");
    }

    #[test]
    fn search_report_without_matches() {
        let report = search_report("{}", "zzz", None, false, &HighlightRenderer::default());
        assert_eq!(report, "No matches found\n");
    }

    #[test]
    fn search_report_html() {
        let report = search_report("a b a", "a", Some(0), true, &HighlightRenderer::default());
        assert_eq!(report.matches("<span").count(), 2);
        assert!(report.ends_with('\n'));
    }

    #[test]
    fn copy_is_verbatim() {
        let (_dir, path) = write_temp("{ \"x\" :1 }\n");
        let mut clipboard = MemoryClipboard::default();
        assert_eq!(copy_file(&path, &mut clipboard).unwrap(), 11);
        assert_eq!(clipboard.contents.as_deref(), Some("{ \"x\" :1 }\n"));
    }
}
