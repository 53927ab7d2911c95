//! Per-section checks. Each one resets the fields it rejects.

use crate::schema::{DownloadConfig, EditorSection, HighlightConfig, SearchConfig};

use super::helpers::{check_color, check_range};

pub(crate) fn check_editor(problems: &mut Vec<String>, editor: &mut EditorSection, defaults: &EditorSection) {
    check_range(
        problems,
        "editor.indent_width",
        &mut editor.indent_width,
        defaults.indent_width,
        1,
        8,
    );
}

pub(crate) fn check_search(problems: &mut Vec<String>, search: &mut SearchConfig, defaults: &SearchConfig) {
    check_range(
        problems,
        "search.line_height_px",
        &mut search.line_height_px,
        defaults.line_height_px,
        8,
        64,
    );
    check_range(
        problems,
        "search.context_lines",
        &mut search.context_lines,
        defaults.context_lines,
        0,
        50,
    );
}

pub(crate) fn check_highlight(
    problems: &mut Vec<String>,
    hl: &mut HighlightConfig,
    defaults: &HighlightConfig,
) {
    check_color(
        problems,
        "highlight.active_background",
        &mut hl.active_background,
        &defaults.active_background,
    );
    check_color(problems, "highlight.active_text", &mut hl.active_text, &defaults.active_text);
    check_color(
        problems,
        "highlight.inactive_background",
        &mut hl.inactive_background,
        &defaults.inactive_background,
    );
    check_color(
        problems,
        "highlight.inactive_text",
        &mut hl.inactive_text,
        &defaults.inactive_text,
    );
    check_range(
        problems,
        "highlight.border_radius_px",
        &mut hl.border_radius_px,
        defaults.border_radius_px,
        0,
        8,
    );
}

pub(crate) fn check_download(
    problems: &mut Vec<String>,
    download: &mut DownloadConfig,
    defaults: &DownloadConfig,
) {
    let name = download.filename.trim();
    let filename_problem = if name.is_empty() {
        Some("download.filename must not be empty".to_string())
    } else if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        Some(format!("download.filename = '{name}' must be a bare file name"))
    } else {
        None
    };
    if let Some(problem) = filename_problem {
        problems.push(problem);
        download.filename = defaults.filename.clone();
    }

    if download.mime_type.trim().is_empty() {
        problems.push("download.mime_type must not be empty".into());
        download.mime_type = defaults.mime_type.clone();
    }
}
