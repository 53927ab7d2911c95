//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_jsonedit_config.toml"));
    assert!(matches!(
        result.unwrap_err(),
        jsonedit_common::ConfigError::FileNotFound(_)
    ));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[buttons]
download = false

[highlight]
active_background = "#ff0000"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!(!config.buttons.download);
    assert_eq!(config.highlight.active_background, "#ff0000");
    // Defaults preserved
    assert!(config.buttons.format);
    assert_eq!(config.highlight.inactive_background, "#fde047");
    assert_eq!(config.download.filename, "data.json");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    assert!(matches!(
        load_from_path(&path).unwrap_err(),
        jsonedit_common::ConfigError::ParseError(_)
    ));
}

#[test]
fn invalid_values_reset_but_siblings_survive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[buttons]\nsort = false\n\n[search]\ncontext_lines = 99\nline_height_px = 24\n",
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!(!config.buttons.sort);
    assert_eq!(config.search.line_height_px, 24);
    assert_eq!(config.search.context_lines, 5);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jsonedit").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.keybinds.toggle_search, "Cmd+F");
    assert_eq!(config.editor.indent_width, 2);
    assert_eq!(config.search.context_lines, 5);
}

#[test]
fn template_parses_to_defaults() {
    let config: crate::EditorConfig =
        toml::from_str(&template::default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_ends_with_config_toml() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("jsonedit/config.toml"));
    }
}
