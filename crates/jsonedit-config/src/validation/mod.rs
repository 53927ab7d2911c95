//! Configuration validation.
//!
//! Checks numeric ranges, highlight colors, and the download file name.
//! [`repair`] resets each rejected field to its default and leaves the rest
//! of the config alone; [`validate`] reports the same problems without
//! touching the config.

mod helpers;
mod sections;


use crate::schema::EditorConfig;
use jsonedit_common::ConfigError;

/// Reset every invalid field to its default, returning one message per field.
pub fn repair(config: &mut EditorConfig) -> Vec<String> {
    let defaults = EditorConfig::default();
    let mut problems = Vec::new();

    sections::check_editor(&mut problems, &mut config.editor, &defaults.editor);
    sections::check_search(&mut problems, &mut config.search, &defaults.search);
    sections::check_highlight(&mut problems, &mut config.highlight, &defaults.highlight);
    sections::check_download(&mut problems, &mut config.download, &defaults.download);

    problems
}

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &EditorConfig) -> Result<(), ConfigError> {
    let problems = repair(&mut config.clone());
    if problems.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(problems.join("; ")))
    }
}
