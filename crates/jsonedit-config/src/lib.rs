//! jsonedit configuration system.
//!
//! Provides TOML-based configuration for the editor widget and its host:
//! toolbar visibility, keybinds, search scrolling, highlight styling,
//! download naming, and logging. All sections use defaults so partial
//! configs work out of the box, and out-of-range values fall back to their
//! defaults field by field.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use jsonedit_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("indent: {:?}", config.editor.indent());
//! ```

pub mod sanitize;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::EditorConfig;

use jsonedit_common::ConfigError;

/// Load config from the platform default path.
///
/// Creates a commented default file if none exists yet.
pub fn load_config() -> Result<EditorConfig, ConfigError> {
    toml_loader::load_default()
}

/// Load config from an explicit path.
///
/// Unlike [`load_config`], a missing file is an error.
pub fn load_config_from(path: &std::path::Path) -> Result<EditorConfig, ConfigError> {
    toml_loader::load_from_path(path)
}
