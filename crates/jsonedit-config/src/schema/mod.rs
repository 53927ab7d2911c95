//! Configuration schema types for jsonedit.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod buttons;
mod download;
mod editor;
mod highlight;
mod keybind_config;
mod search;
mod system;

pub use buttons::*;
pub use download::*;
pub use editor::*;
pub use highlight::*;
pub use keybind_config::*;
pub use search::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub buttons: ButtonsConfig,
    pub keybinds: KeybindConfig,
    pub editor: EditorSection,
    pub search: SearchConfig,
    pub highlight: HighlightConfig,
    pub download: DownloadConfig,
    pub logging: LoggingConfig,
}
