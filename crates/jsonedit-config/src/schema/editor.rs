use serde::{Deserialize, Serialize};

/// Editing surface behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSection {
    /// Spaces inserted by the indent key (valid range: 1-8).
    pub indent_width: u32,
    /// Hint shown while the buffer is empty.
    pub placeholder: String,
}

impl Default for EditorSection {
    fn default() -> Self {
        Self {
            indent_width: 2,
            placeholder: "Enter your JSON here...".into(),
        }
    }
}

impl EditorSection {
    /// The literal text the indent key inserts.
    pub fn indent(&self) -> String {
        " ".repeat(self.indent_width as usize)
    }
}
