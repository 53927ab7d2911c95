pub mod clipboard;
pub mod input;
pub mod keymap;
pub mod paths;

pub use clipboard::Clipboard;
pub use input::{KeyCombo, KeyScope, KeybindRegistry};
pub use keymap::{KeyBind, Modifier};
pub use paths::download_dir;
