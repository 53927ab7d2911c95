//! Human-readable keybind strings: parsing and platform display.

mod display;
mod parse;
mod types;

pub use display::keybind_to_display;
pub use parse::{normalize_key_name, parse_keybind};
pub use types::{KeyBind, Modifier};
