pub mod actions;
pub mod clipboard;
pub mod errors;
pub mod events;

pub use actions::Action;
pub use clipboard::{ClipboardSink, MemoryClipboard};
pub use errors::{ConfigError, EditorError, PlatformError};
pub use events::{Event, EventBus};

pub type Result<T> = std::result::Result<T, EditorError>;
