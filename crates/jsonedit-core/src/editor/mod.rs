//! The jsonedit widget.
//!
//! [`JsonEditor`] owns the buffer, validation state, and search state. It
//! never renders anything itself: selection, scrolling, and focus go
//! through the [`TextSurface`](crate::surface::TextSurface) each operation
//! is handed, and every validation pass is announced on the
//! [`EventBus`](jsonedit_common::EventBus).

mod buffer;
mod dispatch;
mod scope;
mod search;
mod state;


pub use scope::{KeyListenerHost, ListenerId, ShortcutScope};
pub use state::{JsonEditor, LoadTicket};
