//! Global shortcut listener lifetime.
//!
//! The widget listens for its search toggle on the host's global key
//! stream while it is alive. [`ShortcutScope`] holds that registration and
//! releases it when stopped or dropped, whichever comes first.

use std::sync::{Arc, Mutex, PoisonError};

use super::state::JsonEditor;

/// Handle for one registered key listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Something that owns a global key stream.
pub trait KeyListenerHost {
    fn attach_key_listener(&mut self) -> ListenerId;
    fn detach_key_listener(&mut self, id: ListenerId);
}

/// A live listener registration.
pub struct ShortcutScope<H: KeyListenerHost> {
    host: Arc<Mutex<H>>,
    id: Option<ListenerId>,
}

impl<H: KeyListenerHost> ShortcutScope<H> {
    pub fn id(&self) -> Option<ListenerId> {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }

    /// Detach the listener. Later calls do nothing.
    pub fn stop(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        let mut host = self.host.lock().unwrap_or_else(PoisonError::into_inner);
        host.detach_key_listener(id);
        tracing::debug!(listener = id.0, "shortcut listener detached");
    }
}

impl<H: KeyListenerHost> Drop for ShortcutScope<H> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl JsonEditor {
    /// Attach the widget's global shortcut listener to `host`.
    pub fn start<H: KeyListenerHost>(&self, host: Arc<Mutex<H>>) -> ShortcutScope<H> {
        let id = host
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .attach_key_listener();
        tracing::debug!(listener = id.0, "shortcut listener attached");
        ShortcutScope { host, id: Some(id) }
    }
}
