//! Key routing: turns host key events into widget actions.

use jsonedit_core::{KeyListenerHost, ListenerId};

/// The session's global key stream.
///
/// Global bindings only fire while at least one listener is attached; the
/// widget attaches one for its lifetime.
#[derive(Debug, Default)]
pub struct KeyRouter {
    next_id: u64,
    listeners: Vec<ListenerId>,
}

impl KeyRouter {
    pub fn is_listening(&self) -> bool {
        !self.listeners.is_empty()
    }
}

impl KeyListenerHost for KeyRouter {
    fn attach_key_listener(&mut self) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listeners.push(id);
        id
    }

    fn detach_key_listener(&mut self, id: ListenerId) {
        self.listeners.retain(|l| *l != id);
    }
}

/// A key event as sent over IPC.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct KeyEvent {
    pub key: String,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    /// Cmd on macOS, the Windows key elsewhere.
    pub meta: bool,
    /// Focus scope override; defaults to whatever currently has focus.
    pub scope: Option<jsonedit_platform::KeyScope>,
}
