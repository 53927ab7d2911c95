//! IPC message validation and dispatch to session handlers.

use std::path::PathBuf;
use std::sync::PoisonError;

use jsonedit_common::{Action, EditorError};
use jsonedit_core::{FocusTarget, ScrollOffset, Selection};
use jsonedit_platform::{KeyCombo, KeyScope};

use super::files::{expand_home, read_text_file, LoadDone};
use super::keys::KeyEvent;
use super::Session;
use crate::ipc::{reply, IpcMessage, IpcPayload};

// =============================================================================
// IPC ALLOWLIST
// =============================================================================

/// Allowed inbound message kinds.
///
/// Any message with a `kind` not in this list is rejected and logged.
const ALLOWED_IPC_KINDS: &[&str] = &[
    "set_text",
    "key",
    "action",
    "search",
    "select",
    "scroll",
    "load",
    "download",
    "get_state",
    "ping",
];

/// Check whether an IPC message kind is in the allowlist.
pub fn is_ipc_kind_allowed(kind: &str) -> bool {
    ALLOWED_IPC_KINDS.contains(&kind)
}

// =============================================================================
// DISPATCH
// =============================================================================

impl Session {
    /// Handle one input line and return the replies to send, in order.
    pub fn handle_line(&mut self, line: &str) -> Vec<IpcMessage> {
        let line = line.trim();
        if line.is_empty() {
            return Vec::new();
        }

        let Some(msg) = IpcMessage::from_json(line) else {
            tracing::warn!(body_len = line.len(), "IPC message rejected: failed to parse");
            return vec![IpcMessage::error("malformed message")];
        };

        if !is_ipc_kind_allowed(&msg.kind) {
            tracing::warn!(kind = %msg.kind, "IPC message rejected: unknown kind");
            return vec![IpcMessage::error(format!("unknown kind: {}", msg.kind))];
        }

        tracing::debug!(kind = %msg.kind, "IPC message dispatched");

        let result = match msg.kind.as_str() {
            "ping" => {
                return vec![IpcMessage::json(reply::PONG, serde_json::json!("pong"))];
            }
            "get_state" => Ok(Vec::new()),
            "set_text" => self.handle_set_text(&msg.payload),
            "key" => self.handle_key(&msg.payload),
            "action" => self.handle_action(&msg.payload),
            "search" => self.handle_search(&msg.payload),
            "select" => self.handle_select(&msg.payload),
            "scroll" => self.handle_scroll(&msg.payload),
            "download" => self.handle_download(&msg.payload),
            "load" => {
                return match self.handle_load(&msg.payload) {
                    Ok(()) => Vec::new(),
                    Err(e) => vec![IpcMessage::error(e.to_string())],
                };
            }
            _ => {
                // Shouldn't happen: allowlist checked above
                tracing::warn!(kind = %msg.kind, "Unhandled IPC kind");
                Ok(Vec::new())
            }
        };

        let mut replies = self.drain_events();
        match result {
            Ok(extra) => replies.extend(extra),
            Err(e) => {
                tracing::warn!(kind = %msg.kind, "IPC request failed: {e}");
                replies.push(IpcMessage::error(e.to_string()));
            }
        }
        replies.push(self.state_reply());
        replies
    }

    /// Apply a finished file read. Reads superseded by a newer load are
    /// dropped without a reply, whether they succeeded or failed.
    pub(super) fn apply_load(&mut self, done: LoadDone) -> Vec<IpcMessage> {
        if !self.editor.is_latest_load(done.ticket) {
            tracing::debug!(
                ticket = done.ticket.id(),
                path = %done.path.display(),
                "ignoring superseded file load"
            );
            return Vec::new();
        }
        let contents = match done.result {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!(path = %done.path.display(), "file load failed: {e}");
                return vec![IpcMessage::error(format!("load failed: {e}"))];
            }
        };
        if !self
            .editor
            .finish_load(done.ticket, contents, &mut self.surface)
        {
            return Vec::new();
        }
        let mut replies = self.drain_events();
        replies.push(self.state_reply());
        replies
    }

    // -- handlers --

    fn handle_set_text(&mut self, payload: &IpcPayload) -> Result<Vec<IpcMessage>, EditorError> {
        let text = expect_text(payload, "set_text")?;
        self.editor.set_text(text, &mut self.surface);
        Ok(Vec::new())
    }

    fn handle_key(&mut self, payload: &IpcPayload) -> Result<Vec<IpcMessage>, EditorError> {
        let value = expect_json(payload, "key")?;
        let event: KeyEvent = serde_json::from_value(value.clone())
            .map_err(|e| EditorError::Ipc(format!("bad key event: {e}")))?;

        let scope = event.scope.unwrap_or_else(|| self.focus_scope());
        let combo = KeyCombo::from_modifiers(event.ctrl, event.alt, event.shift, event.meta, &event.key);

        let listening = self
            .keys
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_listening();
        let action = self.registry.lookup_scoped(scope, &combo).or_else(|| {
            listening
                .then(|| self.registry.lookup_scoped(KeyScope::Global, &combo))
                .flatten()
        });

        match action {
            Some(action) => self.run_action(action),
            None => {
                tracing::debug!(?scope, key = %combo.key, "unbound key");
                Ok(Vec::new())
            }
        }
    }

    fn handle_action(&mut self, payload: &IpcPayload) -> Result<Vec<IpcMessage>, EditorError> {
        let name = expect_text(payload, "action")?;
        let action = Action::from_name(name)
            .ok_or_else(|| EditorError::Ipc(format!("unknown action: {name}")))?;

        if Action::toolbar_actions().contains(&action) && !self.buttons.allows(action) {
            tracing::warn!(?action, "toolbar action rejected: button hidden");
            return Err(EditorError::Ipc(format!("action hidden: {name}")));
        }
        self.run_action(action)
    }

    fn handle_search(&mut self, payload: &IpcPayload) -> Result<Vec<IpcMessage>, EditorError> {
        let term = expect_text(payload, "search")?;
        if !self.editor.is_search_open() {
            self.editor.open_search(&mut self.surface);
        }
        self.editor.set_search_term(term, &mut self.surface);
        Ok(Vec::new())
    }

    fn handle_select(&mut self, payload: &IpcPayload) -> Result<Vec<IpcMessage>, EditorError> {
        let value = expect_json(payload, "select")?;
        let selection: Selection = serde_json::from_value(value.clone())
            .map_err(|e| EditorError::Ipc(format!("bad selection: {e}")))?;
        self.surface.selection = selection;
        Ok(Vec::new())
    }

    fn handle_scroll(&mut self, payload: &IpcPayload) -> Result<Vec<IpcMessage>, EditorError> {
        let value = expect_json(payload, "scroll")?;
        let offset: ScrollOffset = serde_json::from_value(value.clone())
            .map_err(|e| EditorError::Ipc(format!("bad scroll offset: {e}")))?;
        self.surface.scroll = offset;
        self.editor.sync_scroll(&mut self.surface);
        Ok(Vec::new())
    }

    fn handle_download(&mut self, payload: &IpcPayload) -> Result<Vec<IpcMessage>, EditorError> {
        let dir = payload.as_text().map(expand_home);
        self.write_download(dir)
    }

    fn handle_load(&mut self, payload: &IpcPayload) -> Result<(), EditorError> {
        let path = expand_home(expect_text(payload, "load")?);
        let ticket = self.editor.begin_load();
        let tx = self.load_tx.clone();
        tracing::info!(path = %path.display(), ticket = ticket.id(), "loading file");

        tokio::spawn(async move {
            let result = read_text_file(&path).await;
            if tx.send(LoadDone { ticket, path, result }).is_err() {
                tracing::debug!("session closed before file load finished");
            }
        });
        Ok(())
    }

    // -- helpers --

    /// Run an action, handling the host ones the widget hands back.
    fn run_action(&mut self, action: Action) -> Result<Vec<IpcMessage>, EditorError> {
        if !action.is_host_action() {
            self.editor.dispatch(action, &mut self.surface);
            return Ok(Vec::new());
        }
        match action {
            Action::Copy => {
                self.editor.copy(self.clipboard.as_mut())?;
                Ok(Vec::new())
            }
            Action::Download => self.write_download(None),
            _ => Err(EditorError::Ipc(
                "load needs a file path; send a load message".into(),
            )),
        }
    }

    fn write_download(&self, dir: Option<PathBuf>) -> Result<Vec<IpcMessage>, EditorError> {
        let dir = match dir.or_else(|| self.download_dir.clone()) {
            Some(dir) => dir,
            None => jsonedit_platform::download_dir()?,
        };
        let download = self.editor.download();
        let path = download.write_into(&dir)?;
        Ok(vec![IpcMessage::json(
            reply::DOWNLOADED,
            serde_json::json!({
                "path": path.display().to_string(),
                "filename": download.filename,
                "mime_type": download.mime_type,
                "bytes": download.contents.len(),
            }),
        )])
    }

    fn focus_scope(&self) -> KeyScope {
        match self.surface.focused {
            Some(FocusTarget::SearchInput) if self.editor.is_search_open() => KeyScope::SearchInput,
            _ => KeyScope::Editor,
        }
    }
}

fn expect_text<'a>(payload: &'a IpcPayload, kind: &str) -> Result<&'a str, EditorError> {
    payload
        .as_text()
        .ok_or_else(|| EditorError::Ipc(format!("{kind} expects a string payload")))
}

fn expect_json<'a>(payload: &'a IpcPayload, kind: &str) -> Result<&'a serde_json::Value, EditorError> {
    payload
        .as_json()
        .ok_or_else(|| EditorError::Ipc(format!("{kind} expects an object payload")))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipc_kind_allowed_valid() {
        for kind in ALLOWED_IPC_KINDS {
            assert!(is_ipc_kind_allowed(kind));
        }
    }

    #[test]
    fn ipc_kind_rejected_unknown() {
        assert!(!is_ipc_kind_allowed("eval"));
        assert!(!is_ipc_kind_allowed(""));
        assert!(!is_ipc_kind_allowed("set_text_extra"));
        assert!(!is_ipc_kind_allowed("SET_TEXT")); // case-sensitive
    }
}
