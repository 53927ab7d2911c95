//! JSON-lines IPC protocol between the session and its embedder.
//!
//! Messages flow in both directions as one JSON object per line:
//! - **Embedder -> session** on stdin: `{"kind": "set_text", "payload": "..."}`.
//! - **Session -> embedder** on stdout: replies with the same shape.

use serde::{Deserialize, Serialize};

/// Reply kinds the session emits.
pub mod reply {
    pub const STATE: &str = "state";
    pub const ERROR_CHANGE: &str = "error_change";
    pub const PONG: &str = "pong";
    pub const DOWNLOADED: &str = "downloaded";
    pub const ERROR: &str = "error";
}

/// A typed IPC message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    /// The message payload (arbitrary JSON). Absent means `None`.
    #[serde(default)]
    pub payload: IpcPayload,
}

/// Payload of an IPC message: either a simple string or structured JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
    #[default]
    None,
}

impl IpcPayload {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            IpcPayload::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            IpcPayload::Json(v) => Some(v),
            _ => None,
        }
    }
}

impl IpcMessage {
    /// Parse a message from one input line.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Create a simple text message.
    pub fn text(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: IpcPayload::Text(text.into()),
        }
    }

    /// Create a JSON message.
    pub fn json(kind: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload: IpcPayload::Json(value),
        }
    }

    /// An `error` reply carrying a human-readable message.
    pub fn error(message: impl Into<String>) -> Self {
        Self::text(reply::ERROR, message)
    }

    /// Serialize to a single output line (no trailing newline).
    pub fn to_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!("{{\"kind\":\"error\",\"payload\":\"failed to encode reply: {e}\"}}")
        })
    }
}
