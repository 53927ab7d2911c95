//! Interactive editor session over JSON-lines stdio.
//!
//! Embeds one [`JsonEditor`] with a [`HeadlessSurface`]: the embedder sends
//! edits, key events, and toolbar actions; the session answers with state
//! snapshots and forwards every validation pass as an `error_change`.

mod dispatch;
mod files;
mod keys;
mod snapshot;


use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::{broadcast, mpsc};

use jsonedit_common::{ClipboardSink, EditorError, Event, EventBus};
use jsonedit_config::schema::{ButtonsConfig, EditorConfig};
use jsonedit_core::{HeadlessSurface, JsonEditor, ShortcutScope};
use jsonedit_platform::KeybindRegistry;

use crate::ipc::{reply, IpcMessage};

pub use files::read_text_file;
use files::LoadDone;
use keys::KeyRouter;

/// One embedded editor plus the host state around it.
pub struct Session {
    editor: JsonEditor,
    surface: HeadlessSurface,
    registry: KeybindRegistry,
    keys: Arc<Mutex<KeyRouter>>,
    shortcuts: Option<ShortcutScope<KeyRouter>>,
    buttons: ButtonsConfig,
    clipboard: Box<dyn ClipboardSink>,
    download_dir: Option<PathBuf>,
    events: broadcast::Receiver<Event>,
    load_tx: mpsc::UnboundedSender<LoadDone>,
    load_rx: mpsc::UnboundedReceiver<LoadDone>,
}

impl Session {
    pub fn new(initial: String, config: &EditorConfig, clipboard: Box<dyn ClipboardSink>) -> Self {
        let bus = Arc::new(EventBus::default());
        let events = bus.subscribe();
        let editor = JsonEditor::new(initial, config, bus);

        let keys = Arc::new(Mutex::new(KeyRouter::default()));
        let shortcuts = Some(editor.start(Arc::clone(&keys)));

        let registry = KeybindRegistry::from_config(&config.keybinds);
        tracing::info!(bindings = registry.len(), "keybind registry loaded");

        let (load_tx, load_rx) = mpsc::unbounded_channel();

        Self {
            editor,
            surface: HeadlessSurface::default(),
            registry,
            keys,
            shortcuts,
            buttons: config.buttons.clone(),
            clipboard,
            download_dir: None,
            events,
            load_tx,
            load_rx,
        }
    }

    /// Save downloads here instead of the platform download directory.
    pub fn with_download_dir(mut self, dir: PathBuf) -> Self {
        self.download_dir = Some(dir);
        self
    }

    pub fn editor(&self) -> &JsonEditor {
        &self.editor
    }

    pub fn surface(&self) -> &HeadlessSurface {
        &self.surface
    }

    /// Replies sent before any input: the initial validation result and a
    /// state snapshot.
    pub fn startup(&mut self) -> Vec<IpcMessage> {
        let mut replies = self.drain_events();
        replies.push(self.state_reply());
        replies
    }

    /// Serve requests until `input` reaches end of file.
    pub async fn run<R, W>(mut self, input: R, mut output: W) -> Result<(), EditorError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        tracing::info!("session started");
        let mut lines = input.lines();
        let startup = self.startup();
        write_replies(&mut output, &startup).await?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        break;
                    };
                    let replies = self.handle_line(&line);
                    write_replies(&mut output, &replies).await?;
                }
                Some(done) = self.load_rx.recv() => {
                    let replies = self.apply_load(done);
                    write_replies(&mut output, &replies).await?;
                }
            }
        }

        self.shutdown();
        Ok(())
    }

    /// Detach the global shortcut listener and announce shutdown.
    pub fn shutdown(&mut self) {
        if let Some(mut scope) = self.shortcuts.take() {
            scope.stop();
        }
        self.editor.bus().publish(Event::Shutdown);
        tracing::info!("session shut down");
    }

    /// Turn pending widget events into replies.
    fn drain_events(&mut self) -> Vec<IpcMessage> {
        let mut replies = Vec::new();
        loop {
            match self.events.try_recv() {
                Ok(Event::ErrorChanged(message)) => {
                    replies.push(IpcMessage::json(
                        reply::ERROR_CHANGE,
                        serde_json::json!(message),
                    ));
                }
                Ok(_) => {}
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "session event receiver lagged");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
        replies
    }
}

async fn write_replies<W>(output: &mut W, replies: &[IpcMessage]) -> Result<(), EditorError>
where
    W: AsyncWrite + Unpin,
{
    for msg in replies {
        let mut line = msg.to_line();
        line.push('\n');
        output.write_all(line.as_bytes()).await?;
    }
    output.flush().await?;
    Ok(())
}
