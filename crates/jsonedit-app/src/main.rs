mod cli;
mod commands;
mod ipc;
mod session;

use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use jsonedit_common::{ClipboardSink, ConfigError, EditorError, MemoryClipboard};
use jsonedit_config::schema::EditorConfig;

use cli::Command;
use session::Session;

const DEFAULT_LOG_DIRECTIVE: &str = "jsonedit=info";

/// Build the log filter: `--log-level` first, then `RUST_LOG`, then the
/// config's level.
fn env_filter(cli_level: Option<&str>, fallback: &str) -> EnvFilter {
    if let Some(level) = cli_level {
        let directive = if level.contains('=') {
            level.to_string()
        } else {
            format!("jsonedit={level}")
        };
        match EnvFilter::try_new(&directive) {
            Ok(filter) => return filter,
            Err(e) => eprintln!("ignoring invalid --log-level '{level}': {e}"),
        }
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

fn load_config(path: Option<&Path>) -> Result<EditorConfig, ConfigError> {
    match path {
        Some(path) => jsonedit_config::load_config_from(path),
        None => jsonedit_config::load_config(),
    }
}

async fn run_session(
    initial: Option<&Path>,
    download_dir: Option<&Path>,
    config: &EditorConfig,
) -> Result<(), EditorError> {
    let initial = match initial {
        Some(path) => session::read_text_file(path).await?,
        None => String::new(),
    };

    let clipboard: Box<dyn ClipboardSink> = match jsonedit_platform::Clipboard::new() {
        Ok(clipboard) => Box::new(clipboard),
        Err(e) => {
            tracing::warn!("system clipboard unavailable, copies stay in memory: {e}");
            Box::new(MemoryClipboard::default())
        }
    };

    let mut session = Session::new(initial, config, clipboard);
    if let Some(dir) = download_dir {
        session = session.with_download_dir(dir.to_path_buf());
    }

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    session.run(stdin, tokio::io::stdout()).await
}

#[tokio::main]
async fn main() -> ExitCode {
    // Parse CLI arguments
    let args = cli::parse();

    // Config is read before the real subscriber exists, so its own log
    // lines go through a temporary one at the default level.
    let bootstrap = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(args.log_level.as_deref(), DEFAULT_LOG_DIRECTIVE))
        .finish();
    let loaded = tracing::subscriber::with_default(bootstrap, || load_config(args.config.as_deref()));

    // Initialize logging
    let config_directive = loaded
        .as_ref()
        .map(|c| c.logging.level.directive())
        .unwrap_or(DEFAULT_LOG_DIRECTIVE);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(args.log_level.as_deref(), config_directive))
        .init();

    tracing::info!("jsonedit v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        EditorConfig::default()
    });

    let command = args.command.unwrap_or(Command::Session {
        initial: None,
        download_dir: None,
    });
    let result = match &command {
        Command::Session {
            initial,
            download_dir,
        } => run_session(initial.as_deref(), download_dir.as_deref(), &config)
            .await
            .map(|()| ExitCode::SUCCESS),
        other => commands::run(other, &config),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("jsonedit: {e}");
            ExitCode::FAILURE
        }
    }
}
