use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// jsonedit: validate, reshape, and search JSON, or embed the editor
/// widget over a JSON-lines session.
#[derive(Parser, Debug)]
#[command(name = "jsonedit", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Check a file for JSON syntax errors.
    Validate { file: PathBuf },

    /// Pretty-print with 2-space indentation.
    Format {
        file: PathBuf,
        /// Rewrite the file in place instead of printing.
        #[arg(long)]
        write: bool,
    },

    /// Compact to a single line.
    Minify {
        file: PathBuf,
        #[arg(long)]
        write: bool,
    },

    /// Sort object keys at every level, then pretty-print.
    Sort {
        file: PathBuf,
        #[arg(long)]
        write: bool,
    },

    /// Find every case-insensitive occurrence of a term.
    Search {
        file: PathBuf,
        term: String,
        /// 0-based index of the match to mark active.
        #[arg(long)]
        active: Option<usize>,
        /// Print highlight markup instead of match ranges.
        #[arg(long)]
        html: bool,
    },

    /// Put the file contents on the system clipboard.
    Copy { file: PathBuf },

    /// Run an interactive editor session over stdin/stdout (default).
    Session {
        /// Seed the buffer from this file.
        #[arg(long)]
        initial: Option<PathBuf>,
        /// Save downloads here instead of the platform download directory.
        #[arg(long)]
        download_dir: Option<PathBuf>,
    },
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_session() {
        let args = Args::try_parse_from(["jsonedit"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["jsonedit", "format", "a.json", "--write", "--log-level", "debug"])
                .unwrap();
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(
            args.command,
            Some(Command::Format {
                file: PathBuf::from("a.json"),
                write: true
            })
        );
    }

    #[test]
    fn search_flags() {
        let args = Args::try_parse_from([
            "jsonedit", "search", "a.json", "key", "--active", "2", "--html",
        ])
        .unwrap();
        assert_eq!(
            args.command,
            Some(Command::Search {
                file: PathBuf::from("a.json"),
                term: "key".into(),
                active: Some(2),
                html: true
            })
        );
    }

    #[test]
    fn session_initial_file() {
        let args =
            Args::try_parse_from(["jsonedit", "--config", "c.toml", "session", "--initial", "x.json"])
                .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("c.toml")));
        assert_eq!(
            args.command,
            Some(Command::Session {
                initial: Some(PathBuf::from("x.json")),
                download_dir: None,
            })
        );
    }

    #[test]
    fn session_download_dir() {
        let args =
            Args::try_parse_from(["jsonedit", "session", "--download-dir", "/tmp/out"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Session {
                initial: None,
                download_dir: Some(PathBuf::from("/tmp/out")),
            })
        );
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Args::try_parse_from(["jsonedit", "explode"]).is_err());
    }
}
