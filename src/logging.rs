//! Logging setup.
//!
//! `RUST_LOG` selects the filter (default `warn`). Output goes to a log
//! file when one is given, else to stderr. The full-screen UI owns the
//! terminal, so it gets no stderr logging.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Where log lines should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    Off,
}

impl<'a> LogTarget<'a> {
    /// Pick a target: an explicit file wins; otherwise stderr unless the
    /// terminal UI is about to take over the screen.
    pub fn choose(log_file: Option<&'a Path>, fullscreen: bool) -> Self {
        match (log_file, fullscreen) {
            (Some(path), _) => LogTarget::File(path),
            (None, false) => LogTarget::Stderr,
            (None, true) => LogTarget::Off,
        }
    }
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Call once, early in `main`.
pub fn init(target: LogTarget<'_>) -> Result<()> {
    match target {
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| Error::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogTarget::Off => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_file_always_wins() {
        let path = Path::new("/tmp/quiz.log");
        assert_eq!(LogTarget::choose(Some(path), true), LogTarget::File(path));
        assert_eq!(LogTarget::choose(Some(path), false), LogTarget::File(path));
    }

    #[test]
    fn fullscreen_without_file_is_silent() {
        assert_eq!(LogTarget::choose(None, true), LogTarget::Off);
        assert_eq!(LogTarget::choose(None, false), LogTarget::Stderr);
    }
}
