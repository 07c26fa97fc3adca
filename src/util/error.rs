// logwindow - util/error.rs
//
// Typed errors with context-preserving error chains.
// No string-based error propagation; sources are kept for diagnostics.

use std::fmt;
use std::io;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Sink errors
// ---------------------------------------------------------------------------

/// Errors raised on the sink's append path.
///
/// There is exactly one failure mode: the GUI-side receiver of the row
/// channel has been dropped while the view is still registered with the
/// logger. The record carrying `record_number` is lost; the view marks
/// itself disconnected so the logger prunes it on the next dispatch.
#[derive(Debug)]
pub enum SinkError {
    /// The row channel lost its receiver.
    ViewDisconnected { record_number: u64 },
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ViewDisconnected { record_number } => write!(
                f,
                "Log view disconnected; record #{record_number} was dropped"
            ),
        }
    }
}

impl std::error::Error for SinkError {}
