//! Error types for system construction and config loading.
//!
//! Resolution itself never fails: unknown properties and unknown values pass
//! through. Every variant here is a configuration defect reported once, when
//! the system is built or its config is loaded.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error returned when a configuration cannot be turned into a system.
#[derive(Debug, Error)]
pub enum SystemError {
    /// Token references form a cycle.
    #[error("cycle detected in token references: {}", .path.join(" -> "))]
    TokenCycle {
        /// The reference chain, starting and ending with the same token.
        path: Vec<String>,
    },

    /// A token definition has an unsupported shape.
    #[error("invalid token '{name}': {message}")]
    InvalidToken { name: String, message: String },

    /// Breakpoints are unordered, mix units, or cannot be parsed.
    #[error("invalid breakpoints: {message}")]
    InvalidBreakpoints { message: String },

    /// Any other structural problem in the configuration.
    #[error("invalid configuration: {message}")]
    Config { message: String },

    /// YAML or JSON parse failure.
    #[error("failed to parse config{}: {message}", location(.path.as_deref()))]
    Parse {
        /// Source file, when loaded from disk.
        path: Option<PathBuf>,
        /// Message from the underlying parser.
        message: String,
    },

    /// The config file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn location(path: Option<&Path>) -> String {
    path.map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SystemError>;
