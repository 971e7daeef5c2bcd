use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during parsing
#[derive(Error, Debug)]
pub enum PcfError {
    /// Failed to read file
    #[error("IO error reading {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    /// File too large
    #[error("File {0} exceeds maximum size ({1} bytes)")]
    FileTooLarge(PathBuf, usize),

    /// Line did not reduce to exactly `<command> <arg> <arg>`
    #[error("Malformed constraint at line {0}: {1:?}")]
    MalformedLine(usize, String),

    /// Unrecognized command, reported only in strict mode
    #[error("Unknown command {1:?} at line {0}")]
    UnknownCommand(usize, String),
}

/// Result type for parser operations
pub type PcfResult<T> = Result<T, PcfError>;
