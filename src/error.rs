//! Error types shared across the emulator and all commands.
//!
//! Display strings are part of the observable contract — callers match
//! against them — so each variant renders the acting command's
//! conventional prefix (e.g. `cat: /x: No such file or directory`).
//! [`Error::kind`] collapses the variants into the coarse [`ErrorKind`]
//! buckets callers dispatch on.

use thiserror::Error;

/// Failure raised by the emulator or by a command implementation.
#[derive(Debug, Error)]
pub enum Error {
    /// The command line was empty (or whitespace-only) after trimming.
    #[error("No command provided")]
    EmptyCommand,

    /// No implementation found in any command set.
    #[error("bash: {name}: command not found")]
    CommandNotFound { name: String },

    /// A required positional argument was missing.
    #[error("{command}: missing operand ({operand} required)")]
    MissingOperand {
        command: &'static str,
        operand: &'static str,
    },

    /// A relative path was supplied where only absolute paths are accepted.
    #[error("{command}: only absolute paths are supported")]
    RelativePath { command: &'static str },

    /// The emulator itself was constructed with a relative root.
    #[error("root directory must be an absolute path: {path}")]
    RelativeRoot { path: String },

    /// The resolved path escapes the root directory.
    #[error("{command}: {path}: Permission denied (outside root directory)")]
    OutsideRoot {
        command: &'static str,
        path: String,
    },

    /// The path passed containment but does not exist.
    #[error("{command}: {path}: No such file or directory")]
    NoSuchPath {
        command: &'static str,
        path: String,
    },

    /// A file was required but the path names a directory.
    #[error("{command}: {path}: Is a directory")]
    IsADirectory {
        command: &'static str,
        path: String,
    },

    /// A directory was required but the path names a file.
    #[error("{command}: {path}: Not a directory")]
    NotADirectory {
        command: &'static str,
        path: String,
    },

    /// Unexpected I/O failure after all preconditions passed.
    #[error("{command}: {path}: {source}")]
    Io {
        command: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification of an [`Error`], independent of message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyCommand,
    CommandNotFound,
    InvalidArgument,
    PermissionDenied,
    NotFound,
    WrongType,
    ExecutionFailed,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyCommand => ErrorKind::EmptyCommand,
            Error::CommandNotFound { .. } => ErrorKind::CommandNotFound,
            Error::MissingOperand { .. }
            | Error::RelativePath { .. }
            | Error::RelativeRoot { .. } => ErrorKind::InvalidArgument,
            Error::OutsideRoot { .. } => ErrorKind::PermissionDenied,
            Error::NoSuchPath { .. } => ErrorKind::NotFound,
            Error::IsADirectory { .. } | Error::NotADirectory { .. } => ErrorKind::WrongType,
            Error::Io { .. } => ErrorKind::ExecutionFailed,
        }
    }
}
