//! Shared error types for the application

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A 1-based position in a named source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub file: PathBuf,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}

/// Fatal errors raised while rendering signatures.
///
/// Both variants abort the current traversal; no partial output is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// A declaration whose name is not a plain identifier
    #[error("{location}: {message}")]
    MalformedName { location: Location, message: String },

    /// A type literal whose index signature has more than one parameter
    #[error("{location}: {message}")]
    MalformedIndexSignature { location: Location, message: String },
}

impl SignatureError {
    pub fn location(&self) -> &Location {
        match self {
            SignatureError::MalformedName { location, .. }
            | SignatureError::MalformedIndexSignature { location, .. } => location,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            SignatureError::MalformedName { message, .. }
            | SignatureError::MalformedIndexSignature { message, .. } => message,
        }
    }
}

/// Main error type for apisig operations
#[derive(Debug, Error)]
pub enum Error {
    /// Signature rendering errors
    #[error(transparent)]
    Signature(#[from] SignatureError),

    /// Parsing errors
    #[error("Parse error in {file}:{line}:{column}: {message}")]
    Parse {
        file: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// File system related errors
    #[error("{message} {}: {source}", .path.display())]
    FileSystem {
        message: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a parse error with location
    pub fn parse(
        file: impl Into<PathBuf>,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::Parse {
            file: file.into(),
            line,
            column,
            message: message.into(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
