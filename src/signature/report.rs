//! The one place signature rendering fails.

use crate::core::ast::Span;
use crate::core::errors::{Location, SignatureError};
use crate::core::source::SourceFile;

pub const INVALID_NAME: &str = "Invalid node type";
pub const MULTI_PARAMETER_INDEX_SIGNATURE: &str =
    "Expected an index signature to have a single parameter";

/// Which structural assumption a node violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedName,
    MalformedIndexSignature,
}

/// Resolve the start of `span` to a 1-based position in `source`.
pub fn locate(source: &SourceFile, span: Span) -> Location {
    let (line, column) = source.line_col(span.start);
    Location {
        file: source.name().to_path_buf(),
        line,
        column,
    }
}

/// Build the error for a node at `span`, formatted as `file:line:column: message`.
pub fn report_error(source: &SourceFile, span: Span, kind: ErrorKind) -> SignatureError {
    let location = locate(source, span);
    match kind {
        ErrorKind::MalformedName => SignatureError::MalformedName {
            location,
            message: INVALID_NAME.to_string(),
        },
        ErrorKind::MalformedIndexSignature => SignatureError::MalformedIndexSignature {
            location,
            message: MULTI_PARAMETER_INDEX_SIGNATURE.to_string(),
        },
    }
}
