//! Source files and position lookup.

use super::ast::Span;
use std::path::{Path, PathBuf};

/// A source unit: its file name, text and a line-start table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    name: PathBuf,
    text: String,
    line_starts: Vec<usize>,
}

impl SourceFile {
    pub fn new(name: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let text = text.into();
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(idx, _)| idx + 1))
            .collect();

        Self {
            name: name.into(),
            text,
            line_starts,
        }
    }

    pub fn name(&self) -> &Path {
        &self.name
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Text covered by `span`, or an empty string when the span is out of range.
    pub fn text(&self, span: Span) -> &str {
        self.text.get(span.start..span.end).unwrap_or_default()
    }

    /// 1-based (line, column) of a byte offset. Columns count UTF-16 code units.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.text.len());
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts[line];
        let column = self
            .text
            .get(line_start..offset)
            .map_or(offset - line_start, |prefix| prefix.encode_utf16().count());

        (line + 1, column + 1)
    }
}
