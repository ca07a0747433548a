//! TypeScript front-end types
//!
//! Core data structures shared by the parser, lowering and export selection.

use crate::core::source::SourceFile;

/// TypeScript dialect, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsVariant {
    /// `.ts`, `.mts`, `.cts`, `.d.ts`
    TypeScript,
    /// `.tsx`
    Tsx,
}

impl TsVariant {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "ts" | "mts" | "cts" => Some(TsVariant::TypeScript),
            "tsx" => Some(TsVariant::Tsx),
            _ => None,
        }
    }
}

/// A parsed TypeScript file: the concrete syntax tree plus its source.
#[derive(Clone, Debug)]
pub struct TypeScriptAst {
    pub tree: tree_sitter::Tree,
    pub source: SourceFile,
    pub language_variant: TsVariant,
}
