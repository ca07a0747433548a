//! Tree-sitter parser integration for TypeScript
//!
//! Provides parsing using the tree-sitter grammars for TS/TSX.

use super::types::{TsVariant, TypeScriptAst};
use crate::core::ast::Span;
use crate::core::errors::{Error, Result};
use crate::core::source::SourceFile;
use std::path::Path;
use tree_sitter::{Language as TsLanguage, Node, Parser, Tree};

/// Get the tree-sitter language for a TS variant
fn get_language(variant: TsVariant) -> TsLanguage {
    match variant {
        TsVariant::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        TsVariant::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
    }
}

/// Parse TypeScript source code into a tree-sitter AST
pub fn parse_source(content: &str, path: &Path, variant: TsVariant) -> Result<TypeScriptAst> {
    let mut parser = Parser::new();
    let language = get_language(variant);

    parser.set_language(&language).map_err(|e| {
        Error::parse(path, 1, 1, format!("Failed to set tree-sitter language: {e}"))
    })?;

    let tree = parser
        .parse(content, None)
        .ok_or_else(|| Error::parse(path, 1, 1, "Failed to parse source code"))?;

    Ok(TypeScriptAst {
        tree,
        source: SourceFile::new(path, content),
        language_variant: variant,
    })
}

/// Determine language variant from file path
pub fn detect_variant(path: &Path) -> TsVariant {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(TsVariant::from_extension)
        .unwrap_or(TsVariant::TypeScript)
}

/// Check if a parse tree has errors
pub fn has_parse_errors(tree: &Tree) -> bool {
    tree.root_node().has_error()
}

/// First `ERROR` or missing node in document order, if any.
pub fn first_error_node(tree: &Tree) -> Option<Node<'_>> {
    fn search(node: Node<'_>) -> Option<Node<'_>> {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if !node.has_error() {
            return None;
        }
        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        children.into_iter().find_map(search)
    }
    search(tree.root_node())
}

/// Get text for a tree-sitter node
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    let start = node.start_byte();
    let end = node.end_byte();
    &source[start..end]
}

/// Byte span of a tree-sitter node
pub fn node_span(node: &Node) -> Span {
    Span::new(node.start_byte(), node.end_byte())
}

/// Get the line number for a tree-sitter node (1-indexed)
pub fn node_line(node: &Node) -> usize {
    node.start_position().row + 1
}

/// Named children, with comments dropped
pub fn named_children<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    let children = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect();
    children
}

/// All children including anonymous tokens
pub fn all_children<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    let children = node.children(&mut cursor).collect();
    children
}
