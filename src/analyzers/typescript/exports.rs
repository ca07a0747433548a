//! Export selection for TypeScript modules
//!
//! Picks the declarations a module exports, in document order.

use super::lower::Lowerer;
use super::parser::{named_children, node_line, node_text};
use super::types::TypeScriptAst;
use crate::core::ast::{Name, Node, Span};
use std::collections::HashSet;
use tree_sitter::Node as CstNode;

/// Exported top-level declarations of a parsed module
///
/// - `export <declaration>` contributes the declaration (every declarator of a
///   variable list).
/// - `export { a, b as c }` contributes the same-file declarations named `a`
///   and `b`, in clause order.
/// - `export ... from '...'` and `export *` need module resolution and are
///   skipped.
pub fn exported_declarations(ast: &TypeScriptAst) -> Vec<Node> {
    let source = ast.source.as_str();
    let lowerer = Lowerer::new(source);
    let root = ast.tree.root_node();
    let statements = named_children(&root);

    let mut emitted: HashSet<Span> = HashSet::new();
    let mut exported = Vec::new();
    let mut push = |node: Node, exported: &mut Vec<Node>| {
        if emitted.insert(node.span()) {
            exported.push(node);
        }
    };

    for statement in statements.iter().filter(|s| s.kind() == "export_statement") {
        if let Some(module) = statement.child_by_field_name("source") {
            log::debug!(
                "{}:{}: skipping re-export from {}",
                ast.source.name().display(),
                node_line(statement),
                node_text(&module, source)
            );
            continue;
        }

        if let Some(declaration) = statement.child_by_field_name("declaration") {
            for node in lowerer.declaration(&declaration) {
                push(node, &mut exported);
            }
            continue;
        }

        for local in export_clause_names(statement, source) {
            let matches = local_declarations(&statements, &lowerer, local);
            if matches.is_empty() {
                log::debug!(
                    "{}: no local declaration for exported name {local}",
                    ast.source.name().display()
                );
            }
            for node in matches {
                push(node, &mut exported);
            }
        }
    }

    exported
}

/// Local names listed in `export { ... }`
fn export_clause_names<'s>(statement: &CstNode, source: &'s str) -> Vec<&'s str> {
    named_children(statement)
        .iter()
        .filter(|child| child.kind() == "export_clause")
        .flat_map(|clause| named_children(clause))
        .filter(|specifier| specifier.kind() == "export_specifier")
        .filter_map(|specifier| specifier.child_by_field_name("name"))
        .map(|name| node_text(&name, source))
        .collect()
}

/// Top-level declarations (exported or not) whose name is `local`
fn local_declarations(statements: &[CstNode], lowerer: &Lowerer, local: &str) -> Vec<Node> {
    statements
        .iter()
        .filter_map(|statement| {
            if statement.kind() == "export_statement" {
                statement.child_by_field_name("declaration")
            } else {
                Some(*statement)
            }
        })
        .flat_map(|declaration| lowerer.declaration(&declaration))
        .filter(|node| node.name().and_then(Name::as_identifier) == Some(local))
        .collect()
}
