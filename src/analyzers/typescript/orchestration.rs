//! Extraction orchestration
//!
//! Top-level functions running one parsed TypeScript file through export
//! selection and the signature visitors.

use super::exports::exported_declarations;
use super::parser::{first_error_node, has_parse_errors};
use super::types::TypeScriptAst;
use crate::core::errors::{Error, Result};
use crate::signature::{MapNodes, Signature, SignatureVisitor};

/// Options for one extraction run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Reject files containing syntax errors instead of warning
    pub strict_parse: bool,
}

/// Structured signatures of every exported declaration, in document order
pub fn extract_signatures(ast: &TypeScriptAst, options: &ExtractOptions) -> Result<Vec<Signature>> {
    check_parse_errors(ast, options)?;

    let declarations = exported_declarations(ast);
    log::debug!(
        "{}: {} exported declarations",
        ast.source.name().display(),
        declarations.len()
    );

    let visitor = SignatureVisitor::new(&ast.source);
    let mut signatures = Vec::new();
    for declaration in &declarations {
        signatures.extend(visitor.signatures(declaration)?);
    }
    Ok(signatures)
}

/// Public API lines of a parsed file
pub fn public_api(ast: &TypeScriptAst, options: &ExtractOptions) -> Result<Vec<String>> {
    check_parse_errors(ast, options)?;

    let declarations = exported_declarations(ast);
    let visitor = SignatureVisitor::new(&ast.source);
    let grouped = visitor.map_nodes(Some(declarations.as_slice()))?;
    Ok(grouped.into_iter().flatten().collect())
}

fn check_parse_errors(ast: &TypeScriptAst, options: &ExtractOptions) -> Result<()> {
    if !has_parse_errors(&ast.tree) {
        return Ok(());
    }

    let (line, column) = first_error_node(&ast.tree)
        .map(|node| ast.source.line_col(node.start_byte()))
        .unwrap_or((1, 1));

    if options.strict_parse {
        return Err(Error::parse(
            ast.source.name(),
            line,
            column,
            "syntax error",
        ));
    }

    log::warn!(
        "{}:{}:{}: syntax error, signatures may be incomplete",
        ast.source.name().display(),
        line,
        column
    );
    Ok(())
}
