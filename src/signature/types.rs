//! Canonical strings for type annotations.

use super::report::{report_error, ErrorKind};
use super::MapNodes;
use crate::core::ast::{IndexSignature, TypeMember, TypeNode};
use crate::core::errors::SignatureError;
use crate::core::source::SourceFile;

/// Rendering used wherever a type is required but none was written.
pub const IMPLICIT_ANY: &str = "any";

const DYNAMIC: &str = "dynamic";
const UNKNOWN: &str = "unknown";

/// Renders type-annotation nodes.
///
/// Unrecognized shapes degrade to `"unknown"` (or `"dynamic"` for object
/// types); only an index signature with several parameters is an error.
#[derive(Debug, Clone, Copy)]
pub struct TypeRenderer<'a> {
    source: &'a SourceFile,
}

impl<'a> TypeRenderer<'a> {
    pub fn new(source: &'a SourceFile) -> Self {
        Self { source }
    }

    /// Render an optional annotation. `None` in, `None` out.
    pub fn render(&self, node: Option<&TypeNode>) -> Result<Option<String>, SignatureError> {
        node.map(|n| self.map_node(n)).transpose()
    }

    /// Render an annotation, falling back to `any` when it is absent or empty.
    pub fn render_or_any(&self, node: Option<&TypeNode>) -> Result<String, SignatureError> {
        Ok(self
            .render(node)?
            .filter(|rendered| !rendered.is_empty())
            .unwrap_or_else(|| IMPLICIT_ANY.to_string()))
    }

    /// Render a list of nodes joined by `separator`; `None` when the list is absent.
    pub fn render_list(
        &self,
        nodes: Option<&[TypeNode]>,
        separator: &str,
    ) -> Result<Option<String>, SignatureError> {
        match nodes {
            Some(nodes) => Ok(Some(self.map_nodes(Some(nodes))?.join(separator))),
            None => Ok(None),
        }
    }

    fn type_literal(&self, members: &[TypeMember]) -> Result<String, SignatureError> {
        match members {
            [TypeMember::IndexSignature(signature)] => self.index_signature(signature),
            _ => Ok(DYNAMIC.to_string()),
        }
    }

    /// `{[key: K]: V}` renders as `Map<K,V>`.
    fn index_signature(&self, signature: &IndexSignature) -> Result<String, SignatureError> {
        if signature.parameters.len() > 1 {
            return Err(report_error(
                self.source,
                signature.span,
                ErrorKind::MalformedIndexSignature,
            ));
        }
        let Some(key) = signature.parameters.first() else {
            return Ok(DYNAMIC.to_string());
        };

        let key_type = self.render_or_any(key.type_annotation.as_ref())?;
        let value_type = self.render_or_any(signature.type_annotation.as_deref())?;
        Ok(format!("Map<{key_type},{value_type}>"))
    }

    fn function_text(&self, node: &TypeNode) -> String {
        collapse_line_breaks(self.source.text(node.span()))
    }
}

impl MapNodes for TypeRenderer<'_> {
    type Node = TypeNode;
    type Output = String;

    fn map_node(&self, node: &TypeNode) -> Result<String, SignatureError> {
        match node {
            TypeNode::TypeLiteral { members, .. } => self.type_literal(members),
            TypeNode::Union { types, .. } => Ok(self.map_nodes(Some(types.as_slice()))?.join("|")),
            TypeNode::Reference {
                type_name,
                type_arguments,
                ..
            } => {
                let name = self.map_node(type_name)?;
                match self.render_list(type_arguments.as_deref(), ", ")? {
                    Some(arguments) if !arguments.is_empty() => Ok(format!("{name}<{arguments}>")),
                    _ => Ok(name),
                }
            }
            TypeNode::TypeParameter { name, .. } => self.map_node(name),
            TypeNode::Array { element_type, .. } => {
                Ok(format!("{}[]", self.map_node(element_type)?))
            }
            TypeNode::Function { .. } => Ok(self.function_text(node)),
            TypeNode::QualifiedName { right, .. } => self.map_node(right),
            TypeNode::Identifier(ident) => Ok(ident.text.clone()),
            TypeNode::Keyword(keyword, _) => Ok(keyword.as_str().to_string()),
            TypeNode::Other { .. } => Ok(UNKNOWN.to_string()),
        }
    }
}

/// Signature lines never span lines: whitespace runs containing a line break
/// become one space.
fn collapse_line_breaks(text: &str) -> String {
    if !text.contains(['\n', '\r']) {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut pending = String::new();
    for ch in text.chars() {
        if ch.is_whitespace() {
            pending.push(ch);
            continue;
        }
        if !pending.is_empty() {
            if pending.contains(['\n', '\r']) {
                out.push(' ');
            } else {
                out.push_str(&pending);
            }
            pending.clear();
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ast::{Keyword, Name, Parameter, Span};

    fn sp() -> Span {
        Span::default()
    }

    fn source() -> SourceFile {
        SourceFile::new("types.ts", "")
    }

    fn keyword(keyword: Keyword) -> TypeNode {
        TypeNode::Keyword(keyword, sp())
    }

    fn generic(name: &str, arguments: Vec<TypeNode>) -> TypeNode {
        TypeNode::Reference {
            type_name: Box::new(TypeNode::identifier(name, sp())),
            type_arguments: Some(arguments),
            span: sp(),
        }
    }

    fn index_literal(parameters: Vec<Parameter>, value: TypeNode, span: Span) -> TypeNode {
        TypeNode::TypeLiteral {
            members: vec![TypeMember::IndexSignature(IndexSignature {
                parameters,
                type_annotation: Some(Box::new(value)),
                span,
            })],
            span: sp(),
        }
    }

    fn key(name: &str, ty: TypeNode) -> Parameter {
        Parameter {
            name: Name::identifier(name, sp()),
            type_annotation: Some(ty),
            span: sp(),
        }
    }

    #[test]
    fn test_keywords() {
        let source = source();
        let renderer = TypeRenderer::new(&source);
        for (kw, expected) in [
            (Keyword::Number, "number"),
            (Keyword::String, "string"),
            (Keyword::Void, "void"),
            (Keyword::Boolean, "boolean"),
            (Keyword::Any, "any"),
        ] {
            assert_eq!(renderer.map_node(&keyword(kw)).unwrap(), expected);
        }
    }

    #[test]
    fn test_reference_without_arguments_is_bare_name() {
        let source = source();
        let renderer = TypeRenderer::new(&source);
        assert_eq!(
            renderer.map_node(&TypeNode::reference("Foo", sp())).unwrap(),
            "Foo"
        );
        assert_eq!(renderer.map_node(&generic("Foo", vec![])).unwrap(), "Foo");
    }

    #[test]
    fn test_nested_generic_spacing() {
        let source = source();
        let renderer = TypeRenderer::new(&source);
        let inner = generic("Map", vec![keyword(Keyword::String), keyword(Keyword::Number)]);
        let outer = generic("Map", vec![inner, keyword(Keyword::Number)]);

        assert_eq!(
            renderer.map_node(&outer).unwrap(),
            "Map<Map<string, number>, number>"
        );
    }

    #[test]
    fn test_nested_arrays() {
        let source = source();
        let renderer = TypeRenderer::new(&source);
        let node = TypeNode::Array {
            element_type: Box::new(TypeNode::Array {
                element_type: Box::new(keyword(Keyword::String)),
                span: sp(),
            }),
            span: sp(),
        };
        assert_eq!(renderer.map_node(&node).unwrap(), "string[][]");
    }

    #[test]
    fn test_union_keeps_order_and_duplicates() {
        let source = source();
        let renderer = TypeRenderer::new(&source);
        let node = TypeNode::Union {
            types: vec![
                keyword(Keyword::String),
                keyword(Keyword::Number),
                keyword(Keyword::String),
            ],
            span: sp(),
        };
        assert_eq!(renderer.map_node(&node).unwrap(), "string|number|string");
    }

    #[test]
    fn test_qualified_name_keeps_rightmost_segment() {
        let source = source();
        let renderer = TypeRenderer::new(&source);
        let node = TypeNode::Reference {
            type_name: Box::new(TypeNode::QualifiedName {
                left: Box::new(TypeNode::identifier("ns", sp())),
                right: Box::new(TypeNode::identifier("Inner", sp())),
                span: sp(),
            }),
            type_arguments: None,
            span: sp(),
        };
        assert_eq!(renderer.map_node(&node).unwrap(), "Inner");
    }

    #[test]
    fn test_type_parameter_renders_its_name() {
        let source = source();
        let renderer = TypeRenderer::new(&source);
        let node = TypeNode::TypeParameter {
            name: Box::new(TypeNode::identifier("T", sp())),
            span: sp(),
        };
        assert_eq!(renderer.map_node(&node).unwrap(), "T");
    }

    #[test]
    fn test_function_type_uses_source_text() {
        let source = SourceFile::new("f.ts", "var f: (a: string) => void;");
        let renderer = TypeRenderer::new(&source);
        let node = TypeNode::Function {
            span: Span::new(7, 26),
        };
        assert_eq!(renderer.map_node(&node).unwrap(), "(a: string) => void");
    }

    #[test]
    fn test_function_type_spanning_lines_is_one_line() {
        let source = SourceFile::new("f.ts", "var f: (\n    a: string\n) => void;");
        let renderer = TypeRenderer::new(&source);
        let end = source.as_str().len() - 1;
        let node = TypeNode::Function {
            span: Span::new(7, end),
        };
        assert_eq!(renderer.map_node(&node).unwrap(), "( a: string ) => void");
    }

    #[test]
    fn test_index_signature_renders_as_map() {
        let source = source();
        let renderer = TypeRenderer::new(&source);
        let node = index_literal(
            vec![key("key", keyword(Keyword::String))],
            keyword(Keyword::Number),
            sp(),
        );
        assert_eq!(renderer.map_node(&node).unwrap(), "Map<string,number>");
    }

    #[test]
    fn test_index_signature_with_two_parameters_reports_its_own_position() {
        let source = SourceFile::new("idx.ts", "export var a: {\n  [a: string, b: string]: number\n};");
        let renderer = TypeRenderer::new(&source);
        let start = source.as_str().find('[').unwrap();
        let node = index_literal(
            vec![
                key("a", keyword(Keyword::String)),
                key("b", keyword(Keyword::String)),
            ],
            keyword(Keyword::Number),
            Span::new(start, start + 30),
        );

        let err = renderer.map_node(&node).unwrap_err();
        assert!(matches!(err, SignatureError::MalformedIndexSignature { .. }));
        assert_eq!(
            err.to_string(),
            "idx.ts:2:3: Expected an index signature to have a single parameter"
        );
    }

    #[test]
    fn test_other_type_literals_are_dynamic() {
        let source = source();
        let renderer = TypeRenderer::new(&source);
        let empty = TypeNode::TypeLiteral {
            members: vec![],
            span: sp(),
        };
        let property = TypeNode::TypeLiteral {
            members: vec![TypeMember::Other {
                kind: "property_signature".to_string(),
                span: sp(),
            }],
            span: sp(),
        };
        assert_eq!(renderer.map_node(&empty).unwrap(), "dynamic");
        assert_eq!(renderer.map_node(&property).unwrap(), "dynamic");
    }

    #[test]
    fn test_unrecognized_type_is_unknown() {
        let source = source();
        let renderer = TypeRenderer::new(&source);
        let node = TypeNode::Other {
            kind: "tuple_type".to_string(),
            span: sp(),
        };
        assert_eq!(renderer.map_node(&node).unwrap(), "unknown");
    }

    #[test]
    fn test_absent_annotation_renders_none_not_any() {
        let source = source();
        let renderer = TypeRenderer::new(&source);
        assert_eq!(renderer.render(None).unwrap(), None);
        assert_eq!(renderer.render_or_any(None).unwrap(), "any");
        assert_eq!(renderer.render_list(None, ",").unwrap(), None);
    }
}
