//! Type annotations from the CST

use super::Lowerer;
use crate::analyzers::typescript::parser::{named_children, node_span, node_text};
use crate::core::ast::{IndexSignature, Keyword, Parameter, Span, TypeMember, TypeNode};
use tree_sitter::Node as CstNode;

/// Wrappers whose single named child is the annotated type
const ANNOTATION_KINDS: &[&str] = &[
    "type_annotation",
    "opting_type_annotation",
    "omitting_type_annotation",
    "adding_type_annotation",
];

impl Lowerer<'_> {
    /// Lower an optional `: Type` slot.
    pub(super) fn type_annotation(&self, node: Option<CstNode>) -> Option<TypeNode> {
        let annotation = node?;
        if ANNOTATION_KINDS.contains(&annotation.kind()) {
            named_children(&annotation)
                .first()
                .map(|ty| self.type_node(ty))
        } else {
            Some(self.type_node(&annotation))
        }
    }

    pub(super) fn type_node(&self, node: &CstNode) -> TypeNode {
        let span = node_span(node);
        match node.kind() {
            "predefined_type" => {
                let text = node_text(node, self.source);
                match Keyword::from_text(text) {
                    Some(keyword) => TypeNode::Keyword(keyword, span),
                    None => TypeNode::Other {
                        kind: format!("{text}_keyword"),
                        span,
                    },
                }
            }
            "type_identifier" | "nested_type_identifier" => TypeNode::Reference {
                type_name: Box::new(self.entity_name(node)),
                type_arguments: None,
                span,
            },
            "generic_type" => TypeNode::Reference {
                type_name: Box::new(match node.child_by_field_name("name") {
                    Some(name) => self.entity_name(&name),
                    None => other("missing_name", span),
                }),
                type_arguments: node.child_by_field_name("type_arguments").map(|args| {
                    named_children(&args)
                        .iter()
                        .map(|arg| self.type_node(arg))
                        .collect()
                }),
                span,
            },
            "array_type" => match named_children(node).first() {
                Some(element) => TypeNode::Array {
                    element_type: Box::new(self.type_node(element)),
                    span,
                },
                None => other("array_type", span),
            },
            "union_type" => {
                let mut types = Vec::new();
                self.union_members(node, &mut types);
                TypeNode::Union { types, span }
            }
            "function_type" => TypeNode::Function { span },
            "object_type" => self.object_type(node),
            "type_parameter" => match node.child_by_field_name("name") {
                Some(name) => TypeNode::TypeParameter {
                    name: Box::new(self.entity_name(&name)),
                    span,
                },
                None => other("type_parameter", span),
            },
            "identifier" => self.entity_name(node),
            kind => other(kind, span),
        }
    }

    /// `A`, `A.B`, `A.B.C` in type-name position.
    fn entity_name(&self, node: &CstNode) -> TypeNode {
        let span = node_span(node);
        if !matches!(node.kind(), "nested_type_identifier" | "nested_identifier") {
            return TypeNode::identifier(node_text(node, self.source), span);
        }

        let parts = named_children(node);
        let left = node
            .child_by_field_name("module")
            .or_else(|| node.child_by_field_name("object"))
            .or_else(|| parts.first().copied());
        let right = node
            .child_by_field_name("name")
            .or_else(|| node.child_by_field_name("property"))
            .or_else(|| parts.last().copied());

        match (left, right) {
            (Some(left), Some(right)) if left.id() != right.id() => TypeNode::QualifiedName {
                left: Box::new(self.entity_name(&left)),
                right: Box::new(self.entity_name(&right)),
                span,
            },
            _ => TypeNode::identifier(node_text(node, self.source), span),
        }
    }

    /// `A | B | C` parses left-nested; flatten it into declared order.
    fn union_members(&self, node: &CstNode, out: &mut Vec<TypeNode>) {
        for child in named_children(node) {
            if child.kind() == "union_type" {
                self.union_members(&child, out);
            } else {
                out.push(self.type_node(&child));
            }
        }
    }

    fn object_type(&self, node: &CstNode) -> TypeNode {
        let span = node_span(node);
        let members = named_children(node);

        // `{ [K in T]: V }` is a mapped type, not a type literal
        if let [only] = members.as_slice() {
            if only.kind() == "index_signature"
                && named_children(only)
                    .iter()
                    .any(|child| child.kind() == "mapped_type_clause")
            {
                return other("mapped_type", span);
            }
        }

        TypeNode::TypeLiteral {
            members: members
                .iter()
                .map(|member| self.type_member(member))
                .collect(),
            span,
        }
    }

    fn type_member(&self, node: &CstNode) -> TypeMember {
        if node.kind() != "index_signature" {
            return TypeMember::Other {
                kind: node.kind().to_string(),
                span: node_span(node),
            };
        }

        let key_type = node.child_by_field_name("index_type");
        let parameters = match node.child_by_field_name("name") {
            Some(name) => vec![Parameter {
                name: self.name(Some(name), node),
                type_annotation: key_type.map(|ty| self.type_node(&ty)),
                span: Span::new(
                    name.start_byte(),
                    key_type.map_or(name.end_byte(), |ty| ty.end_byte()),
                ),
            }],
            None => Vec::new(),
        };

        TypeMember::IndexSignature(IndexSignature {
            parameters,
            type_annotation: self
                .type_annotation(node.child_by_field_name("type"))
                .map(Box::new),
            span: node_span(node),
        })
    }
}

fn other(kind: &str, span: Span) -> TypeNode {
    TypeNode::Other {
        kind: kind.to_string(),
        span,
    }
}
