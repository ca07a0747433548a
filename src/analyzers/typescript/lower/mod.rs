//! Lowering from the tree-sitter CST to the signature syntax model
//!
//! Declarations are handled here; type annotations live in [`types`].

mod types;

use super::parser::{all_children, named_children, node_span, node_text};
use crate::core::ast::{
    ClassLikeDeclaration, EnumMember, FunctionLikeDeclaration, Modifiers, Name, Node, NodeFlags,
    Parameter, PropertyDeclaration, TypeNode, VariableDeclaration,
};
use tree_sitter::Node as CstNode;

/// CST kinds that lower to a plain identifier name
const IDENTIFIER_KINDS: &[&str] = &[
    "identifier",
    "property_identifier",
    "type_identifier",
    "shorthand_property_identifier",
];

/// Which body a member belongs to; the same CST kind means different things.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    Class,
    Interface,
    Enum,
}

/// Converts tree-sitter nodes of one source file into [`Node`]s.
#[derive(Debug, Clone, Copy)]
pub struct Lowerer<'a> {
    source: &'a str,
}

impl<'a> Lowerer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Lower one top-level declaration. Variable lists yield one node per declarator.
    pub fn declaration(&self, node: &CstNode) -> Vec<Node> {
        match node.kind() {
            "lexical_declaration" => {
                let flags = match node.child(0).map(|keyword| keyword.kind()) {
                    Some("const") => NodeFlags::CONST,
                    Some("let") => NodeFlags::LET,
                    _ => NodeFlags::empty(),
                };
                self.variable_list(node, flags)
            }
            "variable_declaration" => self.variable_list(node, NodeFlags::empty()),
            "class_declaration" | "abstract_class_declaration" => {
                vec![Node::Class(self.class_like(node, Container::Class))]
            }
            "interface_declaration" => {
                vec![Node::Interface(self.class_like(node, Container::Interface))]
            }
            "enum_declaration" => vec![Node::Enum(self.class_like(node, Container::Enum))],
            "function_declaration" | "function_signature" | "generator_function_declaration" => {
                vec![Node::Function(self.function_like(node))]
            }
            // declare ...
            "ambient_declaration" => named_children(node)
                .iter()
                .flat_map(|inner| self.declaration(inner))
                .collect(),
            kind => vec![other(kind, node)],
        }
    }

    fn variable_list(&self, node: &CstNode, list_flags: NodeFlags) -> Vec<Node> {
        named_children(node)
            .iter()
            .filter(|child| child.kind() == "variable_declarator")
            .map(|declarator| {
                Node::Variable(VariableDeclaration {
                    name: self.name(declarator.child_by_field_name("name"), declarator),
                    type_annotation: self.type_annotation(declarator.child_by_field_name("type")),
                    list_flags,
                    span: node_span(declarator),
                })
            })
            .collect()
    }

    fn class_like(&self, node: &CstNode, container: Container) -> ClassLikeDeclaration {
        let members = node
            .child_by_field_name("body")
            .map(|body| {
                named_children(&body)
                    .iter()
                    .map(|member| self.member(member, container))
                    .collect()
            })
            .unwrap_or_default();

        ClassLikeDeclaration {
            name: self.name(node.child_by_field_name("name"), node),
            type_parameters: node
                .child_by_field_name("type_parameters")
                .map(|params| self.type_parameters(&params)),
            members,
            modifiers: self.modifiers(node),
            span: node_span(node),
        }
    }

    fn member(&self, node: &CstNode, container: Container) -> Node {
        match (container, node.kind()) {
            (Container::Enum, "enum_assignment") => Node::EnumMember(EnumMember {
                name: self.name(node.child_by_field_name("name"), node),
                span: node_span(node),
            }),
            (Container::Enum, _) => Node::EnumMember(EnumMember {
                name: self.name(Some(*node), node),
                span: node_span(node),
            }),
            (
                Container::Class,
                "method_definition" | "method_signature" | "abstract_method_signature",
            ) => self.class_method(node),
            (Container::Class, "public_field_definition") => {
                Node::PropertyDeclaration(self.property(node))
            }
            (Container::Interface, "property_signature") => {
                Node::PropertySignature(self.property(node))
            }
            (Container::Interface, "method_signature") => {
                let decl = self.function_like(node);
                match accessor_keyword(node) {
                    Some("get") => Node::GetAccessor(decl),
                    Some("set") => Node::SetAccessor(decl),
                    _ => Node::MethodSignature(decl),
                }
            }
            (_, kind) => other(kind, node),
        }
    }

    fn class_method(&self, node: &CstNode) -> Node {
        match accessor_keyword(node) {
            Some("get") => Node::GetAccessor(self.function_like(node)),
            Some("set") => Node::SetAccessor(self.function_like(node)),
            _ if self.is_constructor(node) => other("constructor", node),
            _ => Node::MethodDeclaration(self.function_like(node)),
        }
    }

    fn is_constructor(&self, node: &CstNode) -> bool {
        node.child_by_field_name("name")
            .is_some_and(|name| node_text(&name, self.source) == "constructor")
    }

    fn function_like(&self, node: &CstNode) -> FunctionLikeDeclaration {
        FunctionLikeDeclaration {
            name: self.name(node.child_by_field_name("name"), node),
            type_parameters: node
                .child_by_field_name("type_parameters")
                .map(|params| self.type_parameters(&params)),
            parameters: self.parameters(node.child_by_field_name("parameters")),
            return_type: self.type_annotation(node.child_by_field_name("return_type")),
            modifiers: self.modifiers(node),
            span: node_span(node),
        }
    }

    fn property(&self, node: &CstNode) -> PropertyDeclaration {
        PropertyDeclaration {
            name: self.name(node.child_by_field_name("name"), node),
            type_annotation: self.type_annotation(node.child_by_field_name("type")),
            modifiers: self.modifiers(node),
            span: node_span(node),
        }
    }

    fn parameters(&self, node: Option<CstNode>) -> Vec<Parameter> {
        let Some(list) = node else {
            return Vec::new();
        };
        named_children(&list)
            .iter()
            .filter(|param| matches!(param.kind(), "required_parameter" | "optional_parameter"))
            .map(|param| Parameter {
                name: self.name(param.child_by_field_name("pattern"), param),
                type_annotation: self.type_annotation(param.child_by_field_name("type")),
                span: node_span(param),
            })
            .collect()
    }

    fn type_parameters(&self, node: &CstNode) -> Vec<TypeNode> {
        named_children(node)
            .iter()
            .filter(|param| param.kind() == "type_parameter")
            .map(|param| self.type_node(param))
            .collect()
    }

    /// Name held in `field`; a missing name is reported at its owner.
    fn name(&self, field: Option<CstNode>, owner: &CstNode) -> Name {
        match field {
            Some(name) if IDENTIFIER_KINDS.contains(&name.kind()) => {
                Name::identifier(node_text(&name, self.source), node_span(&name))
            }
            Some(name) => Name::Other {
                kind: name.kind().to_string(),
                span: node_span(&name),
            },
            None => Name::Other {
                kind: "missing_name".to_string(),
                span: node_span(owner),
            },
        }
    }

    fn modifiers(&self, node: &CstNode) -> Modifiers {
        let mut modifiers = Modifiers::empty();
        for child in all_children(node) {
            match child.kind() {
                "accessibility_modifier" => match node_text(&child, self.source) {
                    "private" => modifiers.insert(Modifiers::PRIVATE),
                    "protected" => modifiers.insert(Modifiers::PROTECTED),
                    _ => modifiers.insert(Modifiers::PUBLIC),
                },
                "static" => modifiers.insert(Modifiers::STATIC),
                "readonly" => modifiers.insert(Modifiers::READONLY),
                "abstract" => modifiers.insert(Modifiers::ABSTRACT),
                "async" => modifiers.insert(Modifiers::ASYNC),
                "declare" => modifiers.insert(Modifiers::DECLARE),
                "override_modifier" => modifiers.insert(Modifiers::OVERRIDE),
                _ => {}
            }
        }
        modifiers
    }
}

/// `get`/`set` keyword in front of a method name
fn accessor_keyword(node: &CstNode) -> Option<&'static str> {
    all_children(node)
        .iter()
        .find(|child| !child.is_named() && matches!(child.kind(), "get" | "set"))
        .map(|child| child.kind())
}

fn other(kind: &str, node: &CstNode) -> Node {
    Node::Other {
        kind: kind.to_string(),
        span: node_span(node),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::typescript::parser::parse_source;
    use crate::analyzers::typescript::types::TsVariant;
    use crate::core::ast::Keyword;
    use std::path::Path;

    fn lower_first(source: &str) -> Vec<Node> {
        let ast = parse_source(source, Path::new("test.ts"), TsVariant::TypeScript).unwrap();
        let root = ast.tree.root_node();
        let first = named_children(&root)[0];
        Lowerer::new(ast.source.as_str()).declaration(&first)
    }

    #[test]
    fn test_lower_const_list() {
        let nodes = lower_first("const a: string = 'x', b = 1;");
        assert_eq!(nodes.len(), 2);
        let Node::Variable(a) = &nodes[0] else {
            panic!("expected variable, got {:?}", nodes[0]);
        };
        assert_eq!(a.name.as_identifier(), Some("a"));
        assert!(a.list_flags.contains(NodeFlags::CONST));
        assert!(matches!(
            a.type_annotation,
            Some(TypeNode::Keyword(Keyword::String, _))
        ));
        let Node::Variable(b) = &nodes[1] else {
            panic!("expected variable");
        };
        assert!(b.type_annotation.is_none());
    }

    #[test]
    fn test_lower_var_has_no_const_flag() {
        let nodes = lower_first("var a;");
        let Node::Variable(a) = &nodes[0] else {
            panic!("expected variable");
        };
        assert!(!a.list_flags.contains(NodeFlags::CONST));
    }

    #[test]
    fn test_lower_class_members() {
        let nodes = lower_first(
            "class A<T> {\n  private x: T;\n  static y = 1;\n  constructor() {}\n  get v(): string { return ''; }\n  set v(value: string) {}\n  m(a: T): void {}\n}",
        );
        let Node::Class(class) = &nodes[0] else {
            panic!("expected class");
        };
        assert_eq!(class.name.as_identifier(), Some("A"));
        assert_eq!(class.type_parameters.as_ref().map(Vec::len), Some(1));

        let kinds: Vec<&str> = class.members.iter().map(Node::kind_name).collect();
        assert_eq!(
            kinds,
            vec![
                "property_declaration",
                "property_declaration",
                "constructor",
                "get_accessor",
                "set_accessor",
                "method_declaration",
            ]
        );

        let Node::PropertyDeclaration(x) = &class.members[0] else {
            panic!("expected property");
        };
        assert!(x.modifiers.contains(Modifiers::PRIVATE));
        let Node::PropertyDeclaration(y) = &class.members[1] else {
            panic!("expected property");
        };
        assert!(y.modifiers.contains(Modifiers::STATIC));
    }

    #[test]
    fn test_lower_method_named_get_is_a_method() {
        let nodes = lower_first("class A { get() {} }");
        let Node::Class(class) = &nodes[0] else {
            panic!("expected class");
        };
        assert_eq!(class.members[0].kind_name(), "method_declaration");
    }

    #[test]
    fn test_lower_interface_members() {
        let nodes = lower_first("interface I {\n  a: string;\n  b(x: number): void;\n  [k: string]: any;\n}");
        let Node::Interface(iface) = &nodes[0] else {
            panic!("expected interface");
        };
        let kinds: Vec<&str> = iface.members.iter().map(Node::kind_name).collect();
        assert_eq!(
            kinds,
            vec!["property_signature", "method_signature", "index_signature"]
        );
    }

    #[test]
    fn test_lower_enum_members() {
        let nodes = lower_first("enum E { Red = 1, Green }");
        let Node::Enum(decl) = &nodes[0] else {
            panic!("expected enum");
        };
        let names: Vec<Option<&str>> = decl
            .members
            .iter()
            .map(|member| member.name().and_then(Name::as_identifier))
            .collect();
        assert_eq!(names, vec![Some("Red"), Some("Green")]);
    }

    #[test]
    fn test_lower_computed_name_is_not_identifier() {
        let nodes = lower_first("class A { ['x']() {} }");
        let Node::Class(class) = &nodes[0] else {
            panic!("expected class");
        };
        let name = class.members[0].name().unwrap();
        assert!(matches!(name, Name::Other { kind, .. } if kind == "computed_property_name"));
    }

    #[test]
    fn test_lower_ambient_function() {
        let nodes = lower_first("declare function f(a: string): void;");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].kind_name(), "function_declaration");
    }

    #[test]
    fn test_lower_other_statement() {
        let nodes = lower_first("import x from 'y';");
        assert_eq!(nodes[0].kind_name(), "import_statement");
    }
}
