//! Syntax model consumed by the signature visitors.
//!
//! The tree is produced by a front-end (see `analyzers::typescript`) and is
//! read-only afterwards. Declarations and type annotations are two closed sum
//! types; each keeps an `Other` arm so shapes the front-end does not model
//! still have a place in the tree.

use std::ops::BitOr;

/// Byte range of a node in its source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Modifier keywords attached to a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(u16);

impl Modifiers {
    pub const PUBLIC: Modifiers = Modifiers(1 << 0);
    pub const PRIVATE: Modifiers = Modifiers(1 << 1);
    pub const PROTECTED: Modifiers = Modifiers(1 << 2);
    pub const STATIC: Modifiers = Modifiers(1 << 3);
    pub const READONLY: Modifiers = Modifiers(1 << 4);
    pub const ABSTRACT: Modifiers = Modifiers(1 << 5);
    pub const ASYNC: Modifiers = Modifiers(1 << 6);
    pub const DECLARE: Modifiers = Modifiers(1 << 7);
    pub const OVERRIDE: Modifiers = Modifiers(1 << 8);

    pub const fn empty() -> Self {
        Modifiers(0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every bit of `other` is set.
    pub const fn contains(self, other: Modifiers) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Modifiers) {
        self.0 |= other.0;
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

/// Flags carried by a variable declaration list (`const`/`let`/`var`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NodeFlags(u8);

impl NodeFlags {
    pub const CONST: NodeFlags = NodeFlags(1 << 0);
    pub const LET: NodeFlags = NodeFlags(1 << 1);

    pub const fn empty() -> Self {
        NodeFlags(0)
    }

    pub const fn contains(self, other: NodeFlags) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }
}

impl BitOr for NodeFlags {
    type Output = NodeFlags;

    fn bitor(self, rhs: Self) -> Self::Output {
        NodeFlags(self.0 | rhs.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub text: String,
    pub span: Span,
}

impl Identifier {
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}

/// The name slot of a declaration.
///
/// Only plain identifiers can be rendered; computed names, string and numeric
/// literals, `#private` names and destructuring patterns land in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Name {
    Identifier(Identifier),
    Other { kind: String, span: Span },
}

impl Name {
    pub fn identifier(text: impl Into<String>, span: Span) -> Self {
        Name::Identifier(Identifier::new(text, span))
    }

    pub fn span(&self) -> Span {
        match self {
            Name::Identifier(ident) => ident.span,
            Name::Other { span, .. } => *span,
        }
    }

    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Name::Identifier(ident) => Some(&ident.text),
            Name::Other { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: Name,
    pub type_annotation: Option<TypeNode>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub name: Name,
    pub type_annotation: Option<TypeNode>,
    /// Flags of the enclosing declaration list.
    pub list_flags: NodeFlags,
    pub span: Span,
}

/// Shared shape of class, interface and enum declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassLikeDeclaration {
    pub name: Name,
    pub type_parameters: Option<Vec<TypeNode>>,
    pub members: Vec<Node>,
    pub modifiers: Modifiers,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    pub name: Name,
    pub span: Span,
}

/// Methods, method signatures, accessors and function declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLikeDeclaration {
    pub name: Name,
    pub type_parameters: Option<Vec<TypeNode>>,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<TypeNode>,
    pub modifiers: Modifiers,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDeclaration {
    pub name: Name,
    pub type_annotation: Option<TypeNode>,
    pub modifiers: Modifiers,
    pub span: Span,
}

/// A declaration node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Variable(VariableDeclaration),
    Class(ClassLikeDeclaration),
    Interface(ClassLikeDeclaration),
    Enum(ClassLikeDeclaration),
    EnumMember(EnumMember),
    MethodDeclaration(FunctionLikeDeclaration),
    MethodSignature(FunctionLikeDeclaration),
    PropertyDeclaration(PropertyDeclaration),
    PropertySignature(PropertyDeclaration),
    GetAccessor(FunctionLikeDeclaration),
    SetAccessor(FunctionLikeDeclaration),
    Function(FunctionLikeDeclaration),
    /// Statements, imports, constructors and anything else without a signature.
    Other { kind: String, span: Span },
}

impl Node {
    pub fn span(&self) -> Span {
        match self {
            Node::Variable(decl) => decl.span,
            Node::Class(decl) | Node::Interface(decl) | Node::Enum(decl) => decl.span,
            Node::EnumMember(member) => member.span,
            Node::MethodDeclaration(decl)
            | Node::MethodSignature(decl)
            | Node::GetAccessor(decl)
            | Node::SetAccessor(decl)
            | Node::Function(decl) => decl.span,
            Node::PropertyDeclaration(decl) | Node::PropertySignature(decl) => decl.span,
            Node::Other { span, .. } => *span,
        }
    }

    /// The declared name, for nodes that have one.
    pub fn name(&self) -> Option<&Name> {
        match self {
            Node::Variable(decl) => Some(&decl.name),
            Node::Class(decl) | Node::Interface(decl) | Node::Enum(decl) => Some(&decl.name),
            Node::EnumMember(member) => Some(&member.name),
            Node::MethodDeclaration(decl)
            | Node::MethodSignature(decl)
            | Node::GetAccessor(decl)
            | Node::SetAccessor(decl)
            | Node::Function(decl) => Some(&decl.name),
            Node::PropertyDeclaration(decl) | Node::PropertySignature(decl) => Some(&decl.name),
            Node::Other { .. } => None,
        }
    }

    pub fn kind_name(&self) -> &str {
        match self {
            Node::Variable(_) => "variable_declaration",
            Node::Class(_) => "class_declaration",
            Node::Interface(_) => "interface_declaration",
            Node::Enum(_) => "enum_declaration",
            Node::EnumMember(_) => "enum_member",
            Node::MethodDeclaration(_) => "method_declaration",
            Node::MethodSignature(_) => "method_signature",
            Node::PropertyDeclaration(_) => "property_declaration",
            Node::PropertySignature(_) => "property_signature",
            Node::GetAccessor(_) => "get_accessor",
            Node::SetAccessor(_) => "set_accessor",
            Node::Function(_) => "function_declaration",
            Node::Other { kind, .. } => kind,
        }
    }
}

/// Primitive keyword types with a fixed rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Number,
    String,
    Void,
    Boolean,
    Any,
}

impl Keyword {
    pub fn from_text(text: &str) -> Option<Self> {
        match text {
            "number" => Some(Keyword::Number),
            "string" => Some(Keyword::String),
            "void" => Some(Keyword::Void),
            "boolean" => Some(Keyword::Boolean),
            "any" => Some(Keyword::Any),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Number => "number",
            Keyword::String => "string",
            Keyword::Void => "void",
            Keyword::Boolean => "boolean",
            Keyword::Any => "any",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexSignature {
    pub parameters: Vec<Parameter>,
    pub type_annotation: Option<Box<TypeNode>>,
    pub span: Span,
}

/// A member of a type literal (`{ ... }` in type position).
#[derive(Debug, Clone, PartialEq)]
pub enum TypeMember {
    IndexSignature(IndexSignature),
    Other { kind: String, span: Span },
}

/// A type-annotation node.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeNode {
    TypeLiteral {
        members: Vec<TypeMember>,
        span: Span,
    },
    Union {
        types: Vec<TypeNode>,
        span: Span,
    },
    Reference {
        /// `Identifier` or `QualifiedName`.
        type_name: Box<TypeNode>,
        type_arguments: Option<Vec<TypeNode>>,
        span: Span,
    },
    TypeParameter {
        name: Box<TypeNode>,
        span: Span,
    },
    Array {
        element_type: Box<TypeNode>,
        span: Span,
    },
    /// Rendered from its source text.
    Function {
        span: Span,
    },
    QualifiedName {
        left: Box<TypeNode>,
        right: Box<TypeNode>,
        span: Span,
    },
    Identifier(Identifier),
    Keyword(Keyword, Span),
    Other {
        kind: String,
        span: Span,
    },
}

impl TypeNode {
    pub fn identifier(text: impl Into<String>, span: Span) -> Self {
        TypeNode::Identifier(Identifier::new(text, span))
    }

    /// A reference to a named type without type arguments.
    pub fn reference(text: impl Into<String>, span: Span) -> Self {
        TypeNode::Reference {
            type_name: Box::new(TypeNode::identifier(text, span)),
            type_arguments: None,
            span,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            TypeNode::TypeLiteral { span, .. }
            | TypeNode::Union { span, .. }
            | TypeNode::Reference { span, .. }
            | TypeNode::TypeParameter { span, .. }
            | TypeNode::Array { span, .. }
            | TypeNode::Function { span }
            | TypeNode::QualifiedName { span, .. }
            | TypeNode::Keyword(_, span)
            | TypeNode::Other { span, .. } => *span,
            TypeNode::Identifier(ident) => ident.span,
        }
    }
}
