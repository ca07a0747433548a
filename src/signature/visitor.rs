//! Declaration nodes to signature lines.

use super::report::{report_error, ErrorKind};
use super::types::TypeRenderer;
use super::{MapNodes, Signature, SignatureKind};
use crate::core::ast::{
    ClassLikeDeclaration, FunctionLikeDeclaration, Modifiers, Name, Node, NodeFlags,
    PropertyDeclaration, Span, VariableDeclaration,
};
use crate::core::errors::SignatureError;
use crate::core::source::SourceFile;

/// Renders declarations as public API signatures.
#[derive(Debug, Clone, Copy)]
pub struct SignatureVisitor<'a> {
    source: &'a SourceFile,
    types: TypeRenderer<'a>,
}

/// Class members that are private or named with a leading `_` are not API.
pub fn should_be_skipped(modifiers: Modifiers, name: &str) -> bool {
    modifiers.contains(Modifiers::PRIVATE) || name.starts_with('_')
}

impl<'a> SignatureVisitor<'a> {
    pub fn new(source: &'a SourceFile) -> Self {
        Self {
            source,
            types: TypeRenderer::new(source),
        }
    }

    /// Structured signatures for one declaration, in output order.
    pub fn signatures(&self, node: &Node) -> Result<Vec<Signature>, SignatureError> {
        match node {
            Node::Variable(decl) => Ok(vec![self.variable(decl)?]),
            Node::Class(decl) => self.class_like("class", SignatureKind::Class, decl),
            Node::Interface(decl) => self.class_like("interface", SignatureKind::Interface, decl),
            Node::Enum(decl) => self.class_like("enum", SignatureKind::Enum, decl),
            Node::EnumMember(member) => Ok(vec![Signature::new(
                SignatureKind::EnumMember,
                self.name(&member.name, member.span)?,
            )]),
            Node::MethodDeclaration(decl) => {
                self.unless_skipped(&decl.name, decl.span, decl.modifiers, |v| v.function_like(decl))
            }
            Node::MethodSignature(decl) => Ok(vec![self.function_like(decl)?]),
            Node::PropertyDeclaration(decl) => {
                self.unless_skipped(&decl.name, decl.span, decl.modifiers, |v| v.property(decl))
            }
            Node::PropertySignature(decl) => Ok(vec![self.property(decl)?]),
            Node::GetAccessor(decl) => {
                self.unless_skipped(&decl.name, decl.span, decl.modifiers, |v| v.getter(decl))
            }
            Node::SetAccessor(decl) => {
                self.unless_skipped(&decl.name, decl.span, decl.modifiers, |v| v.setter(decl))
            }
            Node::Function(decl) => {
                let mut signature = self.function_like(decl)?;
                signature.kind = SignatureKind::Function;
                Ok(vec![signature])
            }
            Node::Other { .. } => Ok(Vec::new()),
        }
    }

    fn unless_skipped(
        &self,
        name: &Name,
        span: Span,
        modifiers: Modifiers,
        render: impl FnOnce(&Self) -> Result<Signature, SignatureError>,
    ) -> Result<Vec<Signature>, SignatureError> {
        if should_be_skipped(modifiers, self.name(name, span)?) {
            return Ok(Vec::new());
        }
        Ok(vec![render(self)?])
    }

    fn variable(&self, decl: &VariableDeclaration) -> Result<Signature, SignatureError> {
        let keyword = if decl.list_flags.contains(NodeFlags::CONST) {
            "const"
        } else {
            "var"
        };
        let name = self.name(&decl.name, decl.span)?;
        // The only position where a missing annotation is omitted, not `any`.
        let colon_type = self
            .types
            .render(decl.type_annotation.as_ref())?
            .map(|ty| format!(":{ty}"))
            .unwrap_or_default();

        Ok(Signature::new(
            SignatureKind::Variable,
            format!("{keyword} {name}{colon_type}"),
        ))
    }

    fn class_like(
        &self,
        keyword: &str,
        kind: SignatureKind,
        decl: &ClassLikeDeclaration,
    ) -> Result<Vec<Signature>, SignatureError> {
        let name = self.name(&decl.name, decl.span)?;
        let root = match self
            .types
            .render_list(decl.type_parameters.as_deref(), ",")?
        {
            Some(params) if !params.is_empty() => format!("{keyword} {name}<{params}>"),
            _ => format!("{keyword} {name}"),
        };

        let mut signatures = vec![Signature::new(kind, root)];
        for member in &decl.members {
            signatures.extend(
                self.signatures(member)?
                    .into_iter()
                    .map(|signature| signature.qualified(name)),
            );
        }
        Ok(signatures)
    }

    fn function_like(&self, decl: &FunctionLikeDeclaration) -> Result<Signature, SignatureError> {
        let name = self.name(&decl.name, decl.span)?;
        let params = decl
            .parameters
            .iter()
            .map(|param| self.types.render_or_any(param.type_annotation.as_ref()))
            .collect::<Result<Vec<_>, _>>()?
            .join(", ");
        let return_type = self.types.render_or_any(decl.return_type.as_ref())?;

        Ok(Signature::new(
            SignatureKind::Method,
            format!("{name}({params}):{return_type}"),
        ))
    }

    fn property(&self, decl: &PropertyDeclaration) -> Result<Signature, SignatureError> {
        let name = self.name(&decl.name, decl.span)?;
        let ty = self.types.render_or_any(decl.type_annotation.as_ref())?;
        Ok(Signature::new(SignatureKind::Property, format!("{name}:{ty}")))
    }

    fn getter(&self, decl: &FunctionLikeDeclaration) -> Result<Signature, SignatureError> {
        let name = self.name(&decl.name, decl.span)?;
        let ty = self.types.render_or_any(decl.return_type.as_ref())?;
        Ok(Signature::new(SignatureKind::Getter, format!("{name}:{ty}")))
    }

    fn setter(&self, decl: &FunctionLikeDeclaration) -> Result<Signature, SignatureError> {
        let name = self.name(&decl.name, decl.span)?;
        let param = decl
            .parameters
            .first()
            .map(|param| self.types.render_or_any(param.type_annotation.as_ref()))
            .transpose()?
            .unwrap_or_default();
        Ok(Signature::new(SignatureKind::Setter, format!("{name}=({param})")))
    }

    /// Plain identifier text; anything else is reported at the declaration.
    fn name<'n>(&self, name: &'n Name, declaration: Span) -> Result<&'n str, SignatureError> {
        match name {
            Name::Identifier(ident) => Ok(&ident.text),
            Name::Other { .. } => Err(report_error(
                self.source,
                declaration,
                ErrorKind::MalformedName,
            )),
        }
    }
}

impl MapNodes for SignatureVisitor<'_> {
    type Node = Node;
    type Output = Vec<String>;

    fn map_node(&self, node: &Node) -> Result<Vec<String>, SignatureError> {
        Ok(self
            .signatures(node)?
            .iter()
            .map(ToString::to_string)
            .collect())
    }
}
