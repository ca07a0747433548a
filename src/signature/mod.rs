//! Public API signature rendering.
//!
//! Two cooperating visitors walk a finished syntax tree:
//!
//! - [`SignatureVisitor`] maps a declaration to zero or more signatures.
//!   Classes, interfaces and enums expand to a root line followed by one line
//!   per member, each qualified with the owner's name.
//! - [`TypeRenderer`] maps a type annotation to its canonical string.
//!
//! Signatures are built as [`Signature`] records and only flattened to the
//! line grammar through `Display`.
//!
//! # Example
//!
//! ```ignore
//! use apisig::signature::{MapNodes, SignatureVisitor};
//!
//! let visitor = SignatureVisitor::new(&source);
//! let lines = visitor.map_node(&declaration)?;
//! ```

pub mod report;
pub mod types;
pub mod visitor;

use crate::core::errors::SignatureError;
use serde::Serialize;
use std::fmt;

pub use report::{report_error, ErrorKind};
pub use types::TypeRenderer;
pub use visitor::{should_be_skipped, SignatureVisitor};

/// Mapping from one node to a value, lifted over optional node lists.
pub trait MapNodes {
    type Node;
    type Output;

    fn map_node(&self, node: &Self::Node) -> Result<Self::Output, SignatureError>;

    /// Per-node results in input order; an absent list maps to an empty one.
    fn map_nodes(
        &self,
        nodes: Option<&[Self::Node]>,
    ) -> Result<Vec<Self::Output>, SignatureError> {
        nodes
            .unwrap_or_default()
            .iter()
            .map(|node| self.map_node(node))
            .collect()
    }
}

/// What kind of declaration a signature line describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureKind {
    Variable,
    Class,
    Interface,
    Enum,
    EnumMember,
    Method,
    Property,
    Getter,
    Setter,
    Function,
}

/// One signature line before flattening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Signature {
    pub kind: SignatureKind,
    /// Enclosing declaration names, outermost first.
    pub owner: Vec<String>,
    pub body: String,
}

impl Signature {
    pub fn new(kind: SignatureKind, body: impl Into<String>) -> Self {
        Self {
            kind,
            owner: Vec::new(),
            body: body.into(),
        }
    }

    /// Prefix this signature with an enclosing declaration's name.
    pub fn qualified(mut self, owner: &str) -> Self {
        self.owner.insert(0, owner.to_string());
        self
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for owner in &self.owner {
            write!(f, "{owner}.")?;
        }
        f.write_str(&self.body)
    }
}
