pub mod ast;
pub mod errors;
pub mod source;

pub use ast::{Node, Span, TypeNode};
pub use errors::{Error, Location, Result, SignatureError};
pub use source::SourceFile;
