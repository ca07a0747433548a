//! TypeScript public API extraction
//!
//! This module turns TypeScript source into public API signatures:
//!
//! - Parsing with the tree-sitter TS/TSX grammars
//! - Lowering the concrete syntax tree to the signature syntax model
//! - Selecting exported top-level declarations
//! - Rendering them with the signature visitors
//!
//! # Example
//!
//! ```ignore
//! use apisig::analyzers::typescript::{parse_source, public_api, ExtractOptions};
//!
//! let ast = parse_source(source_code, path, TsVariant::TypeScript)?;
//! let lines = public_api(&ast, &ExtractOptions::default())?;
//! ```

pub mod exports;
pub mod lower;
pub mod orchestration;
pub mod parser;
pub mod types;

// Re-export main types
pub use exports::exported_declarations;
pub use orchestration::{extract_signatures, public_api, ExtractOptions};
pub use parser::{detect_variant, parse_source};
pub use types::{TsVariant, TypeScriptAst};
