// Export modules for library usage
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod signature;

// Re-export commonly used types
pub use crate::core::{Error, Location, Node, Result, SignatureError, SourceFile, Span, TypeNode};

pub use crate::signature::{MapNodes, Signature, SignatureKind, SignatureVisitor, TypeRenderer};

pub use crate::analyzers::{
    extract_files, public_api_of_file, public_api_of_source, ExtractOptions, FileApi,
};

pub use crate::config::{load_config, ApisigConfig};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
