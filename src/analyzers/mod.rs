use crate::core::errors::{Error, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub mod typescript;

pub use typescript::ExtractOptions;

/// Public API lines of one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileApi {
    pub file: PathBuf,
    pub signatures: Vec<String>,
}

/// Public API lines of in-memory TypeScript source
pub fn public_api_of_source(
    content: &str,
    path: impl AsRef<Path>,
    options: &ExtractOptions,
) -> Result<Vec<String>> {
    let path = path.as_ref();
    let variant = typescript::detect_variant(path);
    let ast = typescript::parse_source(content, path, variant)?;
    typescript::public_api(&ast, options)
}

/// Public API lines of a TypeScript file on disk
pub fn public_api_of_file(path: impl AsRef<Path>, options: &ExtractOptions) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::file_system("Failed to read source file", path, e))?;
    public_api_of_source(&content, path, options)
}

/// Extract every file in parallel, keeping input order
///
/// Files are independent, so each one is parsed and rendered on its own
/// worker. When files fail, the error of the earliest one in `paths` is
/// returned.
pub fn extract_files(paths: &[PathBuf], options: &ExtractOptions) -> Result<Vec<FileApi>> {
    let results: Vec<Result<FileApi>> = paths
        .par_iter()
        .map(|path| {
            log::debug!("Extracting {}", path.display());
            public_api_of_file(path, options).map(|signatures| FileApi {
                file: path.clone(),
                signatures,
            })
        })
        .collect();

    results.into_iter().collect()
}
