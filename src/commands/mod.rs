pub mod check;
pub mod extract;
pub mod init;

use crate::analyzers::{extract_files, ExtractOptions, FileApi};
use crate::io::find_project_files;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Walk `paths` and extract every TypeScript file found
pub(crate) fn collect_apis(
    paths: &[PathBuf],
    ignore_patterns: &[String],
    options: &ExtractOptions,
) -> Result<Vec<FileApi>> {
    let files = find_project_files(paths, ignore_patterns).context("Failed to collect input files")?;
    log::info!("Extracting public API from {} files", files.len());

    Ok(extract_files(&files, options)?)
}
