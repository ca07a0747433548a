use super::collect_apis;
use crate::analyzers::ExtractOptions;
use crate::config::ApisigConfig;
use crate::io::{create_writer, OutputFormat};
use anyhow::Result;
use std::path::PathBuf;

pub struct ExtractConfig {
    pub paths: Vec<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub strict: bool,
}

pub fn handle_extract(config: ExtractConfig, settings: &ApisigConfig) -> Result<()> {
    let options = ExtractOptions {
        strict_parse: config.strict || settings.parse.strict,
    };
    let format = config
        .format
        .or(settings.output.format)
        .unwrap_or_default();

    let apis = collect_apis(&config.paths, &settings.input.ignore, &options)?;

    let mut writer = create_writer(format, config.output.as_deref())?;
    writer.write_apis(&apis)?;

    if let Some(path) = &config.output {
        log::info!("Wrote public API to {}", path.display());
    }

    Ok(())
}
