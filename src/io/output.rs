use crate::analyzers::FileApi;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One signature per line
    #[default]
    Text,
    /// Array of `{ file, signatures }`
    Json,
}

pub trait OutputWriter {
    fn write_apis(&mut self, apis: &[FileApi]) -> anyhow::Result<()>;
}

/// Plain lines, files concatenated in the order given
pub struct TextWriter<W: Write> {
    writer: W,
}

impl<W: Write> TextWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TextWriter<W> {
    fn write_apis(&mut self, apis: &[FileApi]) -> anyhow::Result<()> {
        for line in apis.iter().flat_map(|api| &api.signatures) {
            writeln!(self.writer, "{line}")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_apis(&mut self, apis: &[FileApi]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(apis)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

fn writer_for<W: Write + 'static>(format: OutputFormat, writer: W) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Text => Box::new(TextWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
    }
}

/// Writer for `format`, targeting `output` or stdout.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                anyhow::anyhow!("Failed to create output file {}: {}", path.display(), e)
            })?;
            Ok(writer_for(format, BufWriter::new(file)))
        }
        None => Ok(writer_for(format, std::io::stdout())),
    }
}
