use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod setup;

#[derive(Parser, Debug)]
#[command(name = "apisig")]
#[command(about = "Public API signature extractor for TypeScript", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the public API of TypeScript files
    Extract {
        /// Files or directories to extract
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output format (defaults to the config value, then text)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of parallel jobs (0 = use all cores)
        #[arg(short = 'j', long = "jobs", default_value = "0", env = "APISIG_JOBS")]
        jobs: usize,

        /// Fail on files with syntax errors
        #[arg(long)]
        strict: bool,
    },

    /// Compare the public API against a golden file
    Check {
        /// Files or directories to extract
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Golden file, one signature per line
        #[arg(short, long)]
        golden: Option<PathBuf>,

        /// Rewrite the golden file instead of comparing
        #[arg(long)]
        update: bool,

        /// Number of parallel jobs (0 = use all cores)
        #[arg(short = 'j', long = "jobs", default_value = "0", env = "APISIG_JOBS")]
        jobs: usize,

        /// Fail on files with syntax errors
        #[arg(long)]
        strict: bool,
    },

    /// Initialize an apisig configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
