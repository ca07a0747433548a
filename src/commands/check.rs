//! Golden-file comparison of the extracted public API

use super::collect_apis;
use crate::analyzers::ExtractOptions;
use crate::config::ApisigConfig;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Golden file used when neither the command line nor the config names one
pub const DEFAULT_GOLDEN: &str = "api.golden";

pub struct CheckConfig {
    pub paths: Vec<PathBuf>,
    pub golden: Option<PathBuf>,
    pub update: bool,
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Extracted lines match the golden file
    Clean,
    /// Golden file rewritten with `lines` signatures
    Updated { lines: usize },
    Drift {
        added: Vec<String>,
        removed: Vec<String>,
    },
}

impl CheckOutcome {
    pub fn is_drift(&self) -> bool {
        matches!(self, CheckOutcome::Drift { .. })
    }
}

pub fn handle_check(config: CheckConfig, settings: &ApisigConfig) -> Result<CheckOutcome> {
    let options = ExtractOptions {
        strict_parse: config.strict || settings.parse.strict,
    };
    let golden = config
        .golden
        .or_else(|| settings.output.golden.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_GOLDEN));

    let current: Vec<String> = collect_apis(&config.paths, &settings.input.ignore, &options)?
        .into_iter()
        .flat_map(|api| api.signatures)
        .collect();

    if config.update {
        let mut contents = current.join("\n");
        if !contents.is_empty() {
            contents.push('\n');
        }
        fs::write(&golden, contents)
            .with_context(|| format!("Failed to write golden file {}", golden.display()))?;
        log::info!("Updated {}", golden.display());
        return Ok(CheckOutcome::Updated {
            lines: current.len(),
        });
    }

    let expected = fs::read_to_string(&golden).with_context(|| {
        format!(
            "Failed to read golden file {} (run with --update to create it)",
            golden.display()
        )
    })?;
    let expected: Vec<String> = expected
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();

    Ok(compare(&expected, &current))
}

/// Lines present in one list but not the other, counting repeats
pub fn compare(expected: &[String], current: &[String]) -> CheckOutcome {
    let added = missing_from(current, expected);
    let removed = missing_from(expected, current);

    if added.is_empty() && removed.is_empty() {
        CheckOutcome::Clean
    } else {
        CheckOutcome::Drift { added, removed }
    }
}

/// Entries of `lines` left over once each entry of `other` has been matched once.
fn missing_from(lines: &[String], other: &[String]) -> Vec<String> {
    let mut available: HashMap<&str, usize> = HashMap::new();
    for line in other {
        *available.entry(line.as_str()).or_default() += 1;
    }

    lines
        .iter()
        .filter(|line| match available.get_mut(line.as_str()) {
            Some(count) if *count > 0 => {
                *count -= 1;
                false
            }
            _ => true,
        })
        .cloned()
        .collect()
}

/// Diff lines for a drift report
pub fn format_drift(added: &[String], removed: &[String]) -> String {
    added
        .iter()
        .map(|line| format!("+ {line}"))
        .chain(removed.iter().map(|line| format!("- {line}")))
        .collect::<Vec<_>>()
        .join("\n")
}
