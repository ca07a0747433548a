// Test utility module for apisig integration tests
#![allow(dead_code)]

use apisig::{public_api_of_source, ExtractOptions};

/// Public API lines of `source` parsed as `file.ts`
pub fn api(source: &str) -> Vec<String> {
    try_api(source).unwrap_or_else(|e| panic!("extraction failed: {e}"))
}

pub fn try_api(source: &str) -> apisig::Result<Vec<String>> {
    public_api_of_source(source, "file.ts", &ExtractOptions::default())
}

/// Assert the public API of `source` line by line
pub fn check(source: &str, expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    pretty_assertions::assert_eq!(api(source), expected);
}
