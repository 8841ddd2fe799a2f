//! Shared test utilities for the trendpost test suite.
//!
//! Provides canned [`TrendSource`] implementations so no test touches the
//! network, plus fixture writers and extractors for generated posts.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! write_affiliates(tmp.path(), r#"{"amazon_tag":"t"}"#);
//! let report = generate(tmp.path(), &config, &StaticSource::new(&["a"]), day).unwrap();
//! assert_eq!(post_files(&tmp.path().join("_posts")), vec!["2026-10-19-a.md"]);
//! ```

use std::path::Path;

use crate::trends::{TrendError, TrendSource};
use crate::types::RunReport;

// =========================================================================
// Trend sources
// =========================================================================

/// Returns a fixed topic list.
pub struct StaticSource {
    topics: Vec<String>,
}

impl StaticSource {
    pub fn new(topics: &[&str]) -> Self {
        Self {
            topics: topics.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl TrendSource for StaticSource {
    fn fetch(&self) -> Result<Vec<String>, TrendError> {
        Ok(self.topics.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Always fails as if the provider answered `503 Service Unavailable`.
pub struct FailingSource;

impl TrendSource for FailingSource {
    fn fetch(&self) -> Result<Vec<String>, TrendError> {
        Err(TrendError::Status(503))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

// =========================================================================
// Fixtures
// =========================================================================

/// Write `affiliates.json` into a site root.
pub fn write_affiliates(root: &Path, json: &str) {
    std::fs::write(root.join("affiliates.json"), json).unwrap();
}

// =========================================================================
// Extractors
// =========================================================================

/// Sorted file names in a posts directory. Empty if the directory is missing.
pub fn post_files(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Slugs of the posts in a report, in write order.
pub fn post_slugs(report: &RunReport) -> Vec<&str> {
    report.posts.iter().map(|p| p.slug.as_str()).collect()
}
