//! Types shared between the driver, the CLI output and tests.

use std::path::PathBuf;

/// Where a run's topics came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicOrigin {
    /// Live provider data.
    Live,
    /// Built-in evergreen list, with the provider failure that caused it.
    Fallback { reason: String },
}

/// Bookkeeping for one written post.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPost {
    pub topic: String,
    pub slug: String,
    pub path: PathBuf,
    pub links: Vec<String>,
}

/// Result of one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub origin: TopicOrigin,
    /// Topics offered by the source, before the per-run cap.
    pub available_topics: usize,
    /// Posts written, in topic order.
    pub posts: Vec<GeneratedPost>,
}
