//! CLI output formatting.
//!
//! Each command has a `format_*` function returning lines (pure, testable) and
//! a `print_*` wrapper writing them to stdout. Diagnostics go through
//! `tracing` on stderr instead.
//!
//! # Output Format
//!
//! ## Generate
//!
//! ```text
//! Topics: live (5 available)
//! 001 solar eclipse → _posts/2026-10-19-solar-eclipse.md
//!     Links: 3
//! 002 world series → _posts/2026-10-19-world-series.md
//!     Links: 0
//!
//! Generated 2 posts
//! ```
//!
//! ## Trends
//!
//! ```text
//! Topics: fallback (trends provider returned status 503)
//! 001 best wireless earbuds
//!     Slug: best-wireless-earbuds
//! ```

use crate::naming;
use crate::trends::TopicFetch;
use crate::types::{RunReport, TopicOrigin};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

fn origin_line(fallback_reason: Option<&str>, available: usize) -> String {
    match fallback_reason {
        None => format!("Topics: live ({} available)", available),
        Some(reason) => format!("Topics: fallback ({})", reason),
    }
}

/// Show `path` relative to `root` when possible.
fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

// ============================================================================
// generate
// ============================================================================

/// Format the result of a generation run.
pub fn format_generate_output(report: &RunReport, root: &Path) -> Vec<String> {
    let reason = match &report.origin {
        TopicOrigin::Live => None,
        TopicOrigin::Fallback { reason } => Some(reason.as_str()),
    };
    let mut lines = vec![origin_line(reason, report.available_topics)];

    for (i, post) in report.posts.iter().enumerate() {
        lines.push(format!(
            "{} {} → {}",
            format_index(i + 1),
            post.topic,
            display_path(&post.path, root)
        ));
        lines.push(format!("    Links: {}", post.links.len()));
    }

    lines.push(String::new());
    lines.push(format!("Generated {}", plural(report.posts.len(), "post")));
    lines
}

pub fn print_generate_output(report: &RunReport, root: &Path) {
    for line in format_generate_output(report, root) {
        println!("{}", line);
    }
}

// ============================================================================
// trends
// ============================================================================

/// Format a topic fetch, with the slug each topic would get.
pub fn format_trends_output(fetch: &TopicFetch) -> Vec<String> {
    let reason = match fetch {
        TopicFetch::Live(_) => None,
        TopicFetch::Fallback { reason, .. } => Some(reason.as_str()),
    };
    let mut lines = vec![origin_line(reason, fetch.topics().len())];
    for (i, topic) in fetch.topics().iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), topic));
        lines.push(format!("    Slug: {}", naming::slugify(topic)));
    }
    lines
}

pub fn print_trends_output(fetch: &TopicFetch) {
    for line in format_trends_output(fetch) {
        println!("{}", line);
    }
}
