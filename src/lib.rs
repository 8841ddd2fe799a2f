//! # trendpost
//!
//! Generates blog posts from trending search topics for a Jekyll-style static
//! site. Each run fetches the day's trending searches, picks the first few,
//! and writes one Markdown post per topic into `_posts/`, complete with front
//! matter and a short list of affiliate shopping links.
//!
//! # Pipeline
//!
//! ```text
//! trends provider ──► topics ──► for each topic:
//!   (or fallback list)             affiliate links ─┐
//!                                  slug ────────────┼──► _posts/YYYY-MM-DD-slug.md
//!                                  template ────────┘
//! ```
//!
//! A run is a single synchronous batch: no daemon, no cache, no state between
//! runs besides the files it writes. Running twice on the same day rewrites
//! the same files.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`trends`] | `TrendSource` trait, Google Trends RSS provider, fallback topics |
//! | [`affiliates`] | `affiliates.json` loading and per-topic shopping link lists |
//! | [`naming`] | Topic slugs and dated post filenames |
//! | [`render`] | Post template rendering and writing |
//! | [`generate`] | The run driver tying the above together |
//! | [`config`] | `trendpost.toml` loading, merging, validation, env override |
//! | [`types`] | Run report types shared by the driver and CLI output |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Explicit fallback
//!
//! The trends provider is unreliable and unauthenticated. Rather than failing a
//! scheduled job, the default policy substitutes five evergreen topics. The
//! substitution is part of the return type ([`trends::TopicFetch`]) so callers
//! and the CLI report can tell live data from fallback data. Setting
//! `on_failure = "abort"` (or passing `--strict`) turns provider failures into
//! hard errors instead.
//!
//! ## No retries, no dedup across runs
//!
//! A run makes one request. Posts are keyed by date and slug only, so the
//! filesystem is the only state: the same topic on the same day overwrites its
//! earlier post.

pub mod affiliates;
pub mod config;
pub mod generate;
pub mod naming;
pub mod output;
pub mod render;
pub mod trends;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
