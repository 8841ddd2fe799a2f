//! Post generation run.
//!
//! One call to [`generate`] is one batch job:
//!
//! ```text
//! mkdir -p {root}/{posts_dir}
//! affiliates = load {root}/{affiliates_file} (or defaults)
//! topics     = fetch_topics(source, on_failure)
//! for topic in topics[..posts_per_run]:
//!     links = affiliate_links(topic, affiliates)
//!     slug  = slugify(topic)
//!     write {posts_dir}/{date}-{slug}.{ext}
//! ```
//!
//! Nothing in the batch is retried or skipped: the first failing write aborts
//! the remaining posts. Posts already written stay on disk. Files are
//! overwritten when the same topic comes up twice on the same date.

use crate::affiliates::{self, AffiliateError};
use crate::config::GeneratorConfig;
use crate::naming;
use crate::render::{self, PostContext};
use crate::trends::{self, TopicFetch, TrendError, TrendSource};
use crate::types::{GeneratedPost, RunReport, TopicOrigin};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("affiliate config error: {0}")]
    Affiliate(#[from] AffiliateError),
    #[error("trends error: {0}")]
    Trend(#[from] TrendError),
}

/// Run one generation batch for the site at `root`, dated `today`.
pub fn generate(
    root: &Path,
    config: &GeneratorConfig,
    source: &dyn TrendSource,
    today: NaiveDate,
) -> Result<RunReport, GenerateError> {
    let posts_dir = config.posts_path(root);
    fs::create_dir_all(&posts_dir)?;

    let affiliate_config = affiliates::load_affiliates(&config.affiliates_path(root))?;
    let fetch = trends::fetch_topics(source, config.trends.on_failure)?;

    let mut posts = Vec::new();
    for topic in fetch.topics().iter().take(config.posts_per_run) {
        let links = affiliates::affiliate_links(topic, &affiliate_config);
        let slug = naming::slugify(topic);
        let ctx = PostContext {
            topic,
            slug: &slug,
            date: today,
            links: &links,
            layout: &config.post.layout,
            tag: &config.post.tag,
        };
        let path = render::write_post(&posts_dir, &ctx, &config.post.extension)?;
        posts.push(GeneratedPost {
            topic: topic.clone(),
            slug,
            path,
            links,
        });
    }

    let available_topics = fetch.topics().len();
    let origin = match fetch {
        TopicFetch::Live(_) => TopicOrigin::Live,
        TopicFetch::Fallback { reason, .. } => TopicOrigin::Fallback { reason },
    };

    Ok(RunReport {
        origin,
        available_topics,
        posts,
    })
}
