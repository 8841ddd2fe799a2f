//! Trending topic sources.
//!
//! Topics come from a [`TrendSource`]. The live implementation,
//! [`GoogleTrendsRss`], reads the Google Trends daily trending-searches RSS
//! feed for one region. The provider is treated as unreliable: under the
//! default [`FailurePolicy::Fallback`], any failure (network, HTTP status,
//! malformed XML, empty feed) is logged and replaced by [`FALLBACK_TOPICS`]
//! so a scheduled run still publishes something.
//!
//! The outcome is explicit. [`fetch_topics`] returns a [`TopicFetch`] that is
//! either `Live` or `Fallback` with the reason, rather than hiding the
//! substitution behind a catch-all.
//!
//! ## Feed format
//!
//! ```xml
//! <rss version="2.0" xmlns:ht="https://trends.google.com/trending/rss">
//!   <channel>
//!     <title>Daily Search Trends</title>
//!     <item>
//!       <title>solar eclipse</title>
//!       <ht:approx_traffic>500,000+</ht:approx_traffic>
//!       ...
//!     </item>
//!   </channel>
//! </rss>
//! ```
//!
//! Only item titles are read, in document order.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Upper bound on topics returned by a fetch.
pub const MAX_TOPICS: usize = 5;

/// Evergreen topics used when the provider is unavailable.
pub const FALLBACK_TOPICS: [&str; 5] = [
    "best wireless earbuds",
    "home office desk",
    "air fryer recipes",
    "portable power station",
    "budget gaming laptop",
];

#[derive(Error, Debug)]
pub enum TrendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("trends provider returned status {0}")]
    Status(u16),
    #[error("RSS parse error: {0}")]
    Xml(#[from] quick_xml::de::DeError),
    #[error("invalid feed URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("trends provider returned no topics")]
    NoTopics,
}

/// What to do when the provider fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Substitute [`FALLBACK_TOPICS`] and keep going.
    #[default]
    Fallback,
    /// Propagate the error; the run writes nothing.
    Abort,
}

/// A provider of trending search terms.
pub trait TrendSource {
    /// Fetch trending topics, most popular first.
    fn fetch(&self) -> Result<Vec<String>, TrendError>;
    /// Short provider name for logs.
    fn name(&self) -> &str;
}

/// Result of a topic fetch: live data, or the fallback list and why.
#[derive(Debug, Clone, PartialEq)]
pub enum TopicFetch {
    Live(Vec<String>),
    Fallback { topics: Vec<String>, reason: String },
}

impl TopicFetch {
    pub fn topics(&self) -> &[String] {
        match self {
            TopicFetch::Live(topics) => topics,
            TopicFetch::Fallback { topics, .. } => topics,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, TopicFetch::Fallback { .. })
    }

    fn fallback(reason: String) -> Self {
        TopicFetch::Fallback {
            topics: FALLBACK_TOPICS.iter().map(|t| t.to_string()).collect(),
            reason,
        }
    }
}

/// Fetch up to [`MAX_TOPICS`] topics from `source`, applying `policy` on failure.
pub fn fetch_topics(
    source: &dyn TrendSource,
    policy: FailurePolicy,
) -> Result<TopicFetch, TrendError> {
    let result = source.fetch().and_then(|mut topics| {
        if topics.is_empty() {
            return Err(TrendError::NoTopics);
        }
        topics.truncate(MAX_TOPICS);
        Ok(topics)
    });

    match (result, policy) {
        (Ok(topics), _) => {
            tracing::debug!(provider = source.name(), count = topics.len(), "fetched trends");
            Ok(TopicFetch::Live(topics))
        }
        (Err(e), FailurePolicy::Fallback) => {
            tracing::warn!(
                error = %e,
                provider = source.name(),
                "trends fetch failed, using fallback topics"
            );
            Ok(TopicFetch::fallback(e.to_string()))
        }
        (Err(e), FailurePolicy::Abort) => Err(e),
    }
}

// =============================================================================
// Google Trends RSS
// =============================================================================

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
}

/// Extract item titles from a trends RSS document, in order.
///
/// Blank titles are skipped.
pub fn parse_trends_rss(xml: &str) -> Result<Vec<String>, TrendError> {
    let rss: Rss = quick_xml::de::from_str(xml)?;
    Ok(rss
        .channel
        .items
        .into_iter()
        .filter_map(|item| item.title)
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty())
        .collect())
}

const USER_AGENT: &str = concat!("trendpost/", env!("CARGO_PKG_VERSION"));

/// Live provider backed by the Google Trends RSS feed.
pub struct GoogleTrendsRss {
    url: Url,
    client: reqwest::blocking::Client,
}

impl GoogleTrendsRss {
    /// Provider for `feed_url` scoped to region `geo` (e.g. `US`, `GB`).
    ///
    /// `geo` is appended to any query the feed URL already carries.
    pub fn new(feed_url: &str, geo: &str) -> Result<Self, TrendError> {
        let mut url = Url::parse(feed_url)?;
        url.query_pairs_mut().append_pair("geo", geo);
        Ok(Self {
            url,
            client: reqwest::blocking::Client::new(),
        })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }
}

impl TrendSource for GoogleTrendsRss {
    fn fetch(&self) -> Result<Vec<String>, TrendError> {
        tracing::debug!(url = %self.url, "requesting trends feed");
        let resp = self
            .client
            .get(self.url.as_str())
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()?;
        if !resp.status().is_success() {
            return Err(TrendError::Status(resp.status().as_u16()));
        }
        let body = resp.text()?;
        parse_trends_rss(&body)
    }

    fn name(&self) -> &str {
        "google-trends"
    }
}
