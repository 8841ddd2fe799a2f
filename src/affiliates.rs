//! Affiliate shopping links.
//!
//! Each post ends with a short list of shopping links built from the topic and
//! `affiliates.json` in the site root:
//!
//! ```json
//! {
//!   "amazon_tag": "mysite-20",
//!   "amazon_country": "co.uk",
//!   "fallback_links": [
//!     "https://www.ebay.com/sch/i.html?_nkw={query}",
//!     "https://www.walmart.com/search?q={query}"
//!   ]
//! }
//! ```
//!
//! Every key is optional. A missing file means no Amazon link and no
//! templates, so posts are written with an empty link list.
//!
//! ## Link order
//!
//! 1. Amazon search (only when `amazon_tag` is set)
//! 2. One link per `fallback_links` template, `{query}` replaced
//!
//! Duplicates are dropped keeping the first occurrence, then the list is
//! capped at [`MAX_LINKS`]. Templates are not validated: a template without a
//! placeholder yields the template itself, a broken one a broken URL.

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Upper bound on links per post.
pub const MAX_LINKS: usize = 5;

/// Placeholder substituted in `fallback_links` templates.
pub const QUERY_PLACEHOLDER: &str = "{query}";

#[derive(Error, Debug)]
pub enum AffiliateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Merchant settings loaded from `affiliates.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AffiliateConfig {
    /// Amazon Associates tracking tag. Empty disables the Amazon link.
    pub amazon_tag: String,
    /// Amazon storefront TLD, e.g. `com`, `co.uk`, `de`.
    pub amazon_country: String,
    /// URL templates with a `{query}` placeholder.
    pub fallback_links: Vec<String>,
}

impl Default for AffiliateConfig {
    fn default() -> Self {
        Self {
            amazon_tag: String::new(),
            amazon_country: "com".to_string(),
            fallback_links: Vec::new(),
        }
    }
}

/// Load the affiliate config from a JSON file.
///
/// Returns defaults when the file does not exist. A file that exists but is
/// not valid JSON is an error.
pub fn load_affiliates(path: &Path) -> Result<AffiliateConfig, AffiliateError> {
    if !path.exists() {
        return Ok(AffiliateConfig::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// The search term sent to merchants: trimmed, without trailing sentence
/// punctuation.
///
/// `"Air Fryer Recipes!"` → `"Air Fryer Recipes"`
pub fn query_term(topic: &str) -> &str {
    topic
        .trim()
        .trim_end_matches(['!', '?', '.', ','])
        .trim_end()
}

/// Form-encode a search term (`+` for spaces, percent-escapes otherwise).
pub fn encode_query(term: &str) -> String {
    url::form_urlencoded::byte_serialize(term.as_bytes()).collect()
}

/// Build the ordered, deduplicated, capped link list for a topic.
pub fn affiliate_links(topic: &str, config: &AffiliateConfig) -> Vec<String> {
    let q = encode_query(query_term(topic));

    let mut candidates = Vec::with_capacity(1 + config.fallback_links.len());
    if !config.amazon_tag.is_empty() {
        candidates.push(format!(
            "https://www.amazon.{}/s?k={}&tag={}",
            config.amazon_country, q, config.amazon_tag
        ));
    }
    candidates.extend(
        config
            .fallback_links
            .iter()
            .map(|template| template.replace(QUERY_PLACEHOLDER, &q)),
    );

    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|url| seen.insert(url.clone()))
        .take(MAX_LINKS)
        .collect()
}
