//! Generator configuration.
//!
//! Settings come from three layers, later layers winning:
//!
//! 1. stock defaults ([`GeneratorConfig::default`])
//! 2. `trendpost.toml` in the site root (optional, sparse)
//! 3. the `POSTS_PER_RUN` environment variable
//!
//! ## Config File
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! posts_dir = "_posts"               # Output directory, relative to the site root
//! affiliates_file = "affiliates.json" # Affiliate settings, relative to the site root
//! posts_per_run = 2                  # Topics turned into posts per run
//!
//! [trends]
//! feed_url = "https://trends.google.com/trending/rss"
//! geo = "US"                         # Region code for the trends feed
//! on_failure = "fallback"            # "fallback" or "abort"
//!
//! [post]
//! extension = "md"
//! layout = "post"
//! tag = "trending"
//! ```
//!
//! Unknown keys are rejected to catch typos early.
//!
//! Affiliate settings live in their own JSON file; see [`crate::affiliates`].

use crate::trends::FailurePolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the config file looked up in the site root.
pub const CONFIG_FILENAME: &str = "trendpost.toml";

/// Environment variable overriding `posts_per_run`.
pub const POSTS_PER_RUN_ENV: &str = "POSTS_PER_RUN";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("invalid {var} value {value:?}: expected a non-negative integer")]
    Env { var: &'static str, value: String },
}

/// Top-level generator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory receiving generated posts, relative to the site root.
    pub posts_dir: String,
    /// Affiliate JSON file, relative to the site root.
    pub affiliates_file: String,
    /// Number of topics turned into posts per run.
    pub posts_per_run: usize,
    /// Trend provider settings.
    pub trends: TrendsConfig,
    /// Post output settings.
    pub post: PostConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            posts_dir: "_posts".to_string(),
            affiliates_file: "affiliates.json".to_string(),
            posts_per_run: 2,
            trends: TrendsConfig::default(),
            post: PostConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Validate that required string settings are non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("posts_dir", &self.posts_dir),
            ("trends.feed_url", &self.trends.feed_url),
            ("trends.geo", &self.trends.geo),
            ("post.extension", &self.post.extension),
            ("post.layout", &self.post.layout),
            ("post.tag", &self.post.tag),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        if let Err(e) = url::Url::parse(&self.trends.feed_url) {
            return Err(ConfigError::Validation(format!(
                "trends.feed_url is not a valid URL ({e}): {}",
                self.trends.feed_url
            )));
        }
        Ok(())
    }

    /// Apply the `POSTS_PER_RUN` override, if set.
    ///
    /// Takes the raw variable value so callers (and tests) control the source.
    pub fn with_posts_per_run_override(mut self, value: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(raw) = value {
            self.posts_per_run = raw.trim().parse().map_err(|_| ConfigError::Env {
                var: POSTS_PER_RUN_ENV,
                value: raw.to_string(),
            })?;
        }
        Ok(self)
    }

    /// Absolute-or-root-relative path of the posts directory.
    pub fn posts_path(&self, root: &Path) -> PathBuf {
        root.join(&self.posts_dir)
    }

    /// Absolute-or-root-relative path of the affiliates file.
    pub fn affiliates_path(&self, root: &Path) -> PathBuf {
        root.join(&self.affiliates_file)
    }
}

/// Trend provider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrendsConfig {
    /// Trending-searches RSS endpoint.
    pub feed_url: String,
    /// Region code appended as `?geo=`.
    pub geo: String,
    /// Behaviour when the provider fails.
    pub on_failure: FailurePolicy,
}

impl Default for TrendsConfig {
    fn default() -> Self {
        Self {
            feed_url: "https://trends.google.com/trending/rss".to_string(),
            geo: "US".to_string(),
            on_failure: FailurePolicy::Fallback,
        }
    }
}

/// Post output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PostConfig {
    /// File extension, without the dot.
    pub extension: String,
    /// Front matter `layout`.
    pub layout: String,
    /// Tag attached to every post, before the slug.
    pub tag: String,
}

impl Default for PostConfig {
    fn default() -> Self {
        Self {
            extension: "md".to_string(),
            layout: "post".to_string(),
            tag: "trending".to_string(),
        }
    }
}

// =============================================================================
// Config loading and merging
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(GeneratorConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `trendpost.toml` from the site root as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    Ok(Some(toml::from_str(&content)?))
}

/// Load and validate the config for a site root.
///
/// Merges `trendpost.toml` (if any) over stock defaults and rejects unknown
/// keys. Environment overrides are applied separately, see
/// [`GeneratorConfig::with_posts_per_run_override`].
pub fn load_config(root: &Path) -> Result<GeneratorConfig, ConfigError> {
    let merged = match load_raw_config(root)? {
        Some(overlay) => merge_toml(stock_defaults_value(), overlay),
        None => stock_defaults_value(),
    };
    let config: GeneratorConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `trendpost.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# trendpost configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.
#
# The POSTS_PER_RUN environment variable overrides posts_per_run.

# Directory receiving generated posts, relative to the site root.
posts_dir = "_posts"

# Affiliate settings (JSON), relative to the site root. Missing file = no links
# beyond what the templates produce.
affiliates_file = "affiliates.json"

# Number of trending topics turned into posts per run.
posts_per_run = 2

# ---------------------------------------------------------------------------
# Trend provider
# ---------------------------------------------------------------------------
[trends]
# Google Trends daily trending-searches RSS feed.
feed_url = "https://trends.google.com/trending/rss"

# Region code, appended as ?geo=...
geo = "US"

# What to do when the feed cannot be fetched or parsed:
#   "fallback" - write posts for a fixed list of evergreen topics
#   "abort"    - fail the run without writing anything
on_failure = "fallback"

# ---------------------------------------------------------------------------
# Post output
# ---------------------------------------------------------------------------
[post]
# File extension for generated posts.
extension = "md"

# Front matter layout.
layout = "post"

# Tag added to every post, alongside the topic slug.
tag = "trending"
"##
}
