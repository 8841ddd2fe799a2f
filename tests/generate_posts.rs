//! End-to-end generation runs against a temporary site root.
//!
//! Trend data comes from in-test sources; nothing here touches the network.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use trendpost::config::{self, GeneratorConfig};
use trendpost::generate::generate;
use trendpost::trends::{FALLBACK_TOPICS, TrendError, TrendSource};
use trendpost::types::TopicOrigin;

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

struct Topics(Vec<&'static str>);

impl TrendSource for Topics {
    fn fetch(&self) -> Result<Vec<String>, TrendError> {
        Ok(self.0.iter().map(|t| t.to_string()).collect())
    }

    fn name(&self) -> &str {
        "fixture"
    }
}

struct Down;

impl TrendSource for Down {
    fn fetch(&self) -> Result<Vec<String>, TrendError> {
        Err(TrendError::Status(429))
    }

    fn name(&self) -> &str {
        "down"
    }
}

fn five_topics() -> Topics {
    Topics(vec![
        "Solar Eclipse",
        "World Series",
        "What's New: Tech & Gadgets?",
        "Election Results",
        "Air Fryer Recipes!",
    ])
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn posts_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn site_config(root: &Path, posts_per_run: Option<&str>) -> GeneratorConfig {
    config::load_config(root)
        .unwrap()
        .with_posts_per_run_override(posts_per_run)
        .unwrap()
}

// ---------------------------------------------------------------------------
// Runs
// ---------------------------------------------------------------------------

#[test]
fn posts_per_run_three_writes_three_files() {
    let tmp = TempDir::new().unwrap();
    let config = site_config(tmp.path(), Some("3"));

    let report = generate(tmp.path(), &config, &five_topics(), today()).unwrap();

    assert_eq!(report.posts.len(), 3);
    assert_eq!(
        posts_in(&tmp.path().join("_posts")),
        vec![
            "2026-10-19-solar-eclipse.md",
            "2026-10-19-whats-new-tech-gadgets.md",
            "2026-10-19-world-series.md",
        ]
    );
}

#[test]
fn default_run_writes_two_posts() {
    let tmp = TempDir::new().unwrap();
    let config = site_config(tmp.path(), None);
    let report = generate(tmp.path(), &config, &five_topics(), today()).unwrap();
    assert_eq!(report.posts.len(), 2);
    assert_eq!(report.origin, TopicOrigin::Live);
}

#[test]
fn provider_failure_falls_back_in_order() {
    let tmp = TempDir::new().unwrap();
    let config = site_config(tmp.path(), Some("5"));

    let report = generate(tmp.path(), &config, &Down, today()).unwrap();

    match &report.origin {
        TopicOrigin::Fallback { reason } => assert!(reason.contains("429")),
        other => panic!("expected fallback, got {other:?}"),
    }
    let topics: Vec<&str> = report.posts.iter().map(|p| p.topic.as_str()).collect();
    assert_eq!(topics, FALLBACK_TOPICS);
    assert_eq!(
        posts_in(&tmp.path().join("_posts")),
        vec![
            "2026-10-19-air-fryer-recipes.md",
            "2026-10-19-best-wireless-earbuds.md",
            "2026-10-19-budget-gaming-laptop.md",
            "2026-10-19-home-office-desk.md",
            "2026-10-19-portable-power-station.md",
        ]
    );
}

#[test]
fn strict_config_aborts_without_posts() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(config::CONFIG_FILENAME),
        "[trends]\non_failure = \"abort\"\n",
    )
    .unwrap();
    let config = site_config(tmp.path(), None);

    let result = generate(tmp.path(), &config, &Down, today());

    assert!(result.is_err());
    assert!(posts_in(&tmp.path().join("_posts")).is_empty());
}

#[test]
fn rerun_same_day_overwrites() {
    let tmp = TempDir::new().unwrap();
    let config = site_config(tmp.path(), Some("4"));

    generate(tmp.path(), &config, &five_topics(), today()).unwrap();
    let first = posts_in(&tmp.path().join("_posts"));
    generate(tmp.path(), &config, &five_topics(), today()).unwrap();
    let second = posts_in(&tmp.path().join("_posts"));

    assert_eq!(first.len(), 4);
    assert_eq!(first, second);
}

#[test]
fn next_day_adds_new_files() {
    let tmp = TempDir::new().unwrap();
    let config = site_config(tmp.path(), None);
    let tomorrow = today().succ_opt().unwrap();

    generate(tmp.path(), &config, &five_topics(), today()).unwrap();
    generate(tmp.path(), &config, &five_topics(), tomorrow).unwrap();

    let files = posts_in(&tmp.path().join("_posts"));
    assert_eq!(files.len(), 4);
    assert!(files.contains(&"2026-10-20-solar-eclipse.md".to_string()));
}

#[test]
fn amazon_link_in_rendered_post() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("affiliates.json"),
        r#"{"amazon_tag":"tag123","amazon_country":"co.uk","fallback_links":[]}"#,
    )
    .unwrap();
    let config = site_config(tmp.path(), Some("5"));

    let report = generate(tmp.path(), &config, &five_topics(), today()).unwrap();

    let air_fryer = report
        .posts
        .iter()
        .find(|p| p.topic == "Air Fryer Recipes!")
        .unwrap();
    assert_eq!(
        air_fryer.links,
        vec!["https://www.amazon.co.uk/s?k=Air+Fryer+Recipes&tag=tag123"]
    );
    assert_eq!(air_fryer.slug, "air-fryer-recipes!");

    let content = fs::read_to_string(&air_fryer.path).unwrap();
    assert!(content.contains("- [1](https://www.amazon.co.uk/s?k=Air+Fryer+Recipes&tag=tag123)"));
}

#[test]
fn rendered_post_front_matter() {
    let tmp = TempDir::new().unwrap();
    let config = site_config(tmp.path(), Some("1"));

    let report = generate(tmp.path(), &config, &five_topics(), today()).unwrap();
    let content = fs::read_to_string(&report.posts[0].path).unwrap();

    assert!(content.starts_with(
        "---\n\
         layout: post\n\
         title: \"Solar Eclipse: Why It's Trending and Where to Buy\"\n\
         date: 2026-10-19 00:00:00 +0000\n\
         tags: [trending, solar-eclipse]\n\
         ---\n"
    ));
}

#[test]
fn config_file_moves_posts_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(config::CONFIG_FILENAME),
        "posts_dir = \"blog/_posts\"\n[post]\nextension = \"markdown\"\n",
    )
    .unwrap();
    let config = site_config(tmp.path(), Some("1"));

    generate(tmp.path(), &config, &five_topics(), today()).unwrap();

    assert_eq!(
        posts_in(&tmp.path().join("blog/_posts")),
        vec!["2026-10-19-solar-eclipse.markdown"]
    );
}
