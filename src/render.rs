//! Post rendering.
//!
//! Produces one Markdown document per topic with Jekyll front matter:
//!
//! ```text
//! ---
//! layout: post
//! title: "air fryer recipes: Why It's Trending and Where to Buy"
//! date: 2026-10-19 00:00:00 +0000
//! tags: [trending, air-fryer-recipes]
//! ---
//!
//! TL;DR: "air fryer recipes" is trending today. ...
//! ```
//!
//! The body is fixed prose around the topic name, followed by the affiliate
//! links as a numbered Markdown list and a disclosure line. Rendering is pure;
//! [`write_post`] is the only function touching the filesystem.

use crate::naming;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Everything needed to render one post.
#[derive(Debug, Clone)]
pub struct PostContext<'a> {
    pub topic: &'a str,
    pub slug: &'a str,
    pub date: NaiveDate,
    pub links: &'a [String],
    /// Front matter `layout` value.
    pub layout: &'a str,
    /// Constant tag listed before the slug.
    pub tag: &'a str,
}

/// Render the link list: `- [1](url)` per line, 1-indexed.
pub fn render_links(links: &[String]) -> String {
    links
        .iter()
        .enumerate()
        .map(|(i, url)| format!("- [{}]({})", i + 1, url))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escape a value for use inside a double-quoted front matter string.
fn escape_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render the full post document.
pub fn render_post(ctx: &PostContext) -> String {
    let date = ctx.date.format("%Y-%m-%d");
    format!(
        r#"---
layout: {layout}
title: "{title}: Why It's Trending and Where to Buy"
date: {date} 00:00:00 +0000
tags: [{tag}, {slug}]
---

TL;DR: "{topic}" is trending today. Here is a quick explainer plus helpful links.

## What is "{topic}"?
Currently seeing a surge in searches — usually due to news, viral clips, or launches.

## Why trending
- Google Trends spike
- Social media buzz
- News or product events

## Helpful links (affiliate)
{links}

---
Disclosure: Some links may be affiliate links.
"#,
        layout = ctx.layout,
        title = escape_quoted(ctx.topic),
        tag = ctx.tag,
        slug = ctx.slug,
        topic = ctx.topic,
        links = render_links(ctx.links),
    )
}

/// Write the rendered post to `dir`, replacing any existing file of the same
/// name. Returns the written path.
pub fn write_post(dir: &Path, ctx: &PostContext, ext: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(naming::post_filename(ctx.date, ctx.slug, ext));
    fs::write(&path, render_post(ctx))?;
    tracing::info!(path = %path.display(), topic = ctx.topic, "wrote post");
    Ok(path)
}
