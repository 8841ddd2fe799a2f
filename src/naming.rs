//! Slug and filename conventions for generated posts.
//!
//! Every post lands in the posts directory as `YYYY-MM-DD-{slug}.{ext}`, the
//! layout Jekyll-style generators expect for dated blog entries. The slug is
//! derived from the topic text alone, so the same topic on the same day always
//! maps to the same file:
//!
//! - `"What's New: Tech & Gadgets?"` → `whats-new-tech-gadgets`
//! - `"Air Fryer Recipes"` → `air-fryer-recipes`
//! - `"???"` → `trend` (nothing left after stripping)
//!
//! ## Character handling
//!
//! Only a fixed punctuation set is removed (see [`STRIPPED_CHARS`]). Other
//! characters, including non-ASCII letters, pass through lowercased. Length is
//! capped in characters, not bytes.

use chrono::NaiveDate;

/// Maximum slug length in characters.
pub const MAX_SLUG_LEN: usize = 60;

/// Slug used when a topic normalizes to nothing.
pub const FALLBACK_SLUG: &str = "trend";

/// Characters removed from topics before hyphenation.
pub const STRIPPED_CHARS: &[char] = &[
    '&', '/', '?', ':', '#', '\'', '"', ',', '.', '(', ')', '[', ']',
];

/// Normalize a topic into a filesystem- and URL-safe slug.
///
/// Lowercases, strips [`STRIPPED_CHARS`], joins whitespace-separated words with
/// `-`, and truncates to [`MAX_SLUG_LEN`] characters. Never returns an empty
/// string.
pub fn slugify(topic: &str) -> String {
    let lowered: String = topic
        .to_lowercase()
        .chars()
        .filter(|c| !STRIPPED_CHARS.contains(c))
        .collect();
    let slug: String = lowered
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .take(MAX_SLUG_LEN)
        .collect();
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Build the post filename: `YYYY-MM-DD-{slug}.{ext}`.
pub fn post_filename(date: NaiveDate, slug: &str, ext: &str) -> String {
    format!("{}-{}.{}", date.format("%Y-%m-%d"), slug, ext)
}
