//! Slug normalization

use regex::Regex;
use std::sync::LazyLock;

static NON_SLUG_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug pattern is valid"));

/// Normalizes arbitrary text into a slug
///
/// Trims surrounding whitespace, lowercases, collapses every run of
/// characters outside `[a-z0-9]` into a single `-` and strips a leading or
/// trailing `-`. Never fails; text without any ASCII letter or digit yields
/// an empty string.
///
/// # Examples
///
/// ```
/// use artboard::core::naming::slugify;
///
/// assert_eq!(slugify("  My Great Article! "), "my-great-article");
/// assert_eq!(slugify("***"), "");
/// ```
pub fn slugify(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    let collapsed = NON_SLUG_RUN.replace_all(&lowered, "-");
    let slug = collapsed.strip_prefix('-').unwrap_or(&collapsed);
    let slug = slug.strip_suffix('-').unwrap_or(slug);
    slug.to_string()
}
