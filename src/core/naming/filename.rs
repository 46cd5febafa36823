//! Filename and virtual path construction
//!
//! Filenames follow `<date>_<article-slug>_<variant>_<index>.png`; virtual
//! paths prefix them with `<section>/<VARIANT>/`. Nothing here touches the
//! filesystem.

use crate::domain::Variant;

/// Section display label used when an exportable has no enclosing section
pub const NO_SECTION_LABEL: &str = "NoSection";

/// Extension of rendered artifacts
pub const FILE_EXTENSION: &str = "png";

/// Inputs of [`build_filename`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilenameParts<'a> {
    pub date: &'a str,
    pub article_slug: &'a str,
    pub variant: Variant,
    pub index: u32,
}

/// Builds the canonical filename of an exported artifact
///
/// # Examples
///
/// ```
/// use artboard::core::naming::{build_filename, FilenameParts};
/// use artboard::domain::Variant;
///
/// let name = build_filename(&FilenameParts {
///     date: "2024-05-01",
///     article_slug: "my-article",
///     variant: Variant::Story,
///     index: 3,
/// });
/// assert_eq!(name, "2024-05-01_my-article_story_3.png");
/// ```
pub fn build_filename(parts: &FilenameParts<'_>) -> String {
    format!(
        "{}_{}_{}_{}.{}",
        parts.date,
        parts.article_slug,
        parts.variant.as_lowercase(),
        parts.index,
        FILE_EXTENSION
    )
}

/// Builds the virtual path `<section>/<VARIANT>/<filename>`
///
/// `section_name` is the raw section name, or `None` for exportables outside
/// any section, which are filed under [`NO_SECTION_LABEL`].
pub fn build_virtual_path(section_name: Option<&str>, variant: Variant, filename: &str) -> String {
    let section = section_name.unwrap_or(NO_SECTION_LABEL);
    format!("{section}/{variant}/{filename}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filename_exact() {
        let name = build_filename(&FilenameParts {
            date: "2024-05-01",
            article_slug: "my-article",
            variant: Variant::Story,
            index: 3,
        });
        assert_eq!(name, "2024-05-01_my-article_story_3.png");
    }

    #[test]
    fn test_build_filename_no_zero_padding() {
        let name = build_filename(&FilenameParts {
            date: "unknown-date",
            article_slug: "untitled",
            variant: Variant::Feed,
            index: 12,
        });
        assert_eq!(name, "unknown-date_untitled_feed_12.png");
    }

    #[test]
    fn test_build_virtual_path_with_section() {
        let path = build_virtual_path(
            Some("2024-05-01_My Article"),
            Variant::Feed,
            "2024-05-01_my-article_feed_1.png",
        );
        assert_eq!(
            path,
            "2024-05-01_My Article/FEED/2024-05-01_my-article_feed_1.png"
        );
    }

    #[test]
    fn test_build_virtual_path_without_section() {
        let path = build_virtual_path(None, Variant::Story, "unknown-date_untitled_story_1.png");
        assert_eq!(path, "NoSection/STORY/unknown-date_untitled_story_1.png");
    }
}
