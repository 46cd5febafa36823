//! Canonical naming of exported artifacts
//!
//! - [`slug`] - string to URL-safe slug normalization
//! - [`section`] - enclosing section lookup and section name parsing
//! - [`filename`] - filename and virtual path construction
//!
//! # Example
//!
//! ```rust
//! use artboard::core::naming::{build_filename, parse_section_name, FilenameParts};
//! use artboard::domain::Variant;
//!
//! let parsed = parse_section_name(Some("2024-05-01_My Article"));
//! let filename = build_filename(&FilenameParts {
//!     date: &parsed.date,
//!     article_slug: &parsed.article_slug,
//!     variant: Variant::Story,
//!     index: 3,
//! });
//! assert_eq!(filename, "2024-05-01_my-article_story_3.png");
//! ```

pub mod filename;
pub mod section;
pub mod slug;

pub use filename::{build_filename, build_virtual_path, FilenameParts, NO_SECTION_LABEL};
pub use section::{nearest_section, parse_section_name, ParsedSectionName};
pub use slug::slugify;
