//! Section resolution and section name parsing
//!
//! Sections are named `"<date>_<article-title>"`. Names that do not follow
//! the convention degrade to default tokens instead of failing.

use super::slug::slugify;
use crate::domain::{DocumentTree, NodeId, TreeNode};
use serde::Serialize;

/// Date token used when a section name carries no date
pub const UNKNOWN_DATE: &str = "unknown-date";

/// Article text used when a section name carries no title
pub const UNTITLED: &str = "untitled";

/// Date and article slug parsed from a section name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedSectionName {
    /// Raw date segment (not normalized)
    pub date: String,

    /// Slugged article title
    pub article_slug: String,
}

/// Finds the nearest enclosing section of a node, the node itself included
pub fn nearest_section<'a>(tree: &'a DocumentTree, node_id: &NodeId) -> Option<&'a TreeNode> {
    tree.ancestors(node_id).find(|node| node.kind.is_section())
}

/// Parses a section name into its date and article slug
///
/// The name is split on `_`: the first segment is the date, the rest is
/// rejoined with `_` and slugged. Missing pieces fall back to
/// [`UNKNOWN_DATE`] and [`UNTITLED`].
///
/// # Examples
///
/// ```
/// use artboard::core::naming::parse_section_name;
///
/// let parsed = parse_section_name(Some("2024-05-01_My Great Article"));
/// assert_eq!(parsed.date, "2024-05-01");
/// assert_eq!(parsed.article_slug, "my-great-article");
///
/// let parsed = parse_section_name(None);
/// assert_eq!(parsed.date, "unknown-date");
/// assert_eq!(parsed.article_slug, "untitled");
/// ```
pub fn parse_section_name(name: Option<&str>) -> ParsedSectionName {
    let name = match name {
        Some(name) if !name.is_empty() => name,
        _ => {
            return ParsedSectionName {
                date: UNKNOWN_DATE.to_string(),
                article_slug: UNTITLED.to_string(),
            }
        }
    };

    let (date, rest) = match name.split_once('_') {
        Some((date, rest)) => (date, rest),
        None => (name, ""),
    };

    let date = if date.is_empty() { UNKNOWN_DATE } else { date };
    let title = if rest.is_empty() { UNTITLED } else { rest };

    ParsedSectionName {
        date: date.to_string(),
        article_slug: slugify(title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NodeKind;
    use test_case::test_case;

    fn parsed(date: &str, article_slug: &str) -> ParsedSectionName {
        ParsedSectionName {
            date: date.to_string(),
            article_slug: article_slug.to_string(),
        }
    }

    #[test]
    fn test_parse_missing_name() {
        assert_eq!(parse_section_name(None), parsed("unknown-date", "untitled"));
        assert_eq!(parse_section_name(Some("")), parsed("unknown-date", "untitled"));
    }

    #[test_case("2024-05-01_My Great Article", "2024-05-01", "my-great-article" ; "conventional")]
    #[test_case("2024-05-01_Part_Two", "2024-05-01", "part-two" ; "title with underscores")]
    #[test_case("2024-05-01", "2024-05-01", "untitled" ; "date only")]
    #[test_case("2024-05-01_", "2024-05-01", "untitled" ; "trailing underscore")]
    #[test_case("_Orphan Title", "unknown-date", "orphan-title" ; "missing date")]
    #[test_case("_", "unknown-date", "untitled" ; "bare underscore")]
    #[test_case("2024-05-01_!!!", "2024-05-01", "" ; "title without slug characters")]
    fn test_parse_section_name(name: &str, date: &str, slug: &str) {
        assert_eq!(parse_section_name(Some(name)), parsed(date, slug));
    }

    fn tree() -> DocumentTree {
        let node = |id: &str, kind: NodeKind, name: &str, parent: Option<&str>| {
            let mut b = TreeNode::builder().id(id).unwrap().kind(kind).name(name);
            if let Some(p) = parent {
                b = b.parent(p).unwrap();
            }
            b.build().unwrap()
        };
        DocumentTree::from_nodes(vec![
            node("outer", NodeKind::Section, "2024-01-01_Outer", None),
            node("inner", NodeKind::Section, "2024-02-02_Inner", Some("outer")),
            node("frame", NodeKind::Frame, "Feed", Some("inner")),
            node("text", NodeKind::Other, "Caption", Some("frame")),
            node("loose", NodeKind::Frame, "Loose", None),
        ])
        .unwrap()
    }

    #[test]
    fn test_nearest_section_picks_innermost() {
        let tree = tree();
        let id = NodeId::new("text").unwrap();
        let section = nearest_section(&tree, &id).unwrap();
        assert_eq!(section.id.as_str(), "inner");
    }

    #[test]
    fn test_nearest_section_is_inclusive() {
        let tree = tree();
        let id = NodeId::new("outer").unwrap();
        assert_eq!(nearest_section(&tree, &id).unwrap().id.as_str(), "outer");
    }

    #[test]
    fn test_nearest_section_none() {
        let tree = tree();
        let id = NodeId::new("loose").unwrap();
        assert!(nearest_section(&tree, &id).is_none());
    }
}
