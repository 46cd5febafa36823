//! Variant classification of exportables
//!
//! Explicit naming wins over geometry: a name mentioning `story` or `feed`
//! decides the variant, otherwise a tall aspect ratio means [`Variant::Story`].
//! The aspect heuristic is approximate and borderline ratios may be
//! misclassified.

use crate::domain::{TreeNode, Variant};

/// Height-to-width ratio above which an unnamed exportable is a story
pub const STORY_ASPECT_THRESHOLD: f64 = 1.15;

const STORY_MARKER: &str = "story";
const FEED_MARKER: &str = "feed";

/// Infers the layout variant of an exportable node
///
/// # Examples
///
/// ```
/// use artboard::core::classify::infer_variant;
/// use artboard::domain::{NodeKind, TreeNode, Variant};
///
/// let card = TreeNode::builder()
///     .id("1:1").unwrap()
///     .kind(NodeKind::Frame)
///     .name("Card")
///     .size(800.0, 1000.0)
///     .build()
///     .unwrap();
/// assert_eq!(infer_variant(&card), Variant::Story);
/// ```
pub fn infer_variant(node: &TreeNode) -> Variant {
    let name = node.name.to_lowercase();
    if name.contains(STORY_MARKER) {
        return Variant::Story;
    }
    if name.contains(FEED_MARKER) {
        return Variant::Feed;
    }
    classify_by_aspect(node.width, node.height)
}

/// Geometry fallback used when the name carries no variant marker
pub fn classify_by_aspect(width: f64, height: f64) -> Variant {
    if height > width * STORY_ASPECT_THRESHOLD {
        Variant::Story
    } else {
        Variant::Feed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NodeKind;
    use test_case::test_case;

    fn frame(name: &str, width: f64, height: f64) -> TreeNode {
        TreeNode::builder()
            .id("f")
            .unwrap()
            .kind(NodeKind::Frame)
            .name(name)
            .size(width, height)
            .build()
            .unwrap()
    }

    #[test_case("Instagram Story", 1080.0, 1080.0, Variant::Story ; "story marker beats square geometry")]
    #[test_case("STORY-cover", 1080.0, 1080.0, Variant::Story ; "marker is case insensitive")]
    #[test_case("Feed post", 1080.0, 1920.0, Variant::Feed ; "feed marker beats tall geometry")]
    #[test_case("story for feed", 1080.0, 1080.0, Variant::Story ; "story marker checked first")]
    #[test_case("Card", 800.0, 1000.0, Variant::Story ; "ratio 1.25 is tall")]
    #[test_case("Card", 800.0, 900.0, Variant::Feed ; "ratio 1.125 is standard")]
    #[test_case("Card", 1000.0, 1150.0, Variant::Feed ; "ratio exactly at threshold is standard")]
    #[test_case("Card", 1920.0, 1080.0, Variant::Feed ; "landscape")]
    #[test_case("Card", 0.0, 0.0, Variant::Feed ; "zero size")]
    #[test_case("Card", 0.0, 10.0, Variant::Story ; "zero width")]
    fn test_infer_variant(name: &str, width: f64, height: f64, expected: Variant) {
        assert_eq!(infer_variant(&frame(name, width, height)), expected);
    }
}
