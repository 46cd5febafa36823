//! Layout variant of an exportable

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Layout classification of an exportable
///
/// `Story` is a tall, vertical layout; `Feed` is the standard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Variant {
    /// Tall vertical layout
    Story,
    /// Standard layout
    Feed,
}

impl Variant {
    /// Uppercase label used in virtual paths and messages
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Story => "STORY",
            Variant::Feed => "FEED",
        }
    }

    /// Lowercase token used in filenames
    pub fn as_lowercase(self) -> &'static str {
        match self {
            Variant::Story => "story",
            Variant::Feed => "feed",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "story" => Ok(Variant::Story),
            "feed" => Ok(Variant::Feed),
            other => Err(format!("Unknown variant '{other}'. Must be one of: story, feed")),
        }
    }
}
