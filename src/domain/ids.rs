//! Domain identifier types with validation
//!
//! Node identifiers are opaque strings handed out by the host document
//! (for example `"12:34"`). They are compared by value and are the only way
//! nodes refer to each other.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Document node identifier newtype wrapper
///
/// # Examples
///
/// ```
/// use artboard::domain::ids::NodeId;
/// use std::str::FromStr;
///
/// let id = NodeId::from_str("12:34").unwrap();
/// assert_eq!(id.as_str(), "12:34");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeId(String);

impl NodeId {
    /// Creates a new NodeId from a string
    ///
    /// # Returns
    ///
    /// Returns `Ok(NodeId)` if the ID is non-blank, `Err` otherwise
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Node ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the node ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for NodeId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Parses a comma-separated list of node IDs, skipping blank entries
pub fn parse_node_id_list(input: &str) -> Result<Vec<NodeId>, String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(NodeId::from_str)
        .collect()
}
