//! Document tree node model
//!
//! A read-only view of the nodes the host document exposes: a kind tag, a
//! name, a parent reference and the node's geometry.

use super::ids::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind tag of a document node
///
/// Only the kinds the naming engine distinguishes are modelled; every other
/// host node type maps to [`NodeKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    /// Named grouping container carrying date and article identity
    Section,
    /// Top-level frame
    Frame,
    /// Component definition
    Component,
    /// Component instance
    Instance,
    /// Any other node type (text, vector, group, ...)
    #[serde(other)]
    Other,
}

impl NodeKind {
    /// Whether nodes of this kind can be rendered as an export target
    pub fn is_exportable(self) -> bool {
        match self {
            NodeKind::Frame | NodeKind::Component | NodeKind::Instance => true,
            NodeKind::Section | NodeKind::Other => false,
        }
    }

    /// Whether nodes of this kind group exportables for naming
    pub fn is_section(self) -> bool {
        match self {
            NodeKind::Section => true,
            NodeKind::Frame | NodeKind::Component | NodeKind::Instance | NodeKind::Other => false,
        }
    }

    /// Host type tag for this kind
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Section => "SECTION",
            NodeKind::Frame => "FRAME",
            NodeKind::Component => "COMPONENT",
            NodeKind::Instance => "INSTANCE",
            NodeKind::Other => "OTHER",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of the host document
///
/// # Examples
///
/// ```
/// use artboard::domain::node::{NodeBuilder, NodeKind};
///
/// let frame = NodeBuilder::new()
///     .id("2:1").unwrap()
///     .kind(NodeKind::Frame)
///     .name("Hero story")
///     .parent("1:1").unwrap()
///     .size(1080.0, 1920.0)
///     .build()
///     .unwrap();
/// assert!(frame.kind.is_exportable());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Stable identity of the node
    pub id: NodeId,

    /// Kind tag
    #[serde(rename = "type")]
    pub kind: NodeKind,

    /// Display name as shown in the host document
    #[serde(default)]
    pub name: String,

    /// Parent node, `None` for nodes attached directly to the page
    #[serde(default)]
    pub parent: Option<NodeId>,

    /// Width in document units
    #[serde(default)]
    pub width: f64,

    /// Height in document units
    #[serde(default)]
    pub height: f64,
}

impl TreeNode {
    /// Creates a new builder for constructing a TreeNode
    pub fn builder() -> NodeBuilder {
        NodeBuilder::default()
    }
}

/// Builder for constructing TreeNode instances
#[derive(Debug, Default)]
pub struct NodeBuilder {
    id: Option<NodeId>,
    kind: Option<NodeKind>,
    name: String,
    parent: Option<NodeId>,
    width: f64,
    height: f64,
}

impl NodeBuilder {
    /// Creates a new NodeBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the node ID
    pub fn id(mut self, id: impl Into<String>) -> Result<Self, String> {
        self.id = Some(NodeId::new(id)?);
        Ok(self)
    }

    /// Sets the node kind
    pub fn kind(mut self, kind: NodeKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the node name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the parent node ID
    pub fn parent(mut self, parent: impl Into<String>) -> Result<Self, String> {
        self.parent = Some(NodeId::new(parent)?);
        Ok(self)
    }

    /// Sets width and height
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Builds the TreeNode
    ///
    /// # Errors
    ///
    /// Returns an error if the id or kind is missing, or the geometry is
    /// negative or not finite
    pub fn build(self) -> Result<TreeNode, String> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err("width and height must be finite".to_string());
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err("width and height cannot be negative".to_string());
        }
        Ok(TreeNode {
            id: self.id.ok_or("id is required")?,
            kind: self.kind.ok_or("kind is required")?,
            name: self.name,
            parent: self.parent,
            width: self.width,
            height: self.height,
        })
    }
}
