//! Host document abstraction
//!
//! This module defines the trait a host document provider implements so the
//! export engine can read the tree, read the selection and render nodes.

use crate::domain::{DocumentTree, NodeId, RenderError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raster format requested from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Portable Network Graphics
    #[default]
    Png,
}

impl ImageFormat {
    /// Lowercase format name
    pub fn as_str(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings passed to every render call of one export preview
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Output format
    pub format: ImageFormat,

    /// Scale constraint relative to the node's own size
    pub scale: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            format: ImageFormat::Png,
            scale: 1.0,
        }
    }
}

/// Host document provider
///
/// Implementations expose a read-only document and render nodes on demand.
/// The engine never mutates the document; only the selection is replaced
/// when the host reports a change.
#[async_trait]
pub trait DocumentHost: Send + Sync {
    /// The current document tree
    fn document(&self) -> &DocumentTree;

    /// Ids of the currently selected nodes, in selection order
    fn selection(&self) -> Vec<NodeId>;

    /// Replace the current selection
    fn set_selection(&self, selection: Vec<NodeId>);

    /// Render a node to raster bytes
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] carrying the host's message when the node
    /// cannot be rendered.
    async fn render(
        &self,
        node_id: &NodeId,
        settings: &RenderSettings,
    ) -> Result<Vec<u8>, RenderError>;
}
