//! JSON fixture document host
//!
//! Backs the command line with a document described in JSON:
//!
//! ```json
//! {
//!   "nodes": [
//!     { "id": "1:1", "type": "SECTION", "name": "2024-05-01_My Article" },
//!     { "id": "1:2", "type": "FRAME", "name": "Hero", "parent": "1:1",
//!       "width": 1080, "height": 1920 },
//!     { "id": "1:3", "type": "FRAME", "name": "Broken", "parent": "1:1",
//!       "render_error": "Image fill failed to load" }
//!   ],
//!   "selection": ["1:2"]
//! }
//! ```
//!
//! Rendering yields a deterministic placeholder raster that starts with the
//! PNG signature. A node carrying `render_error` fails with that message.

use super::traits::{DocumentHost, RenderSettings};
use crate::domain::{
    ArtboardError, DocumentError, DocumentTree, NodeId, RenderError, Result, TreeNode,
};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

/// Signature every PNG stream starts with
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

#[derive(Debug, Deserialize)]
struct FixtureDocument {
    nodes: Vec<FixtureNode>,
    #[serde(default)]
    selection: Vec<NodeId>,
}

#[derive(Debug, Deserialize)]
struct FixtureNode {
    #[serde(flatten)]
    node: TreeNode,
    #[serde(default)]
    render_error: Option<String>,
}

/// Document host backed by a JSON fixture
#[derive(Debug)]
pub struct FixtureHost {
    tree: DocumentTree,
    selection: RwLock<Vec<NodeId>>,
    render_errors: HashMap<NodeId, String>,
}

impl FixtureHost {
    /// Load a fixture document from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ArtboardError::Io(format!(
                "Failed to read document {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&contents)
    }

    /// Parse a fixture document from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let document: FixtureDocument = serde_json::from_str(json)?;

        let mut render_errors = HashMap::new();
        let mut nodes = Vec::with_capacity(document.nodes.len());
        for fixture in document.nodes {
            if !fixture.node.width.is_finite()
                || !fixture.node.height.is_finite()
                || fixture.node.width < 0.0
                || fixture.node.height < 0.0
            {
                return Err(DocumentError::InvalidNode(format!(
                    "node {} has invalid geometry",
                    fixture.node.id
                ))
                .into());
            }
            if let Some(message) = fixture.render_error {
                render_errors.insert(fixture.node.id.clone(), message);
            }
            nodes.push(fixture.node);
        }

        let tree = DocumentTree::from_nodes(nodes)?;

        tracing::debug!(
            nodes = tree.len(),
            selected = document.selection.len(),
            failing = render_errors.len(),
            "Loaded fixture document"
        );

        Ok(Self {
            tree,
            selection: RwLock::new(document.selection),
            render_errors,
        })
    }

    fn placeholder_raster(node: &TreeNode, settings: &RenderSettings) -> Vec<u8> {
        let width = (node.width * settings.scale).round() as u64;
        let height = (node.height * settings.scale).round() as u64;
        let body = format!(
            "{}:{}x{}@{}:{}",
            node.id, width, height, settings.scale, settings.format
        );

        let mut bytes = Vec::with_capacity(PNG_SIGNATURE.len() + body.len());
        bytes.extend_from_slice(&PNG_SIGNATURE);
        bytes.extend_from_slice(body.as_bytes());
        bytes
    }
}

#[async_trait]
impl DocumentHost for FixtureHost {
    fn document(&self) -> &DocumentTree {
        &self.tree
    }

    fn selection(&self) -> Vec<NodeId> {
        match self.selection.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn set_selection(&self, selection: Vec<NodeId>) {
        let mut guard = match self.selection.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = selection;
    }

    async fn render(
        &self,
        node_id: &NodeId,
        settings: &RenderSettings,
    ) -> std::result::Result<Vec<u8>, RenderError> {
        if let Some(message) = self.render_errors.get(node_id) {
            return Err(RenderError::new(message.clone()).with_node(node_id.clone()));
        }

        let node = self.tree.get(node_id).ok_or_else(|| {
            RenderError::new(format!("Node {node_id} does not exist")).with_node(node_id.clone())
        })?;

        Ok(Self::placeholder_raster(node, settings))
    }
}
