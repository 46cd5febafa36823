//! Mapping selected nodes to their top exportable
//!
//! Selecting a text layer inside a frame exports the frame. Several selected
//! descendants of the same frame export it once, at the position of the
//! first of them.

use crate::domain::{DocumentTree, NodeId, TreeNode};
use std::collections::HashSet;

/// Returns the nearest exportable of a node, the node itself included
pub fn top_exportable<'a>(tree: &'a DocumentTree, node_id: &NodeId) -> Option<&'a TreeNode> {
    tree.ancestors(node_id).find(|node| node.kind.is_exportable())
}

/// Resolves a selection to its deduplicated exportables, in first-seen order
///
/// Selected nodes without an exportable ancestor, and ids the tree does not
/// know, contribute nothing.
pub fn resolve_exportables(tree: &DocumentTree, selection: &[NodeId]) -> Vec<NodeId> {
    let mut seen: HashSet<&NodeId> = HashSet::new();
    let mut exportables = Vec::new();

    for selected in selection {
        match top_exportable(tree, selected) {
            Some(node) => {
                if seen.insert(&node.id) {
                    exportables.push(node.id.clone());
                }
            }
            None => {
                tracing::debug!(
                    node_id = %selected,
                    known = tree.contains(selected),
                    "Selected node has no exportable ancestor"
                );
            }
        }
    }

    exportables
}
