//! Arena-backed document tree
//!
//! Nodes are stored by identifier and refer to their parent by id, so every
//! upward walk is a sequence of map lookups. Walks are bounded by the number
//! of nodes in the arena, which keeps them finite even if a host hands us a
//! cyclic parent chain.

use super::errors::DocumentError;
use super::ids::NodeId;
use super::node::TreeNode;
use std::collections::{HashMap, HashSet};

/// Read-only document tree addressed by [`NodeId`]
#[derive(Debug, Clone, Default)]
pub struct DocumentTree {
    nodes: HashMap<NodeId, TreeNode>,
}

impl DocumentTree {
    /// Creates an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree from a list of nodes and validates it
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate ids, dangling parent references or
    /// cyclic parent chains.
    pub fn from_nodes(nodes: impl IntoIterator<Item = TreeNode>) -> Result<Self, DocumentError> {
        let mut tree = Self::new();
        for node in nodes {
            tree.insert(node)?;
        }
        tree.validate()?;
        Ok(tree)
    }

    /// Adds a node to the arena
    ///
    /// Parents may be inserted after their children; call [`validate`] once
    /// the tree is complete.
    ///
    /// [`validate`]: DocumentTree::validate
    pub fn insert(&mut self, node: TreeNode) -> Result<(), DocumentError> {
        if self.nodes.contains_key(&node.id) {
            return Err(DocumentError::DuplicateNode(node.id));
        }
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    /// Looks up a node by id
    pub fn get(&self, id: &NodeId) -> Option<&TreeNode> {
        self.nodes.get(id)
    }

    /// Whether the tree contains the given id
    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over a node and its ancestors, nearest first
    ///
    /// The node itself is yielded first. Unknown ids yield nothing.
    pub fn ancestors<'a>(&'a self, id: &NodeId) -> Ancestors<'a> {
        Ancestors {
            tree: self,
            next: self.get(id),
            remaining: self.nodes.len(),
        }
    }

    /// Checks that every parent reference resolves and no chain loops
    pub fn validate(&self) -> Result<(), DocumentError> {
        for node in self.nodes.values() {
            if let Some(parent) = &node.parent {
                if !self.nodes.contains_key(parent) {
                    return Err(DocumentError::DanglingParent {
                        node: node.id.clone(),
                        parent: parent.clone(),
                    });
                }
            }
        }

        // Nodes whose chain is known to reach a root
        let mut terminated: HashSet<&NodeId> = HashSet::new();
        for start in self.nodes.keys() {
            let mut visited: Vec<&NodeId> = Vec::new();
            let mut current = Some(start);
            while let Some(id) = current {
                if terminated.contains(id) {
                    break;
                }
                if visited.contains(&id) {
                    return Err(DocumentError::Cycle(start.clone()));
                }
                visited.push(id);
                current = self.nodes.get(id).and_then(|n| n.parent.as_ref());
            }
            terminated.extend(visited);
        }

        Ok(())
    }
}

/// Iterator over a node and its ancestors, see [`DocumentTree::ancestors`]
pub struct Ancestors<'a> {
    tree: &'a DocumentTree,
    next: Option<&'a TreeNode>,
    remaining: usize,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next.take()?;
        self.remaining -= 1;
        self.next = current
            .parent
            .as_ref()
            .and_then(|parent| self.tree.get(parent));
        Some(current)
    }
}
