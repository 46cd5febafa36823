//! Domain models and types for Artboard.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Identifiers** ([`NodeId`])
//! - **Document model** ([`TreeNode`], [`NodeKind`], [`DocumentTree`])
//! - **Layout variants** ([`Variant`])
//! - **Error types** ([`ArtboardError`], [`DocumentError`], [`RenderError`])
//! - **Result type alias** ([`Result`])
//!
//! The document tree is an arena: nodes reference their parent by id, and
//! every ancestor walk is a lookup rather than a pointer chase.
//!
//! ```rust
//! use artboard::domain::{DocumentTree, NodeId, NodeKind, TreeNode};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let section = TreeNode::builder()
//!     .id("1:1")?
//!     .kind(NodeKind::Section)
//!     .name("2024-05-01_My Great Article")
//!     .build()?;
//! let frame = TreeNode::builder()
//!     .id("1:2")?
//!     .kind(NodeKind::Frame)
//!     .name("Story 1")
//!     .parent("1:1")?
//!     .size(1080.0, 1920.0)
//!     .build()?;
//!
//! let tree = DocumentTree::from_nodes(vec![section, frame])?;
//! let chain: Vec<&str> = tree
//!     .ancestors(&NodeId::new("1:2")?)
//!     .map(|n| n.id.as_str())
//!     .collect();
//! assert_eq!(chain, vec!["1:2", "1:1"]);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod ids;
pub mod node;
pub mod result;
pub mod tree;
pub mod variant;

// Re-export commonly used types for convenience
pub use errors::{ArtboardError, DocumentError, RenderError};
pub use ids::NodeId;
pub use node::{NodeBuilder, NodeKind, TreeNode};
pub use result::Result;
pub use tree::DocumentTree;
pub use variant::Variant;
