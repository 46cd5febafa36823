//! Domain error types
//!
//! This module defines the error hierarchy for Artboard. Errors raised by the
//! host document provider are carried as plain messages so no host types leak
//! into the domain.

use super::ids::NodeId;
use thiserror::Error;

/// Main Artboard error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum ArtboardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Malformed document tree
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Rendering collaborator failures
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors describing an inconsistent document tree
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// Two nodes share the same identifier
    #[error("Duplicate node id: {0}")]
    DuplicateNode(NodeId),

    /// A node refers to a parent that is not part of the tree
    #[error("Node {node} refers to unknown parent {parent}")]
    DanglingParent { node: NodeId, parent: NodeId },

    /// The parent chain starting at this node never terminates
    #[error("Parent chain of node {0} contains a cycle")]
    Cycle(NodeId),

    /// A node failed basic validation (empty id, negative size, ...)
    #[error("Invalid node: {0}")]
    InvalidNode(String),
}

/// Failure reported by the host while rendering a node to raster bytes
///
/// The display form is the host's message verbatim; it is what the
/// presentation layer shows when an export preview aborts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RenderError {
    /// Node that failed to render, when known
    pub node_id: Option<NodeId>,

    /// Host-provided error message
    pub message: String,
}

impl RenderError {
    /// Creates a render error without node context
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            node_id: None,
            message: message.into(),
        }
    }

    /// Attaches the node that failed to render
    pub fn with_node(mut self, node_id: NodeId) -> Self {
        self.node_id = Some(node_id);
        self
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for ArtboardError {
    fn from(err: std::io::Error) -> Self {
        ArtboardError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ArtboardError {
    fn from(err: serde_json::Error) -> Self {
        ArtboardError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ArtboardError {
    fn from(err: toml::de::Error) -> Self {
        ArtboardError::Configuration(format!("TOML parse error: {err}"))
    }
}
