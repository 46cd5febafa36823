//! Selection handling
//!
//! - [`resolver`] - maps selected nodes to deduplicated exportables
//! - [`summary`] - counts and section names for the presentation layer

pub mod resolver;
pub mod summary;

pub use resolver::{resolve_exportables, top_exportable};
pub use summary::{summarize_selection, SelectionSummary};
