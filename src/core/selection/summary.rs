//! Selection summary shown to the presentation layer

use super::resolver::top_exportable;
use crate::core::naming::nearest_section;
use crate::domain::{DocumentTree, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Counts and section names describing the current selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSummary {
    /// Number of selected nodes
    pub nodes: usize,

    /// Number of selected nodes that resolve to an exportable
    ///
    /// Not deduplicated: two layers of the same frame count twice.
    pub frames: usize,

    /// Raw names of the distinct sections touched by the selection
    ///
    /// Distinct sections sharing a name are listed once each.
    pub sections: Vec<String>,
}

/// Summarizes a selection for display
pub fn summarize_selection(tree: &DocumentTree, selection: &[NodeId]) -> SelectionSummary {
    let mut frames = 0;
    let mut seen_sections: HashSet<&NodeId> = HashSet::new();
    let mut sections = Vec::new();

    for selected in selection {
        if top_exportable(tree, selected).is_some() {
            frames += 1;
        }
        if let Some(section) = nearest_section(tree, selected) {
            if seen_sections.insert(&section.id) {
                sections.push(section.name.clone());
            }
        }
    }

    SelectionSummary {
        nodes: selection.len(),
        frames,
        sections,
    }
}
