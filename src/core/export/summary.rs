//! Export preview summary and reporting

use crate::core::export::coordinator::PlannedExport;
use crate::domain::Variant;
use std::time::Duration;

/// Summary of a successful export preview
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewSummary {
    /// Number of rendered items
    pub total_items: usize,

    /// Items classified as stories
    pub story_items: usize,

    /// Items classified as feed posts
    pub feed_items: usize,

    /// Items outside any section
    pub unsectioned_items: usize,

    /// Distinct (section, variant) groups
    pub groups: usize,

    /// Total rendered bytes
    pub total_bytes: usize,

    /// Duration of the preview
    pub duration: Duration,
}

impl PreviewSummary {
    /// Create a new empty summary
    pub fn new() -> Self {
        Self {
            total_items: 0,
            story_items: 0,
            feed_items: 0,
            unsectioned_items: 0,
            groups: 0,
            total_bytes: 0,
            duration: Duration::from_secs(0),
        }
    }

    /// Tally a plan
    pub fn from_plan(plan: &[PlannedExport]) -> Self {
        let mut summary = Self::new();
        for planned in plan {
            summary.add_planned(planned);
        }
        summary
    }

    /// Tally a single planned export
    pub fn add_planned(&mut self, planned: &PlannedExport) {
        self.total_items += 1;
        match planned.variant {
            Variant::Story => self.story_items += 1,
            Variant::Feed => self.feed_items += 1,
        }
        if planned.section_id.is_none() {
            self.unsectioned_items += 1;
        }
        // Every group hands out index 1 exactly once
        if planned.index == 1 {
            self.groups += 1;
        }
    }

    /// Set the rendered byte total
    pub fn with_bytes(mut self, total_bytes: usize) -> Self {
        self.total_bytes = total_bytes;
        self
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total_items = self.total_items,
            story_items = self.story_items,
            feed_items = self.feed_items,
            unsectioned_items = self.unsectioned_items,
            groups = self.groups,
            total_bytes = self.total_bytes,
            duration_ms = self.duration.as_millis() as u64,
            "Export preview summary"
        );
    }
}

impl Default for PreviewSummary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NodeId;

    fn planned(id: &str, section: Option<&str>, variant: Variant, index: u32) -> PlannedExport {
        PlannedExport {
            node_id: NodeId::new(id).unwrap(),
            section_id: section.map(|s| NodeId::new(s).unwrap()),
            section_name: section.unwrap_or("NoSection").to_string(),
            variant,
            index,
            filename: format!("{id}.png"),
            virtual_path: format!("x/{variant}/{id}.png"),
        }
    }

    #[test]
    fn test_summary_creation() {
        let summary = PreviewSummary::new();
        assert_eq!(summary.total_items, 0);
        assert_eq!(summary.total_bytes, 0);
        assert_eq!(summary.groups, 0);
        assert_eq!(summary.duration, Duration::from_secs(0));
    }

    #[test]
    fn test_summary_from_plan() {
        let summary = PreviewSummary::from_plan(&[
            planned("a", Some("s1"), Variant::Story, 1),
            planned("b", Some("s2"), Variant::Feed, 1),
            planned("c", Some("s1"), Variant::Story, 2),
            planned("d", None, Variant::Feed, 1),
        ])
        .with_bytes(20);

        assert_eq!(summary.total_items, 4);
        assert_eq!(summary.story_items, 2);
        assert_eq!(summary.feed_items, 2);
        assert_eq!(summary.unsectioned_items, 1);
        assert_eq!(summary.groups, 3);
        assert_eq!(summary.total_bytes, 20);
    }

    #[test]
    fn test_unsectioned_counts_by_section_id_not_name() {
        let mut lookalike = planned("e", Some("s3"), Variant::Story, 1);
        lookalike.section_name = "NoSection".to_string();

        let summary = PreviewSummary::from_plan(&[lookalike]);
        assert_eq!(summary.unsectioned_items, 0);
    }

    #[test]
    fn test_summary_with_duration() {
        let summary = PreviewSummary::new().with_duration(Duration::from_millis(250));
        assert_eq!(summary.duration, Duration::from_millis(250));
    }
}
