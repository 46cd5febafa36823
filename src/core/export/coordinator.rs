//! Export coordinator - orchestrates one export preview
//!
//! An export preview runs in two phases. Planning is pure: the selection is
//! resolved to exportables and every exportable gets its section, variant,
//! sequence index and names. Rendering then walks the plan in order, one
//! render call at a time. The first render failure aborts the invocation and
//! nothing is returned for the exportables that did render.

use crate::adapters::host::{DocumentHost, RenderSettings};
use crate::core::classify::infer_variant;
use crate::core::export::item::ExportItem;
use crate::core::export::sequencer::{GroupKey, SectionKey, Sequencer};
use crate::core::export::summary::PreviewSummary;
use crate::core::naming::{
    build_filename, build_virtual_path, nearest_section, parse_section_name, FilenameParts,
    NO_SECTION_LABEL,
};
use crate::core::selection::resolve_exportables;
use crate::domain::{DocumentTree, NodeId, RenderError, Variant};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::Instrument;
use uuid::Uuid;

/// Failure of an export preview
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PreviewError {
    /// The selection resolved to no exportable
    #[error("No frames selected.")]
    NothingSelected,

    /// The host failed to render an exportable
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Names and grouping computed for one exportable before rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedExport {
    pub node_id: NodeId,

    /// Enclosing section, `None` outside any section
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<NodeId>,

    /// Raw section name, [`NO_SECTION_LABEL`] outside any section
    pub section_name: String,
    pub variant: Variant,
    pub index: u32,
    pub filename: String,
    pub virtual_path: String,
}

impl PlannedExport {
    /// Attaches rendered bytes, producing the final item
    pub fn into_item(self, bytes: Vec<u8>) -> ExportItem {
        ExportItem {
            node_id: self.node_id,
            section_name: self.section_name,
            variant: self.variant,
            index: self.index,
            filename: self.filename,
            virtual_path: self.virtual_path,
            bytes,
        }
    }
}

/// Plans the exports of a selection without rendering anything
///
/// Output order follows the first-seen order of the resolved exportables.
/// Sequence numbers are scoped to this call.
pub fn plan_exports(tree: &DocumentTree, selection: &[NodeId]) -> Vec<PlannedExport> {
    let mut sequencer = Sequencer::new();

    resolve_exportables(tree, selection)
        .into_iter()
        .filter_map(|node_id| tree.get(&node_id))
        .map(|node| {
            let section = nearest_section(tree, &node.id);
            let section_name = section.map(|s| s.name.as_str());
            let parsed = parse_section_name(section_name);
            let variant = infer_variant(node);

            let key = GroupKey::new(
                SectionKey::from_section(section.map(|s| &s.id)),
                variant,
            );
            let index = sequencer.next_index(key);

            let filename = build_filename(&FilenameParts {
                date: &parsed.date,
                article_slug: &parsed.article_slug,
                variant,
                index,
            });
            let virtual_path = build_virtual_path(section_name, variant, &filename);

            PlannedExport {
                node_id: node.id.clone(),
                section_id: section.map(|s| s.id.clone()),
                section_name: section_name.unwrap_or(NO_SECTION_LABEL).to_string(),
                variant,
                index,
                filename,
                virtual_path,
            }
        })
        .collect()
}

/// Export coordinator
pub struct ExportCoordinator {
    host: Arc<dyn DocumentHost>,
    settings: RenderSettings,
}

impl ExportCoordinator {
    /// Create a new export coordinator rendering with fixed settings
    pub fn new(host: Arc<dyn DocumentHost>, settings: RenderSettings) -> Self {
        Self { host, settings }
    }

    /// Plans the given selection against the host document
    pub fn plan(&self, selection: &[NodeId]) -> Vec<PlannedExport> {
        plan_exports(self.host.document(), selection)
    }

    /// Run an export preview for `selection`
    ///
    /// Returns every item in plan order, or the first failure. The host's
    /// render operation is not called when nothing is exportable.
    pub async fn export_preview(
        &self,
        selection: &[NodeId],
    ) -> Result<Vec<ExportItem>, PreviewError> {
        let invocation_id = Uuid::new_v4();
        let span = tracing::info_span!("export_preview", invocation_id = %invocation_id);

        self.run(selection).instrument(span).await
    }

    async fn run(&self, selection: &[NodeId]) -> Result<Vec<ExportItem>, PreviewError> {
        let start_time = Instant::now();
        let plan = self.plan(selection);

        if plan.is_empty() {
            tracing::info!(
                selected = selection.len(),
                "Selection contains no exportable"
            );
            return Err(PreviewError::NothingSelected);
        }

        crate::log_preview_start!(selection.len(), plan.len());
        let summary = PreviewSummary::from_plan(&plan);

        let mut items = Vec::with_capacity(plan.len());
        for (position, planned) in plan.into_iter().enumerate() {
            tracing::debug!(
                node_id = %planned.node_id,
                filename = %planned.filename,
                position = position + 1,
                "Rendering exportable"
            );

            let bytes = match self.host.render(&planned.node_id, &self.settings).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    crate::log_error_with_context!(
                        &e,
                        format!("Render failed for node {}", planned.node_id)
                    );
                    return Err(PreviewError::Render(e));
                }
            };

            items.push(planned.into_item(bytes));
        }

        summary
            .with_bytes(items.iter().map(ExportItem::byte_len).sum())
            .with_duration(start_time.elapsed())
            .log_summary();
        crate::log_preview_complete!(items.len(), start_time.elapsed());

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NodeKind, TreeNode};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingHost {
        tree: DocumentTree,
        fail_on: Option<NodeId>,
        calls: Mutex<Vec<NodeId>>,
        selection: Mutex<Vec<NodeId>>,
    }

    impl RecordingHost {
        fn new(tree: DocumentTree) -> Self {
            Self {
                tree,
                fail_on: None,
                calls: Mutex::new(Vec::new()),
                selection: Mutex::new(Vec::new()),
            }
        }

        fn failing_on(mut self, id: &str) -> Self {
            self.fail_on = Some(NodeId::new(id).unwrap());
            self
        }

        fn calls(&self) -> Vec<NodeId> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DocumentHost for RecordingHost {
        fn document(&self) -> &DocumentTree {
            &self.tree
        }

        fn selection(&self) -> Vec<NodeId> {
            self.selection.lock().unwrap().clone()
        }

        fn set_selection(&self, selection: Vec<NodeId>) {
            *self.selection.lock().unwrap() = selection;
        }

        async fn render(
            &self,
            node_id: &NodeId,
            _settings: &RenderSettings,
        ) -> Result<Vec<u8>, RenderError> {
            self.calls.lock().unwrap().push(node_id.clone());
            if self.fail_on.as_ref() == Some(node_id) {
                return Err(RenderError::new("Layer is hidden").with_node(node_id.clone()));
            }
            Ok(node_id.as_str().as_bytes().to_vec())
        }
    }

    fn node(
        id: &str,
        kind: NodeKind,
        name: &str,
        parent: Option<&str>,
        size: (f64, f64),
    ) -> TreeNode {
        let mut b = TreeNode::builder()
            .id(id)
            .unwrap()
            .kind(kind)
            .name(name)
            .size(size.0, size.1);
        if let Some(p) = parent {
            b = b.parent(p).unwrap();
        }
        b.build().unwrap()
    }

    fn tree() -> DocumentTree {
        DocumentTree::from_nodes(vec![
            node("s1", NodeKind::Section, "2024-05-01_My Article", None, (0.0, 0.0)),
            node("a", NodeKind::Frame, "Story A", Some("s1"), (1080.0, 1920.0)),
            node("b", NodeKind::Frame, "Feed B", Some("s1"), (1080.0, 1080.0)),
            node("c", NodeKind::Frame, "Story C", Some("s1"), (1080.0, 1920.0)),
            node("c-text", NodeKind::Other, "Headline", Some("c"), (10.0, 10.0)),
            node("loose", NodeKind::Instance, "Card", None, (800.0, 1000.0)),
            node("note", NodeKind::Other, "Note", Some("s1"), (10.0, 10.0)),
        ])
        .unwrap()
    }

    fn ids(raw: &[&str]) -> Vec<NodeId> {
        raw.iter().map(|s| NodeId::new(*s).unwrap()).collect()
    }

    #[test]
    fn test_plan_interleaved_variants() {
        let plan = plan_exports(&tree(), &ids(&["a", "b", "c"]));
        let names: Vec<&str> = plan.iter().map(|p| p.filename.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "2024-05-01_my-article_story_1.png",
                "2024-05-01_my-article_feed_1.png",
                "2024-05-01_my-article_story_2.png",
            ]
        );
        assert_eq!(
            plan[2].virtual_path,
            "2024-05-01_My Article/STORY/2024-05-01_my-article_story_2.png"
        );
    }

    #[test]
    fn test_plan_unsectioned_exportable() {
        let plan = plan_exports(&tree(), &ids(&["loose"]));
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].section_id, None);
        assert_eq!(plan[0].section_name, "NoSection");
        assert_eq!(plan[0].variant, Variant::Story);
        assert_eq!(plan[0].filename, "unknown-date_untitled_story_1.png");
        assert_eq!(
            plan[0].virtual_path,
            "NoSection/STORY/unknown-date_untitled_story_1.png"
        );
    }

    #[test]
    fn test_plan_deduplicates_descendants() {
        let plan = plan_exports(&tree(), &ids(&["c-text", "c"]));
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].node_id.as_str(), "c");
        assert_eq!(plan[0].index, 1);
    }

    #[tokio::test]
    async fn test_export_preview_renders_in_plan_order() {
        let host = Arc::new(RecordingHost::new(tree()));
        let coordinator = ExportCoordinator::new(host.clone(), RenderSettings::default());

        let items = coordinator
            .export_preview(&ids(&["a", "b", "c"]))
            .await
            .unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(host.calls(), ids(&["a", "b", "c"]));
        assert_eq!(items[0].bytes, b"a".to_vec());
        assert_eq!(items[2].index, 2);
    }

    #[tokio::test]
    async fn test_empty_selection_never_renders() {
        let host = Arc::new(RecordingHost::new(tree()));
        let coordinator = ExportCoordinator::new(host.clone(), RenderSettings::default());

        let err = coordinator.export_preview(&[]).await.unwrap_err();
        assert_eq!(err, PreviewError::NothingSelected);
        assert_eq!(err.to_string(), "No frames selected.");

        let err = coordinator
            .export_preview(&ids(&["note", "missing"]))
            .await
            .unwrap_err();
        assert_eq!(err, PreviewError::NothingSelected);
        assert!(host.calls().is_empty());
    }

    #[tokio::test]
    async fn test_failure_on_second_of_three_returns_only_the_failure() {
        let host = Arc::new(RecordingHost::new(tree()).failing_on("b"));
        let coordinator = ExportCoordinator::new(host.clone(), RenderSettings::default());

        let err = coordinator
            .export_preview(&ids(&["a", "b", "c"]))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Layer is hidden");
        assert!(matches!(err, PreviewError::Render(_)));
        assert_eq!(host.calls(), ids(&["a", "b"]));
    }

    #[tokio::test]
    async fn test_counters_do_not_carry_across_invocations() {
        let host = Arc::new(RecordingHost::new(tree()));
        let coordinator = ExportCoordinator::new(host, RenderSettings::default());

        let first = coordinator.export_preview(&ids(&["a"])).await.unwrap();
        let second = coordinator.export_preview(&ids(&["a"])).await.unwrap();
        assert_eq!(first[0].index, 1);
        assert_eq!(second[0].index, 1);
        assert_eq!(first[0].filename, second[0].filename);
    }
}
