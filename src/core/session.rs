//! Preview session - glue between host, export engine and presentation
//!
//! A session owns one export coordinator and answers UI requests and host
//! events with messages on its sink. Export previews are serialized: a
//! request arriving while one is running waits for it to finish. Every
//! outcome, failures included, leaves the session as an
//! `export-preview-result` message bracketed by progress messages.

use crate::adapters::host::{DocumentHost, RenderSettings};
use crate::adapters::presentation::{HostEvent, PresentationSink, UiMessage, UiRequest};
use crate::core::export::{ExportCoordinator, ExportItem, PreviewError};
use crate::core::selection::{summarize_selection, SelectionSummary};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Notice shown when an export preview finds nothing to export
pub const EMPTY_SELECTION_NOTICE: &str = "Select at least one frame/instance to preview.";

/// Long-lived preview session
pub struct PreviewSession {
    host: Arc<dyn DocumentHost>,
    sink: Arc<dyn PresentationSink>,
    coordinator: ExportCoordinator,
    export_lock: Mutex<()>,
}

impl PreviewSession {
    /// Create a session over a host and a sink
    pub fn new(
        host: Arc<dyn DocumentHost>,
        sink: Arc<dyn PresentationSink>,
        settings: RenderSettings,
    ) -> Self {
        let coordinator = ExportCoordinator::new(host.clone(), settings);
        Self {
            host,
            sink,
            coordinator,
            export_lock: Mutex::new(()),
        }
    }

    /// Announce the initial selection
    pub fn start(&self) -> SelectionSummary {
        tracing::debug!("Preview session started");
        self.publish_selection_summary()
    }

    /// Post a `selection-summary` for the host's current selection
    pub fn publish_selection_summary(&self) -> SelectionSummary {
        let selection = self.host.selection();
        let summary = summarize_selection(self.host.document(), &selection);

        tracing::debug!(
            nodes = summary.nodes,
            frames = summary.frames,
            sections = summary.sections.len(),
            "Publishing selection summary"
        );

        self.sink.post(UiMessage::SelectionSummary(summary.clone()));
        summary
    }

    /// React to a host notification
    ///
    /// A selection change that carries the new selection is applied to the
    /// host before the summary is republished.
    pub fn handle_event(&self, event: HostEvent) {
        match event {
            HostEvent::SelectionChange { selection } => {
                if let Some(selection) = selection {
                    tracing::debug!(selected = selection.len(), "Applying host selection");
                    self.host.set_selection(selection);
                }
                self.publish_selection_summary();
            }
            HostEvent::PageChange => {
                self.publish_selection_summary();
            }
        }
    }

    /// React to a UI request
    pub async fn handle_request(&self, request: UiRequest) {
        match request {
            UiRequest::ExportPreview => {
                // The outcome has already been posted to the sink
                let _ = self.export_preview().await;
            }
            UiRequest::SyncSelected | UiRequest::ReviewSelected => {
                tracing::debug!(request = ?request, "Request accepted, nothing to do");
            }
        }
    }

    /// Run an export preview of the current selection
    ///
    /// Posts `running: true`, the result (and the empty-selection notice
    /// when applicable), then `running: false`. The outcome is also returned
    /// to the caller.
    pub async fn export_preview(&self) -> Result<Vec<ExportItem>, PreviewError> {
        let _guard = self.export_lock.lock().await;

        self.sink.post(UiMessage::progress(true));

        let selection = self.host.selection();
        let outcome = self.coordinator.export_preview(&selection).await;

        self.sink.post(UiMessage::result(&outcome));
        if let Err(PreviewError::NothingSelected) = outcome {
            self.sink.notify(EMPTY_SELECTION_NOTICE);
        }

        self.sink.post(UiMessage::progress(false));

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::host::FixtureHost;
    use crate::adapters::presentation::{ChannelSink, SinkEvent};
    use crate::domain::NodeId;
    use tokio::sync::mpsc::UnboundedReceiver;

    const DOCUMENT: &str = r#"{
        "nodes": [
            { "id": "s", "type": "SECTION", "name": "2024-05-01_Launch Day" },
            { "id": "f1", "type": "FRAME", "name": "Story", "parent": "s",
              "width": 1080, "height": 1920 },
            { "id": "f2", "type": "FRAME", "name": "Post", "parent": "s",
              "width": 1080, "height": 1080 },
            { "id": "bad", "type": "FRAME", "name": "Bad", "parent": "s",
              "render_error": "Export failed" },
            { "id": "note", "type": "TEXT", "name": "Note", "parent": "s" }
        ],
        "selection": ["f1", "f2"]
    }"#;

    fn session() -> (
        PreviewSession,
        Arc<FixtureHost>,
        UnboundedReceiver<SinkEvent>,
    ) {
        let host = Arc::new(FixtureHost::from_json(DOCUMENT).unwrap());
        let (sink, rx) = ChannelSink::new();
        let session = PreviewSession::new(host.clone(), Arc::new(sink), RenderSettings::default());
        (session, host, rx)
    }

    fn drain(rx: &mut UnboundedReceiver<SinkEvent>) -> Vec<SinkEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    fn ids(raw: &[&str]) -> Vec<NodeId> {
        raw.iter().map(|s| NodeId::new(*s).unwrap()).collect()
    }

    #[test]
    fn test_start_publishes_summary() {
        let (session, _host, mut rx) = session();
        let summary = session.start();
        assert_eq!(summary.frames, 2);

        let events = drain(&mut rx);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].as_message().unwrap().kind(), "selection-summary");
    }

    #[test]
    fn test_selection_and_page_change_publish_summary() {
        let (session, host, mut rx) = session();
        host.set_selection(ids(&["note"]));
        session.handle_event(HostEvent::SelectionChange { selection: None });
        session.handle_event(HostEvent::PageChange);

        let events = drain(&mut rx);
        assert_eq!(events.len(), 2);
        match events[0].as_message() {
            Some(UiMessage::SelectionSummary(summary)) => {
                assert_eq!(summary.nodes, 1);
                assert_eq!(summary.frames, 0);
                assert_eq!(summary.sections, vec!["2024-05-01_Launch Day".to_string()]);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_selection_change_replaces_host_selection() {
        let (session, host, mut rx) = session();
        session.handle_event(HostEvent::SelectionChange {
            selection: Some(ids(&["f2"])),
        });
        assert_eq!(host.selection(), ids(&["f2"]));

        let items = session.export_preview().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].node_id.as_str(), "f2");

        match drain(&mut rx)[0].as_message() {
            Some(UiMessage::SelectionSummary(summary)) => {
                assert_eq!(summary.nodes, 1);
                assert_eq!(summary.frames, 1);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_successful_export_message_sequence() {
        let (session, _host, mut rx) = session();
        session.handle_request(UiRequest::ExportPreview).await;

        let events = drain(&mut rx);
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].as_message(), Some(&UiMessage::progress(true)));
        match events[1].as_message() {
            Some(UiMessage::ExportPreviewResult(payload)) => {
                assert!(payload.ok);
                let items = payload.items.as_ref().unwrap();
                assert_eq!(items[0].filename, "2024-05-01_launch-day_story_1.png");
                assert_eq!(items[1].filename, "2024-05-01_launch-day_feed_1.png");
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert_eq!(events[2].as_message(), Some(&UiMessage::progress(false)));
    }

    #[tokio::test]
    async fn test_empty_selection_posts_failure_and_notice() {
        let (session, host, mut rx) = session();
        host.set_selection(Vec::new());

        let outcome = session.export_preview().await;
        assert_eq!(outcome, Err(PreviewError::NothingSelected));

        let events = drain(&mut rx);
        assert_eq!(events.len(), 4);
        match events[1].as_message() {
            Some(UiMessage::ExportPreviewResult(payload)) => {
                assert!(!payload.ok);
                assert_eq!(payload.error.as_deref(), Some("No frames selected."));
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert_eq!(events[2].as_notice(), Some(EMPTY_SELECTION_NOTICE));
        assert_eq!(events[3].as_message(), Some(&UiMessage::progress(false)));
    }

    #[tokio::test]
    async fn test_render_failure_still_stops_progress() {
        let (session, host, mut rx) = session();
        host.set_selection(ids(&["f1", "bad", "f2"]));

        let outcome = session.export_preview().await;
        assert!(matches!(outcome, Err(PreviewError::Render(_))));

        let events = drain(&mut rx);
        assert_eq!(events.len(), 3);
        match events[1].as_message() {
            Some(UiMessage::ExportPreviewResult(payload)) => {
                assert!(!payload.ok);
                assert!(payload.items.is_none());
                assert_eq!(payload.error.as_deref(), Some("Export failed"));
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert_eq!(events[2].as_message(), Some(&UiMessage::progress(false)));
    }

    #[tokio::test]
    async fn test_reserved_requests_are_no_ops() {
        let (session, _host, mut rx) = session();
        session.handle_request(UiRequest::SyncSelected).await;
        session.handle_request(UiRequest::ReviewSelected).await;
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_requests_do_not_interleave() {
        let (session, _host, mut rx) = session();
        let session = Arc::new(session);

        let a = tokio::spawn({
            let session = session.clone();
            async move { session.export_preview().await }
        });
        let b = tokio::spawn({
            let session = session.clone();
            async move { session.export_preview().await }
        });
        assert!(a.await.unwrap().is_ok());
        assert!(b.await.unwrap().is_ok());

        let kinds: Vec<Option<bool>> = drain(&mut rx)
            .iter()
            .filter_map(|e| match e.as_message() {
                Some(UiMessage::ExportPreviewProgress(p)) => Some(Some(p.running)),
                Some(_) => Some(None),
                None => None,
            })
            .collect();
        assert_eq!(
            kinds,
            vec![Some(true), None, Some(false), Some(true), None, Some(false)]
        );
    }
}
