//! Messages exchanged with the presentation layer
//!
//! Every message is a JSON object `{ "type": ..., "payload": ... }` with a
//! kebab-case type.

use crate::core::export::{ExportItem, PreviewError};
use crate::core::selection::SelectionSummary;
use crate::domain::NodeId;
use serde::{Deserialize, Serialize};

/// Outbound message to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum UiMessage {
    /// Counts describing the current selection
    SelectionSummary(SelectionSummary),

    /// Export preview started or stopped
    ExportPreviewProgress(ProgressPayload),

    /// Outcome of an export preview
    ExportPreviewResult(ExportResultPayload),
}

impl UiMessage {
    /// Progress message with the given running flag
    pub fn progress(running: bool) -> Self {
        UiMessage::ExportPreviewProgress(ProgressPayload { running })
    }

    /// Result message built from an export preview outcome
    pub fn result(outcome: &Result<Vec<ExportItem>, PreviewError>) -> Self {
        let payload = match outcome {
            Ok(items) => ExportResultPayload::success(items.clone()),
            Err(e) => ExportResultPayload::failure(e.to_string()),
        };
        UiMessage::ExportPreviewResult(payload)
    }

    /// Wire name of the message type
    pub fn kind(&self) -> &'static str {
        match self {
            UiMessage::SelectionSummary(_) => "selection-summary",
            UiMessage::ExportPreviewProgress(_) => "export-preview-progress",
            UiMessage::ExportPreviewResult(_) => "export-preview-result",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressPayload {
    pub running: bool,
}

/// Payload of an `export-preview-result` message
///
/// Exactly one of `items` and `error` is present, as selected by `ok`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportResultPayload {
    pub ok: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ExportItem>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExportResultPayload {
    pub fn success(items: Vec<ExportItem>) -> Self {
        Self {
            ok: true,
            items: Some(items),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            items: None,
            error: Some(error.into()),
        }
    }
}

/// Inbound request from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiRequest {
    /// Run an export preview of the current selection
    ExportPreview,
    /// Accepted, currently a no-op
    SyncSelected,
    /// Accepted, currently a no-op
    ReviewSelected,
}

impl UiRequest {
    /// Parses a raw JSON request
    ///
    /// Requests without a recognised `type` yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(request) => Some(request),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring unrecognised UI request");
                None
            }
        }
    }
}

/// Notification raised by the host document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum HostEvent {
    /// The user changed the selection
    ///
    /// Hosts that track the selection themselves omit `selection`; otherwise
    /// it carries the new selection in order.
    SelectionChange {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        selection: Option<Vec<NodeId>>,
    },
    PageChange,
}
