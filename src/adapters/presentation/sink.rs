//! Presentation sinks
//!
//! A sink receives structured messages and transient notices. Delivery is
//! fire-and-forget: a sink that can no longer deliver logs and drops.

use super::messages::UiMessage;
use serde::Serialize;
use std::io::Write;
use std::sync::Mutex;
use tokio::sync::mpsc;

/// Receiver of outbound UI traffic
pub trait PresentationSink: Send + Sync {
    /// Deliver a structured message
    fn post(&self, message: UiMessage);

    /// Show a transient, human-readable notice
    fn notify(&self, notice: &str);
}

/// Anything a sink can deliver
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SinkEvent {
    Message(UiMessage),
    Notice(NoticeLine),
}

impl SinkEvent {
    pub fn notice(text: impl Into<String>) -> Self {
        SinkEvent::Notice(NoticeLine {
            kind: "notice",
            payload: text.into(),
        })
    }

    /// The wrapped message, if this is not a notice
    pub fn as_message(&self) -> Option<&UiMessage> {
        match self {
            SinkEvent::Message(message) => Some(message),
            SinkEvent::Notice(_) => None,
        }
    }

    /// The notice text, if this is a notice
    pub fn as_notice(&self) -> Option<&str> {
        match self {
            SinkEvent::Message(_) => None,
            SinkEvent::Notice(line) => Some(&line.payload),
        }
    }
}

/// Notice rendered as `{ "type": "notice", "payload": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoticeLine {
    #[serde(rename = "type")]
    kind: &'static str,
    payload: String,
}

/// Forwards events over an unbounded tokio channel
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<SinkEvent>,
}

impl ChannelSink {
    /// Create a sink and the receiving end of its channel
    pub fn new() -> (Self, mpsc::UnboundedReceiver<SinkEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn send(&self, event: SinkEvent) {
        if self.tx.send(event).is_err() {
            tracing::warn!("Presentation channel closed, dropping event");
        }
    }
}

impl PresentationSink for ChannelSink {
    fn post(&self, message: UiMessage) {
        self.send(SinkEvent::Message(message));
    }

    fn notify(&self, notice: &str) {
        self.send(SinkEvent::notice(notice));
    }
}

/// Writes each event as one JSON line
pub struct JsonLinesSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the sink, returning the writer
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_event(&self, event: &SinkEvent) {
        let line = match serde_json::to_string(event) {
            Ok(line) => line,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize presentation event");
                return;
            }
        };

        let mut writer = match self.writer.lock() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = writeln!(writer, "{line}").and_then(|_| writer.flush()) {
            tracing::warn!(error = %e, "Failed to write presentation event");
        }
    }
}

impl<W: Write + Send> PresentationSink for JsonLinesSink<W> {
    fn post(&self, message: UiMessage) {
        self.write_event(&SinkEvent::Message(message));
    }

    fn notify(&self, notice: &str) {
        self.write_event(&SinkEvent::notice(notice));
    }
}
