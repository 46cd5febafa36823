//! Presentation layer integration
//!
//! - [`messages`] - wire types of the UI protocol
//! - [`sink`] - destinations for outbound messages and notices

pub mod messages;
pub mod sink;

pub use messages::{ExportResultPayload, HostEvent, ProgressPayload, UiMessage, UiRequest};
pub use sink::{ChannelSink, JsonLinesSink, PresentationSink, SinkEvent};
