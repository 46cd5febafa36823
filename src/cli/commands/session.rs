//! Session command implementation
//!
//! Runs a preview session over stdin/stdout: every input line is a JSON UI
//! request or host event, every output line a JSON UI message. The session
//! ends at end of input.

use super::load_document;
use crate::adapters::presentation::{HostEvent, JsonLinesSink, UiRequest};
use crate::config::ArtboardConfig;
use crate::core::session::PreviewSession;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Arguments for the session command
#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Path to the JSON document
    pub document: PathBuf,

    /// Override the document's selection (comma-separated node ids)
    #[arg(short, long)]
    pub select: Option<String>,
}

impl SessionArgs {
    /// Execute the session command
    pub async fn execute(&self, config: &ArtboardConfig) -> anyhow::Result<i32> {
        let host = Arc::new(load_document(&self.document, self.select.as_deref())?);
        let sink = Arc::new(JsonLinesSink::new(std::io::stdout()));
        let session = PreviewSession::new(host, sink, config.render_settings());

        session.start();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            dispatch(&session, line).await;
        }

        tracing::info!("Input closed, ending session");
        Ok(0)
    }
}

async fn dispatch(session: &PreviewSession, line: &str) {
    if let Ok(event) = serde_json::from_str::<HostEvent>(line) {
        session.handle_event(event);
        return;
    }
    match UiRequest::parse(line) {
        Some(request) => session.handle_request(request).await,
        None => tracing::warn!(line = %line, "Ignoring unrecognised input line"),
    }
}
