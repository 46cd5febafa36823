//! Preview command implementation
//!
//! This module implements the `preview` command: one export preview of a
//! fixture document, reported either as a manifest table or as the raw UI
//! message stream.

use super::load_document;
use crate::adapters::presentation::{ChannelSink, JsonLinesSink, PresentationSink};
use crate::config::ArtboardConfig;
use crate::core::export::{PreviewError, PreviewManifest};
use crate::core::session::PreviewSession;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the preview command
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Path to the JSON document
    pub document: PathBuf,

    /// Override the document's selection (comma-separated node ids)
    #[arg(short, long)]
    pub select: Option<String>,

    /// Print UI messages as JSON lines instead of a table
    #[arg(long)]
    pub json: bool,
}

impl PreviewArgs {
    /// Execute the preview command
    pub async fn execute(&self, config: &ArtboardConfig) -> anyhow::Result<i32> {
        tracing::info!(document = %self.document.display(), "Starting preview command");

        let host = Arc::new(load_document(&self.document, self.select.as_deref())?);
        let settings = config.render_settings();

        if self.json {
            let sink = Arc::new(JsonLinesSink::new(std::io::stdout()));
            let session = PreviewSession::new(host, sink, settings);
            session.start();
            let outcome = session.export_preview().await;
            return Ok(exit_code(&outcome));
        }

        let (sink, mut notices) = ChannelSink::new();
        let sink: Arc<dyn PresentationSink> = Arc::new(sink);
        let session = PreviewSession::new(host, sink, settings);

        println!("🖼️  Export preview: {}", self.document.display());
        println!();

        let outcome = session.export_preview().await;

        match &outcome {
            Ok(items) => {
                let manifest = PreviewManifest::from_items(items);
                print_manifest(&manifest);
            }
            Err(e) => {
                println!("❌ Export preview failed");
                println!("   Error: {e}");
            }
        }

        while let Ok(event) = notices.try_recv() {
            if let Some(notice) = event.as_notice() {
                println!("   {notice}");
            }
        }
        println!();

        Ok(exit_code(&outcome))
    }
}

fn exit_code<T>(outcome: &Result<T, PreviewError>) -> i32 {
    match outcome {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

fn print_manifest(manifest: &PreviewManifest) {
    println!(
        "✅ {} item(s), {} byte(s), generated {}",
        manifest.len(),
        manifest.total_bytes(),
        manifest.generated_at.format("%Y-%m-%d %H:%M:%S")
    );
    println!();
    println!(
        "{:<70} {:<6} {:<6} {:>10} {:<16}",
        "Virtual Path", "Var.", "Index", "Bytes", "SHA-256"
    );
    println!("{}", "-".repeat(112));

    for entry in &manifest.entries {
        println!(
            "{:<70} {:<6} {:<6} {:>10} {:<16}",
            entry.virtual_path,
            entry.variant.as_str(),
            entry.index,
            entry.byte_len,
            &entry.sha256[..16]
        );
    }
}
