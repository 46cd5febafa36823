//! Summary command implementation

use super::load_document;
use crate::adapters::host::DocumentHost;
use crate::core::selection::summarize_selection;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the summary command
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Path to the JSON document
    pub document: PathBuf,

    /// Override the document's selection (comma-separated node ids)
    #[arg(short, long)]
    pub select: Option<String>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl SummaryArgs {
    /// Execute the summary command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let host = load_document(&self.document, self.select.as_deref())?;
        let summary = summarize_selection(host.document(), &host.selection());

        if self.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
            return Ok(0);
        }

        println!("🔎 Selection summary");
        println!();
        println!("  Selected nodes: {}", summary.nodes);
        println!("  Frames: {}", summary.frames);
        if summary.sections.is_empty() {
            println!("  Sections: none");
        } else {
            println!("  Sections:");
            for section in &summary.sections {
                println!("    - {section}");
            }
        }
        println!();

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_summary_of_demo_document() {
        let args = SummaryArgs {
            document: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/campaign.json")),
            select: Some("1:2,2:2".to_string()),
            json: false,
        };
        assert_eq!(args.execute().await.unwrap(), 0);
    }
}
