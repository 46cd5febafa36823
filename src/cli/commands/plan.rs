//! Plan command implementation
//!
//! Prints the names an export preview would produce, without rendering.

use super::load_document;
use crate::adapters::host::DocumentHost;
use crate::core::export::plan_exports;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Path to the JSON document
    pub document: PathBuf,

    /// Override the document's selection (comma-separated node ids)
    #[arg(short, long)]
    pub select: Option<String>,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

impl PlanArgs {
    /// Execute the plan command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let host = load_document(&self.document, self.select.as_deref())?;
        let selection = host.selection();
        let plan = plan_exports(host.document(), &selection);

        tracing::info!(
            selected = selection.len(),
            planned = plan.len(),
            "Planned export preview"
        );

        if self.json {
            println!("{}", serde_json::to_string_pretty(&plan)?);
            return Ok(if plan.is_empty() { 1 } else { 0 });
        }

        if plan.is_empty() {
            println!("❌ No frames selected.");
            return Ok(1);
        }

        println!("📋 {} planned export(s):", plan.len());
        println!();
        println!("{:<16} {:<6} {:<6} {:<70}", "Node", "Var.", "Index", "Virtual Path");
        println!("{}", "-".repeat(100));
        for planned in &plan {
            println!(
                "{:<16} {:<6} {:<6} {:<70}",
                planned.node_id.as_str(),
                planned.variant.as_str(),
                planned.index,
                planned.virtual_path
            );
        }
        println!();

        Ok(0)
    }
}
