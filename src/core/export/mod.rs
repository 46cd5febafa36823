//! Export preview orchestration
//!
//! This module provides the export engine proper:
//! - Per (section, variant) sequencing
//! - Planning and rendering of a selection
//! - Result items, manifest and summary

pub mod coordinator;
pub mod item;
pub mod manifest;
pub mod sequencer;
pub mod summary;

pub use coordinator::{plan_exports, ExportCoordinator, PlannedExport, PreviewError};
pub use item::ExportItem;
pub use manifest::{ManifestEntry, PreviewManifest};
pub use sequencer::{GroupKey, SectionKey, Sequencer};
pub use summary::PreviewSummary;
