//! Core business logic for Artboard.
//!
//! # Modules
//!
//! - [`naming`] - slugs, section names, filenames and virtual paths
//! - [`classify`] - story/feed variant inference
//! - [`selection`] - selection to exportable resolution and summaries
//! - [`export`] - sequencing, planning and rendering of an export preview
//! - [`session`] - request/event handling around the export engine
//!
//! # Export Workflow
//!
//! 1. **Resolve**: map selected nodes to their nearest exportable, deduplicated
//! 2. **Classify**: find the enclosing section and infer the variant
//! 3. **Sequence**: number exportables per (section, variant)
//! 4. **Name**: build the filename and virtual path
//! 5. **Render**: ask the host for raster bytes, one exportable at a time
//!
//! # Example
//!
//! ```rust
//! use artboard::adapters::host::{FixtureHost, RenderSettings};
//! use artboard::core::export::ExportCoordinator;
//! use artboard::domain::NodeId;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let host = FixtureHost::from_json(r#"{
//!     "nodes": [
//!         { "id": "1", "type": "SECTION", "name": "2024-05-01_My Article" },
//!         { "id": "2", "type": "FRAME", "name": "Story", "parent": "1" }
//!     ]
//! }"#)?;
//! let coordinator = ExportCoordinator::new(Arc::new(host), RenderSettings::default());
//!
//! let items = coordinator.export_preview(&[NodeId::new("2")?]).await?;
//! assert_eq!(
//!     items[0].virtual_path,
//!     "2024-05-01_My Article/STORY/2024-05-01_my-article_story_1.png"
//! );
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod export;
pub mod naming;
pub mod selection;
pub mod session;
