//! External system integrations for Artboard.
//!
//! - [`host`] - host document providers (document tree, selection, rendering)
//! - [`presentation`] - the UI message protocol and its sinks
//!
//! # Design Pattern
//!
//! Adapters isolate collaborators behind traits so the export engine can be
//! driven by a real host, a JSON fixture or a test double alike.
//!
//! ```rust
//! use artboard::adapters::host::{DocumentHost, FixtureHost};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let host = FixtureHost::from_json(
//!     r#"{ "nodes": [ { "id": "1:1", "type": "FRAME", "name": "Hero" } ],
//!          "selection": ["1:1"] }"#,
//! )?;
//! assert_eq!(host.selection().len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod host;
pub mod presentation;
