// Artboard - Export Naming & Grouping Engine
// Copyright (c) 2025 Artboard Contributors
// Licensed under the MIT License

//! # Artboard - Export Naming & Grouping Engine
//!
//! Artboard turns a selection in a design document into a batch of export
//! previews with canonical, predictable names. It never mutates the document
//! and never writes rendered bytes anywhere.
//!
//! ## Overview
//!
//! For every selection, Artboard:
//! - **Resolves** selected nodes to their nearest exportable frame, component
//!   or instance, deduplicated in first-seen order
//! - **Classifies** each exportable as a story or a feed post
//! - **Groups** exportables by enclosing section and variant, numbering each
//!   group from 1
//! - **Names** each one `<date>_<article-slug>_<variant>_<index>.png` under the
//!   virtual path `<section>/<VARIANT>/`
//! - **Renders** them through the host, all or nothing
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Naming, classification, selection, export and session logic
//! - [`adapters`] - Host document providers and the presentation protocol
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use artboard::adapters::host::FixtureHost;
//! use artboard::adapters::presentation::ChannelSink;
//! use artboard::config::load_config_or_default;
//! use artboard::core::session::PreviewSession;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config_or_default(None)?;
//!     let host = Arc::new(FixtureHost::load("document.json")?);
//!     let (sink, _messages) = ChannelSink::new();
//!
//!     let session = PreviewSession::new(host, Arc::new(sink), config.render_settings());
//!     let items = session.export_preview().await?;
//!
//!     for item in &items {
//!         println!("{}", item.virtual_path);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Library operations return [`domain::Result`], backed by
//! [`domain::ArtboardError`]. An export preview fails with
//! [`core::export::PreviewError`], whose display text is what the user sees.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
