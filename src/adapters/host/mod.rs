//! Host document providers
//!
//! - [`traits`] - the [`DocumentHost`] seam the export engine depends on
//! - [`fixture`] - a JSON-backed host used by the command line

pub mod fixture;
pub mod traits;

pub use fixture::{FixtureHost, PNG_SIGNATURE};
pub use traits::{DocumentHost, ImageFormat, RenderSettings};
