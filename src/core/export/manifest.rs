//! Manifest describing the items of an export preview
//!
//! The manifest is what the command line prints in place of the raster
//! bytes: names, grouping and a SHA-256 digest per item.

use crate::core::export::item::ExportItem;
use crate::domain::{NodeId, Variant};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// One manifest line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub node_id: NodeId,
    pub virtual_path: String,
    pub filename: String,
    pub section_name: String,
    pub variant: Variant,
    pub index: u32,
    pub byte_len: usize,
    /// Hex-encoded SHA-256 of the rendered bytes
    pub sha256: String,
}

impl ManifestEntry {
    /// Describes an item
    pub fn from_item(item: &ExportItem) -> Self {
        Self {
            node_id: item.node_id.clone(),
            virtual_path: item.virtual_path.clone(),
            filename: item.filename.clone(),
            section_name: item.section_name.clone(),
            variant: item.variant,
            index: item.index,
            byte_len: item.byte_len(),
            sha256: sha256_hex(&item.bytes),
        }
    }
}

/// Manifest of a whole export preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewManifest {
    pub generated_at: DateTime<Utc>,
    pub entries: Vec<ManifestEntry>,
}

impl PreviewManifest {
    /// Builds a manifest for `items`, keeping their order
    pub fn from_items(items: &[ExportItem]) -> Self {
        Self {
            generated_at: Utc::now(),
            entries: items.iter().map(ManifestEntry::from_item).collect(),
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the rendered sizes
    pub fn total_bytes(&self) -> usize {
        self.entries.iter().map(|e| e.byte_len).sum()
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let result = hasher.finalize();

    format!("{result:x}")
}
