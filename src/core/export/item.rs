//! Exported artifact produced by one export preview

use crate::domain::{NodeId, Variant};
use serde::{Deserialize, Serialize};

/// One rendered exportable with its canonical names
///
/// `bytes` serialize as standard base64 so items can travel inside JSON
/// messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportItem {
    pub node_id: NodeId,

    /// Raw enclosing section name, `NoSection` outside any section
    pub section_name: String,

    pub variant: Variant,

    /// 1-based position within the (section, variant) group
    pub index: u32,

    pub filename: String,

    pub virtual_path: String,

    #[serde(with = "base64_bytes")]
    pub bytes: Vec<u8>,
}

impl ExportItem {
    /// Size of the rendered raster in bytes
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }
}

mod base64_bytes {
    use base64::{engine::general_purpose, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&general_purpose::STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        general_purpose::STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}
