//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod init;
pub mod plan;
pub mod preview;
pub mod session;
pub mod summary;
pub mod validate;

use crate::adapters::host::{DocumentHost, FixtureHost};
use crate::domain::ids::parse_node_id_list;
use anyhow::Context;
use std::path::Path;

/// Loads a fixture document, replacing its selection when `select` is given
pub(crate) fn load_document(document: &Path, select: Option<&str>) -> anyhow::Result<FixtureHost> {
    let host = FixtureHost::load(document)
        .with_context(|| format!("Failed to load document {}", document.display()))?;

    if let Some(select) = select {
        let ids = parse_node_id_list(select)
            .map_err(|e| anyhow::anyhow!("Invalid --select value: {e}"))?;
        tracing::info!(selected = ids.len(), "Overriding selection from CLI");
        host.set_selection(ids);
    }

    Ok(host)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn document() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"{ "nodes": [ { "id": "a", "type": "FRAME" }, { "id": "b", "type": "FRAME" } ],
                  "selection": ["a"] }"#,
        )
        .unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_document_keeps_selection() {
        let file = document();
        let host = load_document(file.path(), None).unwrap();
        assert_eq!(host.selection().len(), 1);
    }

    #[test]
    fn test_load_document_overrides_selection() {
        let file = document();
        let host = load_document(file.path(), Some("b, a")).unwrap();
        let selection = host.selection();
        let ids: Vec<&str> = selection.iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_load_document_missing_file() {
        assert!(load_document(Path::new("no-such-document.json"), None).is_err());
    }
}
