//! Parser for catalog export files.
//!
//! Each file holds one JSON array of entries, typically one file per CMS
//! collection (`trainings.json`, `playbooks.json`, `battle-cards.json`, ...).

use crate::error::{CatalogError, Result};
use crate::types::CatalogEntry;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Parse one catalog file into entries, in file order.
pub fn parse_entries(path: &Path) -> Result<Vec<CatalogEntry>> {
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(err),
    })?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_entries_str(&file_name, &content)
}

/// Parse catalog JSON that is already in memory.
///
/// `file` is only used to give parse errors some context.
pub fn parse_entries_str(file: &str, content: &str) -> Result<Vec<CatalogEntry>> {
    let entries: Vec<CatalogEntry> =
        serde_json::from_str(content).map_err(|err| CatalogError::ParseError {
            file: file.to_string(),
            line: err.line(),
            column: err.column(),
            reason: err.to_string(),
        })?;

    for (position, entry) in entries.iter().enumerate() {
        if entry.id.trim().is_empty() {
            return Err(CatalogError::ValidationError(format!(
                "entry #{} in {} has an empty id",
                position + 1,
                file
            )));
        }
    }

    Ok(entries)
}
