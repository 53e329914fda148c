//! CatalogIndex building and validation.
//!
//! A catalog directory holds one JSON file per CMS collection. Files are
//! parsed in parallel with Rayon, then concatenated in file-name order so the
//! resulting entry order does not depend on thread scheduling.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

impl CatalogIndex {
    /// Load every `*.json` file in a catalog directory.
    ///
    /// Steps:
    /// 1. List the JSON files and sort them by name
    /// 2. Parse them in parallel
    /// 3. Concatenate in file order
    /// 4. Validate id uniqueness across all files
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(CatalogError::FileNotFound {
                path: dir.display().to_string(),
            });
        }

        let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        info!("Loading {} catalog files from {:?}", paths.len(), dir);
        Self::load_from_files(&paths)
    }

    /// Load an explicit list of catalog files, keeping the given order.
    pub fn load_from_files(paths: &[PathBuf]) -> Result<Self> {
        // par_iter + collect keeps the input order of the results
        let parsed: Vec<Result<Vec<CatalogEntry>>> = paths
            .par_iter()
            .map(|path| parser::parse_entries(path))
            .collect();

        let mut entries = Vec::new();
        for (path, result) in paths.iter().zip(parsed) {
            let file_entries = result?;
            debug!("Parsed {} entries from {:?}", file_entries.len(), path);
            entries.extend(file_entries);
        }

        let index = Self::from_entries(entries)?;
        info!("Catalog loaded: {} entries", index.len());
        Ok(index)
    }

    /// Build an index from entries already in memory.
    ///
    /// Unlike `insert`, duplicate ids are an error here: two CMS records
    /// claiming the same id means the export is broken.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            if by_id.insert(entry.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: entry.id.clone(),
                });
            }
        }

        Ok(Self { entries, by_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn test_load_from_dir_orders_by_file_name() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "b-playbooks.json",
            r#"[{"id": "pb-1", "kind": "playbook", "title": "Expansion Plays"}]"#,
        );
        write(
            dir.path(),
            "a-trainings.json",
            r#"[{"id": "t-1", "kind": "training", "title": "Onboarding"},
                {"id": "t-2", "kind": "training", "title": "Demo Skills"}]"#,
        );
        write(dir.path(), "notes.txt", "not a catalog file");

        let index = CatalogIndex::load_from_dir(dir.path()).unwrap();
        let ids: Vec<&str> = index.entries().iter().map(|e| e.id.as_str()).collect();

        assert_eq!(ids, vec!["t-1", "t-2", "pb-1"]);
        assert_eq!(index.get("pb-1").unwrap().kind, EntryKind::Playbook);
    }

    #[test]
    fn test_duplicate_ids_across_files() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.json", r#"[{"id": "same", "title": "One"}]"#);
        write(dir.path(), "b.json", r#"[{"id": "same", "title": "Two"}]"#);

        let result = CatalogIndex::load_from_dir(dir.path());
        assert!(matches!(result, Err(CatalogError::DuplicateId { id }) if id == "same"));
    }

    #[test]
    fn test_missing_dir() {
        let result = CatalogIndex::load_from_dir(Path::new("/no/such/catalog"));
        assert!(matches!(result, Err(CatalogError::FileNotFound { .. })));
    }

    #[test]
    fn test_bad_file_fails_whole_load() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "good.json", r#"[{"id": "ok", "title": "Fine"}]"#);
        write(dir.path(), "bad.json", "{ not json");

        let result = CatalogIndex::load_from_dir(dir.path());
        assert!(matches!(result, Err(CatalogError::ParseError { .. })));
    }
}
