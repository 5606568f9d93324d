use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use howto_core::{HowToError, Result, SavedSkillRecord};

/// File-backed list of skills the user chose to keep.
///
/// Records live in a single JSON array on disk. Every operation reads
/// the whole file and writes it back, so the file stays the source of
/// truth across processes. A missing file reads as an empty list;
/// saves only ever append.
pub struct SavedSkillStore {
    path: PathBuf,
}

impl SavedSkillStore {
    /// Point the store at a JSON file. Nothing is created on disk until
    /// the first save.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        debug!(?path, "opening saved-skill store");
        Self { path }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All saved records in save order, oldest first.
    pub fn list(&self) -> Result<Vec<SavedSkillRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            HowToError::Store(format!("failed to read {}: {e}", self.path.display()))
        })?;
        let records = serde_json::from_str(&raw).map_err(|e| {
            HowToError::Store(format!("corrupt saved-skill file {}: {e}", self.path.display()))
        })?;
        Ok(records)
    }

    /// Append a record to the list. Duplicate queries are kept as-is;
    /// the list only grows.
    pub fn save(&self, record: SavedSkillRecord) -> Result<()> {
        let mut records = self.list()?;
        records.push(record);
        self.write(&records)?;
        debug!(path = ?self.path, count = records.len(), "skill saved");
        Ok(())
    }

    fn write(&self, records: &[SavedSkillRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                HowToError::Store(format!("failed to create {}: {e}", parent.display()))
            })?;
        }
        let json = serde_json::to_string_pretty(records).map_err(|e| {
            HowToError::Store(format!("failed to encode saved skills: {e}"))
        })?;
        fs::write(&self.path, json).map_err(|e| {
            HowToError::Store(format!("failed to write {}: {e}", self.path.display()))
        })?;
        Ok(())
    }
}
