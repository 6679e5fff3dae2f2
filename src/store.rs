//! Preset repository adapter over a persistent keyed store.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::preset::{Preset, PresetRecord};

/// Error type for store operations.
#[derive(Debug)]
pub enum StoreError {
    /// IO error reading/writing the backing file
    Io(std::io::Error),
    /// The backing file is not valid JSON
    Parse(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "store IO error: {}", e),
            Self::Parse(e) => write!(f, "store parse error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// The repository boundary the session talks to.
///
/// Keyed by preset name. Implementations hold no cached state beyond the
/// current operation; per-key atomicity is the store's concern, not
/// reimplemented here.
pub trait PresetStore {
    /// Enumerate all stored presets.
    ///
    /// Order is consistent across calls but otherwise unspecified. Records
    /// missing required fields are skipped, never a hard failure.
    fn list_all(&self) -> Result<Vec<Preset>, StoreError>;

    /// Write or overwrite the preset keyed by its name.
    fn upsert(&self, preset: &Preset) -> Result<(), StoreError>;

    /// Remove the entry for `name`. Deleting an absent name is a no-op.
    fn delete(&self, name: &str) -> Result<(), StoreError>;
}

/// Single-file JSON store mapping preset name to record.
///
/// A missing file reads as an empty store; the file and its parent
/// directories are created on first write.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, serde_json::Value>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn write_map(&self, map: &BTreeMap<String, serde_json::Value>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(map)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PresetStore for JsonStore {
    fn list_all(&self) -> Result<Vec<Preset>, StoreError> {
        let map = self.read_map()?;
        let mut presets = Vec::with_capacity(map.len());
        for (key, value) in map {
            match serde_json::from_value::<PresetRecord>(value) {
                Ok(record) => presets.push(record.into_preset()),
                Err(e) => {
                    warn!(key = %key, error = %e, "skipping malformed preset record");
                }
            }
        }
        Ok(presets)
    }

    fn upsert(&self, preset: &Preset) -> Result<(), StoreError> {
        let mut map = self.read_map()?;
        let record = serde_json::to_value(PresetRecord::from(preset))?;
        map.insert(preset.name.clone(), record);
        self.write_map(&map)
    }

    fn delete(&self, name: &str) -> Result<(), StoreError> {
        let mut map = self.read_map()?;
        if map.remove(name).is_none() {
            return Ok(());
        }
        self.write_map(&map)
    }
}
