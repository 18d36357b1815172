//! YAML-backed settings store.
//!
//! Stores the whole toggle mapping in one YAML file, key per line. Loads are
//! tolerant of the value forms settings files accumulate over time: booleans,
//! 0/1 integers, and their string spellings all coerce to a toggle value;
//! anything else is skipped with a warning and reads as disabled.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::{Configuration, SettingsStore};
use crate::error::{SettingsError, SettingsResult};

/// Maximum settings file size (64 KiB). A toggle mapping is a few hundred
/// bytes; anything larger is not our file.
const MAX_SETTINGS_FILE_SIZE: u64 = 64 * 1024;

/// Settings store backed by a single YAML file.
///
/// A missing file means no settings have been stored yet, so a fresh
/// deployment resolves to the default set on first use.
#[derive(Debug, Clone)]
pub struct YamlSettingsStore {
    path: PathBuf,
}

impl YamlSettingsStore {
    /// Create a store reading and writing the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn path_string(&self) -> String {
        self.path.display().to_string()
    }
}

impl SettingsStore for YamlSettingsStore {
    fn load(&self) -> SettingsResult<Option<Configuration>> {
        let metadata = match std::fs::metadata(&self.path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(SettingsError::Read {
                    path: self.path_string(),
                    source: err,
                });
            }
        };

        if metadata.len() > MAX_SETTINGS_FILE_SIZE {
            return Err(SettingsError::TooLarge {
                path: self.path_string(),
                size: metadata.len(),
                limit: MAX_SETTINGS_FILE_SIZE,
            });
        }

        let raw = std::fs::read_to_string(&self.path).map_err(|err| SettingsError::Read {
            path: self.path_string(),
            source: err,
        })?;

        if raw.trim().is_empty() {
            return Ok(None);
        }

        let values: BTreeMap<String, serde_yml::Value> =
            serde_yml::from_str(&raw).map_err(|err| SettingsError::Malformed {
                path: self.path_string(),
                details: err.to_string(),
            })?;

        let mut config = Configuration::new();
        for (key, value) in values {
            match coerce_toggle(&value) {
                Some(enabled) => config.set(key, enabled),
                None => {
                    warn!(
                        path = %self.path.display(),
                        key = %key,
                        ?value,
                        "skipping setting with non-boolean value"
                    );
                }
            }
        }

        Ok(Some(config))
    }

    fn save(&self, config: &Configuration) -> SettingsResult<()> {
        let values: BTreeMap<&str, bool> = config.iter().collect();
        let raw = serde_yml::to_string(&values).map_err(|err| SettingsError::Malformed {
            path: self.path_string(),
            details: err.to_string(),
        })?;

        std::fs::write(&self.path, raw).map_err(|err| SettingsError::Write {
            path: self.path_string(),
            source: err,
        })
    }
}

/// Coerce a stored YAML value to a toggle state.
///
/// Accepts booleans, integers (non-zero is enabled), and the string
/// spellings "0"/"1"/"true"/"false"/"" that checkbox-style settings forms
/// produce. Returns `None` for anything else.
fn coerce_toggle(value: &serde_yml::Value) -> Option<bool> {
    match value {
        serde_yml::Value::Bool(b) => Some(*b),
        serde_yml::Value::Number(n) => n.as_i64().map(|n| n != 0),
        serde_yml::Value::String(s) => match s.trim() {
            "" | "0" | "false" => Some(false),
            "1" | "true" => Some(true),
            _ => None,
        },
        _ => None,
    }
}
