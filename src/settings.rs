//! Key-value persistence for user preferences.
//!
//! The [`SettingsStore`] trait is the persistence port the stores write
//! through; hosts without a usable config location get [`NoopSettings`] and
//! keep working purely in memory.

use anyhow::Result;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// String key-value persistence for user preferences.
///
/// Implementations absorb their own failures: a write that cannot be
/// persisted is logged and dropped, never surfaced to the caller.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Settings port for hosts without persistent storage; drops every write.
pub struct NoopSettings;

impl SettingsStore for NoopSettings {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}
}

/// In-memory settings, for headless hosts and tests.
#[derive(Default)]
pub struct MemorySettings {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Settings persisted as a JSON file, with an in-memory read-through cache.
///
/// The file is read once when the store is opened; every `set` updates the
/// cache and writes the whole file back.
pub struct FileSettings {
    path: PathBuf,
    values: RefCell<BTreeMap<String, String>>,
}

impl FileSettings {
    /// Open the settings file in the platform config directory, if the host
    /// has one. This is the once-at-startup capability check; callers fall
    /// back to [`NoopSettings`] on `None`.
    pub fn discover() -> Option<Self> {
        let config_dir = dirs::config_dir()?;
        Some(Self::open(config_dir.join("janoracle").join("settings.json")))
    }

    /// Open a settings file at an explicit path. A missing file starts
    /// empty; an unreadable or malformed one is ignored with a warning.
    pub fn open(path: PathBuf) -> Self {
        let values = match read_values(&path) {
            Ok(values) => values,
            Err(err) => {
                warn!("ignoring unreadable settings file {}: {err:#}", path.display());
                BTreeMap::new()
            }
        };
        Self {
            path,
            values: RefCell::new(values),
        }
    }

    fn write_back(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&*self.values.borrow())?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl SettingsStore for FileSettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        if let Err(err) = self.write_back() {
            warn!("failed to save settings to {}: {err:#}", self.path.display());
        }
    }
}

fn read_values(path: &Path) -> Result<BTreeMap<String, String>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let contents = fs::read_to_string(path)?;
    let values = serde_json::from_str(&contents)?;
    Ok(values)
}
