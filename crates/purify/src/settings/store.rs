//! Settings store abstraction.
//!
//! The filter never touches storage itself; a host resolves a
//! [`Configuration`] once per render pass through [`get_configuration`] and
//! threads it through every filter call. Keeping the trait this small lets a
//! host back it with whatever its options table is without changing call
//! sites.

use tracing::{debug, warn};

use super::Configuration;
use crate::error::SettingsResult;

/// Persistent storage for the settings set.
///
/// Implementations store the whole toggle mapping as one unit, mirroring how
/// host CMSs keep plugin settings under a single options key.
pub trait SettingsStore: Send + Sync {
    /// Load the stored settings set, or `None` if none has been stored yet.
    fn load(&self) -> SettingsResult<Option<Configuration>>;

    /// Store the settings set, replacing any previous one.
    fn save(&self, config: &Configuration) -> SettingsResult<()>;
}

/// Resolve the configuration for a render pass.
///
/// On first use (nothing stored) the fixed default set is persisted and
/// returned. A partially stored mapping is completed so that every known
/// toggle is present, with absent keys disabled.
pub fn get_configuration(store: &dyn SettingsStore) -> SettingsResult<Configuration> {
    match store.load()? {
        Some(mut config) => {
            let unknown = config.unknown_keys();
            if !unknown.is_empty() {
                warn!(keys = ?unknown, "stored settings contain unknown toggles");
            }
            config.complete();
            Ok(config)
        }
        None => {
            let config = Configuration::defaults();
            store.save(&config)?;
            debug!("no stored settings; persisted default set");
            Ok(config)
        }
    }
}

/// In-process settings store.
///
/// Used by embedding hosts that manage persistence elsewhere, and by tests.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    inner: parking_lot::RwLock<Option<Configuration>>,
}

impl MemorySettingsStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with a settings set.
    pub fn with_config(config: Configuration) -> Self {
        Self {
            inner: parking_lot::RwLock::new(Some(config)),
        }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> SettingsResult<Option<Configuration>> {
        Ok(self.inner.read().clone())
    }

    fn save(&self, config: &Configuration) -> SettingsResult<()> {
        *self.inner.write() = Some(config.clone());
        Ok(())
    }
}
