//! JSON-file settings store
//!
//! Settings live in a single JSON object on disk. Reads are served from an
//! in-memory cache; every write rewrites the whole file.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, instrument};
use usersync_core::SettingsStore;
use usersync_domain::{Result, SyncError};

use crate::errors::InfraError;

pub struct FileSettingsStore {
    path: PathBuf,
    cache: RwLock<HashMap<String, String>>,
}

impl FileSettingsStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(InfraError::from)?;
            if contents.trim().is_empty() {
                HashMap::new()
            } else {
                serde_json::from_str(&contents).map_err(|e| {
                    SyncError::Source(format!("invalid settings file {}: {e}", path.display()))
                })?
            }
        } else {
            HashMap::new()
        };

        debug!(path = %path.display(), keys = values.len(), "Opened settings store");
        Ok(Self { path, cache: RwLock::new(values) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, values: &HashMap<String, String>) -> Result<()> {
        let ordered: BTreeMap<&String, &String> = values.iter().collect();
        let contents = serde_json::to_string_pretty(&ordered).map_err(InfraError::from)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(InfraError::from)?;
        }
        tokio::fs::write(&self.path, contents).await.map_err(InfraError::from)?;
        Ok(())
    }
}

#[async_trait]
impl SettingsStore for FileSettingsStore {
    async fn all(&self) -> Result<HashMap<String, String>> {
        Ok(self.cache.read().clone())
    }

    #[instrument(skip_all, fields(keys = values.len()))]
    async fn replace(&self, values: HashMap<String, String>) -> Result<()> {
        // The cache only changes once the file is written.
        self.persist(&values).await?;
        *self.cache.write() = values;
        Ok(())
    }
}
