use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::endpoint::{NewEndpoint, SavedEndpoint};
use crate::error::{ProbeError, ProbeResult};

/// Persistence for saved endpoints. Only listing and creation are part of
/// the contract.
pub trait EndpointStore {
    /// Endpoints owned by `owner_id`, oldest first.
    fn list(&self, owner_id: &str) -> ProbeResult<Vec<SavedEndpoint>>;

    fn create(&self, owner_id: &str, endpoint: NewEndpoint) -> ProbeResult<SavedEndpoint>;

    /// Names are not unique; the most recent match wins.
    fn find_by_name(&self, owner_id: &str, name: &str) -> ProbeResult<Option<SavedEndpoint>> {
        Ok(self
            .list(owner_id)?
            .into_iter()
            .rev()
            .find(|e| e.name == name))
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    endpoints: Mutex<Vec<SavedEndpoint>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<SavedEndpoint>> {
        self.endpoints
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl EndpointStore for MemoryStore {
    fn list(&self, owner_id: &str) -> ProbeResult<Vec<SavedEndpoint>> {
        Ok(self
            .lock()
            .iter()
            .filter(|e| e.owner_id == owner_id)
            .cloned()
            .collect())
    }

    fn create(&self, owner_id: &str, endpoint: NewEndpoint) -> ProbeResult<SavedEndpoint> {
        let saved = SavedEndpoint::from_new(new_id(), owner_id, endpoint);
        self.lock().push(saved.clone());
        Ok(saved)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    endpoints: Vec<SavedEndpoint>,
}

/// Keeps every owner's endpoints in one JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> ProbeResult<StoreDocument> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(StoreDocument::default()),
            Err(e) => return Err(self.io_error(e)),
        };
        if content.trim().is_empty() {
            return Ok(StoreDocument::default());
        }
        serde_json::from_str(&content).map_err(|source| ProbeError::StoreFormat {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&self, document: &StoreDocument) -> ProbeResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }
        let content =
            serde_json::to_string_pretty(document).map_err(|source| ProbeError::StoreFormat {
                path: self.path.clone(),
                source,
            })?;
        // Readers only ever see the old document or the new one.
        let staging = self.staging_path();
        fs::write(&staging, content).map_err(|e| self.io_error(e))?;
        fs::rename(&staging, &self.path).map_err(|e| {
            let _ = fs::remove_file(&staging);
            self.io_error(e)
        })
    }

    fn staging_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.path
            .with_file_name(format!(".{name}.{}.tmp", uuid::Uuid::new_v4()))
    }

    fn io_error(&self, source: std::io::Error) -> ProbeError {
        ProbeError::StoreIo {
            path: self.path.clone(),
            source,
        }
    }
}

impl EndpointStore for JsonFileStore {
    fn list(&self, owner_id: &str) -> ProbeResult<Vec<SavedEndpoint>> {
        Ok(self
            .read()?
            .endpoints
            .into_iter()
            .filter(|e| e.owner_id == owner_id)
            .collect())
    }

    fn create(&self, owner_id: &str, endpoint: NewEndpoint) -> ProbeResult<SavedEndpoint> {
        let mut document = self.read()?;
        let saved = SavedEndpoint::from_new(new_id(), owner_id, endpoint);
        document.endpoints.push(saved.clone());
        self.write(&document)?;
        tracing::debug!(id = %saved.id, path = %self.path.display(), "endpoint saved");
        Ok(saved)
    }
}
