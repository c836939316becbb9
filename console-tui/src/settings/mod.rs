//! Stored console preferences.
//!
//! Each preference group is a [`Setting`]: a serde type with a fixed key and
//! a default. The [`SettingsProvider`] encodes values with bincode and hands
//! the bytes to a [`SettingsBackend`].

mod backend;
mod memory;

pub use backend::SettingsBackend;
pub use memory::MemoryBackend;

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to encode '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: bincode::Error,
    },
    #[error("failed to decode '{key}': {source}")]
    Decode {
        key: String,
        #[source]
        source: bincode::Error,
    },
    #[error("settings backend error: {0}")]
    Backend(String),
}

/// A preference group stored under one key.
pub trait Setting: Serialize + DeserializeOwned + Default + Send + Sync {
    const KEY: &'static str;
}

/// Typed access to a [`SettingsBackend`]. Clones share the backend.
#[derive(Clone)]
pub struct SettingsProvider {
    backend: Arc<dyn SettingsBackend>,
}

impl SettingsProvider {
    pub fn new(backend: impl SettingsBackend + 'static) -> Self {
        log::debug!("Settings backend: {}", backend.name());
        Self {
            backend: Arc::new(backend),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// The stored value of `S`, or its default when nothing is stored yet.
    pub async fn load<S: Setting>(&self) -> Result<S, SettingsError> {
        match self.get(S::KEY).await? {
            Some(value) => Ok(value),
            None => {
                log::debug!("No stored value for {}; using defaults", S::KEY);
                Ok(S::default())
            }
        }
    }

    pub async fn store<S: Setting>(&self, value: &S) -> Result<(), SettingsError> {
        self.set(S::KEY, value).await
    }

    /// Drop the stored value of `S` so the next load returns its default.
    pub async fn reset<S: Setting>(&self) -> Result<bool, SettingsError> {
        self.delete(S::KEY).await
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SettingsError> {
        let Some(bytes) = self.backend.read(key).await? else {
            return Ok(None);
        };
        bincode::deserialize(&bytes)
            .map(Some)
            .map_err(|source| SettingsError::Decode {
                key: key.to_string(),
                source,
            })
    }

    pub async fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, SettingsError> {
        Ok(self.get(key).await?.unwrap_or(default))
    }

    pub async fn set<T: Serialize + Sync>(&self, key: &str, value: &T) -> Result<(), SettingsError> {
        let bytes = bincode::serialize(value).map_err(|source| SettingsError::Encode {
            key: key.to_string(),
            source,
        })?;
        log::trace!("Settings write {} ({} bytes)", key, bytes.len());
        self.backend.write(key, bytes).await
    }

    pub async fn delete(&self, key: &str) -> Result<bool, SettingsError> {
        self.backend.remove(key).await
    }

    pub async fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, SettingsError> {
        self.backend.keys(prefix).await
    }
}
