use async_trait::async_trait;

use super::SettingsError;

/// Byte store under a [`SettingsProvider`](super::SettingsProvider).
///
/// The console ships only [`MemoryBackend`](super::MemoryBackend); a file or
/// database store slots in here.
#[async_trait]
pub trait SettingsBackend: Send + Sync {
    /// Short name for log lines.
    fn name(&self) -> &'static str;

    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, SettingsError>;

    async fn write(&self, key: &str, value: Vec<u8>) -> Result<(), SettingsError>;

    /// Returns true if the key existed.
    async fn remove(&self, key: &str) -> Result<bool, SettingsError>;

    /// Keys under `prefix`, sorted.
    async fn keys(&self, prefix: &str) -> Result<Vec<String>, SettingsError>;
}
