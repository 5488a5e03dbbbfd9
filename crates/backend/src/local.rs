use crate::backend::SearchBackend;
use crate::error::{BackendError, Result};
use crate::record::Record;
use crate::settings::IndexSettings;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Persisted form of one index slot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredIndex {
    pub settings: Option<IndexSettings>,
    pub records: Vec<Record>,
}

/// Local search backend keeping each index slot in its own JSON file.
///
/// Every write rewrites the staging file in full; publish is a single
/// filesystem rename, so a reader of the production file sees either the
/// previous corpus or the new one, never a mix.
pub struct JsonFileBackend {
    dir: PathBuf,
    slots: Mutex<HashMap<String, StoredIndex>>,
}

impl JsonFileBackend {
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// File holding the named slot.
    #[must_use]
    pub fn index_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    /// Read a slot back from disk. `None` if the slot was never published
    /// or initialized.
    pub async fn load(&self, name: &str) -> Result<Option<StoredIndex>> {
        let path = self.index_path(name);
        if !path.exists() {
            return Ok(None);
        }
        let json = tokio::fs::read_to_string(&path).await?;
        Ok(Some(serde_json::from_str(&json)?))
    }

    /// Records currently stored in the named slot.
    pub async fn records(&self, name: &str) -> Result<Vec<Record>> {
        Ok(self.load(name).await?.map(|s| s.records).unwrap_or_default())
    }

    /// Settings currently stored in the named slot.
    pub async fn settings(&self, name: &str) -> Result<Option<IndexSettings>> {
        Ok(self.load(name).await?.and_then(|s| s.settings))
    }

    async fn persist(&self, name: &str, slot: &StoredIndex) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let json = serde_json::to_string_pretty(slot)?;
        tokio::fs::write(self.index_path(name), json).await?;
        Ok(())
    }
}

#[async_trait]
impl SearchBackend for JsonFileBackend {
    async fn init_staging(&self, name: &str) -> Result<()> {
        let mut slots = self.slots.lock().await;
        let slot = StoredIndex::default();
        self.persist(name, &slot).await?;
        slots.insert(name.to_string(), slot);
        log::debug!("Initialized staging slot {name}");
        Ok(())
    }

    async fn write_batch(&self, name: &str, records: &[Record]) -> Result<()> {
        let mut slots = self.slots.lock().await;
        let slot = slots
            .get_mut(name)
            .ok_or_else(|| BackendError::UnknownIndex(name.to_string()))?;
        slot.records.extend_from_slice(records);
        let snapshot = slot.clone();
        self.persist(name, &snapshot).await
    }

    async fn apply_settings(&self, name: &str, settings: &IndexSettings) -> Result<()> {
        let mut slots = self.slots.lock().await;
        let slot = slots
            .get_mut(name)
            .ok_or_else(|| BackendError::UnknownIndex(name.to_string()))?;
        slot.settings = Some(settings.clone());
        let snapshot = slot.clone();
        self.persist(name, &snapshot).await
    }

    async fn publish(&self, staging: &str, production: &str) -> Result<()> {
        let mut slots = self.slots.lock().await;
        let slot = slots
            .remove(staging)
            .ok_or_else(|| BackendError::UnknownIndex(staging.to_string()))?;
        tokio::fs::rename(self.index_path(staging), self.index_path(production)).await?;
        slots.insert(production.to_string(), slot);
        log::info!("Published index {staging} -> {production}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn record(id: &str) -> Record {
        Record {
            id: id.to_string(),
            h1: Some("Install".to_string()),
            h2: None,
            h3: None,
            h4: None,
            link: "installation".to_string(),
            content: Some("Run the installer.".to_string()),
            importance: 4,
            tags: vec!["9.x".to_string()],
        }
    }

    #[tokio::test]
    async fn test_write_and_publish_roundtrip() {
        let dir = TempDir::new().unwrap();
        let backend = JsonFileBackend::new(dir.path());

        backend.init_staging("docs_tmp").await.unwrap();
        backend
            .write_batch("docs_tmp", &[record("a"), record("b")])
            .await
            .unwrap();
        backend
            .apply_settings("docs_tmp", &IndexSettings::document_defaults())
            .await
            .unwrap();
        backend.publish("docs_tmp", "docs").await.unwrap();

        let published = backend.load("docs").await.unwrap().unwrap();
        assert_eq!(published.records.len(), 2);
        assert_eq!(published.settings, Some(IndexSettings::document_defaults()));
        assert!(!backend.index_path("docs_tmp").exists());
    }

    #[tokio::test]
    async fn test_publish_replaces_previous_production() {
        let dir = TempDir::new().unwrap();
        let backend = JsonFileBackend::new(dir.path());

        backend.init_staging("docs_tmp").await.unwrap();
        backend.write_batch("docs_tmp", &[record("old")]).await.unwrap();
        backend.publish("docs_tmp", "docs").await.unwrap();

        backend.init_staging("docs_tmp").await.unwrap();
        backend.write_batch("docs_tmp", &[record("new")]).await.unwrap();
        backend.publish("docs_tmp", "docs").await.unwrap();

        let records = backend.records("docs").await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "new");
    }

    #[tokio::test]
    async fn test_write_to_uninitialized_slot_fails() {
        let dir = TempDir::new().unwrap();
        let backend = JsonFileBackend::new(dir.path());

        let err = backend.write_batch("missing", &[record("a")]).await.unwrap_err();
        assert!(matches!(err, BackendError::UnknownIndex(_)));
    }

    #[tokio::test]
    async fn test_abandoned_staging_leaves_production_untouched() {
        let dir = TempDir::new().unwrap();
        let backend = JsonFileBackend::new(dir.path());

        backend.init_staging("docs_tmp").await.unwrap();
        backend.write_batch("docs_tmp", &[record("live")]).await.unwrap();
        backend.publish("docs_tmp", "docs").await.unwrap();

        // A later run fills staging but never publishes.
        backend.init_staging("docs_tmp").await.unwrap();
        backend.write_batch("docs_tmp", &[record("partial")]).await.unwrap();

        let records = backend.records("docs").await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "live");
    }
}
