//! Document persistence behind a uniform save/get/exists interface

use std::sync::Arc;

use object_store::path::Path as ObjectPath;
use object_store::{ObjectStore, PutPayload};
use thiserror::Error;
use tracing::info;

use crate::config::{StorageConfig, StorageProvider};

/// Prefix under which cloud providers keep generated documents. Local
/// storage writes directly into the configured directory.
const CLOUD_PREFIX: &str = "documents";

/// Storage-side errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Invalid storage configuration: {0}")]
    Config(String),

    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Object store error: {0}")]
    ObjectStore(#[from] object_store::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Handle to the configured document store.
///
/// Built once at startup. Save/get/exists are the only operations;
/// failures propagate to the request layer without retry or cleanup.
#[derive(Clone)]
pub struct DocumentStore {
    store: Arc<dyn ObjectStore>,
    config: StorageConfig,
}

impl DocumentStore {
    /// Open the store described by `config`.
    pub fn open(config: StorageConfig) -> Result<Self, StorageError> {
        let store = config.build_object_store()?;
        info!(provider = ?config.provider, bucket = %config.bucket, "initialized document storage");
        Ok(Self { store, config })
    }

    /// Save a document, returning its locator.
    pub async fn save(&self, name: &str, bytes: Vec<u8>) -> Result<String, StorageError> {
        let path = self.object_path(name);
        self.store.put(&path, PutPayload::from(bytes)).await?;
        let locator = self.locator(name);
        info!(%locator, "saved document");
        Ok(locator)
    }

    /// Retrieve a document's bytes.
    pub async fn get(&self, name: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.object_path(name);
        let result = self.store.get(&path).await.map_err(|e| match e {
            object_store::Error::NotFound { .. } => StorageError::NotFound(name.to_string()),
            other => StorageError::ObjectStore(other),
        })?;
        Ok(result.bytes().await?.to_vec())
    }

    /// Check whether a document exists.
    pub async fn exists(&self, name: &str) -> Result<bool, StorageError> {
        match self.store.head(&self.object_path(name)).await {
            Ok(_) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn object_path(&self, name: &str) -> ObjectPath {
        match self.config.provider {
            StorageProvider::Local => ObjectPath::from(name),
            _ => ObjectPath::from(format!("{CLOUD_PREFIX}/{name}")),
        }
    }

    fn locator(&self, name: &str) -> String {
        match self.config.provider {
            StorageProvider::GoogleCloud => {
                format!("gs://{}/{CLOUD_PREFIX}/{name}", self.config.bucket)
            }
            StorageProvider::AmazonS3 => {
                format!("s3://{}/{CLOUD_PREFIX}/{name}", self.config.bucket)
            }
            StorageProvider::Local => format!("{}/{name}", self.config.bucket),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_store(dir: &tempfile::TempDir) -> DocumentStore {
        let config = StorageConfig::local(dir.path().to_str().unwrap());
        DocumentStore::open(config).unwrap()
    }

    #[tokio::test]
    async fn test_save_then_get_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = local_store(&dir);

        let locator = store
            .save("7_procedure_document.docx", b"PK\x03\x04contents".to_vec())
            .await
            .unwrap();
        assert!(locator.ends_with("7_procedure_document.docx"));

        let bytes = store.get("7_procedure_document.docx").await.unwrap();
        assert_eq!(bytes, b"PK\x03\x04contents");
    }

    #[tokio::test]
    async fn test_exists_reflects_saves() {
        let dir = tempfile::tempdir().unwrap();
        let store = local_store(&dir);

        assert!(!store.exists("missing.docx").await.unwrap());
        store.save("present.docx", vec![1, 2, 3]).await.unwrap();
        assert!(store.exists("present.docx").await.unwrap());
    }

    #[tokio::test]
    async fn test_get_missing_document_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = local_store(&dir);

        let err = store.get("missing.docx").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound(name) if name == "missing.docx"));
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = local_store(&dir);

        store.save("doc.docx", b"old".to_vec()).await.unwrap();
        store.save("doc.docx", b"new".to_vec()).await.unwrap();
        assert_eq!(store.get("doc.docx").await.unwrap(), b"new");
    }

    #[test]
    fn test_cloud_locators_carry_the_documents_prefix() {
        let config = StorageConfig::s3("bucket", "us-east-1");
        // Locator shape is provider-specific; exercised without touching
        // the network by constructing the store pieces directly.
        let store = DocumentStore {
            store: Arc::new(object_store::memory::InMemory::new()),
            config,
        };
        assert_eq!(
            store.locator("1_procedure_document.docx"),
            "s3://bucket/documents/1_procedure_document.docx"
        );

        let store = DocumentStore {
            store: Arc::new(object_store::memory::InMemory::new()),
            config: StorageConfig::gcs("bucket"),
        };
        assert_eq!(
            store.locator("1_procedure_document.docx"),
            "gs://bucket/documents/1_procedure_document.docx"
        );
    }
}
