//! Storage backend selection and object store construction

use std::sync::Arc;

use object_store::aws::AmazonS3Builder;
use object_store::gcp::GoogleCloudStorageBuilder;
use object_store::local::LocalFileSystem;
use object_store::ObjectStore;

use crate::store::StorageError;

const DEFAULT_DOCS_PATH: &str = "./generated_docs";
const DEFAULT_AWS_REGION: &str = "us-east-1";

/// Storage provider options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageProvider {
    /// Google Cloud Storage
    GoogleCloud,
    /// AWS S3
    AmazonS3,
    /// Local filesystem (development fallback)
    Local,
}

/// Storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// The storage provider to use
    pub provider: StorageProvider,
    /// Bucket name, or the local directory for [`StorageProvider::Local`]
    pub bucket: String,
    /// AWS region (S3 only)
    pub region: String,
}

impl StorageConfig {
    /// Create a new configuration for Google Cloud Storage
    pub fn gcs(bucket: &str) -> Self {
        Self {
            provider: StorageProvider::GoogleCloud,
            bucket: bucket.to_string(),
            region: String::new(),
        }
    }

    /// Create a new configuration for AWS S3
    pub fn s3(bucket: &str, region: &str) -> Self {
        Self {
            provider: StorageProvider::AmazonS3,
            bucket: bucket.to_string(),
            region: region.to_string(),
        }
    }

    /// Create a new configuration for local filesystem storage
    pub fn local(path: &str) -> Self {
        Self {
            provider: StorageProvider::Local,
            bucket: path.to_string(),
            region: String::new(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `USE_GCS=true` selects Google Cloud Storage (`GCS_BUCKET_NAME`);
    /// otherwise `USE_S3=true` selects AWS S3 (`S3_BUCKET_NAME`,
    /// `AWS_REGION`). When neither flag is set, documents go to the
    /// local directory named by `DOCS_PATH`.
    pub fn from_env() -> Result<Self, StorageError> {
        if env_flag("USE_GCS") {
            let bucket = require_var("GCS_BUCKET_NAME")?;
            Ok(Self::gcs(&bucket))
        } else if env_flag("USE_S3") {
            let bucket = require_var("S3_BUCKET_NAME")?;
            let region =
                std::env::var("AWS_REGION").unwrap_or_else(|_| DEFAULT_AWS_REGION.to_string());
            Ok(Self::s3(&bucket, &region))
        } else {
            let path =
                std::env::var("DOCS_PATH").unwrap_or_else(|_| DEFAULT_DOCS_PATH.to_string());
            Ok(Self::local(&path))
        }
    }

    /// Build an ObjectStore instance from this configuration
    pub(crate) fn build_object_store(&self) -> Result<Arc<dyn ObjectStore>, StorageError> {
        match &self.provider {
            StorageProvider::GoogleCloud => {
                let store = GoogleCloudStorageBuilder::from_env()
                    .with_bucket_name(&self.bucket)
                    .build()?;
                Ok(Arc::new(store))
            }

            StorageProvider::AmazonS3 => {
                let store = AmazonS3Builder::from_env()
                    .with_bucket_name(&self.bucket)
                    .with_region(&self.region)
                    .build()?;
                Ok(Arc::new(store))
            }

            StorageProvider::Local => {
                // Ensure directory exists
                std::fs::create_dir_all(&self.bucket)?;
                Ok(Arc::new(LocalFileSystem::new_with_prefix(&self.bucket)?))
            }
        }
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn require_var(name: &str) -> Result<String, StorageError> {
    std::env::var(name).map_err(|_| StorageError::Config(format!("{name} is not set")))
}
